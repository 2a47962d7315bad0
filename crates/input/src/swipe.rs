//! Swipe detection from mouse drags.
//!
//! A left-button press records where the drag began; the release decides what
//! happened. If the pointer travelled at least the minimum distance along its
//! dominant axis the drag is a move in that direction, if it barely moved it is
//! a click (`Confirm`), and anything in between is ignored.
//!
//! Distances are in terminal cells. Columns are roughly half as wide as rows
//! are tall, so the horizontal threshold is usually about twice the vertical.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, GameAction};

/// Default horizontal travel (columns) for a swipe.
pub const DEFAULT_MIN_SWIPE_COLS: u16 = 6;

/// Default vertical travel (rows) for a swipe.
pub const DEFAULT_MIN_SWIPE_ROWS: u16 = 3;

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    min_cols: u16,
    min_rows: u16,
    origin: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new(min_cols: u16, min_rows: u16) -> Self {
        Self {
            min_cols: min_cols.max(1),
            min_rows: min_rows.max(1),
            origin: None,
        }
    }

    /// Feed one mouse event; returns an action when a gesture completes.
    pub fn handle(&mut self, event: MouseEvent) -> Option<GameAction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.origin.take()?;
                self.classify(x0, y0, event.column, event.row)
            }
            _ => None,
        }
    }

    /// A drag is in progress
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Forget a half-finished drag (e.g. after a resize).
    pub fn reset(&mut self) {
        self.origin = None;
    }

    fn classify(&self, x0: u16, y0: u16, x1: u16, y1: u16) -> Option<GameAction> {
        let dx = x1 as i32 - x0 as i32;
        let dy = y1 as i32 - y0 as i32;

        if dx == 0 && dy == 0 {
            return Some(GameAction::Confirm);
        }

        // Compare progress toward each axis threshold so the wider columns
        // do not bias toward horizontal swipes.
        let x_ratio = dx.unsigned_abs() as f32 / self.min_cols as f32;
        let y_ratio = dy.unsigned_abs() as f32 / self.min_rows as f32;

        if x_ratio >= y_ratio {
            if x_ratio < 1.0 {
                return None;
            }
            Some(GameAction::Move(if dx < 0 {
                Direction::Left
            } else {
                Direction::Right
            }))
        } else {
            if y_ratio < 1.0 {
                return None;
            }
            Some(GameAction::Move(if dy < 0 {
                Direction::Up
            } else {
                Direction::Down
            }))
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SWIPE_COLS, DEFAULT_MIN_SWIPE_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn drag(t: &mut SwipeTracker, from: (u16, u16), to: (u16, u16)) -> Option<GameAction> {
        assert_eq!(t.handle(mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1)), None);
        t.handle(mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1));
        t.handle(mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1))
    }

    #[test]
    fn horizontal_swipes() {
        let mut t = SwipeTracker::default();
        assert_eq!(drag(&mut t, (20, 10), (10, 10)), Some(GameAction::Move(Direction::Left)));
        assert_eq!(drag(&mut t, (10, 10), (16, 11)), Some(GameAction::Move(Direction::Right)));
    }

    #[test]
    fn vertical_swipes() {
        let mut t = SwipeTracker::default();
        assert_eq!(drag(&mut t, (10, 10), (11, 5)), Some(GameAction::Move(Direction::Up)));
        assert_eq!(drag(&mut t, (10, 2), (10, 5)), Some(GameAction::Move(Direction::Down)));
    }

    #[test]
    fn short_drag_is_ignored_and_click_confirms() {
        let mut t = SwipeTracker::default();
        assert_eq!(drag(&mut t, (10, 10), (12, 11)), None);
        assert_eq!(drag(&mut t, (10, 10), (10, 10)), Some(GameAction::Confirm));
        assert!(!t.is_tracking());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut t = SwipeTracker::default();
        assert_eq!(t.handle(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)), None);
        assert_eq!(t.handle(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)), None);
        assert!(!t.is_tracking());
    }
}
