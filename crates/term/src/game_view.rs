//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::theme::Theme;
use crate::types::GamePhase;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Placement of the board inside the viewport, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border
    pub x: u16,
    pub y: u16,
    /// Border size including the frame itself
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Columns between neighboring tiles.
    gap_x: u16,
    /// Rows between neighboring tiles.
    gap_y: u16,
    anchor_y: AnchorY,
    theme: Theme,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square in typical terminal fonts and fits
        // six-digit values.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap_x: 1,
            gap_y: 1,
            anchor_y: AnchorY::Center,
            theme: Theme::default(),
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Where a board of `size` tiles lands in `viewport`.
    pub fn layout(&self, size: usize, viewport: Viewport) -> BoardLayout {
        let n = size as u16;
        let inner_w = n * self.tile_w + (n + 1) * self.gap_x;
        let inner_h = n * self.tile_h + (n + 1) * self.gap_y;
        let frame_w = inner_w + 2;
        let frame_h = inner_h + 2;

        let x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            x,
            y,
            frame_w,
            frame_h,
        }
    }

    /// Top-left terminal cell of the tile at (row, col).
    pub fn tile_origin(&self, layout: &BoardLayout, row: usize, col: usize) -> (u16, u16) {
        let x = layout.x + 1 + self.gap_x + (col as u16) * (self.tile_w + self.gap_x);
        let y = layout.y + 1 + self.gap_y + (row as u16) * (self.tile_h + self.gap_y);
        (x, y)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.theme.page().into_cell(' '));

        let layout = self.layout(snap.size, viewport);
        let board = self.theme.board();

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            board,
        );
        fb.draw_border(layout.x, layout.y, layout.frame_w, layout.frame_h, board);

        for row in 0..snap.size {
            for col in 0..snap.size {
                self.draw_tile(fb, &layout, row, col, snap.tile(row, col));
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.phase == GamePhase::Ready {
            let style = self.theme.banner();
            self.draw_banner(fb, &layout, &[("PRESS SPACE", style), ("TO START", style)]);
        } else if snap.phase == GamePhase::GameOver {
            let score_line = format!("SCORE {}", snap.score);
            let mut lines = vec![
                ("GAME OVER", self.theme.banner()),
                (score_line.as_str(), self.theme.banner()),
            ];
            if snap.new_high_score {
                lines.push(("NEW HIGH SCORE!", self.theme.accent()));
            }
            lines.push(("SPACE: PLAY AGAIN", self.theme.banner().dim()));
            self.draw_banner(fb, &layout, &lines);
        } else if snap.win_pending {
            let headline = format!("YOU REACHED {}!", snap.winning_value);
            self.draw_banner(
                fb,
                &layout,
                &[
                    (headline.as_str(), self.theme.accent()),
                    ("KEEP GOING FOR A", self.theme.banner()),
                    ("HIGHER SCORE", self.theme.banner()),
                    ("C / SPACE: CONTINUE", self.theme.banner().dim()),
                ],
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &BoardLayout, row: usize, col: usize, value: u32) {
        let (x, y) = self.tile_origin(layout, row, col);
        let mid = y + self.tile_h / 2;

        if value == 0 {
            let style = self.theme.empty_slot();
            fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);
            fb.put_char(x + self.tile_w / 2, mid, '·', style);
            return;
        }

        let colors = self.theme.tile(value);
        let style = CellStyle::new(colors.fg, colors.bg).bold();
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        let digits = decimal_width(value as u64);
        if digits <= self.tile_w {
            let start = x + (self.tile_w - digits) / 2;
            fb.put_u64(start, mid, value as u64, style);
        } else {
            // Too wide for the tile: show the exponent instead.
            let label = format!("2^{}", value.trailing_zeros());
            fb.put_str_centered(x, mid, self.tile_w, &label, style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: &BoardLayout) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = self.theme.label();
        let value = self.theme.page();
        let hint = self.theme.page().dim();

        let mut y = layout.y;
        fb.put_u64(panel_x, y, snap.winning_value as u64, self.theme.accent());
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.high_score, value);
        if snap.new_high_score {
            fb.put_char(panel_x + decimal_width(snap.high_score) + 1, y, '*', self.theme.accent());
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.moves as u64, value);
        y = y.saturating_add(2);

        for line in ["←↑↓→ move", "space start", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// Banner across the middle of the board, one text line per entry.
    fn draw_banner(&self, fb: &mut FrameBuffer, layout: &BoardLayout, lines: &[(&str, CellStyle)]) {
        let inner_w = layout.frame_w - 2;
        let h = lines.len() as u16 + 2;
        let top = layout.y + layout.frame_h.saturating_sub(h) / 2;

        fb.fill_rect(layout.x + 1, top, inner_w, h, ' ', self.theme.banner());
        for (i, (text, style)) in lines.iter().enumerate() {
            fb.put_str_centered(layout.x + 1, top + 1 + i as u16, inner_w, text, *style);
        }
    }
}

/// Width of the horizontal space the side panel needs, reserved when centering.
const PANEL_W: u16 = 16;

fn decimal_width(mut n: u64) -> u16 {
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_widths() {
        assert_eq!(decimal_width(0), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(2048), 4);
        assert_eq!(decimal_width(131072), 6);
    }

    #[test]
    fn layout_default_board() {
        let view = GameView::default();
        let l = view.layout(4, Viewport::new(35 + PANEL_W, 19));
        assert_eq!((l.frame_w, l.frame_h), (35, 19));
        assert_eq!((l.x, l.y), (0, 0));
        assert_eq!(view.tile_origin(&l, 0, 0), (2, 2));
        assert_eq!(view.tile_origin(&l, 3, 3), (2 + 3 * 8, 2 + 3 * 4));
    }
}
