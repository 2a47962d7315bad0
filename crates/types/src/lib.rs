//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Classic 4x4 board |
//! | `MIN_GRID_SIZE` | 2 | Smallest board the engine accepts |
//! | `MAX_GRID_SIZE` | 8 | Largest board the terminal layout supports |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_WINNING_VALUE};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! let action = GameAction::Move(Direction::Up);
//! assert_eq!(action.as_str(), "up");
//!
//! assert_eq!(DEFAULT_WINNING_VALUE, 2048);
//! ```

/// Classic board size (4x4).
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest board the engine accepts.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest board the terminal layout can draw.
pub const MAX_GRID_SIZE: usize = 8;

/// Tile value that raises the win banner.
pub const DEFAULT_WINNING_VALUE: u32 = 2048;

/// Chance (in percent) that a spawned tile is a 4 instead of a 2.
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// The value of a freshly spawned tile in the common case.
pub const SPAWN_LOW_VALUE: u32 = 2;

/// The value of a freshly spawned tile in the rare case.
pub const SPAWN_HIGH_VALUE: u32 = 4;


/// Move direction
///
/// Tiles are compacted toward the named edge:
/// - **Up**: toward row 0 (columns processed top-to-bottom)
/// - **Down**: toward the last row
/// - **Left**: toward column 0 (rows processed left-to-right)
/// - **Right**: toward the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The direction pointing at the opposite edge.
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for Left/Right (rows are processed), false for Up/Down (columns).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Actions that can be applied to a game session
///
/// These are produced by keyboard and mouse input and consumed by the session
/// state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Slide all tiles toward an edge
    Move(Direction),
    /// Context action: start when ready, restart after game over,
    /// dismiss the win banner while it is shown
    Confirm,
    /// Start a fresh game at any time
    Restart,
    /// Dismiss the win banner and keep playing
    Continue,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Direction names map to [`GameAction::Move`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(dir) = Direction::from_str(s) {
            return Some(GameAction::Move(dir));
        }
        match s.to_lowercase().as_str() {
            "confirm" => Some(GameAction::Confirm),
            "restart" => Some(GameAction::Restart),
            "continue" => Some(GameAction::Continue),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Confirm => "confirm",
            GameAction::Restart => "restart",
            GameAction::Continue => "continue",
        }
    }
}

/// Lifecycle phase of a game session
///
/// The cycle goes: Ready → Playing → GameOver → Playing (restart) → ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Board is seeded but input other than Confirm/Restart is ignored
    #[default]
    Ready,
    /// Moves are accepted
    Playing,
    /// No move is available on the board
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "gameover",
        }
    }
}
