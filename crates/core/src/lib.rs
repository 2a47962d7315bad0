//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules and the session state machine built on
//! them. It has **zero dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: every spawn goes through an injectable [`TileRng`]
//! - **Testable**: scripted randomness lets tests assert exact boards
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: N×N tile matrix and input validation
//! - [`engine`]: pure move/merge/spawn/terminal-detection functions
//! - [`rng`]: the randomness seam ([`TileRng`]) with seeded and scripted sources
//! - [`session`]: score, best score and Ready/Playing/GameOver lifecycle
//! - [`snapshot`]: plain copy of a session for renderers
//!
//! # Game Rules
//!
//! - Tiles slide as far as possible toward the chosen edge
//! - Two equal neighbors merge into their sum; a tile merges at most once per move
//! - The score grows by the value of every merged tile
//! - After a move that changed the board one tile spawns: 2 (90%) or 4 (10%)
//! - Reaching the winning value (2048 by default) is advisory; play continues
//! - The game ends when the board is full and no neighbors are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{apply_move, Grid, ScriptedRng};
//! use tui_2048_types::Direction;
//!
//! let grid = Grid::from_rows(vec![
//!     vec![2, 2, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//! ])
//! .unwrap();
//!
//! let mut rng = ScriptedRng::first_cell();
//! let result = apply_move(&grid, Direction::Left, 2048, &mut rng);
//!
//! assert!(result.did_move);
//! assert_eq!(result.score, 4);
//! assert_eq!(result.grid.get(0, 0), Some(4));
//! assert_eq!(result.grid.occupied_count(), 2); // merged tile + spawn
//! ```

pub mod engine;
pub mod grid;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{
    apply_move, available_moves, can_move, has_available_move, initialize, slide_grid,
    slide_line, spawn_tile, LineOutcome, MoveResult, Spawn,
};
pub use grid::{is_valid_tile, validate_winning_value, Grid, GridError, Tile};
pub use rng::{GameRng, ScriptedRng, TileRng};
pub use session::{ActionOutcome, GameSession, MoveSummary, Rules};
pub use snapshot::GameSnapshot;
