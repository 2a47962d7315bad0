//! Terminal 2048 (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_2048::{core,input,term,types}` and adds the
//! application layer: configuration, the persistent high-score store and the
//! event controller used by the binary.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod app;
pub mod config;
pub mod high_score;

pub use app::{App, Control};
pub use config::{Args, Config};
pub use high_score::HighScoreStore;
