//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and turns mouse drags into swipe
//! moves, the terminal stand-in for touch gestures.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{map_key, should_quit};
pub use swipe::SwipeTracker;
