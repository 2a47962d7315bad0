//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a plain framebuffer that is flushed to a terminal
//! backend.
//!
//! - [`fb`]: framebuffer, cells and styles
//! - [`theme`]: light/dark tile palettes
//! - [`game_view`]: pure snapshot → framebuffer rendering
//! - [`renderer`]: raw-mode terminal output with diffed redraws

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::{Theme, TileColors};
