//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The game is
//! drawn into a plain framebuffer by a pure view, and the framebuffer is then
//! flushed to the terminal by the renderer.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing testable without a terminal
//! - Write only changed cells to the device each frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, DEBUG_COL, DEBUG_ROW};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
