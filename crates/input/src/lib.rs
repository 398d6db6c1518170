//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` key events into [`crate::types::PlayerAction`] and runs the
//! background thread that reads the terminal and hands events to the main loop.

pub mod map;
pub mod poller;

pub use tui_pong_types as types;

pub use map::{handle_key_event, map_event, should_quit, Command};
pub use poller::{CrosstermEvents, EventSource, InputEvent, InputPoller};
