//! TUI Pong (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_pong::{core,input,term,types}` and
//! hosts the runtime configuration and input dispatch shared by the binaries.

pub mod config;
pub mod dispatch;
pub mod logging;

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;
