//! Applies input commands to the game state.
//!
//! Shared by the main loop and the integration tests so both exercise the same
//! key handling path.

use crate::core::GameState;
use crate::input::{map_event, Command, InputEvent};

/// What the main loop should do after an event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// The grid changed size; the next frame must be a full redraw.
    Redraw,
    Quit,
}

pub fn handle_command(state: &mut GameState, command: Command) -> Outcome {
    match command {
        Command::Quit => Outcome::Quit,
        Command::Move(action) => {
            state.apply_action(action);
            Outcome::Continue
        }
        Command::Resize(size) => {
            state.set_screen(size);
            Outcome::Redraw
        }
    }
}

/// Map and apply at most one polled event.
pub fn handle_event(state: &mut GameState, event: Option<InputEvent>) -> Outcome {
    match event.as_ref().and_then(map_event) {
        Some(command) => handle_command(state, command),
        None => Outcome::Continue,
    }
}
