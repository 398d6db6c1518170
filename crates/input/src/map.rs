//! Key mapping from terminal events to game commands.

use crate::poller::InputEvent;
use crate::types::{PlayerAction, ScreenSize};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the main loop should do with one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the game and restore the terminal.
    Quit,
    /// Move a paddle.
    Move(PlayerAction),
    /// The grid changed size; force a full redraw.
    Resize(ScreenSize),
}

/// Map keyboard input to paddle actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PlayerAction> {
    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(PlayerAction::Player1Up),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(PlayerAction::Player1Down),
        KeyCode::Up => Some(PlayerAction::Player2Up),
        KeyCode::Down => Some(PlayerAction::Player2Down),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Translate a polled event into a command.
///
/// Only key presses act; repeats and releases (reported by some terminals)
/// are ignored, as is every unmapped key.
pub fn map_event(event: &InputEvent) -> Option<Command> {
    match *event {
        InputEvent::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            if should_quit(key) {
                return Some(Command::Quit);
            }
            handle_key_event(key).map(Command::Move)
        }
        InputEvent::Resize(width, height) => Some(Command::Resize(ScreenSize::new(width, height))),
    }
}
