//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, input mapping, terminal rendering).
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PADDLE_HEIGHT` | 4 | Paddle extent in rows |
//! | `PADDLE_WIDTH` | 1 | Paddle extent in columns |
//! | `BALL_SIZE` | 1 | Ball extent in rows and columns |
//! | `INIT_VELOCITY_ROW` | 1 | Ball rows per frame at start |
//! | `INIT_VELOCITY_COL` | 2 | Ball columns per frame at start |
//! | `FRAME_MS` | 75 | Fixed frame interval |
//!
//! Velocities are integer steps per frame; there is no sub-cell physics.
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{PlayerAction, Winner, ScreenSize};
//!
//! assert_eq!(Winner::Player2.as_str(), "Player 2");
//! assert_eq!(PlayerAction::Player1Up.delta(), -1);
//!
//! let screen = ScreenSize::new(80, 24);
//! assert_eq!(screen.width, 80);
//! ```

/// Paddle height in rows (4)
pub const PADDLE_HEIGHT: i32 = 4;

/// Paddle width in columns (1)
pub const PADDLE_WIDTH: i32 = 1;

/// Ball width and height (1x1)
pub const BALL_SIZE: i32 = 1;

/// Initial ball velocity in rows per frame
pub const INIT_VELOCITY_ROW: i32 = 1;

/// Initial ball velocity in columns per frame
pub const INIT_VELOCITY_COL: i32 = 2;

/// Fixed frame interval in milliseconds
pub const FRAME_MS: u64 = 75;

/// Glyph used for paddles (U+2588 FULL BLOCK)
pub const SPRITE_BLOCK: char = '█';

/// Glyph used for the ball (U+25CF BLACK CIRCLE)
pub const SPRITE_BALL: char = '●';

/// Fallback grid size when the terminal cannot report one.
pub const DEFAULT_SCREEN_WIDTH: u16 = 80;
pub const DEFAULT_SCREEN_HEIGHT: u16 = 24;

/// Current size of the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenSize {
    pub width: u16,
    pub height: u16,
}

impl ScreenSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width as a signed grid coordinate.
    pub fn cols(&self) -> i32 {
        self.width as i32
    }

    /// Height as a signed grid coordinate.
    pub fn rows(&self) -> i32 {
        self.height as i32
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT)
    }
}

/// Which paddle an action or winner refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Left paddle
    One,
    /// Right paddle
    Two,
}

/// Paddle movements produced by key input.
///
/// Quit is not an action: it never reaches the game state and is handled by
/// the main loop directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Move the left paddle one row up
    Player1Up,
    /// Move the left paddle one row down
    Player1Down,
    /// Move the right paddle one row up
    Player2Up,
    /// Move the right paddle one row down
    Player2Down,
}

impl PlayerAction {
    /// The paddle this action moves.
    pub fn player(&self) -> Player {
        match self {
            PlayerAction::Player1Up | PlayerAction::Player1Down => Player::One,
            PlayerAction::Player2Up | PlayerAction::Player2Down => Player::Two,
        }
    }

    /// Row displacement: -1 for up, +1 for down.
    pub fn delta(&self) -> i32 {
        match self {
            PlayerAction::Player1Up | PlayerAction::Player2Up => -1,
            PlayerAction::Player1Down | PlayerAction::Player2Down => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::Player1Up => "player1Up",
            PlayerAction::Player1Down => "player1Down",
            PlayerAction::Player2Up => "player2Up",
            PlayerAction::Player2Down => "player2Down",
        }
    }
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The player whose opponent let the ball leave the board.
///
/// - **Player1**: ball exited on the right edge
/// - **Player2**: ball exited on the left edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Player1,
    Player2,
}

impl Winner {
    /// Display label, e.g. `"Player 1"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Player1 => "Player 1",
            Winner::Player2 => "Player 2",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
