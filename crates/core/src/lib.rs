//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Pong rules: the game object model, collision
//! predicates, the per-frame simulation step and game-over detection.
//! It has **no dependencies** on the terminal or input devices, making it:
//!
//! - **Deterministic**: Same starting grid and inputs produce the same game
//! - **Testable**: Every rule is a plain function or method on [`GameState`]
//! - **Portable**: Can run headless (tests, benchmarks)
//!
//! # Module Structure
//!
//! - [`game_object`]: Movable rectangles (paddles, ball)
//! - [`collision`]: Wall and paddle tests, winner determination
//! - [`game_state`]: Object collection, simulation step, paddle input guards
//!
//! # Rules
//!
//! - The ball moves a fixed integer step per frame (initially 1 row, 2 columns)
//! - Top and bottom walls reflect the row velocity
//! - A paddle hit (tested on the ball's next position) reflects the column velocity
//! - The ball leaving the left edge makes Player 2 the winner; the right edge, Player 1
//!
//! # Example
//!
//! ```
//! use tui_pong_core::GameState;
//! use tui_pong_types::{PlayerAction, ScreenSize};
//!
//! let mut game = GameState::new(ScreenSize::new(80, 24));
//! game.apply_action(PlayerAction::Player1Up);
//! assert_eq!(game.player1().row, 9);
//!
//! game.tick();
//! assert_eq!(game.ball().col, 42);
//! assert!(!game.is_game_over());
//! ```

pub mod collision;
pub mod game_object;
pub mod game_state;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use collision::{check_game_over, check_paddle_collision, collides_with_wall};
pub use game_object::GameObject;
pub use game_state::{GameState, ObjectId};
