//! Collision predicates.
//!
//! All functions here are pure: they inspect objects and never mutate them.
//! Paddle tests use the ball's *next* position (current position plus
//! velocity), i.e. the value the simulation step is about to commit.

use crate::game_object::GameObject;
use crate::types::{ScreenSize, Winner};

/// Top or bottom edge contact.
///
/// True when the object's row is `<= 0` or its bottom edge reaches the last row.
pub fn collides_with_wall(obj: &GameObject, screen_height: i32) -> bool {
    obj.row <= 0 || obj.row + obj.height >= screen_height
}

/// Whether the ball's next position hits `paddle`.
///
/// Vertical overlap uses half-open row ranges. Horizontally, a ball moving
/// left hits when its next column range touches or enters the paddle from the
/// right; a ball moving right is the mirror image. A ball with zero column
/// velocity never collides.
pub fn check_paddle_collision(ball: &GameObject, paddle: &GameObject) -> bool {
    let (next_row, next_col) = ball.next_position();

    let overlaps_vertically =
        next_row < paddle.row + paddle.height && next_row + ball.height > paddle.row;
    if !overlaps_vertically {
        return false;
    }

    if ball.vel_col < 0 {
        next_col <= paddle.col + paddle.width && next_col + ball.width > paddle.col
    } else if ball.vel_col > 0 {
        next_col + ball.width >= paddle.col && next_col < paddle.col + paddle.width
    } else {
        false
    }
}

/// Winner once the ball has left the board horizontally.
///
/// Ball column `< 0` means it exited left and Player 2 wins; column
/// `>= screen width` means it exited right and Player 1 wins.
pub fn check_game_over(ball: &GameObject, screen: ScreenSize) -> Option<Winner> {
    if ball.col < 0 {
        Some(Winner::Player2)
    } else if ball.col >= screen.cols() {
        Some(Winner::Player1)
    } else {
        None
    }
}
