//! Game object model - movable rectangles on the character grid.

use crate::types::{
    ScreenSize, BALL_SIZE, INIT_VELOCITY_COL, INIT_VELOCITY_ROW, PADDLE_HEIGHT, PADDLE_WIDTH,
    SPRITE_BALL, SPRITE_BLOCK,
};

/// A rectangle with position, size, velocity and glyph.
///
/// `row`/`col` is the top-left cell. Coordinates are signed: the ball may
/// leave the grid horizontally, which is how a round ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameObject {
    pub row: i32,
    pub col: i32,
    pub width: i32,
    pub height: i32,
    pub vel_row: i32,
    pub vel_col: i32,
    pub symbol: char,
}

impl GameObject {
    /// Left paddle, vertically centered at column 0.
    pub fn left_paddle(screen: ScreenSize) -> Self {
        Self::paddle(screen, 0)
    }

    /// Right paddle, vertically centered at the last column.
    pub fn right_paddle(screen: ScreenSize) -> Self {
        Self::paddle(screen, screen.cols() - PADDLE_WIDTH)
    }

    fn paddle(screen: ScreenSize, col: i32) -> Self {
        Self {
            row: screen.rows() / 2 - PADDLE_HEIGHT / 2,
            col,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            vel_row: 0,
            vel_col: 0,
            symbol: SPRITE_BLOCK,
        }
    }

    /// Ball at the grid center with the initial velocity.
    pub fn ball(screen: ScreenSize) -> Self {
        Self {
            row: screen.rows() / 2,
            col: screen.cols() / 2,
            width: BALL_SIZE,
            height: BALL_SIZE,
            vel_row: INIT_VELOCITY_ROW,
            vel_col: INIT_VELOCITY_COL,
            symbol: SPRITE_BALL,
        }
    }

    /// Position after applying the current velocity once.
    #[inline]
    pub fn next_position(&self) -> (i32, i32) {
        (self.row + self.vel_row, self.col + self.vel_col)
    }

    /// Commit one frame of displacement.
    #[inline]
    pub fn advance(&mut self) {
        let (row, col) = self.next_position();
        self.row = row;
        self.col = col;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paddles_are_centered_on_opposite_edges() {
        let screen = ScreenSize::new(80, 24);
        let p1 = GameObject::left_paddle(screen);
        let p2 = GameObject::right_paddle(screen);

        assert_eq!((p1.row, p1.col), (10, 0));
        assert_eq!((p2.row, p2.col), (10, 79));
        assert_eq!((p1.width, p1.height), (1, 4));
        assert_eq!((p1.vel_row, p1.vel_col), (0, 0));
        assert_eq!(p2.symbol, SPRITE_BLOCK);
    }

    #[test]
    fn ball_starts_at_center_with_initial_velocity() {
        let ball = GameObject::ball(ScreenSize::new(81, 25));
        assert_eq!((ball.row, ball.col), (12, 40));
        assert_eq!((ball.vel_row, ball.vel_col), (1, 2));
        assert_eq!(ball.symbol, SPRITE_BALL);
    }

    #[test]
    fn advance_is_pure_displacement() {
        let mut obj = GameObject::ball(ScreenSize::new(80, 24));
        obj.vel_row = -1;
        obj.vel_col = -2;
        let (r, c) = (obj.row, obj.col);
        obj.advance();
        assert_eq!((obj.row, obj.col), (r - 1, c - 2));
        assert_eq!((obj.vel_row, obj.vel_col), (-1, -2));
    }
}
