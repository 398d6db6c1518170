//! Game state module - owns the three game objects and the current grid size.
//!
//! The main loop drives it once per frame with [`GameState::tick`] and feeds it
//! paddle input with [`GameState::apply_action`]. Nothing here touches the
//! terminal.

use crate::collision::{check_game_over, check_paddle_collision, collides_with_wall};
use crate::game_object::GameObject;
use crate::types::{Player, PlayerAction, ScreenSize, Winner};

/// Index of each object in the update/render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectId {
    Player1 = 0,
    Player2 = 1,
    Ball = 2,
}

impl ObjectId {
    #[inline]
    fn idx(self) -> usize {
        self as usize
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Update and draw order: paddles first, then the ball.
    objects: [GameObject; 3],
    screen: ScreenSize,
    /// Latched on the first frame the ball leaves the board.
    winner: Option<Winner>,
    /// Number of simulation steps taken.
    frame: u64,
}

impl GameState {
    /// Build the paddles and ball from the current grid size.
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            objects: [
                GameObject::left_paddle(screen),
                GameObject::right_paddle(screen),
                GameObject::ball(screen),
            ],
            screen,
            winner: None,
            frame: 0,
        }
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> &GameObject {
        &self.objects[id.idx()]
    }

    pub fn object_mut(&mut self, id: ObjectId) -> &mut GameObject {
        &mut self.objects[id.idx()]
    }

    pub fn player1(&self) -> &GameObject {
        self.object(ObjectId::Player1)
    }

    pub fn player2(&self) -> &GameObject {
        self.object(ObjectId::Player2)
    }

    pub fn ball(&self) -> &GameObject {
        self.object(ObjectId::Ball)
    }

    pub fn ball_mut(&mut self) -> &mut GameObject {
        self.object_mut(ObjectId::Ball)
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    /// Adopt a new grid size.
    ///
    /// Objects are not re-centered, only pulled back inside the grid: rows are
    /// clamped to `[0, rows - height]` and the right paddle follows the right
    /// edge. An object left touching a wall gets its row velocity pointed
    /// inward so it cannot keep bouncing outside the grid.
    pub fn set_screen(&mut self, screen: ScreenSize) {
        if self.screen == screen {
            return;
        }
        log::debug!(
            "screen resized {}x{} -> {}x{}",
            self.screen.width,
            self.screen.height,
            screen.width,
            screen.height
        );
        self.screen = screen;
        self.clamp_to_screen();
    }

    fn clamp_to_screen(&mut self) {
        let rows = self.screen.rows();
        let cols = self.screen.cols();

        for obj in self.objects.iter_mut() {
            let max_row = (rows - obj.height).max(0);
            obj.row = obj.row.clamp(0, max_row);
            if obj.row <= 0 {
                obj.vel_row = obj.vel_row.abs();
            } else if obj.row + obj.height >= rows {
                obj.vel_row = -obj.vel_row.abs();
            }
        }

        let right = self.object_mut(ObjectId::Player2);
        right.col = (cols - right.width).max(0);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Advance every object by one frame.
    ///
    /// The paddle test runs against the ball's next position before anything
    /// moves, so it sees exactly the position this step commits. Every object
    /// is then displaced and reflected off the top/bottom walls; a paddle hit
    /// reverses the ball's column velocity.
    pub fn step(&mut self) {
        let screen_rows = self.screen.rows();

        let ball = self.ball();
        let paddle_hit = check_paddle_collision(ball, self.player1())
            || check_paddle_collision(ball, self.player2());

        for obj in self.objects.iter_mut() {
            obj.advance();
            if collides_with_wall(obj, screen_rows) {
                obj.vel_row = -obj.vel_row;
            }
        }

        if paddle_hit {
            let ball = self.ball_mut();
            ball.vel_col = -ball.vel_col;
            log::debug!("paddle bounce at ({}, {})", ball.row, ball.col);
        }

        self.frame += 1;
    }

    /// Evaluate the win condition against the current ball position.
    ///
    /// The first winner found is latched; later calls return it unchanged.
    pub fn check_game_over(&mut self) -> Option<Winner> {
        if self.winner.is_none() {
            self.winner = check_game_over(self.ball(), self.screen);
            if let Some(winner) = self.winner {
                log::info!("game over after {} frames: {} wins", self.frame, winner);
            }
        }
        self.winner
    }

    /// One frame of simulation followed by game-over detection.
    ///
    /// Once a winner exists the objects are frozen and this is a no-op.
    pub fn tick(&mut self) -> Option<Winner> {
        if self.winner.is_some() {
            return self.winner;
        }
        self.step();
        self.check_game_over()
    }

    /// Move a paddle one row, keeping it inside `[0, height - paddle height]`.
    ///
    /// Returns `false` when the move was blocked by an edge or the game is over.
    pub fn apply_action(&mut self, action: PlayerAction) -> bool {
        if self.is_game_over() {
            return false;
        }

        let screen_rows = self.screen.rows();
        let paddle = match action.player() {
            Player::One => self.object_mut(ObjectId::Player1),
            Player::Two => self.object_mut(ObjectId::Player2),
        };

        let allowed = if action.delta() < 0 {
            paddle.row > 0
        } else {
            paddle.row + paddle.height < screen_rows
        };
        if allowed {
            paddle.row += action.delta();
        } else {
            log::trace!("{} blocked at row {}", action.as_str(), paddle.row);
        }
        allowed
    }
}
