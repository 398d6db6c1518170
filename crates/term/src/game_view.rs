//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameObject, GameState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Winner;

/// Where the debug line is drawn.
pub const DEBUG_ROW: i32 = 2;
pub const DEBUG_COL: i32 = 3;

const OBJECT_STYLE: CellStyle = CellStyle::new(Rgb::new(255, 255, 255));
const DEBUG_STYLE: CellStyle = CellStyle::new(Rgb::new(160, 160, 160));
const BANNER_STYLE: CellStyle = CellStyle::new(Rgb::new(255, 255, 255)).bold();

/// A lightweight terminal renderer for the Pong game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Draw the player 1 row diagnostic.
    show_debug: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_debug: true }
    }
}

impl GameView {
    pub fn new(show_debug: bool) -> Self {
        Self { show_debug }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// The framebuffer is resized to the state's grid and cleared first.
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        let screen = state.screen();
        fb.resize(screen.width, screen.height);
        fb.clear();

        for obj in state.objects() {
            draw_object(fb, obj);
        }

        if self.show_debug {
            fb.put_i32(DEBUG_ROW, DEBUG_COL, state.player1().row, DEBUG_STYLE);
        }

        if let Some(winner) = state.winner() {
            draw_game_over(fb, winner);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState) -> FrameBuffer {
        let screen = state.screen();
        let mut fb = FrameBuffer::new(screen.width, screen.height);
        self.render_into(state, &mut fb);
        fb
    }
}

fn draw_object(fb: &mut FrameBuffer, obj: &GameObject) {
    fb.fill_rect(
        obj.row,
        obj.col,
        obj.width,
        obj.height,
        obj.symbol,
        OBJECT_STYLE,
    );
}

/// "Game Over" above "<winner> wins", both centered.
fn draw_game_over(fb: &mut FrameBuffer, winner: Winner) {
    const TITLE: &str = "Game Over";
    const SUFFIX: &str = " wins";

    let mid_row = fb.height() as i32 / 2;
    let width = fb.width() as i32;

    let title_w = TITLE.chars().count() as i32;
    fb.put_str(mid_row - 1, (width - title_w) / 2, TITLE, BANNER_STYLE);

    let name = winner.as_str();
    let line_w = (name.chars().count() + SUFFIX.chars().count()) as i32;
    let col = (width - line_w) / 2;
    fb.put_str(mid_row, col, name, BANNER_STYLE);
    fb.put_str(mid_row, col + name.chars().count() as i32, SUFFIX, BANNER_STYLE);
}
