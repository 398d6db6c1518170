//! Terminal Pong runner (default binary).
//!
//! Two paddles, one ball, a fixed 75 ms frame. Player 1 uses `w`/`s`,
//! player 2 the arrow keys, `q` quits. Rendering goes through a framebuffer
//! that is diffed against the previous frame before hitting the terminal.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use tui_pong::config::AppConfig;
use tui_pong::core::GameState;
use tui_pong::dispatch::{self, Outcome};
use tui_pong::input::{CrosstermEvents, InputPoller};
use tui_pong::logging;
use tui_pong::term::{FrameBuffer, GameView, TerminalRenderer};
use tui_pong::types::FRAME_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter().context("initialize terminal")?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting on error: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let screen = term.size();
    log::info!("starting on a {}x{} grid", screen.width, screen.height);

    let mut state = GameState::new(screen);
    let view = GameView::new(config.show_debug);
    let poller = InputPoller::spawn(CrosstermEvents)?;
    let mut fb = FrameBuffer::new(screen.width, screen.height);
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        state.set_screen(term.size());

        // Simulation stops advancing once a winner is latched.
        state.tick();

        let event = poller.poll().context("input poller stopped")?;
        match dispatch::handle_event(&mut state, event) {
            Outcome::Quit => {
                log::info!("quit after {} frames", state.frame());
                return Ok(());
            }
            Outcome::Redraw => term.invalidate(),
            Outcome::Continue => {}
        }

        view.render_into(&state, &mut fb);
        thread::sleep(frame);
        term.draw_swap(&mut fb).context("flush frame")?;
    }
}
