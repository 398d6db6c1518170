//! Key mapping diagnostic.
//!
//! Prints every key event the terminal reports together with the command the
//! game would derive from it. Press `q` to exit.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::terminal;

use tui_pong::input::{map_event, Command, CrosstermEvents, InputEvent, InputPoller};

fn main() -> Result<()> {
    terminal::enable_raw_mode().context("enable raw mode")?;
    let result = run();
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    let mut out = io::stdout();
    write!(out, "press keys (q to quit)\r\n")?;
    out.flush()?;

    let poller = InputPoller::spawn(CrosstermEvents)?;
    loop {
        let Some(event) = poller.wait(Duration::from_millis(500))? else {
            continue;
        };
        let command = map_event(&event);
        match event {
            InputEvent::Key(key) => {
                write!(out, "{:?} {:?} {:?} -> {:?}\r\n", key.code, key.modifiers, key.kind, command)?;
            }
            InputEvent::Resize(w, h) => {
                write!(out, "resize {}x{} -> {:?}\r\n", w, h, command)?;
            }
        }
        out.flush()?;

        if command == Some(Command::Quit) {
            return Ok(());
        }
    }
}
