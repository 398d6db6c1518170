//! Background input poller.
//!
//! A dedicated thread blocks on the event source and hands each event to the
//! main loop through a single-slot channel. The main loop only ever checks the
//! channel with `try_recv`, so a frame never waits on the keyboard.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEvent};

/// Handoff capacity between the poller thread and the main loop.
pub const HANDOFF_CAPACITY: usize = 1;

/// Events the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// A blocking producer of input events.
pub trait EventSource: Send + 'static {
    /// Block until the next relevant event.
    ///
    /// `Ok(None)` means the source is exhausted and the poller should stop.
    fn read_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Reads events from the terminal via crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn read_event(&mut self) -> Result<Option<InputEvent>> {
        loop {
            match event::read().context("read terminal event")? {
                Event::Key(key) => return Ok(Some(InputEvent::Key(key))),
                Event::Resize(w, h) => return Ok(Some(InputEvent::Resize(w, h))),
                // Mouse, focus and paste events are not used.
                _ => continue,
            }
        }
    }
}

/// Receiving end of the poller thread.
///
/// Dropping it disconnects the channel; the thread exits after its next read.
/// On quit the process simply exits without joining it.
pub struct InputPoller {
    rx: Receiver<InputEvent>,
}

impl InputPoller {
    /// Spawn the poller thread over `source`.
    pub fn spawn<S: EventSource>(mut source: S) -> Result<Self> {
        let (tx, rx) = mpsc::sync_channel(HANDOFF_CAPACITY);

        thread::Builder::new()
            .name("input-poller".to_string())
            .spawn(move || loop {
                match source.read_event() {
                    Ok(Some(ev)) => {
                        if tx.send(ev).is_err() {
                            log::debug!("input poller: receiver dropped");
                            break;
                        }
                    }
                    Ok(None) => {
                        log::debug!("input poller: source exhausted");
                        break;
                    }
                    Err(e) => {
                        log::warn!("input poller stopped: {:#}", e);
                        break;
                    }
                }
            })
            .context("spawn input poller thread")?;

        Ok(Self { rx })
    }

    /// Take the pending event, if any. Never blocks.
    ///
    /// `Ok(None)` means nothing is pending. Once the poller thread has stopped
    /// and every buffered event was taken this returns an error, since no
    /// further input (including quit) can ever arrive.
    pub fn poll(&self) -> Result<Option<InputEvent>> {
        match self.rx.try_recv() {
            Ok(ev) => Ok(Some(ev)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(anyhow!("input event channel disconnected")),
        }
    }

    /// Wait up to `timeout` for the next event.
    ///
    /// `Ok(None)` on timeout; an error once the poller thread has stopped.
    pub fn wait(&self, timeout: Duration) -> Result<Option<InputEvent>> {
        match self.rx.recv_timeout(timeout) {
            Ok(ev) => Ok(Some(ev)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                Err(anyhow!("input event channel disconnected"))
            }
        }
    }
}
