//! Terminal input events
//!
//! A background thread polls crossterm and multiplexes key presses, resizes,
//! and a fixed-rate tick onto one channel. The tick cadence drives the
//! session timer countdown; everything else is keyboard input.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Cadence of [`Event::Tick`]. Finer than a second so the status bar stays
/// responsive; the timer gate folds these into whole-second engine ticks.
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press (repeat and release events are filtered out)
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic update
    Tick,
}

/// Input pump for the TUI event loop
///
/// The polling thread exits when the receiver is dropped or when the
/// terminal backend fails, which surfaces as a closed channel in [`next`].
///
/// [`next`]: EventHandler::next
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    _poller: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let poller = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                let ready = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(_) => return,
                };
                if ready {
                    let sent = match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            sender.send(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            sender.send(Event::Resize(width, height))
                        }
                        Ok(_) => Ok(()),
                        Err(_) => return,
                    };
                    if sent.is_err() {
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            receiver,
            _poller: poller,
        }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}
