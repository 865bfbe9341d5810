//! Event handling for the terminal shell.

use std::sync::mpsc::{Receiver, RecvError, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// UI events.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard key pressed.
    Key(KeyEvent),

    /// Terminal resized.
    Resize(u16, u16),

    /// Periodic tick for redraws.
    Tick,
}

/// Event handler for keyboard and terminal events.
///
/// A background thread polls crossterm and forwards events over a channel;
/// the render loop blocks on [`EventHandler::next`].
pub struct EventHandler {
    #[allow(dead_code)]
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    _thread_handle: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Spawn the event thread with the given tick rate.
    #[must_use]
    pub fn new(tick_rate_ms: u64) -> Self {
        let (sender, receiver) = channel();
        let sender_clone = sender.clone();

        let thread_handle = thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            let mut last_tick = Instant::now();

            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                if event::poll(timeout).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) => sender_clone.send(Event::Key(key)),
                        Ok(CrosstermEvent::Resize(w, h)) => sender_clone.send(Event::Resize(w, h)),
                        _ => Ok(()),
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender_clone.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            sender,
            receiver,
            _thread_handle: thread_handle,
        }
    }

    /// Receive the next event (blocking).
    ///
    /// # Errors
    ///
    /// Returns `RecvError` if the event thread has exited.
    pub fn next(&self) -> Result<Event, RecvError> {
        self.receiver.recv()
    }
}
