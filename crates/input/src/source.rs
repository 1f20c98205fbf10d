//! Raw keyboard backends.
//!
//! The listener thread only sees the [`KeySource`] trait. The backend is
//! picked once at startup; game code never branches on the platform.

use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

/// Capability to read raw key events.
pub trait KeySource: Send {
    /// Wait at most `timeout` for the next key event.
    ///
    /// `Ok(None)` means nothing arrived in time. An error means the device is
    /// gone; the caller stops polling.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>>;

    fn name(&self) -> &'static str;
}

/// Keyboard via crossterm's event reader (termios on Unix, console API on
/// Windows). Requires raw mode to see single key presses.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeys {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            // Resize and focus events are picked up by the driver's per-frame
            // size query.
            _ => Ok(None),
        }
    }

    fn name(&self) -> &'static str {
        "crossterm"
    }
}

/// Backend used when no keyboard is available. Never yields a key.
#[derive(Debug, Default)]
pub struct NullKeys;

impl KeySource for NullKeys {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        thread::sleep(timeout);
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// Replays a fixed sequence of key events, then optionally fails like an
/// unplugged device.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
    fail_when_empty: bool,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            fail_when_empty: false,
        }
    }

    /// Return an I/O error once the script is exhausted.
    pub fn failing_when_empty(mut self) -> Self {
        self.fail_when_empty = true;
        self
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        match self.keys.pop_front() {
            Some(key) => Ok(Some(key)),
            None if self.fail_when_empty => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "scripted key source exhausted",
            )),
            None => {
                thread::sleep(timeout);
                Ok(None)
            }
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
