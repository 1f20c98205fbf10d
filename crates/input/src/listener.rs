//! Background input listener.
//!
//! A dedicated thread polls a [`KeySource`] and publishes the most recent
//! command into a single-slot channel. The game loop drains it once per tick,
//! so rendering and the frame sleep never delay key capture.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::map::map_key;
use crate::slot::{command_slot, CommandReceiver, CommandSender};
use crate::source::KeySource;
use crate::types::InputCommand;

/// How long the listener blocks in one poll before re-checking its stop flag.
pub const LISTENER_POLL_MS: u64 = 5;

/// Per-tick command source consumed by the game loop.
pub trait InputSource {
    /// Non-blocking: the pending command, or `InputCommand::None`.
    fn poll(&mut self) -> InputCommand;

    /// True once the underlying device failed and no more input will arrive.
    fn is_degraded(&self) -> bool {
        false
    }
}

/// Handle to the running listener thread. Stops and joins the thread on drop.
#[derive(Debug)]
pub struct InputListener {
    rx: CommandReceiver,
    stop: Arc<AtomicBool>,
    degraded: Arc<AtomicBool>,
    backend: &'static str,
    handle: Option<JoinHandle<()>>,
}

impl InputListener {
    /// Start listening on `source` in a new thread.
    pub fn spawn<K>(source: K) -> io::Result<Self>
    where
        K: KeySource + 'static,
    {
        let (tx, rx) = command_slot();
        let stop = Arc::new(AtomicBool::new(false));
        let degraded = Arc::new(AtomicBool::new(false));
        let backend = source.name();

        let handle = {
            let stop = stop.clone();
            let degraded = degraded.clone();
            thread::Builder::new()
                .name("input".to_string())
                .spawn(move || listen(source, tx, stop, degraded))?
        };

        log::debug!("input listener started ({backend})");

        Ok(Self {
            rx,
            stop,
            degraded,
            backend,
            handle: Some(handle),
        })
    }

    pub fn backend(&self) -> &'static str {
        self.backend
    }

    /// Signal the thread to stop and wait for it. Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("input listener thread panicked");
            }
            log::debug!("input listener stopped");
        }
    }
}

impl InputSource for InputListener {
    fn poll(&mut self) -> InputCommand {
        self.rx.take()
    }

    fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }
}

impl Drop for InputListener {
    fn drop(&mut self) {
        self.stop();
    }
}

fn listen<K: KeySource>(
    mut source: K,
    tx: CommandSender,
    stop: Arc<AtomicBool>,
    degraded: Arc<AtomicBool>,
) {
    let timeout = Duration::from_millis(LISTENER_POLL_MS);
    while !stop.load(Ordering::Relaxed) {
        match source.poll_key(timeout) {
            Ok(Some(key)) => {
                if let Some(cmd) = map_key(key) {
                    tx.send(cmd);
                }
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!(
                    "input device '{}' failed, keyboard disabled for this run: {}",
                    source.name(),
                    e
                );
                degraded.store(true, Ordering::Relaxed);
                return;
            }
        }
    }
}

/// Fixed per-tick command list, for tests and demos. Yields `None` when
/// exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    commands: std::collections::VecDeque<InputCommand>,
}

impl ScriptedInput {
    pub fn new(commands: impl IntoIterator<Item = InputCommand>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputCommand {
        self.commands.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{NullKeys, ScriptedKeys};
    use crossterm::event::{KeyCode, KeyEvent};
    use std::time::Instant;

    fn wait_for<F: FnMut() -> bool>(mut f: F) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if f() {
                return true;
            }
            thread::sleep(Duration::from_millis(1));
        }
        false
    }

    #[test]
    fn listener_publishes_latest_mapped_key() {
        let keys = ScriptedKeys::new([
            KeyEvent::from(KeyCode::Char('x')),
            KeyEvent::from(KeyCode::Left),
        ]);
        let mut listener = InputListener::spawn(keys).unwrap();

        let mut got = InputCommand::None;
        assert!(wait_for(|| {
            got = listener.poll();
            got != InputCommand::None
        }));
        assert_eq!(got, InputCommand::MoveLeft);
        assert!(!listener.is_degraded());
    }

    #[test]
    fn listener_degrades_on_device_error() {
        let keys = ScriptedKeys::new([]).failing_when_empty();
        let mut listener = InputListener::spawn(keys).unwrap();

        assert!(wait_for(|| listener.is_degraded()));
        assert_eq!(listener.poll(), InputCommand::None);
    }

    #[test]
    fn stop_joins_the_thread_and_is_idempotent() {
        let mut listener = InputListener::spawn(NullKeys).unwrap();
        listener.stop();
        assert!(listener.handle.is_none());
        listener.stop();
    }

    #[test]
    fn scripted_input_runs_out_to_none() {
        let mut input = ScriptedInput::new([InputCommand::MoveRight]);
        assert_eq!(input.poll(), InputCommand::MoveRight);
        assert_eq!(input.poll(), InputCommand::None);
        assert!(!input.is_degraded());
    }
}
