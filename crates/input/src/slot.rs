//! Single-slot command channel between the input thread and the game loop.
//!
//! One producer, one consumer, one pending command. A new command replaces
//! the pending one; the consumer drains the slot once per tick. The command
//! is stored as a single byte, so reads are never torn.
//!
//! A pending `Quit` is not replaced by a later move: the quit is always
//! delivered on the next drain.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::types::InputCommand;

const EMPTY: u8 = InputCommand::None.as_u8();
const QUIT: u8 = InputCommand::Quit.as_u8();

#[derive(Debug, Default)]
struct Slot {
    cell: AtomicU8,
}

/// Create a connected sender/receiver pair.
pub fn command_slot() -> (CommandSender, CommandReceiver) {
    let slot = Arc::new(Slot::default());
    (
        CommandSender { slot: slot.clone() },
        CommandReceiver { slot },
    )
}

/// Producer half. Not `Clone`: there is exactly one writer.
#[derive(Debug)]
pub struct CommandSender {
    slot: Arc<Slot>,
}

impl CommandSender {
    /// Publish a command, replacing whatever is pending (except a quit).
    pub fn send(&self, cmd: InputCommand) {
        if cmd == InputCommand::None {
            return;
        }
        let new = cmd.as_u8();
        let _ = self
            .slot
            .cell
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cur| {
                (cur != QUIT).then_some(new)
            });
    }
}

/// Consumer half. Not `Clone`: there is exactly one reader.
#[derive(Debug)]
pub struct CommandReceiver {
    slot: Arc<Slot>,
}

impl CommandReceiver {
    /// Take the pending command, leaving the slot empty.
    pub fn take(&self) -> InputCommand {
        InputCommand::from_u8(self.slot.cell.swap(EMPTY, Ordering::AcqRel))
    }

    /// Look at the pending command without consuming it.
    pub fn peek(&self) -> InputCommand {
        InputCommand::from_u8(self.slot.cell.load(Ordering::Acquire))
    }
}
