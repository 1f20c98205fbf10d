//! Terminal input module (engine-facing).
//!
//! This module is independent of the renderer. It maps `crossterm` key
//! events into [`crate::types::InputCommand`], runs a listener thread that
//! hands the latest command to the game loop through a single-slot channel,
//! and owns the raw keyboard mode.

pub mod listener;
pub mod map;
pub mod raw_mode;
pub mod slot;
pub mod source;

pub use tui_racer_types as types;

pub use listener::{InputListener, InputSource, ScriptedInput, LISTENER_POLL_MS};
pub use map::{map_key, should_quit};
pub use raw_mode::{restore_raw_mode, RawModeGuard};
pub use slot::{command_slot, CommandReceiver, CommandSender};
pub use source::{CrosstermKeys, KeySource, NullKeys, ScriptedKeys};
