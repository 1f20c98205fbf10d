//! TUI Racer (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_racer::{core,input,term,types}`
//! and hosts the pieces that tie them together: the game loop, the terminal
//! frontend and command-line configuration.

pub use tui_racer_core as core;
pub use tui_racer_input as input;
pub use tui_racer_term as term;
pub use tui_racer_types as types;

pub mod cli;
pub mod driver;
pub mod frontend;
