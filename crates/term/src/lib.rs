//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a simple framebuffer that is flushed to a terminal backend, instead of
//! printing line by line.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Project the run state with a pure view ([`TrackView`])
//! - Flush each frame in one batched write to avoid tearing

pub mod fb;
pub mod renderer;
pub mod session;
pub mod track_view;

pub use tui_racer_core as core;
pub use tui_racer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use session::{restore_screen, TerminalSession};
pub use track_view::{HudStatus, TrackView, Viewport, HEADER_ROWS};
