//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the track rules, run state and the per-tick
//! simulation. It has **no dependencies** on terminals, threads or I/O:
//!
//! - **Deterministic**: same seed and same command stream produce the same run
//! - **Testable**: spawners are swappable, so scenarios can be scripted
//! - **Allocation-free tick**: obstacles live in a fixed-capacity array
//!
//! # Module Structure
//!
//! - [`obstacles`]: the ordered obstacle set and its scroll/hit-test helpers
//! - [`rng`]: spawn decisions ([`RandomSpawner`], [`ScriptedSpawner`])
//! - [`simulator`]: [`TrackSimulator`], the owner of all run state
//! - [`snapshot`]: [`RunSnapshot`], the read-only view handed to renderers
//!
//! # Rules
//!
//! - The player drives on the second-to-last row and steers one lane per tick
//! - Each tick every obstacle scrolls one row down; at most one new obstacle
//!   appears on the top row
//! - An obstacle in the player's lane on the player's row is a hit and costs
//!   one life; zero lives ends the run
//! - Every tick the run survives is worth one point
//!
//! # Example
//!
//! ```
//! use tui_racer_core::{TickResult, TrackSimulator};
//! use tui_racer_types::{GameConfig, InputCommand};
//!
//! let config = GameConfig::default()
//!     .with_track_width(15)
//!     .with_spawn_probability(0.0);
//! let mut sim = TrackSimulator::with_seed(config, 12345).unwrap();
//!
//! assert_eq!(sim.tick(InputCommand::MoveLeft), TickResult::Continue);
//! assert_eq!(sim.player_lane(), 6);
//! assert_eq!(sim.score(), 1);
//!
//! assert_eq!(sim.tick(InputCommand::Quit), TickResult::PlayerQuit);
//! assert_eq!(sim.score(), 1);
//! ```

pub mod obstacles;
pub mod rng;
pub mod simulator;
pub mod snapshot;

pub use tui_racer_types as types;

// Re-export commonly used types for convenience
pub use obstacles::{Obstacle, ObstacleSet, MAX_OBSTACLES};
pub use rng::{RandomSpawner, ScriptedSpawner, Spawner};
pub use simulator::{RunStatus, TickResult, TrackSimulator};
pub use snapshot::RunSnapshot;
