//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the racer.
//! Everything here is plain data with no I/O, usable from the simulator,
//! the input listener and the terminal view alike.
//!
//! # Track Geometry
//!
//! The track is a grid of `track_width` columns by `track_height` rows:
//!
//! - **Columns**: `0` and `track_width - 1` are the borders; lanes are
//!   `1..=track_width - 2`
//! - **Rows**: row `0` is the spawn edge (top), the player drives on row
//!   `track_height - 2`, leaving one row of road below the car
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TRACK_WIDTH` | 30 | Columns including both borders |
//! | `DEFAULT_TRACK_HEIGHT` | 20 | Visible rows when the terminal size is unknown |
//! | `DEFAULT_FRAME_INTERVAL_MS` | 50 | Sleep between ticks (20 ticks/s) |
//! | `DEFAULT_SPAWN_PROBABILITY` | 0.15 | Chance of one new obstacle per tick |
//! | `DEFAULT_LIVES` | 3 | Starting lives |
//!
//! # Examples
//!
//! ```
//! use tui_racer_types::{GameConfig, InputCommand};
//!
//! let config = GameConfig::default().with_track_width(15);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.lane_range(), 1..=13);
//! assert_eq!(config.start_lane(), 7);
//! assert_eq!(InputCommand::MoveLeft.lateral_delta(), -1);
//! ```

use std::ops::RangeInclusive;
use std::time::Duration;

use thiserror::Error;

/// Default track width in columns (two borders + 28 lanes)
pub const DEFAULT_TRACK_WIDTH: u16 = 30;

/// Default visible track height in rows
pub const DEFAULT_TRACK_HEIGHT: u16 = 20;

/// Default frame interval in milliseconds (50ms = 20 ticks per second)
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 50;

/// Default per-tick obstacle spawn probability
pub const DEFAULT_SPAWN_PROBABILITY: f64 = 0.15;

/// Default starting lives
pub const DEFAULT_LIVES: u8 = 3;

/// Narrowest legal track: two borders and one lane.
pub const MIN_TRACK_WIDTH: u16 = 3;

/// Shortest legal track: the player row plus the spawn row above it.
pub const MIN_TRACK_HEIGHT: u16 = 2;

/// Widest accepted track.
pub const MAX_TRACK_WIDTH: u16 = 512;

/// Tallest accepted track.
///
/// Also bounds the number of live obstacles: at most one spawns per tick and
/// each one leaves the track after `track_height - 1` advances.
pub const MAX_TRACK_HEIGHT: u16 = 128;

/// Rows taken by the HUD around the track (top frame, summary, separator,
/// bottom frame, and one spare row for the shell prompt).
pub const HUD_ROWS: u16 = 5;

/// How long the game-over screen stays up before the terminal is restored.
pub const GAME_OVER_LINGER_MS: u64 = 1500;

/// A single command handed from the input listener to the simulator.
///
/// Exactly one command is consumed per tick; `None` means no key was pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputCommand {
    #[default]
    None,
    MoveLeft,
    MoveRight,
    Quit,
}

impl InputCommand {
    /// Compact encoding used by the atomic single-slot channel.
    pub const fn as_u8(self) -> u8 {
        match self {
            InputCommand::None => 0,
            InputCommand::MoveLeft => 1,
            InputCommand::MoveRight => 2,
            InputCommand::Quit => 3,
        }
    }

    /// Decode from [`InputCommand::as_u8`]. Unknown values decode as `None`.
    pub const fn from_u8(v: u8) -> Self {
        match v {
            1 => InputCommand::MoveLeft,
            2 => InputCommand::MoveRight,
            3 => InputCommand::Quit,
            _ => InputCommand::None,
        }
    }

    /// Lateral step applied to the player for this command.
    pub const fn lateral_delta(self) -> i32 {
        match self {
            InputCommand::MoveLeft => -1,
            InputCommand::MoveRight => 1,
            InputCommand::None | InputCommand::Quit => 0,
        }
    }

    /// Short name, as printed by the key probe.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputCommand::None => "none",
            InputCommand::MoveLeft => "left",
            InputCommand::MoveRight => "right",
            InputCommand::Quit => "quit",
        }
    }
}

/// What happens to obstacles when the player is hit.
///
/// - **ScrollOff**: each obstacle keeps scrolling and is dropped once it has
///   passed the player's row (default)
/// - **ClearOnHit**: every obstacle on the track is removed on a hit, giving
///   the player a clean road after each crash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObstaclePolicy {
    #[default]
    ScrollOff,
    ClearOnHit,
}

impl ObstaclePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstaclePolicy::ScrollOff => "scroll-off",
            ObstaclePolicy::ClearOnHit => "clear-on-hit",
        }
    }
}

/// Rejected [`GameConfig`] values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("track width {0} is too narrow (minimum {min}: two borders and one lane)", min = MIN_TRACK_WIDTH)]
    TrackTooNarrow(u16),
    #[error("track width {0} exceeds the maximum of {max}", max = MAX_TRACK_WIDTH)]
    TrackTooWide(u16),
    #[error("track height {0} is too short (minimum {min})", min = MIN_TRACK_HEIGHT)]
    TrackTooShort(u16),
    #[error("track height {0} exceeds the maximum of {max}", max = MAX_TRACK_HEIGHT)]
    TrackTooTall(u16),
    #[error("spawn probability {0} must be a number between 0 and 1")]
    SpawnProbability(f64),
    #[error("starting lives must be at least 1")]
    NoLives,
    #[error("frame interval must be greater than zero")]
    ZeroFrameInterval,
}

/// Run parameters. Fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    track_width: u16,
    track_height: u16,
    frame_interval: Duration,
    spawn_probability: f64,
    starting_lives: u8,
    obstacle_policy: ObstaclePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            track_width: DEFAULT_TRACK_WIDTH,
            track_height: DEFAULT_TRACK_HEIGHT,
            frame_interval: Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS),
            spawn_probability: DEFAULT_SPAWN_PROBABILITY,
            starting_lives: DEFAULT_LIVES,
            obstacle_policy: ObstaclePolicy::ScrollOff,
        }
    }
}

impl GameConfig {
    pub fn with_track_width(mut self, width: u16) -> Self {
        self.track_width = width;
        self
    }

    pub fn with_track_height(mut self, height: u16) -> Self {
        self.track_height = height;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn with_spawn_probability(mut self, probability: f64) -> Self {
        self.spawn_probability = probability;
        self
    }

    pub fn with_starting_lives(mut self, lives: u8) -> Self {
        self.starting_lives = lives;
        self
    }

    pub fn with_obstacle_policy(mut self, policy: ObstaclePolicy) -> Self {
        self.obstacle_policy = policy;
        self
    }

    /// Check every invariant the simulator relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.track_width < MIN_TRACK_WIDTH {
            return Err(ConfigError::TrackTooNarrow(self.track_width));
        }
        if self.track_width > MAX_TRACK_WIDTH {
            return Err(ConfigError::TrackTooWide(self.track_width));
        }
        if self.track_height < MIN_TRACK_HEIGHT {
            return Err(ConfigError::TrackTooShort(self.track_height));
        }
        if self.track_height > MAX_TRACK_HEIGHT {
            return Err(ConfigError::TrackTooTall(self.track_height));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            // Also rejects NaN.
            return Err(ConfigError::SpawnProbability(self.spawn_probability));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }
        Ok(())
    }

    pub fn track_width(&self) -> u16 {
        self.track_width
    }

    pub fn track_height(&self) -> u16 {
        self.track_height
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn spawn_probability(&self) -> f64 {
        self.spawn_probability
    }

    pub fn starting_lives(&self) -> u8 {
        self.starting_lives
    }

    pub fn obstacle_policy(&self) -> ObstaclePolicy {
        self.obstacle_policy
    }

    /// First drivable column.
    pub fn min_lane(&self) -> u16 {
        1
    }

    /// Last drivable column.
    pub fn max_lane(&self) -> u16 {
        self.track_width.saturating_sub(2).max(1)
    }

    /// Inclusive range of drivable columns.
    pub fn lane_range(&self) -> RangeInclusive<u16> {
        self.min_lane()..=self.max_lane()
    }

    /// Number of drivable columns.
    pub fn lane_count(&self) -> u16 {
        self.max_lane() - self.min_lane() + 1
    }

    /// Clamp any lateral offset into the lane range.
    pub fn clamp_lane(&self, lane: i32) -> u16 {
        lane.clamp(self.min_lane() as i32, self.max_lane() as i32) as u16
    }

    /// The player starts in the middle of the road.
    pub fn start_lane(&self) -> u16 {
        self.clamp_lane((self.track_width / 2) as i32)
    }

    /// Row the player drives on (second-to-last visible row).
    pub fn player_row(&self) -> u16 {
        self.track_height.saturating_sub(2)
    }
}
