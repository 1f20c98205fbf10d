//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::types::{
    ConfigError, GameConfig, ObstaclePolicy, DEFAULT_FRAME_INTERVAL_MS, DEFAULT_LIVES,
    DEFAULT_SPAWN_PROBABILITY, DEFAULT_TRACK_HEIGHT, DEFAULT_TRACK_WIDTH, HUD_ROWS,
    MAX_TRACK_HEIGHT, MIN_TRACK_HEIGHT,
};

/// Dodge the obstacles. Every frame survived is a point.
#[derive(Debug, Clone, Parser)]
#[command(name = "tui-racer", version, about)]
pub struct Args {
    /// Road width in columns, borders included.
    #[arg(long, env = "RACER_WIDTH", default_value_t = DEFAULT_TRACK_WIDTH)]
    pub width: u16,

    /// Road height in rows. Defaults to what fits in the terminal.
    #[arg(long, env = "RACER_HEIGHT")]
    pub height: Option<u16>,

    /// Milliseconds per frame.
    #[arg(long = "interval-ms", env = "RACER_INTERVAL_MS", default_value_t = DEFAULT_FRAME_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Chance of a new obstacle each frame, 0.0 to 1.0.
    #[arg(long = "spawn-chance", env = "RACER_SPAWN_CHANCE", default_value_t = DEFAULT_SPAWN_PROBABILITY)]
    pub spawn_chance: f64,

    #[arg(long, env = "RACER_LIVES", default_value_t = DEFAULT_LIVES)]
    pub lives: u8,

    /// Remove every obstacle on the road after a hit.
    #[arg(long = "clear-on-hit")]
    pub clear_on_hit: bool,

    /// Seed for a reproducible run.
    #[arg(long, env = "RACER_SEED")]
    pub seed: Option<u64>,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long = "log-file", env = "RACER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Build a validated config. `terminal_rows` sizes the road when
    /// `--height` is absent.
    pub fn game_config(&self, terminal_rows: Option<u16>) -> Result<GameConfig, ConfigError> {
        let height = self
            .height
            .unwrap_or_else(|| height_for_terminal(terminal_rows));
        let policy = if self.clear_on_hit {
            ObstaclePolicy::ClearOnHit
        } else {
            ObstaclePolicy::ScrollOff
        };

        let config = GameConfig::default()
            .with_track_width(self.width)
            .with_track_height(height)
            .with_frame_interval(Duration::from_millis(self.interval_ms))
            .with_spawn_probability(self.spawn_chance)
            .with_starting_lives(self.lives)
            .with_obstacle_policy(policy);
        config.validate()?;
        Ok(config)
    }
}

/// Road height that leaves room for the HUD.
pub fn height_for_terminal(rows: Option<u16>) -> u16 {
    match rows {
        Some(rows) => rows
            .saturating_sub(HUD_ROWS)
            .clamp(MIN_TRACK_HEIGHT, MAX_TRACK_HEIGHT),
        None => DEFAULT_TRACK_HEIGHT,
    }
}
