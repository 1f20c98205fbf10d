//! RNG module - obstacle spawn generation
//!
//! Each tick the simulator asks its [`Spawner`] for at most one new obstacle.
//! The trait returns a single optional lane, so the "one spawn per tick" rate
//! limit is enforced by the signature itself.
//!
//! Two spawners are provided:
//!
//! - [`RandomSpawner`]: seeded PCG generator, uniform lane choice
//! - [`ScriptedSpawner`]: replays a fixed list of decisions (tests, demos)

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::GameConfig;

/// Source of obstacle spawn decisions.
pub trait Spawner {
    /// Decide whether an obstacle appears this tick, and in which lane.
    ///
    /// The simulator clamps the returned lane into the lane range.
    fn next_spawn(&mut self, config: &GameConfig) -> Option<u16>;
}

/// Uniform random spawner backed by a seeded PCG32.
///
/// Same seed and same config produce the same obstacle stream.
#[derive(Debug, Clone)]
pub struct RandomSpawner {
    seed: u64,
    rng: Pcg32,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawner with a fresh seed drawn from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Spawner for RandomSpawner {
    fn next_spawn(&mut self, config: &GameConfig) -> Option<u16> {
        let p = config.spawn_probability();
        if p <= 0.0 || !self.rng.random_bool(p.min(1.0)) {
            return None;
        }
        Some(self.rng.random_range(config.lane_range()))
    }
}

/// Replays a queue of spawn decisions; returns `None` once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSpawner {
    script: VecDeque<Option<u16>>,
}

impl ScriptedSpawner {
    pub fn new(script: impl IntoIterator<Item = Option<u16>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Spawner that never produces an obstacle.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Spawner for ScriptedSpawner {
    fn next_spawn(&mut self, _config: &GameConfig) -> Option<u16> {
        self.script.pop_front().flatten()
    }
}
