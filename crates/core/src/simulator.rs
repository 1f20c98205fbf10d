//! Track simulator - owns the run state and advances it one tick at a time
//!
//! A tick runs in a fixed order:
//!
//! 1. apply the input command (a quit ends the tick immediately)
//! 2. scroll every obstacle one row toward the player
//! 3. maybe spawn one obstacle at the spawn edge
//! 4. hit-test the player row
//! 5. award one point if the run is still alive
//!
//! The hit test is a plain overlap check: an obstacle on the player row in the
//! player's lane is always a hit.

use crate::obstacles::ObstacleSet;
use crate::rng::{RandomSpawner, Spawner};
use crate::snapshot::RunSnapshot;
use crate::types::{ConfigError, GameConfig, InputCommand, ObstaclePolicy};

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickResult {
    /// Nothing special happened.
    Continue,
    /// The player hit an obstacle this tick. Terminal when `lives_left == 0`.
    Collided { lives_left: u8 },
    /// The player asked to quit. Terminal.
    PlayerQuit,
}

impl TickResult {
    /// Whether the driver must stop after this tick.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TickResult::PlayerQuit | TickResult::Collided { lives_left: 0 }
        )
    }

    pub fn collided(&self) -> bool {
        matches!(self, TickResult::Collided { .. })
    }
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunStatus {
    #[default]
    Running,
    /// Lives exhausted.
    Crashed,
    /// Player quit.
    Quit,
}

impl RunStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, RunStatus::Running)
    }
}

/// Complete run state.
#[derive(Debug, Clone)]
pub struct TrackSimulator<S = RandomSpawner> {
    config: GameConfig,
    spawner: S,
    player_lane: u16,
    obstacles: ObstacleSet,
    score: u32,
    lives: u8,
    /// Ticks processed, including a final quit tick.
    ticks: u32,
    hits: u32,
    /// Set on the tick the player got hit, cleared on the next one.
    hit_this_tick: bool,
    status: RunStatus,
}

impl TrackSimulator<RandomSpawner> {
    /// Simulator with a seeded random spawner.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, RandomSpawner::new(seed))
    }
}

impl<S: Spawner> TrackSimulator<S> {
    /// Create a run from a validated config.
    pub fn new(config: GameConfig, spawner: S) -> Result<Self, ConfigError> {
        config.validate()?;

        log::info!(
            "new run: width={} height={} interval={:?} spawn={} lives={} policy={}",
            config.track_width(),
            config.track_height(),
            config.frame_interval(),
            config.spawn_probability(),
            config.starting_lives(),
            config.obstacle_policy().as_str(),
        );

        Ok(Self {
            player_lane: config.start_lane(),
            lives: config.starting_lives(),
            config,
            spawner,
            obstacles: ObstacleSet::new(),
            score: 0,
            ticks: 0,
            hits: 0,
            hit_this_tick: false,
            status: RunStatus::Running,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    pub fn player_lane(&self) -> u16 {
        self.player_lane
    }

    pub fn player_row(&self) -> u16 {
        self.config.player_row()
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Advance the run by one tick.
    ///
    /// Once the run is over this is a no-op that keeps reporting the terminal
    /// result; the score never moves again.
    pub fn tick(&mut self, cmd: InputCommand) -> TickResult {
        match self.status {
            RunStatus::Quit => return TickResult::PlayerQuit,
            RunStatus::Crashed => return TickResult::Collided { lives_left: 0 },
            RunStatus::Running => {}
        }

        self.ticks = self.ticks.wrapping_add(1);
        self.hit_this_tick = false;

        if cmd == InputCommand::Quit {
            self.status = RunStatus::Quit;
            log::info!("player quit at tick {} (score {})", self.ticks, self.score);
            return TickResult::PlayerQuit;
        }

        self.steer(cmd);

        let player_row = self.config.player_row();
        self.obstacles.advance(player_row);

        if let Some(lane) = self.spawner.next_spawn(&self.config) {
            let lane = self.config.clamp_lane(lane as i32);
            if !self.obstacles.spawn(lane) {
                log::warn!("obstacle set full, dropping spawn in lane {}", lane);
            }
        }

        if self.obstacles.occupies(self.player_lane, player_row) {
            return self.on_hit();
        }

        self.score = self.score.saturating_add(1);
        TickResult::Continue
    }

    /// Apply a lateral move. Clamped at the borders, never wraps.
    fn steer(&mut self, cmd: InputCommand) {
        let delta = cmd.lateral_delta();
        if delta != 0 {
            self.player_lane = self.config.clamp_lane(self.player_lane as i32 + delta);
        }
    }

    fn on_hit(&mut self) -> TickResult {
        self.lives = self.lives.saturating_sub(1);
        self.hits = self.hits.saturating_add(1);
        self.hit_this_tick = true;

        if self.config.obstacle_policy() == ObstaclePolicy::ClearOnHit {
            self.obstacles.clear();
        }

        if self.lives == 0 {
            self.status = RunStatus::Crashed;
            log::info!(
                "game over at tick {}: lane {} (score {})",
                self.ticks,
                self.player_lane,
                self.score
            );
        } else {
            log::debug!(
                "hit at tick {}: lane {}, {} lives left",
                self.ticks,
                self.player_lane,
                self.lives
            );
            self.score = self.score.saturating_add(1);
        }

        TickResult::Collided {
            lives_left: self.lives,
        }
    }

    /// Fill `out` with the current state (no allocation).
    pub fn snapshot_into(&self, out: &mut RunSnapshot) {
        out.track_width = self.config.track_width();
        out.track_height = self.config.track_height();
        out.player_lane = self.player_lane;
        out.player_row = self.config.player_row();
        self.obstacles.copy_into(&mut out.obstacles);
        out.score = self.score;
        out.lives = self.lives;
        out.ticks = self.ticks;
        out.hit_this_tick = self.hit_this_tick;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> RunSnapshot {
        let mut snap = RunSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSpawner;

    fn idle_sim(width: u16) -> TrackSimulator<ScriptedSpawner> {
        let config = GameConfig::default()
            .with_track_width(width)
            .with_track_height(10)
            .with_spawn_probability(0.0);
        TrackSimulator::new(config, ScriptedSpawner::empty()).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = GameConfig::default().with_track_width(2);
        assert_eq!(
            TrackSimulator::new(config, ScriptedSpawner::empty()).err(),
            Some(ConfigError::TrackTooNarrow(2))
        );
    }

    #[test]
    fn player_starts_in_the_middle() {
        let sim = idle_sim(15);
        assert_eq!(sim.player_lane(), 7);
        assert_eq!(sim.lives(), 3);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.status(), RunStatus::Running);
    }

    #[test]
    fn steering_clamps_at_both_borders() {
        let mut sim = idle_sim(5);
        for _ in 0..10 {
            sim.tick(InputCommand::MoveLeft);
        }
        assert_eq!(sim.player_lane(), 1);

        for _ in 0..10 {
            sim.tick(InputCommand::MoveRight);
        }
        assert_eq!(sim.player_lane(), 3);
    }

    #[test]
    fn quit_short_circuits_without_scoring() {
        let mut sim = idle_sim(15);
        assert_eq!(sim.tick(InputCommand::None), TickResult::Continue);
        assert_eq!(sim.tick(InputCommand::Quit), TickResult::PlayerQuit);
        assert_eq!(sim.score(), 1);
        assert_eq!(sim.ticks(), 2);
        assert_eq!(sim.status(), RunStatus::Quit);
    }

    #[test]
    fn ticks_after_the_end_change_nothing() {
        let mut sim = idle_sim(15);
        sim.tick(InputCommand::Quit);
        let before = sim.snapshot();

        assert_eq!(sim.tick(InputCommand::MoveLeft), TickResult::PlayerQuit);
        assert_eq!(sim.tick(InputCommand::None), TickResult::PlayerQuit);
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn hit_costs_exactly_one_life() {
        let config = GameConfig::default()
            .with_track_width(15)
            .with_track_height(4)
            .with_spawn_probability(1.0);
        let mut sim = TrackSimulator::new(config, ScriptedSpawner::new([Some(7)])).unwrap();

        // Spawned on row 0, player row is 2.
        assert_eq!(sim.tick(InputCommand::None), TickResult::Continue);
        assert_eq!(sim.tick(InputCommand::None), TickResult::Continue);
        assert_eq!(
            sim.tick(InputCommand::None),
            TickResult::Collided { lives_left: 2 }
        );
        assert_eq!(sim.lives(), 2);
        assert_eq!(sim.hits(), 1);
        assert_eq!(sim.score(), 3);

        // The obstacle scrolls past; no second hit.
        assert_eq!(sim.tick(InputCommand::None), TickResult::Continue);
        assert!(sim.obstacles().is_empty());
    }

    #[test]
    fn last_life_ends_the_run_without_scoring() {
        let config = GameConfig::default()
            .with_track_width(3)
            .with_track_height(2)
            .with_starting_lives(1);
        let mut sim =
            TrackSimulator::new(config, ScriptedSpawner::new([None, Some(1)])).unwrap();

        // On a two-row track the player drives on the spawn row.
        assert_eq!(sim.tick(InputCommand::None), TickResult::Continue);
        let result = sim.tick(InputCommand::None);
        assert_eq!(result, TickResult::Collided { lives_left: 0 });
        assert!(result.is_terminal());
        assert_eq!(sim.status(), RunStatus::Crashed);
        assert_eq!(sim.score(), 1);
    }

    #[test]
    fn clear_on_hit_wipes_the_track() {
        let config = GameConfig::default()
            .with_track_width(15)
            .with_track_height(4)
            .with_obstacle_policy(ObstaclePolicy::ClearOnHit);
        let mut sim =
            TrackSimulator::new(config, ScriptedSpawner::new([Some(7), Some(3), Some(4)]))
                .unwrap();

        sim.tick(InputCommand::None);
        sim.tick(InputCommand::None);
        assert!(sim.tick(InputCommand::None).collided());
        assert!(sim.obstacles().is_empty());
    }

    #[test]
    fn scroll_off_keeps_other_obstacles_after_hit() {
        let config = GameConfig::default().with_track_width(15).with_track_height(4);
        let mut sim =
            TrackSimulator::new(config, ScriptedSpawner::new([Some(7), Some(3), Some(4)]))
                .unwrap();

        sim.tick(InputCommand::None);
        sim.tick(InputCommand::None);
        assert!(sim.tick(InputCommand::None).collided());
        assert_eq!(sim.obstacles().len(), 3);
    }

    #[test]
    fn out_of_range_spawns_are_clamped() {
        let config = GameConfig::default().with_track_width(6).with_track_height(5);
        let mut sim =
            TrackSimulator::new(config, ScriptedSpawner::new([Some(0), Some(900)])).unwrap();

        sim.tick(InputCommand::None);
        sim.tick(InputCommand::None);
        let lanes: Vec<u16> = sim.obstacles().iter().map(|o| o.lane).collect();
        assert_eq!(lanes, vec![1, 4]);
    }

    #[test]
    fn tick_result_terminality() {
        assert!(!TickResult::Continue.is_terminal());
        assert!(!TickResult::Collided { lives_left: 1 }.is_terminal());
        assert!(TickResult::Collided { lives_left: 0 }.is_terminal());
        assert!(TickResult::PlayerQuit.is_terminal());
    }
}
