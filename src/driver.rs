//! Game loop: read input, tick, present, wait out the frame.
//!
//! The loop is generic over its input, clock and presenter so it can run
//! headless in tests. It owns no terminal state; the caller holds the
//! raw-mode and screen guards, which restore the terminal on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{Spawner, TickResult, TrackSimulator};
use crate::input::InputSource;
use crate::term::HudStatus;

/// Frame pacing.
pub trait Clock {
    /// Block until `interval` has passed since the previous frame ended.
    fn wait_frame(&mut self, interval: Duration);
}

/// Wall-clock pacing. Work done during the frame counts against the interval.
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn wait_frame(&mut self, interval: Duration) {
        let remaining = interval
            .checked_sub(self.last.elapsed())
            .unwrap_or(Duration::ZERO);
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}

/// Clock that never sleeps; records how often it was asked to.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    pub frames: u32,
    pub total: Duration,
}

impl Clock for ManualClock {
    fn wait_frame(&mut self, interval: Duration) {
        self.frames += 1;
        self.total += interval;
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    PlayerQuit,
    OutOfLives,
    /// Stop flag raised from outside (termination signal).
    Interrupted,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::PlayerQuit => "quit",
            EndReason::OutOfLives => "out of lives",
            EndReason::Interrupted => "interrupted",
        }
    }
}

/// Final state of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub lives: u8,
    pub ticks: u32,
    pub hits: u32,
    pub ended_by: EndReason,
}

/// Run until quit, game over, or `stop` is raised.
///
/// `present` is called once after every tick, including the final one.
pub fn run_loop<S, I, C, P>(
    sim: &mut TrackSimulator<S>,
    input: &mut I,
    clock: &mut C,
    stop: &AtomicBool,
    mut present: P,
) -> Result<RunSummary>
where
    S: Spawner,
    I: InputSource,
    C: Clock,
    P: FnMut(&TrackSimulator<S>, HudStatus) -> Result<()>,
{
    let interval = sim.config().frame_interval();
    let mut degraded_reported = false;

    let ended_by = loop {
        if stop.load(Ordering::Relaxed) {
            log::info!("stop requested at tick {}", sim.ticks());
            break EndReason::Interrupted;
        }

        let cmd = input.poll();
        let result = sim.tick(cmd);

        let hud = HudStatus {
            input_degraded: input.is_degraded(),
        };
        if hud.input_degraded && !degraded_reported {
            degraded_reported = true;
            log::warn!("keyboard unavailable; the run continues without input");
        }
        present(sim, hud)?;

        match result {
            TickResult::PlayerQuit => break EndReason::PlayerQuit,
            TickResult::Collided { lives_left: 0 } => break EndReason::OutOfLives,
            TickResult::Collided { .. } | TickResult::Continue => {}
        }

        clock.wait_frame(interval);
    };

    Ok(RunSummary {
        score: sim.score(),
        lives: sim.lives(),
        ticks: sim.ticks(),
        hits: sim.hits(),
        ended_by,
    })
}
