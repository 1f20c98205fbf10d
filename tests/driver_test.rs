use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::anyhow;

use tui_racer::core::{ScriptedSpawner, TrackSimulator};
use tui_racer::driver::{run_loop, EndReason, ManualClock};
use tui_racer::input::{InputSource, ScriptedInput};
use tui_racer::types::{GameConfig, InputCommand};

fn sim(width: u16, height: u16, script: Vec<Option<u16>>) -> TrackSimulator<ScriptedSpawner> {
    let cfg = GameConfig::default()
        .with_track_width(width)
        .with_track_height(height)
        .with_frame_interval(Duration::from_millis(20));
    TrackSimulator::new(cfg, ScriptedSpawner::new(script)).unwrap()
}

/// Input that quits after `after` idle polls and reports a dead keyboard.
struct DeadKeyboard {
    polls: u32,
    after: u32,
}

impl InputSource for DeadKeyboard {
    fn poll(&mut self) -> InputCommand {
        self.polls += 1;
        if self.polls > self.after {
            InputCommand::Quit
        } else {
            InputCommand::None
        }
    }

    fn is_degraded(&self) -> bool {
        true
    }
}

#[test]
fn presents_every_tick_and_waits_between_frames() {
    let mut sim = sim(15, 8, vec![]);
    let mut input = ScriptedInput::new([
        InputCommand::MoveLeft,
        InputCommand::None,
        InputCommand::None,
        InputCommand::None,
        InputCommand::Quit,
    ]);
    let mut clock = ManualClock::default();
    let stop = AtomicBool::new(false);
    let frames = Cell::new(0u32);

    let summary = run_loop(&mut sim, &mut input, &mut clock, &stop, |sim, hud| {
        frames.set(frames.get() + 1);
        assert_eq!(sim.ticks(), frames.get());
        assert!(!hud.input_degraded);
        Ok(())
    })
    .unwrap();

    assert_eq!(summary.ended_by, EndReason::PlayerQuit);
    assert_eq!(frames.get(), 5);
    // No wait after the final frame.
    assert_eq!(clock.frames, 4);
    assert_eq!(clock.total, Duration::from_millis(80));
    assert_eq!(sim.player_lane(), 6);
}

#[test]
fn crash_ends_the_loop() {
    let mut sim = sim(9, 4, vec![Some(4), None, None, Some(4), None, None, Some(4)]);
    let mut input = ScriptedInput::default();
    let mut clock = ManualClock::default();
    let stop = AtomicBool::new(false);

    let summary = run_loop(&mut sim, &mut input, &mut clock, &stop, |_, _| Ok(())).unwrap();

    assert_eq!(summary.ended_by, EndReason::OutOfLives);
    assert_eq!(summary.lives, 0);
    assert_eq!(summary.hits, 3);
    assert_eq!(summary.ticks, 9);
    // Two surviving hits still score; the crash tick does not.
    assert_eq!(summary.score, 8);
}

#[test]
fn stop_flag_interrupts_before_the_next_tick() {
    let mut sim = sim(15, 8, vec![]);
    let mut input = ScriptedInput::default();
    let mut clock = ManualClock::default();
    let stop = AtomicBool::new(false);

    let summary = run_loop(&mut sim, &mut input, &mut clock, &stop, |sim, _| {
        if sim.ticks() == 10 {
            stop.store(true, Ordering::Relaxed);
        }
        Ok(())
    })
    .unwrap();

    assert_eq!(summary.ended_by, EndReason::Interrupted);
    assert_eq!(summary.ticks, 10);
    assert_eq!(summary.score, 10);
}

#[test]
fn degraded_input_keeps_the_run_going() {
    let mut sim = sim(15, 8, vec![]);
    let mut input = DeadKeyboard { polls: 0, after: 25 };
    let mut clock = ManualClock::default();
    let stop = AtomicBool::new(false);
    let flagged = Cell::new(0u32);

    let summary = run_loop(&mut sim, &mut input, &mut clock, &stop, |_, hud| {
        if hud.input_degraded {
            flagged.set(flagged.get() + 1);
        }
        Ok(())
    })
    .unwrap();

    assert_eq!(summary.ended_by, EndReason::PlayerQuit);
    assert_eq!(summary.score, 25);
    assert_eq!(flagged.get(), 26);
}

#[test]
fn presenter_errors_abort_the_loop() {
    let mut sim = sim(15, 8, vec![]);
    let mut input = ScriptedInput::default();
    let mut clock = ManualClock::default();
    let stop = AtomicBool::new(false);

    let err = run_loop(&mut sim, &mut input, &mut clock, &stop, |sim, _| {
        if sim.ticks() == 3 {
            return Err(anyhow!("terminal went away"));
        }
        Ok(())
    })
    .unwrap_err();

    assert!(err.to_string().contains("terminal went away"));
    assert_eq!(sim.ticks(), 3);
}
