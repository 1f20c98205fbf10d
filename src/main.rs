//! Terminal lane racer (default binary).
//!
//! Sets up the terminal (raw mode, alternate screen, input thread), runs the
//! fixed-rate game loop and prints the final score once the terminal is back
//! to normal.

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use tui_racer::cli::Args;
use tui_racer::core::{RandomSpawner, TrackSimulator};
use tui_racer::driver::{run_loop, EndReason, RunSummary, SystemClock};
use tui_racer::frontend::Frontend;
use tui_racer::input::{restore_raw_mode, CrosstermKeys, InputListener, RawModeGuard};
use tui_racer::term::{restore_screen, TerminalSession, TrackView};
use tui_racer::types::GAME_OVER_LINGER_MS;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(summary) => {
            println!("Game over! Final score: {}", summary.score);
            if summary.ended_by == EndReason::OutOfLives {
                println!("Thanks for playing!");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<RunSummary> {
    init_logging(args.log_file.as_deref())?;

    let rows = crossterm::terminal::size().ok().map(|(_, rows)| rows);
    let config = args.game_config(rows).context("invalid configuration")?;
    let spawner = match args.seed {
        Some(seed) => RandomSpawner::new(seed),
        None => RandomSpawner::from_entropy(),
    };
    log::info!("seed {}", spawner.seed());
    let mut sim = TrackSimulator::new(config, spawner)?;

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed))
            .context("failed to install the termination handler")?;
    }
    install_panic_hook();

    // Guards drop in reverse order: input thread, then screen, then raw mode.
    let mut raw = RawModeGuard::enable()?;
    let mut session = TerminalSession::enter()?;
    let mut input =
        InputListener::spawn(CrosstermKeys::new()).context("failed to start the input thread")?;
    log::info!("input backend: {}", input.backend());

    let mut frontend = Frontend::stdout(TrackView::default());
    let mut clock = SystemClock::new();
    let summary = run_loop(&mut sim, &mut input, &mut clock, &stop, |sim, hud| {
        frontend.present(sim, hud)
    })?;
    log::info!(
        "run ended ({}): score {} after {} ticks, {} hits",
        summary.ended_by.as_str(),
        summary.score,
        summary.ticks,
        summary.hits
    );

    if summary.ended_by != EndReason::Interrupted {
        frontend.game_over(summary.score)?;
        thread::sleep(Duration::from_millis(GAME_OVER_LINGER_MS));
    }

    input.stop();
    session.leave()?;
    raw.release()?;
    Ok(summary)
}

/// Logging is opt-in: stderr belongs to the terminal UI, so logs only go to
/// a file.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_screen();
        let _ = restore_raw_mode();
        default_hook(info);
    }));
}
