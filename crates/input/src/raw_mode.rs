//! Raw keyboard mode, held for the lifetime of a guard.

use anyhow::{Context, Result};
use crossterm::terminal;

/// Puts the terminal in raw mode on creation and restores it on drop.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enable raw mode. Fails if the terminal cannot deliver single key
    /// presses (e.g. stdin is not a tty).
    pub fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to switch the terminal to raw input mode")?;
        log::debug!("raw mode enabled");
        Ok(Self { active: true })
    }

    /// Restore the previous mode now instead of at drop.
    pub fn release(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode().context("failed to restore terminal input mode")?;
        log::debug!("raw mode released");
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_raw_mode();
        }
    }
}

/// Best-effort raw mode reset for panic hooks and signal paths.
pub fn restore_raw_mode() -> Result<()> {
    terminal::disable_raw_mode()?;
    Ok(())
}
