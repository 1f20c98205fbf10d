//! Full-screen terminal session (alternate screen, hidden cursor).

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

/// Owns the alternate screen. Restores the normal screen on drop.
#[derive(Debug)]
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        let mut out = io::stdout();
        out.queue(terminal::EnterAlternateScreen)?;
        out.queue(cursor::Hide)?;
        out.queue(terminal::DisableLineWrap)?;
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        out.flush().context("failed to enter the alternate screen")?;
        Ok(Self { active: true })
    }

    /// Leave the alternate screen now instead of at drop.
    pub fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_screen().context("failed to leave the alternate screen")
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_screen();
        }
    }
}

/// Best-effort screen reset for panic hooks and signal paths.
pub fn restore_screen() -> io::Result<()> {
    let mut out = io::stdout();
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    out.flush()
}
