//! Raw-mode and alternate-screen lifetime.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard restores the terminal, including during a panic or an
/// early return from setup.
pub(crate) struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode and switches `out` to the alternate screen.
    pub(crate) fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        debug!("Terminal switched to raw mode");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        debug!("Terminal restored");
    }
}
