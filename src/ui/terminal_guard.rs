//! Puts the terminal back the way the shell left it, even on panic.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Raw mode and the alternate screen last exactly as long as this guard.
///
/// [`TerminalGuard::restore`] is the normal exit and reports errors. If the
/// guard is dropped without it (early `?` return) the terminal is restored on
/// drop, and [`install_panic_hook`] covers panics.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // Constructed before the second call so a failure there still
        // leaves raw mode through Drop
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Leave the alternate screen and raw mode
    pub fn restore(mut self) -> Result<()> {
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, Show)?;
        io::stdout().flush()?;
        Ok(())
    }

    /// Best-effort restore with errors ignored
    pub fn force_restore() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = io::stdout().flush();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            Self::force_restore();
        }
    }
}

/// Restore the terminal before the default panic message is printed
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        TerminalGuard::force_restore();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_guard_drops_quietly() {
        let guard = TerminalGuard { active: false };
        assert!(!guard.is_active());
        drop(guard);
    }

    #[test]
    fn test_force_restore_without_tty_does_not_panic() {
        TerminalGuard::force_restore();
    }
}
