use std::io;

use crossterm::{cursor, execute, terminal};

/// Scoped raw-mode acquisition. Entering switches to the alternate screen,
/// enables raw mode and hides the hardware cursor; dropping restores all
/// three, so the terminal comes back on every exit path including panics.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(err.into());
        }
        Ok(TerminalGuard { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
