use std::io;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Owns the terminal while the selector is open
///
/// Raw mode and the alternate screen are undone by [`TerminalManager::restore`], or by
/// `Drop` if the selector exits early or panics.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    restored: bool,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(err.into());
            }
        };

        Ok(Self { terminal, restored: false })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }

    /// Give the terminal back in its original state
    ///
    /// Every step is attempted even if an earlier one fails; the first failure is
    /// reported.
    pub fn restore(mut self) -> Result<()> {
        let result = restore_terminal(
            disable_raw_mode(),
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen),
            self.terminal.show_cursor(),
        );
        self.restored = true;
        Ok(result?)
    }
}

/// First error among the restore steps, in order
fn restore_terminal(
    raw_mode: io::Result<()>,
    alternate_screen: io::Result<()>,
    cursor: io::Result<()>,
) -> io::Result<()> {
    raw_mode.and(alternate_screen).and(cursor)
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        // Best effort; we may already be unwinding
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
