//! Terminal setup and the interactive event loop.

use crate::app::{App, AppAction};
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs its closure when dropped, including on early `?` returns.
struct RestoreGuard<F: FnMut()>(F);

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs the interactive game until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip_all)]
pub fn run(app: &mut App) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let _restore = RestoreGuard(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = event_loop(&mut terminal, app);
    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    terminal.show_cursor()?;
    res
}

fn event_loop(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key) == AppAction::Quit
        {
            info!("Leaving event loop");
            return Ok(());
        }
    }
}
