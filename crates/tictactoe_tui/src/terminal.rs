//! Terminal setup and the frame loop.

use crate::app::App;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Raw-mode alternate screen with mouse capture. Restores the terminal on drop.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Switches the terminal into game mode.
    #[instrument]
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .context("Failed to create terminal")?;
        debug!("Terminal ready");
        Ok(Self { terminal })
    }

    /// The wrapped terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        info!("Restoring terminal");

        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Draws and handles input until the user quits.
///
/// One frame per `1/fps` seconds; the match is only read while drawing.
#[instrument(skip(app))]
pub fn run(app: &mut App, fps: u32) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let frame_time = Duration::from_secs(1) / fps.max(1);

    info!("Entering game loop");
    while !app.should_quit() {
        let snapshot = app.snapshot();
        let cursor = app.cursor();

        let mut geometry = None;
        guard
            .terminal_mut()
            .draw(|frame| geometry = Some(ui::draw(frame, &snapshot, cursor)))
            .context("Failed to draw frame")?;
        if let Some(geometry) = geometry {
            app.set_geometry(geometry);
        }

        if event::poll(frame_time).context("Failed to poll events")? {
            let event = event::read().context("Failed to read event")?;
            app.handle_event(&event)
                .context("Input mapped to a cell outside the board")?;
        }
    }

    Ok(())
}
