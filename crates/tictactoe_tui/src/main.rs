//! Tic-tac-toe in the terminal.
//!
//! Two players share the mouse (or the arrow keys), `r` starts the next
//! round once one is decided, `q` quits.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod geometry;
mod input;
mod settings;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use settings::Settings;
use std::path::Path;
use tictactoe_core::MatchController;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli).context("Invalid settings")?;

    init_tracing(settings.log_file())?;
    info!(?settings, "Starting tictactoe");

    let game = MatchController::new(settings.match_config().clone())
        .context("Failed to create match")?;
    let mut app = App::new(game);

    let result = terminal::run(&mut app, *settings.fps());
    if let Err(err) = &result {
        error!(error = ?err, "Game loop error");
    }

    let final_scores = ui::score_line(&app.snapshot());
    info!(scores = %final_scores, "Exiting");
    result
}

/// Sends logs to a file so they never draw over the board.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
