//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_core::StartPolicy;

/// Two-player tic-tac-toe in the terminal, played with the mouse
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on an N×N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length (1-9)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Scores wrap to 0 on reaching this value
    #[arg(long)]
    pub ceiling: Option<u32>,

    /// Name shown for the first player
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name shown for the second player
    #[arg(long)]
    pub player_two: Option<String>,

    /// Who opens the next round: carry, seat-one or alternate
    #[arg(long)]
    pub start_policy: Option<StartPolicy>,

    /// Frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Where log output goes
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}
