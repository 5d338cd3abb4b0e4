//! Tic-tac-toe match engine.
//!
//! The game state machine for a two-player N×N grid game, free of any
//! rendering or input code.
//!
//! # Architecture
//!
//! - **Board**: N×N grid of optional cell owners
//! - **Rules**: pure win/draw evaluation over a board
//! - **Player**: name, mark and a wrapping score
//! - **MatchController**: turns, rounds, retries and scoring
//! - **MatchSnapshot**: detached read-only view for renderers
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Coord, MatchConfig, MatchController, RoundOutcome, Seat};
//!
//! let mut game = MatchController::new(MatchConfig::new())?;
//! for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.apply_move(Coord::new(x, y))?;
//! }
//! assert_eq!(game.outcome().winner(), Some(Seat::One));
//! assert_eq!(game.player(Seat::One).score(), 1);
//!
//! assert!(game.retry());
//! assert_eq!(*game.outcome(), RoundOutcome::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod controller;
mod player;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{Coord, Diagonal, Line, Mark, RoundOutcome, Seat};

// Crate-level exports - Board
pub use board::{Board, BoardError};

// Crate-level exports - Rules
pub use rules::{evaluate, find_winning_line, is_draw};

// Crate-level exports - Players and configuration
pub use config::{ConfigError, DEFAULT_BOARD_SIZE, MatchConfig, StartPolicy};
pub use player::{DEFAULT_SCORE_CEILING, Player};

// Crate-level exports - Match state machine
pub use action::{MoveResult, Rejection};
pub use controller::MatchController;
pub use snapshot::{CellView, MatchSnapshot, PlayerView};
