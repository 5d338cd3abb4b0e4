//! Results of driving the match with input events.
//!
//! Clicking a filled cell or clicking after the round ended are ordinary
//! user actions, not failures, so they come back as [`MoveResult::Ignored`]
//! rather than as an error.

use super::types::RoundOutcome;
use serde::{Deserialize, Serialize};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The target cell already has an owner.
    #[display("Cell is already occupied")]
    CellOccupied,
    /// The round is decided; waiting for a retry.
    #[display("Round is over")]
    RoundOver,
}

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The mark was placed; carries the outcome evaluated right after.
    Placed(RoundOutcome),
    /// Nothing changed.
    Ignored(Rejection),
}

impl MoveResult {
    /// True if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveResult::Placed(_))
    }

    /// Outcome after the move, if it was placed.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self {
            MoveResult::Placed(outcome) => Some(*outcome),
            MoveResult::Ignored(_) => None,
        }
    }
}
