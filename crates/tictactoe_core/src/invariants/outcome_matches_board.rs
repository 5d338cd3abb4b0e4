//! The stored outcome is what the board says.

use super::super::controller::MatchController;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: the controller's outcome equals `evaluate(board)`.
pub struct OutcomeMatchesBoardInvariant;

impl Invariant<MatchController> for OutcomeMatchesBoardInvariant {
    fn holds(game: &MatchController) -> bool {
        *game.outcome() == evaluate(game.board())
    }

    fn description() -> &'static str {
        "Round outcome matches the board"
    }
}
