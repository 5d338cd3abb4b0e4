//! Moves are accepted exactly while the round is undecided.

use super::super::controller::MatchController;
use super::Invariant;

/// Invariant: accepting moves iff the outcome is `InProgress`.
pub struct AcceptingMatchesOutcomeInvariant;

impl Invariant<MatchController> for AcceptingMatchesOutcomeInvariant {
    fn holds(game: &MatchController) -> bool {
        game.is_accepting_moves() == game.outcome().is_in_progress()
    }

    fn description() -> &'static str {
        "Moves accepted only while the round is in progress"
    }
}
