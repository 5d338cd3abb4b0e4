//! Scores stay in display range.

use super::super::controller::MatchController;
use super::Invariant;

/// Invariant: every score is below its ceiling.
pub struct ScoresBelowCeilingInvariant;

impl Invariant<MatchController> for ScoresBelowCeilingInvariant {
    fn holds(game: &MatchController) -> bool {
        game.players()
            .iter()
            .all(|p| p.score() < p.ceiling().get())
    }

    fn description() -> &'static str {
        "Scores stay below the score ceiling"
    }
}
