//! Read-only view of a match for renderers.

use super::types::{Coord, Mark, RoundOutcome, Seat};
use serde::{Deserialize, Serialize};

/// Owner of an occupied cell, with the mark to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellView {
    /// Owning seat, for styling.
    pub seat: Seat,
    /// Mark to draw.
    pub mark: Mark,
}

/// A player as shown on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Seat the player occupies.
    pub seat: Seat,
    /// Display name.
    pub name: String,
    /// Mark the player places.
    pub mark: Mark,
    /// Current score.
    pub score: u32,
}

/// Immutable copy of everything a frame needs.
///
/// Detached from the controller: holding a snapshot never observes a
/// later move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Board side length.
    pub size: usize,
    /// Cells in row-major order.
    pub cells: Vec<Option<CellView>>,
    /// Seat whose turn it is (or was, when the round ended).
    pub active: Seat,
    /// Current round outcome.
    pub outcome: RoundOutcome,
    /// Seat one and seat two.
    pub players: [PlayerView; 2],
    /// 1-based round number.
    pub round: u32,
}

impl MatchSnapshot {
    /// Cell contents, or `None` for empty or out-of-range cells.
    pub fn cell(&self, coord: Coord) -> Option<CellView> {
        if coord.x >= self.size || coord.y >= self.size {
            return None;
        }
        self.cells[coord.y * self.size + coord.x]
    }

    /// Player in `seat`.
    pub fn player(&self, seat: Seat) -> &PlayerView {
        &self.players[seat.index()]
    }

    /// Player whose turn it is.
    pub fn active_player(&self) -> &PlayerView {
        self.player(self.active)
    }

    /// Cells of the winning line, empty unless the round was won.
    pub fn winning_cells(&self) -> Vec<Coord> {
        match self.outcome {
            RoundOutcome::Won { line, .. } => line.cells(self.size),
            _ => Vec::new(),
        }
    }

    /// True once the round is decided.
    pub fn is_round_over(&self) -> bool {
        !self.outcome.is_in_progress()
    }
}
