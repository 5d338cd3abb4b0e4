//! Draw detection.

use super::super::board::Board;
use super::win::find_winning_line;
use tracing::instrument;

/// A full board with no winning line.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_winning_line(board).is_none()
}
