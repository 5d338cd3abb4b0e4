//! Win detection.

use super::super::board::Board;
use super::super::types::{Line, Seat};
use tracing::instrument;

/// Finds the first line owned entirely by one seat.
///
/// Lines are scanned rows first, then columns, then the two diagonals.
/// A line is won when one seat occupies all N of its cells.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_winning_line(board: &Board) -> Option<(Seat, Line)> {
    let size = board.size();

    Line::all(size).find_map(|line| {
        let cells = match line {
            Line::Row(y) => board.row(y),
            Line::Column(x) => board.column(x),
            Line::Diagonal(which) => board.diagonal(which),
        };
        owner(&cells, size).map(|seat| (seat, line))
    })
}

/// The seat holding every one of the `size` cells, if any.
fn owner(cells: &[Option<Seat>], size: usize) -> Option<Seat> {
    Seat::ALL
        .into_iter()
        .find(|seat| cells.iter().filter(|c| **c == Some(*seat)).count() >= size)
}
