//! Round rules.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so the controller recomputes the outcome instead of storing it.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::find_winning_line;

use super::board::Board;
use super::types::RoundOutcome;
use tracing::instrument;

/// Evaluates the board.
///
/// Returns the first winning line in scan order (rows, columns, then the
/// main and anti diagonals), otherwise `Draw` for a full board and
/// `InProgress` for anything else.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board) -> RoundOutcome {
    if let Some((winner, line)) = find_winning_line(board) {
        return RoundOutcome::Won { winner, line };
    }

    if board.is_full() {
        RoundOutcome::Draw
    } else {
        RoundOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Diagonal, Line, Seat};

    #[test]
    fn test_empty_board_in_progress() {
        for size in 1..=5 {
            assert_eq!(evaluate(&Board::new(size)), RoundOutcome::InProgress);
        }
    }

    #[test]
    fn test_single_cell_board_wins_immediately() {
        let mut board = Board::new(1);
        board.place(Coord::new(0, 0), Seat::Two).unwrap();
        assert_eq!(
            evaluate(&board),
            RoundOutcome::Won {
                winner: Seat::Two,
                line: Line::Row(0)
            }
        );
    }

    #[test]
    fn test_win_beats_full_board() {
        // 1 1 1 / 2 2 1 / 1 2 2  -- full, but row 0 is won
        let mut board = Board::new(3);
        let layout = [
            [Seat::One, Seat::One, Seat::One],
            [Seat::Two, Seat::Two, Seat::One],
            [Seat::One, Seat::Two, Seat::Two],
        ];
        for (y, row) in layout.iter().enumerate() {
            for (x, seat) in row.iter().enumerate() {
                board.place(Coord::new(x, y), *seat).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(
            evaluate(&board),
            RoundOutcome::Won {
                winner: Seat::One,
                line: Line::Row(0)
            }
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = Board::new(3);
        for coord in Line::Diagonal(Diagonal::Anti).cells(3) {
            board.place(coord, Seat::One).unwrap();
        }
        assert_eq!(evaluate(&board).winner(), Some(Seat::One));
    }
}
