//! Core domain types for the match.

use serde::{Deserialize, Serialize};

/// Symbol a player places on the board.
///
/// Marks carry no behavior; drawing them is up to the renderer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// Drawn as `X`.
    Cross,
    /// Drawn as `O`.
    Circle,
}

/// One of the two seats at the table.
///
/// Board cells refer to their owner by seat; the [`Player`](crate::Player)
/// sitting in that seat holds the name, mark and score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Seat {
    /// First player.
    One,
    /// Second player.
    Two,
}

impl Seat {
    /// Both seats, in order.
    pub const ALL: [Seat; 2] = [Seat::One, Seat::Two];

    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Index into a two-element array.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// A cell coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Coord {
    /// Column, counted from the left.
    pub x: usize,
    /// Row, counted from the top.
    pub y: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Which of the two main diagonals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Diagonal {
    /// Cells `(i, i)`.
    Main,
    /// Cells `(N-1-i, i)`.
    Anti,
}

/// A row, column or diagonal of N cells checked for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Row `y`.
    #[display("row {_0}")]
    Row(usize),
    /// Column `x`.
    #[display("column {_0}")]
    Column(usize),
    /// One of the two diagonals.
    #[display("{_0} diagonal")]
    Diagonal(Diagonal),
}

impl Line {
    /// Coordinates covered by this line on a `size`×`size` board, in scan order.
    pub fn cells(self, size: usize) -> Vec<Coord> {
        (0..size)
            .map(|i| match self {
                Line::Row(y) => Coord::new(i, y),
                Line::Column(x) => Coord::new(x, i),
                Line::Diagonal(Diagonal::Main) => Coord::new(i, i),
                Line::Diagonal(Diagonal::Anti) => Coord::new(size - 1 - i, i),
            })
            .collect()
    }

    /// Every line on a `size`×`size` board: rows, then columns, then diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal(Diagonal::Main), Line::Diagonal(Diagonal::Anti)])
    }
}

/// Decided/undecided status of the current round.
///
/// Always derived from the board by [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// No winner yet and at least one empty cell.
    InProgress,
    /// A seat filled a whole line.
    Won {
        /// The winning seat.
        winner: Seat,
        /// The line that decided the round.
        line: Line,
    },
    /// Board full, no winner.
    Draw,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            RoundOutcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// True while moves may still be made.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, RoundOutcome::InProgress)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::InProgress => write!(f, "In progress"),
            RoundOutcome::Won { winner, line } => write!(f, "Seat {} wins on {}", winner, line),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}
