//! N×N board of cell ownership.

use super::types::{Coord, Diagonal, Seat};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error raised by board operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Coordinate outside `[0, size)` on either axis.
    ///
    /// Comes from a coordinate-mapping bug in the caller, never from the user.
    #[display("Cell {coord} is outside the {size}x{size} board")]
    OutOfRange {
        /// The offending coordinate.
        coord: Coord,
        /// Board side length.
        size: usize,
    },

    /// The cell already has an owner.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Coord),

    /// Stored cells do not cover a `size`×`size` board.
    #[display("A {size}x{size} board cannot hold {cells} cells")]
    Malformed {
        /// Claimed side length.
        size: usize,
        /// Number of cells supplied.
        cells: usize,
    },
}

impl std::error::Error for BoardError {}

/// Square board with one optional owner per cell.
///
/// Cells are stored in row-major order; every coordinate in
/// `0..size × 0..size` has exactly one entry for the life of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Option<Seat>>,
}

/// Unchecked serialized form of [`Board`].
#[derive(Deserialize)]
struct StoredBoard {
    size: usize,
    cells: Vec<Option<Seat>>,
}

impl TryFrom<StoredBoard> for Board {
    type Error = BoardError;

    fn try_from(stored: StoredBoard) -> Result<Self, Self::Error> {
        let StoredBoard { size, cells } = stored;
        if size == 0 || size.checked_mul(size) != Some(cells.len()) {
            return Err(BoardError::Malformed {
                size,
                cells: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// A zero size is clamped to 1; [`MatchConfig::validate`](crate::MatchConfig::validate)
    /// rejects it before it gets here.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Owner of the cell, or `None` when empty.
    pub fn cell_at(&self, coord: Coord) -> Result<Option<Seat>, BoardError> {
        let idx = self.index(coord)?;
        Ok(self.cells[idx])
    }

    /// Places `seat` on an empty cell.
    ///
    /// On error the board is untouched.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, coord: Coord, seat: Seat) -> Result<(), BoardError> {
        let idx = self.index(coord)?;
        match self.cells[idx] {
            Some(_) => Err(BoardError::CellOccupied(coord)),
            None => {
                self.cells[idx] = Some(seat);
                Ok(())
            }
        }
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// True iff every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Row `y`, left to right.
    ///
    /// # Panics
    ///
    /// If `y >= size`.
    pub fn row(&self, y: usize) -> Vec<Option<Seat>> {
        assert!(y < self.size, "row {} out of range", y);
        self.cells[y * self.size..(y + 1) * self.size].to_vec()
    }

    /// Column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// If `x >= size`.
    pub fn column(&self, x: usize) -> Vec<Option<Seat>> {
        assert!(x < self.size, "column {} out of range", x);
        (0..self.size).map(|y| self.cells[y * self.size + x]).collect()
    }

    /// Diagonal cells, top to bottom.
    pub fn diagonal(&self, which: Diagonal) -> Vec<Option<Seat>> {
        let n = self.size;
        (0..n)
            .map(|i| match which {
                Diagonal::Main => self.cells[i * n + i],
                Diagonal::Anti => self.cells[i * n + (n - 1 - i)],
            })
            .collect()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Option<Seat>] {
        &self.cells
    }

    /// Number of cells owned by `seat`.
    pub fn count(&self, seat: Seat) -> usize {
        self.cells.iter().filter(|c| **c == Some(seat)).count()
    }

    /// Empties every cell.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    fn index(&self, coord: Coord) -> Result<usize, BoardError> {
        if coord.x >= self.size || coord.y >= self.size {
            return Err(BoardError::OutOfRange {
                coord,
                size: self.size,
            });
        }
        Ok(coord.y * self.size + coord.x)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.size {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.size {
                if x > 0 {
                    write!(f, "|")?;
                }
                let symbol = match self.cells[y * self.size + x] {
                    None => '.',
                    Some(Seat::One) => '1',
                    Some(Seat::Two) => '2',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
