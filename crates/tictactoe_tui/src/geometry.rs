//! Mapping between terminal cells and board coordinates.

use ratatui::layout::{Position, Rect};
use tictactoe_core::Coord;
use tracing::instrument;

/// Terminal columns per board cell.
pub const CELL_WIDTH: u16 = 7;
/// Terminal rows per board cell.
pub const CELL_HEIGHT: u16 = 3;

/// Where the board was drawn in the last frame.
///
/// Board cells are `CELL_WIDTH`×`CELL_HEIGHT` blocks separated by
/// one-character grid lines. Only the part inside `visible` reaches the
/// screen when the terminal is smaller than the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    origin_x: u16,
    origin_y: u16,
    size: usize,
    visible: Rect,
}

impl BoardGeometry {
    /// Centers a `size`×`size` board in `area`.
    #[instrument(level = "trace")]
    pub fn centered(area: Rect, size: usize) -> Self {
        let (width, height) = Self::extent(size);
        Self {
            origin_x: area.x + area.width.saturating_sub(width) / 2,
            origin_y: area.y + area.height.saturating_sub(height) / 2,
            size,
            visible: area,
        }
    }

    /// Width and height of a `size`×`size` board in terminal cells.
    pub fn extent(size: usize) -> (u16, u16) {
        let n = size as u16;
        (
            n * CELL_WIDTH + n.saturating_sub(1),
            n * CELL_HEIGHT + n.saturating_sub(1),
        )
    }

    /// Rectangle covering the whole board, grid lines included.
    pub fn bounds(&self) -> Rect {
        let (width, height) = Self::extent(self.size);
        Rect::new(self.origin_x, self.origin_y, width, height)
    }

    /// Rectangle of one board cell.
    pub fn cell_rect(&self, coord: Coord) -> Rect {
        Rect::new(
            self.origin_x + coord.x as u16 * (CELL_WIDTH + 1),
            self.origin_y + coord.y as u16 * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// Board cell under terminal position (`column`, `row`).
    ///
    /// Grid lines, anything outside the board and cells clipped off the
    /// drawn area map to `None`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        if !self.visible.contains(Position::new(column, row)) {
            return None;
        }
        let x = Self::axis(column.checked_sub(self.origin_x)?, CELL_WIDTH)?;
        let y = Self::axis(row.checked_sub(self.origin_y)?, CELL_HEIGHT)?;
        (x < self.size && y < self.size).then(|| Coord::new(x, y))
    }

    fn axis(offset: u16, cell: u16) -> Option<usize> {
        let stride = cell + 1;
        (offset % stride < cell).then(|| (offset / stride) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> BoardGeometry {
        // 3x3 board: 23 wide, 11 tall, placed at (10, 5)
        BoardGeometry::centered(Rect::new(0, 0, 43, 21), 3)
    }

    #[test]
    fn test_extent() {
        assert_eq!(BoardGeometry::extent(3), (23, 11));
        assert_eq!(BoardGeometry::extent(1), (7, 3));
    }

    #[test]
    fn test_centered_origin() {
        assert_eq!(geometry().bounds(), Rect::new(10, 5, 23, 11));
    }

    #[test]
    fn test_cell_corners_map_to_coords() {
        let g = geometry();
        assert_eq!(g.cell_at(10, 5), Some(Coord::new(0, 0)));
        assert_eq!(g.cell_at(16, 7), Some(Coord::new(0, 0)));
        assert_eq!(g.cell_at(18, 5), Some(Coord::new(1, 0)));
        assert_eq!(g.cell_at(32, 15), Some(Coord::new(2, 2)));
    }

    #[test]
    fn test_grid_lines_and_outside_map_to_nothing() {
        let g = geometry();
        assert_eq!(g.cell_at(17, 5), None); // vertical grid line
        assert_eq!(g.cell_at(10, 8), None); // horizontal grid line
        assert_eq!(g.cell_at(9, 5), None);
        assert_eq!(g.cell_at(33, 5), None);
        assert_eq!(g.cell_at(10, 16), None);
    }

    #[test]
    fn test_clipped_cells_ignore_clicks() {
        // A 3x3 board needs 11 rows; only 6 are available below row 2.
        let g = BoardGeometry::centered(Rect::new(0, 2, 23, 6), 3);

        assert_eq!(g.cell_at(0, 2), Some(Coord::new(0, 0)));
        assert_eq!(g.cell_at(0, 7), Some(Coord::new(0, 1)));
        // Row 8 belongs to cell (0, 1) but lies past the drawn area.
        assert_eq!(g.cell_at(0, 8), None);
        assert_eq!(g.cell_at(0, 10), None);
        // Above the drawn area.
        assert_eq!(g.cell_at(0, 1), None);
    }

    #[test]
    fn test_cell_rect_round_trips() {
        let g = geometry();
        for y in 0..3 {
            for x in 0..3 {
                let rect = g.cell_rect(Coord::new(x, y));
                assert_eq!(g.cell_at(rect.x, rect.y), Some(Coord::new(x, y)));
                assert_eq!(
                    g.cell_at(rect.x + rect.width - 1, rect.y + rect.height - 1),
                    Some(Coord::new(x, y))
                );
            }
        }
    }
}
