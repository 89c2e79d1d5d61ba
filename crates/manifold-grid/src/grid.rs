//! Grid - Immutable rectangular character grid
//!
//! Provides [`Grid`], the backing store for a tachyon manifold diagram.
//! Rows shorter than the widest row are padded with
//! [`PAD_BYTE`](crate::PAD_BYTE) so the stored grid is always rectangular;
//! padding never propagates a timeline.

use crate::cell::Cell;
use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A (row, column) coordinate pair, zero-based from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based column index
    pub col: usize,
}

impl Position {
    /// Create a new position
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable rectangular character grid
///
/// Stored row-major as a single byte buffer of `rows * cols` cells. All
/// constructors pad ragged rows to the widest observed row, so every
/// coordinate inside `dimensions()` resolves to a byte.
///
/// # Example
/// ```
/// use manifold_grid::{Cell, Grid};
///
/// let grid = Grid::from_lines(["S..", "^.^", "..."]).unwrap();
/// assert_eq!(grid.dimensions(), (3, 3));
/// assert_eq!(grid.cell_at(1, 0).unwrap(), Cell::Splitter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row count
    rows: usize,
    /// Column count (widest observed row)
    cols: usize,
    /// Row-major cell bytes, `rows * cols` long
    cells: Vec<u8>,
}

impl Grid {
    /// Assemble a grid from an already padded buffer.
    ///
    /// Callers must guarantee `cells.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Grid dimensions as `(rows, cols)`
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The classified cell at `(row, col)`
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] when the coordinates fall outside
    /// the stored dimensions.
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(Cell::from_byte(self.cells[row * self.cols + col]))
    }

    /// Raw bytes of one row, padding included
    ///
    /// Returns `None` when `row` is outside the grid. Intended for sweep
    /// loops that classify bytes themselves via [`Cell::from_byte`].
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, &byte)| {
            let pos = Position::new(idx / self.cols, idx % self.cols);
            (pos, Cell::from_byte(byte))
        })
    }

    /// First position holding `cell`, scanning rows top to bottom and
    /// columns left to right
    ///
    /// # Errors
    /// Returns [`GridError::MarkerNotFound`] when no cell matches.
    pub fn find_marker(&self, cell: Cell) -> Result<Position, GridError> {
        let needle = cell.as_byte();
        self.cells
            .iter()
            .position(|&byte| byte == needle)
            .map(|idx| Position::new(idx / self.cols, idx % self.cols))
            .ok_or(GridError::MarkerNotFound {
                marker: needle as char,
            })
    }

    /// Position of the start marker `S`
    ///
    /// When the grid holds more than one `S`, the row-major first match
    /// wins.
    ///
    /// # Errors
    /// Returns [`GridError::MarkerNotFound`] when the grid has no start.
    #[inline]
    pub fn find_start(&self) -> Result<Position, GridError> {
        self.find_marker(Cell::Start)
    }

    /// Number of splitter cells in the grid
    #[must_use]
    pub fn splitter_count(&self) -> usize {
        self.cells.iter().filter(|&&byte| byte == b'^').count()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            let start = row * self.cols;
            for &byte in &self.cells[start..start + self.cols] {
                write!(f, "{}", byte as char)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::PAD_BYTE;

    fn sample() -> Grid {
        Grid::from_lines(["S..", "^.^", "..."]).unwrap()
    }

    #[test]
    fn dimensions_and_access() {
        let grid = sample();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.cell_at(0, 0).unwrap(), Cell::Start);
        assert_eq!(grid.cell_at(1, 0).unwrap(), Cell::Splitter);
        assert_eq!(grid.cell_at(2, 2).unwrap(), Cell::Empty);
    }

    #[test]
    fn out_of_bounds_access() {
        let grid = sample();
        let err = grid.cell_at(3, 0).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3,
            }
        );
        assert!(grid.cell_at(0, 3).is_err());
    }

    #[test]
    fn find_start_first_match_wins() {
        let grid = Grid::from_lines(["..S", "S.."]).unwrap();
        assert_eq!(grid.find_start().unwrap(), Position::new(0, 2));
    }

    #[test]
    fn find_marker_missing() {
        let grid = Grid::from_lines(["...", "..."]).unwrap();
        assert_eq!(
            grid.find_start().unwrap_err(),
            GridError::MarkerNotFound { marker: 'S' }
        );
    }

    #[test]
    fn ragged_rows_pad_inert() {
        let grid = Grid::from_lines(["S", "^.^"]).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.cell_at(0, 1).unwrap(), Cell::Other(PAD_BYTE));
        assert_eq!(grid.cell_at(0, 2).unwrap(), Cell::Other(PAD_BYTE));
    }

    #[test]
    fn row_slices() {
        let grid = sample();
        assert_eq!(grid.row(1), Some(&b"^.^"[..]));
        assert_eq!(grid.row(3), None);
    }

    #[test]
    fn cells_iterates_row_major() {
        let grid = Grid::from_lines(["S.", ".^"]).unwrap();
        let collected: Vec<_> = grid.cells().collect();
        assert_eq!(collected.len(), 4);
        assert_eq!(collected[0], (Position::new(0, 0), Cell::Start));
        assert_eq!(collected[3], (Position::new(1, 1), Cell::Splitter));
    }

    #[test]
    fn splitter_count() {
        assert_eq!(sample().splitter_count(), 2);
        let clean = Grid::from_lines(["S..", "..."]).unwrap();
        assert_eq!(clean.splitter_count(), 0);
    }

    #[test]
    fn display_round_trips_source() {
        let grid = sample();
        assert_eq!(grid.to_string(), "S..\n^.^\n...");
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(4, 7).to_string(), "(4, 7)");
    }
}
