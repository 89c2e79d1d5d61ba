//! Dense counting sweep
//!
//! The reference strategy: a row-major dynamic-programming pass over a
//! [`CountTable`] with the grid's extent. Each row's counts are final before
//! the next row is computed, so one downward sweep suffices.

use crate::error::CountError;
use crate::table::CountTable;
use manifold_grid::{Cell, Grid};

/// Count timelines with the dense table sweep.
///
/// Seeds one timeline in the cell directly below the start marker, then
/// sweeps the remaining rows top to bottom. `.` carries a count straight
/// down, `^` forks it into both lower diagonals (an edge splitter loses the
/// out-of-bounds branch), and any other cell ends the paths through it. The
/// total is the sum over the final row.
pub(crate) fn count(grid: &Grid) -> Result<u64, CountError> {
    let (rows, cols) = grid.dimensions();
    let start = grid.find_start()?;
    tracing::debug!(row = start.row, col = start.col, "start marker located");

    // A start on the last row has nowhere to go.
    if start.row + 1 >= rows {
        return Ok(0);
    }

    let mut table = CountTable::new(rows, cols);
    table.add(start.row + 1, start.col, 1)?;

    for r in (start.row + 1)..rows {
        for c in 0..cols {
            let count = table.get(r, c);
            if count == 0 {
                continue;
            }
            match grid.cell_at(r, c)? {
                Cell::Empty => {
                    if r + 1 < rows {
                        table.add(r + 1, c, count)?;
                    }
                }
                Cell::Splitter => {
                    if r + 1 < rows {
                        if c >= 1 {
                            table.add(r + 1, c - 1, count)?;
                        }
                        if c + 1 < cols {
                            table.add(r + 1, c + 1, count)?;
                        }
                    }
                }
                _ => {}
            }
        }
    }

    let total = table.last_row_total()?;
    tracing::debug!(total, "dense sweep complete");
    Ok(total)
}
