//! Beam division counting
//!
//! Counts how many times the beam divides on its way down, rather than how
//! many timelines arrive at the bottom. Beams that converge on the same
//! column travel on as one, so the front is a set of occupied columns per
//! row; each splitter cell the front reaches counts exactly one division,
//! even when an edge drops one (or both) of its branches.

use crate::error::CountError;
use manifold_grid::{Cell, Grid};
use std::collections::BTreeSet;

/// Count beam divisions from the start marker to the final row.
///
/// The front advances with the same transition rules as timeline counting:
/// `.` carries a beam straight down, `^` forks it into the in-bounds lower
/// diagonals, anything else absorbs it. A start on the last row yields zero
/// divisions.
///
/// # Errors
/// [`CountError::Grid`] when the grid has no start marker.
pub fn count_divisions(grid: &Grid) -> Result<u64, CountError> {
    let (rows, cols) = grid.dimensions();
    let start = grid.find_start()?;
    tracing::debug!(row = start.row, col = start.col, "start marker located");

    if start.row + 1 >= rows {
        return Ok(0);
    }

    let mut front = BTreeSet::new();
    front.insert(start.col);
    let mut divisions: u64 = 0;

    for r in (start.row + 1)..rows {
        let mut next = BTreeSet::new();
        for &c in &front {
            match grid.cell_at(r, c)? {
                Cell::Empty => {
                    if r + 1 < rows {
                        next.insert(c);
                    }
                }
                Cell::Splitter => {
                    divisions += 1;
                    if r + 1 < rows {
                        if c >= 1 {
                            next.insert(c - 1);
                        }
                        if c + 1 < cols {
                            next.insert(c + 1);
                        }
                    }
                }
                _ => {}
            }
        }
        front = next;
        if front.is_empty() {
            break;
        }
    }

    tracing::debug!(divisions, "division sweep complete");
    Ok(divisions)
}
