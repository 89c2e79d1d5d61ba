//! Sparse counting sweep
//!
//! Tracks only the columns that currently hold timelines: a rolling
//! frontier of column → count, advanced one row at a time. Work per row is
//! proportional to the active columns rather than the grid width. The
//! frontier is a `BTreeMap` so columns accumulate in the same order as the
//! dense sweep and any overflow surfaces at the same cell.

use crate::error::CountError;
use manifold_grid::{Cell, Grid};
use std::collections::BTreeMap;

fn accumulate(
    frontier: &mut BTreeMap<usize, u64>,
    row: usize,
    col: usize,
    count: u64,
) -> Result<(), CountError> {
    let slot = frontier.entry(col).or_insert(0);
    *slot = slot
        .checked_add(count)
        .ok_or(CountError::Overflow { row, col })?;
    Ok(())
}

/// Count timelines with the sparse frontier sweep.
///
/// Semantics match [`crate::dense`]: the frontier is advanced to the final
/// row and summed there; the final row collects timelines but never
/// propagates them further.
pub(crate) fn count(grid: &Grid) -> Result<u64, CountError> {
    let (rows, cols) = grid.dimensions();
    let start = grid.find_start()?;
    tracing::debug!(row = start.row, col = start.col, "start marker located");

    if start.row + 1 >= rows {
        return Ok(0);
    }

    let mut frontier = BTreeMap::new();
    frontier.insert(start.col, 1u64);

    for r in (start.row + 1)..(rows - 1) {
        if frontier.is_empty() {
            break;
        }
        let mut next = BTreeMap::new();
        for (&c, &count) in &frontier {
            match grid.cell_at(r, c)? {
                Cell::Empty => accumulate(&mut next, r + 1, c, count)?,
                Cell::Splitter => {
                    if c >= 1 {
                        accumulate(&mut next, r + 1, c - 1, count)?;
                    }
                    if c + 1 < cols {
                        accumulate(&mut next, r + 1, c + 1, count)?;
                    }
                }
                _ => {}
            }
        }
        frontier = next;
    }

    let last = rows - 1;
    let mut total: u64 = 0;
    for (&col, &count) in &frontier {
        total = total
            .checked_add(count)
            .ok_or(CountError::Overflow { row: last, col })?;
    }
    tracing::debug!(total, "sparse sweep complete");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> Grid {
        Grid::from_lines(lines).unwrap()
    }

    #[test]
    fn straight_column_counts_one() {
        assert_eq!(count(&grid(&["S.", "^.", ".."])).unwrap(), 1);
    }

    #[test]
    fn single_splitter_counts_two() {
        assert_eq!(count(&grid(&[".S.", ".^.", "..."])).unwrap(), 2);
    }

    #[test]
    fn start_on_last_row_counts_zero() {
        assert_eq!(count(&grid(&["...", "..S"])).unwrap(), 0);
    }

    #[test]
    fn last_row_splitter_counts_once() {
        // A splitter on the final row holds a terminal timeline; it must
        // not fork past the grid.
        assert_eq!(count(&grid(&[".S.", "...", ".^."])).unwrap(), 1);
    }

    #[test]
    fn last_row_terminator_still_counts() {
        // Final-row cell content is irrelevant; the timeline already
        // arrived.
        assert_eq!(count(&grid(&["S..", "...", "#.."])).unwrap(), 1);
    }

    #[test]
    fn empty_frontier_short_circuits() {
        assert_eq!(count(&grid(&["S.", "#.", "..", "..", ".."])).unwrap(), 0);
    }

    #[test]
    fn converging_branches_accumulate() {
        let g = grid(&["..S..", "..^..", ".^.^.", "....."]);
        assert_eq!(count(&g).unwrap(), 4);
    }

    #[test]
    fn missing_start_is_fatal() {
        assert!(count(&grid(&["...", "..."])).is_err());
    }
}
