//! Path-count table for the dense sweep
//!
//! One flat `u64` buffer with the same extent as the grid, indexed
//! `row * cols + col`; no per-row allocation. Accumulation is checked, so
//! counter exhaustion surfaces as [`CountError::Overflow`] instead of
//! wrapping in release builds.

use crate::error::CountError;

/// Dense table of per-cell path counts, owned by a single sweep.
#[derive(Debug)]
pub(crate) struct CountTable {
    rows: usize,
    cols: usize,
    counts: Vec<u64>,
}

impl CountTable {
    /// Zero-initialized table of `rows * cols` accumulators.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            rows,
            cols,
            counts: vec![0; rows * cols],
        }
    }

    /// Current count at `(row, col)`. Callers index within the extent they
    /// constructed.
    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> u64 {
        self.counts[row * self.cols + col]
    }

    /// Add `count` into the accumulator at `(row, col)`.
    #[inline]
    pub(crate) fn add(&mut self, row: usize, col: usize, count: u64) -> Result<(), CountError> {
        let slot = &mut self.counts[row * self.cols + col];
        *slot = slot
            .checked_add(count)
            .ok_or(CountError::Overflow { row, col })?;
        Ok(())
    }

    /// Sum of the final row, checked the same way as cell accumulation.
    pub(crate) fn last_row_total(&self) -> Result<u64, CountError> {
        let row = self.rows - 1;
        let mut total: u64 = 0;
        for col in 0..self.cols {
            total = total
                .checked_add(self.get(row, col))
                .ok_or(CountError::Overflow { row, col })?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let table = CountTable::new(3, 4);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(table.get(row, col), 0);
            }
        }
    }

    #[test]
    fn accumulates() {
        let mut table = CountTable::new(2, 2);
        table.add(1, 0, 3).unwrap();
        table.add(1, 0, 4).unwrap();
        assert_eq!(table.get(1, 0), 7);
        assert_eq!(table.get(0, 0), 0);
    }

    #[test]
    fn cell_overflow_is_reported() {
        let mut table = CountTable::new(1, 1);
        table.add(0, 0, u64::MAX).unwrap();
        let err = table.add(0, 0, 1).unwrap_err();
        assert_eq!(err, CountError::Overflow { row: 0, col: 0 });
    }

    #[test]
    fn last_row_total_sums_final_row_only() {
        let mut table = CountTable::new(2, 3);
        table.add(0, 0, 100).unwrap();
        table.add(1, 0, 1).unwrap();
        table.add(1, 2, 2).unwrap();
        assert_eq!(table.last_row_total().unwrap(), 3);
    }

    #[test]
    fn total_overflow_is_reported() {
        let mut table = CountTable::new(1, 2);
        table.add(0, 0, u64::MAX).unwrap();
        table.add(0, 1, 1).unwrap();
        let err = table.last_row_total().unwrap_err();
        assert_eq!(err, CountError::Overflow { row: 0, col: 1 });
    }
}
