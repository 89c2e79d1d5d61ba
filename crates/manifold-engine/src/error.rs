//! Error types for timeline counting

use manifold_grid::GridError;

/// Errors raised while counting over a grid
///
/// Derives `PartialEq` so callers comparing two strategy runs can compare
/// their failures as well as their totals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    /// Grid access or marker lookup failed
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// A path-count accumulator exceeded `u64::MAX`
    #[error("timeline count overflowed u64 at ({row}, {col})")]
    Overflow {
        /// Row of the accumulator that overflowed
        row: usize,
        /// Column of the accumulator that overflowed
        col: usize,
    },
}

impl CountError {
    /// Check if the error came from counter exhaustion
    #[inline]
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_display() {
        let err = CountError::Overflow { row: 12, col: 7 };
        assert!(err.to_string().contains("(12, 7)"));
        assert!(err.is_overflow());
    }

    #[test]
    fn grid_error_wraps() {
        let err = CountError::from(GridError::MarkerNotFound { marker: 'S' });
        assert!(err.to_string().contains("marker 'S'"));
        assert!(!err.is_overflow());
    }
}
