//! Error types for grid storage and parsing
//!
//! Covers:
//! - Coordinate access outside the stored bounds
//! - Marker lookup on grids that lack the marker
//! - Malformed or oversized grid input

use std::io;

/// Errors raised by grid access and marker lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Coordinates outside the stored grid
    #[error("position ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Stored row count
        rows: usize,
        /// Stored column count
        cols: usize,
    },

    /// Marker byte absent from the grid
    #[error("marker '{marker}' not found in grid")]
    MarkerNotFound {
        /// The marker that was searched for
        marker: char,
    },
}

impl GridError {
    /// Check if the error came from a bounds violation
    #[inline]
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

/// Errors raised while reading a grid from text input
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Underlying reader failed
    #[error("i/o error reading grid: {0}")]
    Io(#[from] io::Error),

    /// Input contained no rows, or rows with no columns at all
    #[error("grid input is empty")]
    Empty,

    /// Row count above the configured limit
    #[error("grid exceeds row limit of {limit}")]
    TooManyRows {
        /// Configured maximum row count
        limit: usize,
    },

    /// A single row wider than the configured limit
    #[error("row {row} has {len} columns, limit is {limit}")]
    RowTooLong {
        /// Offending row index
        row: usize,
        /// Observed row width
        len: usize,
        /// Configured maximum column count
        limit: usize,
    },
}
