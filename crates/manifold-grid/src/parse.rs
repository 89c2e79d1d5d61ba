//! Grid construction from text input
//!
//! Constructors accept iterators of lines, readers, or file paths. Rows are
//! padded to the widest observed row with [`PAD_BYTE`] and bounds from
//! [`GridLimits`] are enforced while rows stream in, before the rectangular
//! buffer is allocated.

use crate::cell::PAD_BYTE;
use crate::error::ParseError;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Bounds enforced while parsing grid input
///
/// The defaults match the largest diagrams the engine is expected to see;
/// anything bigger is rejected up front rather than allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLimits {
    /// Maximum accepted row count
    pub max_rows: usize,
    /// Maximum accepted row width
    pub max_cols: usize,
}

impl Default for GridLimits {
    #[inline]
    fn default() -> Self {
        Self {
            max_rows: 10_000,
            max_cols: 10_000,
        }
    }
}

impl Grid {
    /// Build a grid from an iterator of text lines using default limits
    ///
    /// # Errors
    /// Returns [`ParseError::Empty`] when the iterator yields no lines, or
    /// a limit violation per [`GridLimits::default`].
    pub fn from_lines<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with_limits(lines, GridLimits::default())
    }

    /// Build a grid from an iterator of text lines with explicit limits
    ///
    /// # Errors
    /// Returns [`ParseError::Empty`] for zero lines or zero-width input,
    /// [`ParseError::TooManyRows`] past `limits.max_rows`, and
    /// [`ParseError::RowTooLong`] for a row wider than `limits.max_cols`.
    pub fn from_lines_with_limits<I, S>(lines: I, limits: GridLimits) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut cols = 0usize;

        for line in lines {
            if rows.len() == limits.max_rows {
                return Err(ParseError::TooManyRows {
                    limit: limits.max_rows,
                });
            }
            let bytes = line.as_ref().as_bytes().to_vec();
            if bytes.len() > limits.max_cols {
                return Err(ParseError::RowTooLong {
                    row: rows.len(),
                    len: bytes.len(),
                    limit: limits.max_cols,
                });
            }
            cols = cols.max(bytes.len());
            rows.push(bytes);
        }

        // A grid with no rows, or rows with no cells, has nowhere to put a
        // start marker; reject it at the boundary.
        if rows.is_empty() || cols == 0 {
            return Err(ParseError::Empty);
        }

        let row_count = rows.len();
        let mut cells = vec![PAD_BYTE; row_count * cols];
        for (r, row) in rows.iter().enumerate() {
            cells[r * cols..r * cols + row.len()].copy_from_slice(row);
        }

        tracing::debug!(rows = row_count, cols, "parsed grid input");
        Ok(Self::from_parts(row_count, cols, cells))
    }

    /// Build a grid from a buffered reader using default limits
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped and never become
    /// cells.
    ///
    /// # Errors
    /// Returns [`ParseError::Io`] on read failure plus the line-level
    /// errors of [`Grid::from_lines`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        Self::from_reader_with_limits(reader, GridLimits::default())
    }

    /// Build a grid from a buffered reader with explicit limits
    ///
    /// # Errors
    /// Same conditions as [`Grid::from_reader`].
    pub fn from_reader_with_limits<R: Read>(
        reader: R,
        limits: GridLimits,
    ) -> Result<Self, ParseError> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<Result<Vec<String>, _>>()?;
        Self::from_lines_with_limits(lines, limits)
    }

    /// Build a grid from a file on disk using default limits
    ///
    /// # Errors
    /// Returns [`ParseError::Io`] when the file cannot be opened or read,
    /// plus the line-level errors of [`Grid::from_lines`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        Self::from_path_with_limits(path, GridLimits::default())
    }

    /// Build a grid from a file on disk with explicit limits
    ///
    /// # Errors
    /// Same conditions as [`Grid::from_path`].
    pub fn from_path_with_limits(
        path: impl AsRef<Path>,
        limits: GridLimits,
    ) -> Result<Self, ParseError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading grid file");
        let file = File::open(path)?;
        Self::from_reader_with_limits(file, limits)
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}
