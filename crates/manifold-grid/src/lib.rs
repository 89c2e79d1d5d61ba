//! Manifold Grid
//!
//! Immutable character-grid store for tachyon manifold diagrams.
//!
//! # Core Concepts
//!
//! - [`Grid`]: Rectangular row-major byte grid, padded from ragged input
//! - [`Cell`]: Typed classification of a grid byte (`.`, `^`, `S`, other)
//! - [`Position`]: Zero-based `(row, col)` coordinate from the top-left
//! - [`GridLimits`]: Input bounds enforced while parsing
//!
//! # Example
//!
//! ```rust
//! use manifold_grid::{Cell, Grid, Position};
//!
//! let grid = Grid::from_lines(["S..", "^.^", "..."]).unwrap();
//! assert_eq!(grid.find_start().unwrap(), Position::new(0, 0));
//! assert_eq!(grid.cell_at(1, 2).unwrap(), Cell::Splitter);
//! ```

// Core modules
mod cell;
mod error;
mod grid;
mod parse;

// Re-exports
pub use cell::{Cell, PAD_BYTE};
pub use error::{GridError, ParseError};
pub use grid::{Grid, Position};
pub use parse::GridLimits;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
