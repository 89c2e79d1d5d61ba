//! Manifold Engine
//!
//! Timeline counting over tachyon manifold grids: a downward
//! dynamic-programming sweep from the start marker to the final row.
//!
//! # Core Concepts
//!
//! - [`count_timelines`]: total timelines reaching the final row
//! - [`Strategy`]: dense table sweep (reference) or sparse frontier
//! - [`count_divisions`]: how often the beam divides on the way down
//! - [`harness`]: seeded randomized cross-checking of the above
//!
//! # Example
//!
//! ```rust
//! use manifold_engine::{count_timelines, count_timelines_with, Strategy};
//! use manifold_grid::Grid;
//!
//! let grid = Grid::from_lines([".S.", ".^.", "..."]).unwrap();
//! assert_eq!(count_timelines(&grid).unwrap(), 2);
//! assert_eq!(
//!     count_timelines_with(&grid, Strategy::Sparse).unwrap(),
//!     2
//! );
//! ```

// Core modules
mod dense;
mod divisions;
mod error;
mod sparse;
mod strategy;
mod table;

pub mod harness;

// Re-exports
pub use divisions::count_divisions;
pub use error::CountError;
pub use strategy::{count_timelines, count_timelines_with, ParseStrategyError, Strategy};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
