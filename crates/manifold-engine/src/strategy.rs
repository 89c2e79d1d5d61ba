//! Strategy selection for the counting sweep
//!
//! Two interchangeable sweeps over the same semantics: the dense table
//! (reference) and the sparse frontier. Totals and failures are identical
//! by construction; the harness cross-checks that on random grids.

use crate::error::CountError;
use crate::{dense, sparse};
use manifold_grid::Grid;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Counting strategy selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Dense table sweep over the full grid extent; the reference.
    #[default]
    Dense,
    /// Rolling sparse frontier; work proportional to active columns.
    Sparse,
}

impl Strategy {
    /// Stable lowercase name, as accepted on the command line
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Dense => "dense",
            Strategy::Sparse => "sparse",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error from parsing a strategy name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}', expected 'dense' or 'sparse'")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("dense") {
            Ok(Strategy::Dense)
        } else if s.eq_ignore_ascii_case("sparse") {
            Ok(Strategy::Sparse)
        } else {
            Err(ParseStrategyError(s.to_string()))
        }
    }
}

/// Count timelines from the start marker to the final row with the default
/// (dense) strategy.
///
/// # Errors
/// [`CountError::Grid`] when the grid has no start marker;
/// [`CountError::Overflow`] when an accumulator exceeds `u64::MAX`.
#[inline]
pub fn count_timelines(grid: &Grid) -> Result<u64, CountError> {
    count_timelines_with(grid, Strategy::default())
}

/// Count timelines with an explicit strategy.
///
/// # Errors
/// Same conditions as [`count_timelines`].
pub fn count_timelines_with(grid: &Grid, strategy: Strategy) -> Result<u64, CountError> {
    match strategy {
        Strategy::Dense => dense::count(grid),
        Strategy::Sparse => sparse::count(grid),
    }
}
