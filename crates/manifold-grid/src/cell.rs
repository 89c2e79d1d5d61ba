//! Cell classification for manifold grids
//!
//! Grids are stored as raw bytes; [`Cell`] is the typed view the engine
//! consumes. Any byte outside the meaningful alphabet is [`Cell::Other`],
//! which terminates propagation.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The byte used to pad rows shorter than the grid's column bound.
///
/// Deliberately distinct from `.`, `^` and `S` so that a path wandering
/// into the ragged fringe of a grid terminates instead of continuing on
/// whatever the source file happened not to contain.
pub const PAD_BYTE: u8 = b' ';

/// A single grid cell, classified from its source byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty space (`.`); a timeline passes straight down through it.
    Empty,
    /// A tachyon splitter (`^`); a timeline forks into both lower diagonals.
    Splitter,
    /// The start marker (`S`).
    Start,
    /// Any other byte, padding included; timelines terminate here.
    Other(u8),
}

impl Cell {
    /// Classify a raw source byte.
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            b'.' => Cell::Empty,
            b'^' => Cell::Splitter,
            b'S' => Cell::Start,
            other => Cell::Other(other),
        }
    }

    /// The byte this cell was classified from.
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Cell::Empty => b'.',
            Cell::Splitter => b'^',
            Cell::Start => b'S',
            Cell::Other(byte) => byte,
        }
    }

    /// True for the splitter cell (`^`).
    #[inline]
    #[must_use]
    pub const fn is_splitter(self) -> bool {
        matches!(self, Cell::Splitter)
    }

    /// True for the start marker (`S`).
    #[inline]
    #[must_use]
    pub const fn is_start(self) -> bool {
        matches!(self, Cell::Start)
    }

    /// True if a timeline entering this cell continues downward in some
    /// direction (straight for [`Cell::Empty`], diagonally for
    /// [`Cell::Splitter`]).
    #[inline]
    #[must_use]
    pub const fn propagates(self) -> bool {
        matches!(self, Cell::Empty | Cell::Splitter)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}
