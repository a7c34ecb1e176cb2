//! Board coordinate type
//!
//! A Cell is a (row, column) pair with value identity: two cells with equal
//! coordinates are the same cell.

use std::fmt;

/// A 0-indexed (row, column) board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// Create a new cell at the given row and column
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell's row index
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// The cell's column index
    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
