//! Board bounds and neighborhood computation
//!
//! A Grid knows nothing about mines; it only answers geometric questions:
//! which cells exist, and which cells are adjacent to a given cell.

use super::Cell;
use rustc_hash::FxHashSet;
use std::fmt;

/// Rectangular board bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
}

/// Error type for invalid board dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Board must have nonzero height and width"),
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Create a grid with the given dimensions
    ///
    /// # Errors
    /// Returns `GridError::Empty` if either dimension is zero.
    pub const fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self { height, width })
    }

    /// Board height in rows
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Board width in columns
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells on the board
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.height * self.width
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a cell lies inside the board bounds
    #[inline]
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.height && cell.col() < self.width
    }

    /// The up-to-8 cells adjacent to `cell`, clipped to board bounds
    ///
    /// Adjacency is Chebyshev distance 1: the cell's row and column
    /// neighbors plus diagonals, excluding the cell itself. Pure and
    /// deterministic.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> FxHashSet<Cell> {
        let mut neighbors = FxHashSet::default();
        let row_end = (cell.row() + 1).min(self.height - 1);
        let col_end = (cell.col() + 1).min(self.width - 1);

        for row in cell.row().saturating_sub(1)..=row_end {
            for col in cell.col().saturating_sub(1)..=col_end {
                if row == cell.row() && col == cell.col() {
                    continue;
                }
                neighbors.insert(Cell::new(row, col));
            }
        }

        neighbors
    }

    /// Iterate over every cell on the board in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (height, width) = (self.height, self.width);
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }
}
