//! Ground truth of a Minesweeper game
//!
//! The Minefield holds the real mine locations. The solver never sees it;
//! the driver probes it one cell at a time and feeds the resulting clues
//! to the engine.

use crate::core::{Cell, Grid};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for invalid minefield parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// At least one cell must stay safe for the game to be playable
    TooManyMines { mines: usize, cells: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyMines { mines, cells } => {
                write!(f, "Cannot place {mines} mines on a board of {cells} cells")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A board with known mine locations
#[derive(Debug, Clone)]
pub struct Minefield {
    grid: Grid,
    mines: FxHashSet<Cell>,
}

impl Minefield {
    /// Place `mine_count` mines uniformly at random on distinct cells
    ///
    /// # Errors
    /// Returns `BoardError::TooManyMines` unless at least one cell is left
    /// unmined.
    pub fn generate<R: Rng + ?Sized>(
        grid: Grid,
        mine_count: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        if mine_count >= grid.len() {
            return Err(BoardError::TooManyMines {
                mines: mine_count,
                cells: grid.len(),
            });
        }

        let all_cells: Vec<Cell> = grid.cells().collect();
        let mines: FxHashSet<Cell> = all_cells
            .choose_multiple(rng, mine_count)
            .copied()
            .collect();

        Ok(Self { grid, mines })
    }

    /// Build a field with explicit mine locations, for tests and replays
    ///
    /// Mines outside the board are ignored.
    #[must_use]
    pub fn with_mines(grid: Grid, mines: impl IntoIterator<Item = Cell>) -> Self {
        let mines = mines
            .into_iter()
            .filter(|&cell| grid.contains(cell))
            .collect();
        Self { grid, mines }
    }

    /// The board geometry
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// The true mine locations
    #[inline]
    #[must_use]
    pub const fn mines(&self) -> &FxHashSet<Cell> {
        &self.mines
    }

    /// Number of mines on the board
    #[inline]
    #[must_use]
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Whether the given cell holds a mine
    #[inline]
    #[must_use]
    pub fn is_mine(&self, cell: Cell) -> bool {
        self.mines.contains(&cell)
    }

    /// Number of mines among the cell's up-to-8 neighbors
    ///
    /// The cell itself is not counted even if mined.
    #[must_use]
    pub fn adjacent_mines(&self, cell: Cell) -> i32 {
        self.grid
            .neighbors(cell)
            .iter()
            .filter(|neighbor| self.mines.contains(neighbor))
            .count() as i32
    }

    /// Whether the flagged set identifies exactly the true mines
    #[must_use]
    pub fn is_won(&self, flagged: &FxHashSet<Cell>) -> bool {
        *flagged == self.mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn grid_8x8() -> Grid {
        Grid::new(8, 8).unwrap()
    }

    #[test]
    fn generate_places_exactly_requested_mines_in_bounds() {
        let grid = grid_8x8();
        let mut rng = SmallRng::seed_from_u64(9);
        let field = Minefield::generate(grid, 8, &mut rng).unwrap();

        assert_eq!(field.mine_count(), 8);
        for mine in field.mines() {
            assert!(grid.contains(*mine));
        }
    }

    #[test]
    fn generate_rejects_full_board() {
        let grid = Grid::new(2, 2).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);

        assert!(matches!(
            Minefield::generate(grid, 4, &mut rng),
            Err(BoardError::TooManyMines { mines: 4, cells: 4 })
        ));
        assert!(Minefield::generate(grid, 3, &mut rng).is_ok());
    }

    #[test]
    fn generate_is_seed_deterministic() {
        let grid = grid_8x8();
        let first =
            Minefield::generate(grid, 10, &mut SmallRng::seed_from_u64(5)).unwrap();
        let second =
            Minefield::generate(grid, 10, &mut SmallRng::seed_from_u64(5)).unwrap();

        assert_eq!(first.mines(), second.mines());
    }

    #[test]
    fn adjacent_mines_counts_neighborhood_only() {
        let grid = grid_8x8();
        let field = Minefield::with_mines(
            grid,
            [Cell::new(2, 2), Cell::new(2, 3), Cell::new(5, 5)],
        );

        assert_eq!(field.adjacent_mines(Cell::new(3, 3)), 2);
        assert_eq!(field.adjacent_mines(Cell::new(1, 1)), 1);
        assert_eq!(field.adjacent_mines(Cell::new(0, 0)), 0);
        // A mined cell does not count itself.
        assert_eq!(field.adjacent_mines(Cell::new(5, 5)), 0);
        assert_eq!(field.adjacent_mines(Cell::new(2, 2)), 1);
    }

    #[test]
    fn is_mine_matches_placement() {
        let field = Minefield::with_mines(grid_8x8(), [Cell::new(4, 4)]);
        assert!(field.is_mine(Cell::new(4, 4)));
        assert!(!field.is_mine(Cell::new(4, 5)));
    }

    #[test]
    fn with_mines_drops_out_of_bounds_cells() {
        let field = Minefield::with_mines(
            Grid::new(4, 4).unwrap(),
            [Cell::new(1, 1), Cell::new(9, 9)],
        );
        assert_eq!(field.mine_count(), 1);
    }

    #[test]
    fn is_won_requires_exact_flag_set() {
        let field =
            Minefield::with_mines(grid_8x8(), [Cell::new(1, 1), Cell::new(2, 2)]);

        let mut flagged = FxHashSet::default();
        assert!(!field.is_won(&flagged));

        flagged.insert(Cell::new(1, 1));
        assert!(!field.is_won(&flagged));

        flagged.insert(Cell::new(2, 2));
        assert!(field.is_won(&flagged));

        flagged.insert(Cell::new(3, 3));
        assert!(!field.is_won(&flagged));
    }
}
