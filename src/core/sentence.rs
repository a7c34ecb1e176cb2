//! Logical statements about the board
//!
//! A Sentence asserts that exactly `count` of a set of cells are mines.
//! Sentences shrink over time: when a cell's status is proven elsewhere,
//! the cell is removed and the count adjusted, and the resolved cell is
//! recorded in the sentence's ledger of known mines or known safes.

use super::Cell;
use rustc_hash::FxHashSet;
use std::fmt;

/// A constraint stating that exactly `count` of `cells` are mines
///
/// The count is signed so that a contradictory observation shows up as a
/// negative count the engine can detect, rather than an integer underflow.
#[derive(Debug, Clone)]
pub struct Sentence {
    cells: FxHashSet<Cell>,
    count: i32,
    known_mines: FxHashSet<Cell>,
    known_safes: FxHashSet<Cell>,
}

impl Sentence {
    /// Create a sentence over the given cells
    #[must_use]
    pub fn new(cells: FxHashSet<Cell>, count: i32) -> Self {
        Self {
            cells,
            count,
            known_mines: FxHashSet::default(),
            known_safes: FxHashSet::default(),
        }
    }

    /// The cells whose mine status this sentence still constrains
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &FxHashSet<Cell> {
        &self.cells
    }

    /// Number of mines among the remaining cells
    #[inline]
    #[must_use]
    pub const fn count(&self) -> i32 {
        self.count
    }

    /// Cells removed from this sentence because they were proven mines
    #[inline]
    #[must_use]
    pub const fn known_mines(&self) -> &FxHashSet<Cell> {
        &self.known_mines
    }

    /// Cells removed from this sentence because they were proven safe
    #[inline]
    #[must_use]
    pub const fn known_safes(&self) -> &FxHashSet<Cell> {
        &self.known_safes
    }

    /// Record that `cell` is a mine
    ///
    /// If the cell is constrained by this sentence it is removed and the
    /// count decremented. A no-op for any other cell; always total.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count -= 1;
            self.known_mines.insert(cell);
        }
    }

    /// Record that `cell` is safe
    ///
    /// If the cell is constrained by this sentence it is removed; the count
    /// is unchanged. A no-op for any other cell; always total.
    pub fn mark_safe(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.known_safes.insert(cell);
        }
    }

    /// Whether the count can still be satisfied by the remaining cells
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.count >= 0 && (self.count as usize) <= self.cells.len()
    }

    /// Whether every cell has been resolved and nothing remains to infer
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether all remaining cells must be safe (`count == 0`)
    #[must_use]
    pub fn is_all_safe(&self) -> bool {
        self.count == 0 && !self.cells.is_empty()
    }

    /// Whether all remaining cells must be mines (`count == |cells|`)
    ///
    /// This is the general rule: it holds for sets of any size, not just
    /// singletons.
    #[must_use]
    pub fn is_all_mines(&self) -> bool {
        !self.cells.is_empty() && self.count as usize == self.cells.len()
    }

    /// Whether this sentence's cells are wholly contained in `other`'s
    ///
    /// Includes the degenerate case of equal cell sets.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.cells.is_subset(&other.cells)
    }

    /// Remove `other`'s cells from this sentence and subtract its count
    ///
    /// Valid only when `other.is_subset_of(self)`: if set A (count a) lies
    /// wholly inside set B (count b), the mines in B \ A number b - a.
    pub fn subtract(&mut self, other: &Self) {
        for cell in &other.cells {
            self.cells.remove(cell);
        }
        self.count -= other.count;
    }
}

/// Equality compares the constrained cells and the count only; the
/// resolved-cell ledgers are bookkeeping and do not participate.
impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.cells == other.cells
    }
}

impl Eq for Sentence {}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        write!(f, "{{")?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}} = {}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_of(pairs: &[(usize, usize)]) -> FxHashSet<Cell> {
        pairs.iter().map(|&(r, c)| Cell::new(r, c)).collect()
    }

    #[test]
    fn mark_mine_removes_cell_and_decrements() {
        let mut sentence = Sentence::new(cells_of(&[(0, 0), (0, 1), (1, 1)]), 2);
        sentence.mark_mine(Cell::new(0, 1));

        assert_eq!(sentence.count(), 1);
        assert_eq!(sentence.cells().len(), 2);
        assert!(sentence.known_mines().contains(&Cell::new(0, 1)));
        assert!(sentence.known_safes().is_empty());
    }

    #[test]
    fn mark_safe_removes_cell_keeps_count() {
        let mut sentence = Sentence::new(cells_of(&[(0, 0), (0, 1)]), 1);
        sentence.mark_safe(Cell::new(0, 0));

        assert_eq!(sentence.count(), 1);
        assert_eq!(sentence.cells().len(), 1);
        assert!(sentence.known_safes().contains(&Cell::new(0, 0)));
    }

    #[test]
    fn marking_absent_cell_is_a_no_op() {
        let mut sentence = Sentence::new(cells_of(&[(0, 0)]), 1);
        let before = sentence.clone();

        sentence.mark_mine(Cell::new(5, 5));
        sentence.mark_safe(Cell::new(6, 6));

        assert_eq!(sentence, before);
        assert!(sentence.known_mines().is_empty());
        assert!(sentence.known_safes().is_empty());
    }

    #[test]
    fn equality_ignores_resolution_ledgers() {
        let mut left = Sentence::new(cells_of(&[(0, 0), (0, 1), (0, 2)]), 2);
        left.mark_mine(Cell::new(0, 2));
        let right = Sentence::new(cells_of(&[(0, 0), (0, 1)]), 1);

        assert_eq!(left, right);
    }

    #[test]
    fn equality_is_order_independent() {
        let left = Sentence::new(cells_of(&[(0, 0), (1, 1), (2, 2)]), 1);
        let right = Sentence::new(cells_of(&[(2, 2), (0, 0), (1, 1)]), 1);
        assert_eq!(left, right);

        let different_count = Sentence::new(cells_of(&[(0, 0), (1, 1), (2, 2)]), 2);
        assert_ne!(left, different_count);
    }

    #[test]
    fn all_safe_and_all_mines_predicates() {
        let all_safe = Sentence::new(cells_of(&[(0, 0), (0, 1)]), 0);
        assert!(all_safe.is_all_safe());
        assert!(!all_safe.is_all_mines());

        let all_mines = Sentence::new(cells_of(&[(0, 0), (0, 1), (0, 2)]), 3);
        assert!(all_mines.is_all_mines());
        assert!(!all_mines.is_all_safe());

        let singleton_mine = Sentence::new(cells_of(&[(5, 5)]), 1);
        assert!(singleton_mine.is_all_mines());

        let undetermined = Sentence::new(cells_of(&[(0, 0), (0, 1)]), 1);
        assert!(!undetermined.is_all_safe());
        assert!(!undetermined.is_all_mines());
    }

    #[test]
    fn resolved_sentence_is_neither_safe_nor_mined() {
        let resolved = Sentence::new(FxHashSet::default(), 0);
        assert!(resolved.is_resolved());
        assert!(!resolved.is_all_safe());
        assert!(!resolved.is_all_mines());
    }

    #[test]
    fn consistency_bounds() {
        assert!(Sentence::new(cells_of(&[(0, 0), (0, 1)]), 2).is_consistent());
        assert!(Sentence::new(cells_of(&[(0, 0)]), 0).is_consistent());
        assert!(!Sentence::new(cells_of(&[(0, 0)]), 2).is_consistent());
        assert!(!Sentence::new(cells_of(&[(0, 0)]), -1).is_consistent());
    }

    #[test]
    fn subset_subtraction_rule() {
        // A = {a,b,c}:1, B = {a,b,c,d}:2 resolves B to {d}:1.
        let a = Sentence::new(cells_of(&[(0, 1), (0, 2), (0, 3)]), 1);
        let mut b = Sentence::new(cells_of(&[(0, 1), (0, 2), (0, 3), (0, 4)]), 2);
        assert!(a.is_subset_of(&b));

        b.subtract(&a);
        assert_eq!(b, Sentence::new(cells_of(&[(0, 4)]), 1));
    }

    #[test]
    fn subtracting_equal_sets_leaves_empty_sentence() {
        let a = Sentence::new(cells_of(&[(0, 0), (0, 1)]), 1);
        let mut b = a.clone();
        b.subtract(&a);

        assert!(b.is_resolved());
        assert_eq!(b.count(), 0);
    }

    #[test]
    fn display_sorts_cells() {
        let sentence = Sentence::new(cells_of(&[(1, 0), (0, 1)]), 1);
        assert_eq!(format!("{sentence}"), "{(0, 1), (1, 0)} = 1");
    }
}
