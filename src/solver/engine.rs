//! The inference engine
//!
//! Ingests one observation at a time (a revealed cell and its adjacent
//! mine count) and drives the knowledge base to a fixed point using two
//! rules: collapse of fully determined sentences, and subset resolution
//! between pairs of sentences.

use crate::core::{Cell, Grid, Sentence};
use crate::solver::knowledge::KnowledgeBase;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for contract violations against the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// `add_knowledge` was called twice for the same cell
    DuplicateObservation(Cell),
    /// The observed cell lies outside the board
    OutOfBounds(Cell),
    /// A sentence count cannot be reconciled with its remaining cells,
    /// meaning the oracle's counts contradict each other
    InconsistentObservation { cells: usize, count: i32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateObservation(cell) => {
                write!(f, "Cell {cell} was already observed")
            }
            Self::OutOfBounds(cell) => write!(f, "Cell {cell} is outside the board"),
            Self::InconsistentObservation { cells, count } => write!(
                f,
                "Observations are contradictory: a sentence over {cells} cells claims {count} mines"
            ),
        }
    }
}

impl std::error::Error for EngineError {}

/// Plays Minesweeper by deduction
///
/// Owns the board geometry and the knowledge base for one game. Each call
/// to [`add_knowledge`](Self::add_knowledge) runs to completion before
/// returning; the knowledge base is never left mid-inference.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    grid: Grid,
    knowledge: KnowledgeBase,
}

impl InferenceEngine {
    /// Create an engine for a board with the given geometry
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            knowledge: KnowledgeBase::new(),
        }
    }

    /// The board geometry this engine reasons over
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Read-only view of everything the engine knows
    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Ingest one observation: `cell` was revealed and has `count` mines
    /// among its neighbors
    ///
    /// Records the move, marks the revealed cell safe, adds a sentence
    /// over the cell's unresolved neighbors, and then applies collapse and
    /// subset resolution until nothing changes.
    ///
    /// # Errors
    /// - `DuplicateObservation` if `cell` was already observed. The
    ///   knowledge base is unchanged in that case.
    /// - `OutOfBounds` if `cell` is not on the board.
    /// - `InconsistentObservation` if the count contradicts existing
    ///   knowledge. The contradiction is surfaced as soon as it is
    ///   detected rather than deduced around.
    pub fn add_knowledge(&mut self, cell: Cell, count: i32) -> Result<(), EngineError> {
        if !self.grid.contains(cell) {
            return Err(EngineError::OutOfBounds(cell));
        }
        if self.knowledge.moves_made().contains(&cell) {
            return Err(EngineError::DuplicateObservation(cell));
        }

        self.knowledge.record_move(cell);
        self.knowledge.mark_safe(cell);

        // Build the neighbor sentence, discounting cells already resolved
        // so no sentence ever holds a cell in the global safe or mine sets.
        let mut cells = FxHashSet::default();
        let mut remaining = count;
        for neighbor in self.grid.neighbors(cell) {
            if self.knowledge.mines().contains(&neighbor) {
                remaining -= 1;
            } else if !self.knowledge.safes().contains(&neighbor) {
                cells.insert(neighbor);
            }
        }

        let sentence = Sentence::new(cells, remaining);
        if !sentence.is_consistent() {
            return Err(EngineError::InconsistentObservation {
                cells: sentence.cells().len(),
                count: sentence.count(),
            });
        }
        if !sentence.is_resolved() {
            self.knowledge.push_sentence(sentence);
        }

        self.infer_to_fixed_point()
    }

    /// Apply collapse and subset resolution until a full pass changes
    /// nothing
    fn infer_to_fixed_point(&mut self) -> Result<(), EngineError> {
        loop {
            let collapsed = self.collapse_determined()?;
            let resolved = self.resolve_subsets()?;
            if !collapsed && !resolved {
                return Ok(());
            }
        }
    }

    /// Collapse every sentence whose cells are fully determined
    ///
    /// `count == 0` proves all remaining cells safe; `count == |cells|`
    /// proves them all mines (the general rule, any set size). Marking
    /// cells shrinks other sentences, which may expose further collapses,
    /// so this loops until none remain.
    fn collapse_determined(&mut self) -> Result<bool, EngineError> {
        let mut changed = false;

        loop {
            self.validate()?;

            let Some(index) = self
                .knowledge
                .sentences()
                .iter()
                .position(|s| s.is_all_safe() || s.is_all_mines())
            else {
                break;
            };

            let sentence = self.knowledge.sentences_mut().remove(index);
            let all_mines = sentence.is_all_mines();
            for cell in sentence.cells().iter().copied() {
                if all_mines {
                    self.knowledge.mark_mine(cell);
                } else {
                    self.knowledge.mark_safe(cell);
                }
            }
            changed = true;
        }

        // Sentences emptied by propagation carry no further information.
        let before = self.knowledge.sentences().len();
        self.knowledge.sentences_mut().retain(|s| !s.is_resolved());
        changed |= self.knowledge.sentences().len() != before;

        Ok(changed)
    }

    /// One subset-resolution pass over all ordered sentence pairs
    ///
    /// Whenever A's cells are wholly contained in B's, B is replaced by
    /// B \ A with count reduced by A's count. Each ordered pair is
    /// processed at most once per pass; repeated passes happen only
    /// through the enclosing fixed-point loop.
    fn resolve_subsets(&mut self) -> Result<bool, EngineError> {
        let mut changed = false;
        let len = self.knowledge.sentences().len();

        for a in 0..len {
            for b in 0..len {
                if a == b {
                    continue;
                }
                let subset = self.knowledge.sentences()[a].clone();
                if subset.cells().is_empty()
                    || !subset.is_subset_of(&self.knowledge.sentences()[b])
                {
                    continue;
                }

                let target = &mut self.knowledge.sentences_mut()[b];
                target.subtract(&subset);
                if !target.is_consistent() {
                    return Err(EngineError::InconsistentObservation {
                        cells: target.cells().len(),
                        count: target.count(),
                    });
                }
                changed = true;
            }
        }

        Ok(changed)
    }

    /// Check that every sentence can still be satisfied
    fn validate(&self) -> Result<(), EngineError> {
        match self
            .knowledge
            .sentences()
            .iter()
            .find(|s| !s.is_consistent())
        {
            Some(bad) => Err(EngineError::InconsistentObservation {
                cells: bad.cells().len(),
                count: bad.count(),
            }),
            None => Ok(()),
        }
    }
}
