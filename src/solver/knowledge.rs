//! The solver's accumulated knowledge
//!
//! Three global cell sets (moves made, proven safes, proven mines) plus an
//! ordered list of sentences. New facts enter only through `mark_safe` and
//! `mark_mine`, which broadcast to every owned sentence; sentences never
//! share cells by reference.

use crate::core::{Cell, Sentence};
use rustc_hash::FxHashSet;

/// Everything the solver currently knows about the board
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    moves_made: FxHashSet<Cell>,
    safes: FxHashSet<Cell>,
    mines: FxHashSet<Cell>,
    sentences: Vec<Sentence>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells already chosen as moves
    #[inline]
    #[must_use]
    pub const fn moves_made(&self) -> &FxHashSet<Cell> {
        &self.moves_made
    }

    /// Cells proven safe
    #[inline]
    #[must_use]
    pub const fn safes(&self) -> &FxHashSet<Cell> {
        &self.safes
    }

    /// Cells proven to be mines
    #[inline]
    #[must_use]
    pub const fn mines(&self) -> &FxHashSet<Cell> {
        &self.mines
    }

    /// The unresolved sentences, in discovery order
    #[inline]
    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Whether a cell has already been resolved either way
    #[must_use]
    pub fn is_resolved(&self, cell: Cell) -> bool {
        self.safes.contains(&cell) || self.mines.contains(&cell)
    }

    /// Record that a cell was chosen as a move
    pub(crate) fn record_move(&mut self, cell: Cell) {
        self.moves_made.insert(cell);
    }

    /// Mark a cell safe and propagate the fact to every sentence
    ///
    /// Idempotent: re-marking an already-safe cell changes nothing.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.safes.insert(cell);
        for sentence in &mut self.sentences {
            sentence.mark_safe(cell);
        }
    }

    /// Mark a cell as a mine and propagate the fact to every sentence
    ///
    /// Idempotent: re-marking an already-known mine changes nothing.
    pub fn mark_mine(&mut self, cell: Cell) {
        self.mines.insert(cell);
        for sentence in &mut self.sentences {
            sentence.mark_mine(cell);
        }
    }

    pub(crate) fn push_sentence(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    pub(crate) fn sentences_mut(&mut self) -> &mut Vec<Sentence> {
        &mut self.sentences
    }
}
