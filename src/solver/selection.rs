//! Move selection
//!
//! Pure queries over an engine's knowledge: prefer a deduced-safe cell,
//! fall back to a uniform random pick among cells that are neither probed
//! nor known mines. All randomness comes through the injected generator so
//! games are reproducible from a seed.

use crate::core::Cell;
use crate::solver::engine::InferenceEngine;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A cell known to be safe that has not been probed yet
///
/// Returns `None` when no such cell exists. No preference among ties, and
/// no engine state is mutated.
#[must_use]
pub fn safe_move(engine: &InferenceEngine) -> Option<Cell> {
    let kb = engine.knowledge();
    kb.safes().difference(kb.moves_made()).next().copied()
}

/// A uniformly random cell that is neither probed nor a known mine
///
/// Candidates are collected in row-major order before the draw, so the
/// same seed always produces the same move. Returns `None` when the board
/// is exhausted.
pub fn random_move<R: Rng + ?Sized>(engine: &InferenceEngine, rng: &mut R) -> Option<Cell> {
    let kb = engine.knowledge();
    let candidates: Vec<Cell> = engine
        .grid()
        .cells()
        .filter(|cell| !kb.moves_made().contains(cell) && !kb.mines().contains(cell))
        .collect();

    candidates.choose(rng).copied()
}
