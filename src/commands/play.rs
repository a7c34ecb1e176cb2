//! Autoplay command
//!
//! Plays one full game: generates a minefield, then repeatedly asks the
//! engine for a move, probes the field, and feeds the clue back until the
//! game is won, a mine explodes, or no move remains.

use crate::core::{Cell, Grid};
use crate::game::Minefield;
use crate::solver::{InferenceEngine, random_move, safe_move};
use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Configuration for a single game
pub struct PlayConfig {
    pub height: usize,
    pub width: usize,
    pub mines: usize,
    /// Fixed seed for reproducible games; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Hard cap on moves, guarding against driver bugs
    pub max_moves: usize,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(height: usize, width: usize, mines: usize) -> Self {
        Self {
            height,
            width,
            mines,
            seed: None,
            max_moves: height * width,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Every mine was identified by deduction
    Won,
    /// A probe hit a mine
    Exploded(Cell),
    /// No eligible move remained and the mines were not all identified
    Stuck,
}

/// Whether a move was deduced or guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Deduced,
    Random,
}

/// One probe taken during a game
#[derive(Debug, Clone, Copy)]
pub struct MoveRecord {
    pub cell: Cell,
    pub kind: MoveKind,
    /// The oracle's clue for this probe; `None` if the probe exploded
    pub clue: Option<i32>,
}

/// Result of one full game
pub struct PlayOutcome {
    pub status: GameStatus,
    pub moves: Vec<MoveRecord>,
    pub seed: u64,
    /// Final engine state, for rendering the solver's view of the board
    pub engine: InferenceEngine,
    /// True mine locations, for rendering after the game
    pub field: Minefield,
}

impl PlayOutcome {
    /// Number of moves that were deduced rather than guessed
    #[must_use]
    pub fn deduced_moves(&self) -> usize {
        self.moves
            .iter()
            .filter(|m| m.kind == MoveKind::Deduced)
            .count()
    }

    /// Number of moves that fell back to a random guess
    #[must_use]
    pub fn random_moves(&self) -> usize {
        self.moves.len() - self.deduced_moves()
    }
}

/// Play one game to completion
///
/// # Errors
///
/// Returns an error if the board dimensions or mine count are invalid, or
/// if the engine reports a contract violation (which would indicate a bug
/// in this driver, since it probes the real field).
pub fn play_game(config: &PlayConfig) -> Result<PlayOutcome> {
    let grid = Grid::new(config.height, config.width)?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = SmallRng::seed_from_u64(seed);

    let field = Minefield::generate(grid, config.mines, &mut rng)?;
    let mut engine = InferenceEngine::new(grid);
    let mut moves: Vec<MoveRecord> = Vec::new();

    let status = loop {
        if field.is_won(engine.knowledge().mines()) {
            break GameStatus::Won;
        }
        if moves.len() >= config.max_moves {
            break GameStatus::Stuck;
        }

        // Prefer a deduced-safe cell; guess uniformly otherwise.
        let (cell, kind) = if let Some(cell) = safe_move(&engine) {
            (cell, MoveKind::Deduced)
        } else if let Some(cell) = random_move(&engine, &mut rng) {
            (cell, MoveKind::Random)
        } else {
            break GameStatus::Stuck;
        };

        if field.is_mine(cell) {
            moves.push(MoveRecord {
                cell,
                kind,
                clue: None,
            });
            break GameStatus::Exploded(cell);
        }

        let clue = field.adjacent_mines(cell);
        engine.add_knowledge(cell, clue)?;
        moves.push(MoveRecord {
            cell,
            kind,
            clue: Some(clue),
        });
    };

    Ok(PlayOutcome {
        status,
        moves,
        seed,
        engine,
        field,
    })
}
