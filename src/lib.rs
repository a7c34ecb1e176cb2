//! Minesweeper AI
//!
//! A knowledge-based Minesweeper player. The solver keeps a set of logical
//! sentences of the form "exactly N of these cells are mines" and derives
//! certain facts from them, probing deduced-safe cells and guessing
//! uniformly only when no deduction is possible.
//!
//! # Quick Start
//!
//! ```rust
//! use minesweeper_ai::core::{Cell, Grid};
//! use minesweeper_ai::solver::{InferenceEngine, safe_move};
//!
//! let mut engine = InferenceEngine::new(Grid::new(8, 8).unwrap());
//!
//! // The oracle revealed (0, 0) with no adjacent mines.
//! engine.add_knowledge(Cell::new(0, 0), 0).unwrap();
//!
//! // All three corner neighbors are now provably safe.
//! assert!(safe_move(&engine).is_some());
//! ```

// Core domain types
pub mod core;

// Knowledge base, inference engine, move selection
pub mod solver;

// Ground-truth minefield the solver plays against
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
