//! Core domain types
//!
//! This module contains the fundamental domain types: the board coordinate,
//! the board geometry, and the logical sentence the inference engine
//! reasons with. All types here are pure and have clear mathematical
//! properties.

mod cell;
mod grid;
mod sentence;

pub use cell::Cell;
pub use grid::{Grid, GridError};
pub use sentence::Sentence;
