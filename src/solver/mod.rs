//! The inference machinery
//!
//! This module contains the knowledge base, the engine that drives it to a
//! fixed point, and the move selectors that consult it.

mod engine;
pub mod knowledge;
pub mod selection;

pub use engine::{EngineError, InferenceEngine};
pub use knowledge::KnowledgeBase;
pub use selection::{random_move, safe_move};
