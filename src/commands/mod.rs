//! Command implementations

pub mod benchmark;
pub mod play;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{GameStatus, MoveKind, MoveRecord, PlayConfig, PlayOutcome, play_game};
