//! Game state the solver plays against
//!
//! Ground-truth mine placement and the win check. The solver only ever
//! sees this through the probe results the driver relays.

mod board;

pub use board::{BoardError, Minefield};
