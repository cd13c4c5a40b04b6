//! Race coordination.
//!
//! A `Game` owns the roster and dice and borrows a `Board`. A driver sets
//! up the roster, calls `play_one_round` until `result` reports an
//! outcome, and reads player state in between for display.

mod race;
mod result;

pub use race::Game;
pub use result::{GameResult, RoundSummary};
