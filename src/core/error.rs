//! Engine error type.
//!
//! Only configuration and board-table validation can fail. Dice, movement
//! and fuel arithmetic are total.

/// Validation failures reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpaceRaceError {
    #[error("player count {count} is outside the allowed range {min}-{max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("square {0} is the source of more than one special square")]
    DuplicateHoleSource(usize),

    #[error("special square source {0} must lie strictly between start and finish")]
    HoleSourceOutOfRange(usize),

    #[error("special square {square} jumps to {destination}, which is off the board")]
    HoleDestinationOutOfRange { square: usize, destination: usize },

    #[error("special square {square} jumps to {destination} in the wrong direction")]
    WrongHoleDirection { square: usize, destination: usize },

    #[error("special square table is not sorted by source at square {0}")]
    UnsortedHoleTable(usize),
}
