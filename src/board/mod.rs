//! The race track: a fixed line of squares from Start to Finish.
//!
//! A `Board` is built once and never changes. Games borrow it, so any
//! number of games can share one board.

mod layout;
mod square;

pub use layout::{validate_tables, HoleDef, BLACKHOLES, WORMHOLES};
pub use square::{HoleKind, Jump, Square, SquareKind};

use log::debug;
use serde::Serialize;

use crate::core::config::{FINISH_SQUARE_NUMBER, START_SQUARE_NUMBER};
use crate::core::error::SpaceRaceError;

/// Ordered, immutable sequence of squares indexed by square number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::build()
    }
}

impl Board {
    /// Build the standard board from the built-in hole tables.
    ///
    /// # Panics
    ///
    /// Panics if the built-in tables are malformed. That is a data bug,
    /// not something a caller can recover from.
    #[must_use]
    pub fn build() -> Self {
        Self::from_tables(&BLACKHOLES, &WORMHOLES)
            .unwrap_or_else(|e| panic!("built-in board tables are invalid: {e}"))
    }

    /// Build a board from custom hole tables, each sorted by source square.
    pub fn from_tables(blackholes: &[HoleDef], wormholes: &[HoleDef]) -> Result<Self, SpaceRaceError> {
        validate_tables(blackholes, wormholes)?;

        let squares = layout::lay_out(blackholes, wormholes);
        debug!(
            "built board with {} squares ({} blackholes, {} wormholes)",
            squares.len(),
            blackholes.len(),
            wormholes.len()
        );

        Ok(Self { squares })
    }

    /// All squares, in order.
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Get a square by number.
    ///
    /// # Panics
    ///
    /// Panics if `number` is past the Finish square.
    #[must_use]
    pub fn square(&self, number: usize) -> &Square {
        &self.squares[number]
    }

    #[must_use]
    pub fn start_square(&self) -> &Square {
        &self.squares[START_SQUARE_NUMBER]
    }

    #[must_use]
    pub fn finish_square(&self) -> &Square {
        &self.squares[FINISH_SQUARE_NUMBER]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Iterate over the wormhole and blackhole squares.
    pub fn special_squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().filter(|s| s.is_special())
    }
}
