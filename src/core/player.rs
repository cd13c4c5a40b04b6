//! Players and per-turn movement resolution.
//!
//! ## PlayerId
//!
//! Type-safe player identifier; also the player's place in turn order.
//!
//! ## Player
//!
//! Name, square, fuel and token colour. A player is only ever changed by
//! its own movement resolution:
//!
//! 1. Move forward by the dice sum, stopping on Finish rather than passing it.
//! 2. Burn fuel equal to the dice sum, never going below zero.
//! 3. If the landed square is a hole, burn its fuel cost and jump once.
//!    The destination's own hole, if any, does not fire.
//!
//! A player with no fuel, or already on Finish, never moves again.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::config::{FINISH_SQUARE_NUMBER, START_SQUARE_NUMBER};
use super::die::DicePair;
use crate::board::{Board, Jump};

/// Player identifier supporting up to 255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a race with `player_count` players.
    ///
    /// ```
    /// use space_race::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Colour of a player's token. Opaque to the engine; for display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenColour {
    Yellow,
    Red,
    Orange,
    White,
    Green,
    DarkViolet,
}

impl TokenColour {
    /// Token colours in turn order.
    pub const ALL: [TokenColour; 6] = [
        TokenColour::Yellow,
        TokenColour::Red,
        TokenColour::Orange,
        TokenColour::White,
        TokenColour::Green,
        TokenColour::DarkViolet,
    ];

    /// Colour for the player at `index` in turn order. Wraps past six.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// What one movement resolution did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Square before moving.
    pub from: usize,
    /// Square reached by the dice, before any jump.
    pub landed: usize,
    /// Square the player ends the turn on.
    pub to: usize,
    pub fuel_before: u32,
    pub fuel_after: u32,
    /// Hole taken from `landed`, if any.
    pub jump: Option<Jump>,
}

/// One player's turn: the dice and the resulting movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub roll: (u32, u32),
    pub movement: Movement,
}

/// A racer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    position: usize,
    fuel: u32,
    colour: TokenColour,
}

impl Player {
    /// Create a player on the Start square with `fuel`.
    pub fn new(id: PlayerId, name: impl Into<String>, colour: TokenColour, fuel: u32) -> Self {
        Self {
            id,
            name: name.into(),
            position: START_SQUARE_NUMBER,
            fuel,
            colour,
        }
    }

    /// Place a player on an arbitrary square. Used to set up positions directly.
    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        assert!(position <= FINISH_SQUARE_NUMBER, "position {position} is off the board");
        self.position = position;
        self
    }

    /// Replace the player's fuel.
    #[must_use]
    pub fn with_fuel(mut self, fuel: u32) -> Self {
        self.fuel = fuel;
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current square number.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Remaining fuel.
    #[must_use]
    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    #[must_use]
    pub fn colour(&self) -> TokenColour {
        self.colour
    }

    /// On the Finish square.
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.position == FINISH_SQUARE_NUMBER
    }

    #[must_use]
    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel == 0
    }

    /// Whether a turn would move this player at all.
    #[must_use]
    pub fn can_move(&self) -> bool {
        !self.is_out_of_fuel() && !self.has_finished()
    }

    /// Take a turn: roll both dice and resolve the move.
    ///
    /// Returns `None` without rolling if the player cannot move.
    pub fn play(&mut self, board: &Board, dice: &mut DicePair) -> Option<TurnRecord> {
        if !self.can_move() {
            return None;
        }

        let roll = dice.roll();
        let movement = self.advance(board, roll.0 + roll.1)?;

        Some(TurnRecord {
            player: self.id,
            roll,
            movement,
        })
    }

    /// Resolve a move of `steps` squares.
    ///
    /// Fuel is charged for the full `steps` even when the move is cut short
    /// at Finish. Returns `None` and changes nothing if the player cannot move.
    pub fn advance(&mut self, board: &Board, steps: u32) -> Option<Movement> {
        if !self.can_move() {
            return None;
        }

        let from = self.position;
        let fuel_before = self.fuel;

        let landed = (from + steps as usize).min(FINISH_SQUARE_NUMBER);
        self.fuel = self.fuel.saturating_sub(steps);
        self.position = landed;

        let jump = if landed == FINISH_SQUARE_NUMBER {
            None
        } else {
            board.square(landed).jump()
        };

        if let Some(jump) = jump {
            self.fuel = self.fuel.saturating_sub(jump.fuel_cost);
            self.position = jump.destination;
            debug!(
                "{} rolled {} to square {}, {} to {} (fuel {} -> {})",
                self.name, steps, landed, jump.kind, jump.destination, fuel_before, self.fuel
            );
        } else {
            debug!(
                "{} rolled {} to square {} (fuel {} -> {})",
                self.name, steps, landed, fuel_before, self.fuel
            );
        }

        if self.fuel == 0 && !self.has_finished() {
            warn!("{} ran out of fuel on square {}", self.name, self.position);
        }

        Some(Movement {
            from,
            landed,
            to: self.position,
            fuel_before,
            fuel_after: self.fuel,
            jump,
        })
    }
}
