//! Board squares.
//!
//! A square is either ordinary or a hole. Holes carry the square the player
//! is thrown to and the fuel the jump burns: wormholes throw forward,
//! blackholes throw backward.

use serde::{Deserialize, Serialize};

/// Which way a hole throws a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoleKind {
    /// Forward jump.
    Wormhole,
    /// Backward jump.
    Blackhole,
}

impl std::fmt::Display for HoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoleKind::Wormhole => write!(f, "wormhole"),
            HoleKind::Blackhole => write!(f, "blackhole"),
        }
    }
}

/// What a square does to a player who lands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareKind {
    /// Nothing happens.
    Ordinary,
    /// Jump forward to `destination`, burning `fuel_cost`.
    Wormhole { destination: usize, fuel_cost: u32 },
    /// Jump backward to `destination`, burning `fuel_cost`.
    Blackhole { destination: usize, fuel_cost: u32 },
}

/// One hole a landing player falls through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub kind: HoleKind,
    pub destination: usize,
    pub fuel_cost: u32,
}

impl SquareKind {
    /// The jump this square triggers, if any.
    #[must_use]
    pub fn jump(self) -> Option<Jump> {
        match self {
            SquareKind::Ordinary => None,
            SquareKind::Wormhole { destination, fuel_cost } => Some(Jump {
                kind: HoleKind::Wormhole,
                destination,
                fuel_cost,
            }),
            SquareKind::Blackhole { destination, fuel_cost } => Some(Jump {
                kind: HoleKind::Blackhole,
                destination,
                fuel_cost,
            }),
        }
    }
}

/// A single cell on the board. Immutable once the board is built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    number: usize,
    name: String,
    kind: SquareKind,
}

impl Square {
    /// Create an ordinary square.
    pub fn ordinary(number: usize, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            kind: SquareKind::Ordinary,
        }
    }

    /// Create a wormhole on `number` leading forward to `destination`.
    pub fn wormhole(number: usize, destination: usize, fuel_cost: u32) -> Self {
        debug_assert!(destination > number, "wormholes must jump forward");
        Self {
            number,
            name: number.to_string(),
            kind: SquareKind::Wormhole { destination, fuel_cost },
        }
    }

    /// Create a blackhole on `number` leading back to `destination`.
    pub fn blackhole(number: usize, destination: usize, fuel_cost: u32) -> Self {
        debug_assert!(destination < number, "blackholes must jump backward");
        Self {
            number,
            name: number.to_string(),
            kind: SquareKind::Blackhole { destination, fuel_cost },
        }
    }

    /// Position of this square on the board.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Display name ("Start", "Finish", or the square number).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> SquareKind {
        self.kind
    }

    /// The jump a player landing here takes, if this is a hole.
    #[must_use]
    pub fn jump(&self) -> Option<Jump> {
        self.kind.jump()
    }

    #[must_use]
    pub fn is_special(&self) -> bool {
        self.kind != SquareKind::Ordinary
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.jump() {
            Some(jump) => write!(
                f,
                "{} ({} to {}, fuel {})",
                self.name, jump.kind, jump.destination, jump.fuel_cost
            ),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinary_square() {
        let square = Square::ordinary(0, "Start");

        assert_eq!(square.number(), 0);
        assert_eq!(square.name(), "Start");
        assert_eq!(square.kind(), SquareKind::Ordinary);
        assert!(square.jump().is_none());
        assert!(!square.is_special());
    }

    #[test]
    fn test_wormhole_square() {
        let square = Square::wormhole(2, 22, 10);

        assert_eq!(square.name(), "2");
        assert!(square.is_special());
        assert_eq!(
            square.jump(),
            Some(Jump { kind: HoleKind::Wormhole, destination: 22, fuel_cost: 10 })
        );
    }

    #[test]
    fn test_blackhole_square() {
        let square = Square::blackhole(52, 41, 11);

        assert_eq!(
            square.kind(),
            SquareKind::Blackhole { destination: 41, fuel_cost: 11 }
        );
        assert_eq!(square.jump().map(|j| j.kind), Some(HoleKind::Blackhole));
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::ordinary(55, "Finish").to_string(), "Finish");
        assert_eq!(
            Square::blackhole(10, 4, 6).to_string(),
            "10 (blackhole to 4, fuel 6)"
        );
    }
}
