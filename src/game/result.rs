//! Race outcomes.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, TurnRecord};

/// Result of a completed race.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Everyone who reached Finish, in turn order. Several players can
    /// finish in the same round.
    Winners(Vec<PlayerId>),
    /// Nobody finished and nobody has fuel left.
    Stalled,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Stalled => false,
        }
    }
}

/// Everything that happened in one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number, starting at 1.
    pub round: u32,
    /// Turns taken, in turn order. Players who could not move are absent.
    pub turns: Vec<TurnRecord>,
}

impl RoundSummary {
    /// Turn taken by `player` this round, if they moved.
    #[must_use]
    pub fn turn_for(&self, player: PlayerId) -> Option<&TurnRecord> {
        self.turns.iter().find(|t| t.player == player)
    }
}
