//! Dice: a stateless six-sided `Die` and the `DicePair` a game rolls each turn.

use serde::{Deserialize, Serialize};

use super::rng::{GameRng, GameRngState};

/// Number of faces on a standard die.
pub const DIE_FACES: u32 = 6;

/// A die with faces numbered `1..=faces`.
///
/// The die holds no stream of its own: every roll draws from the
/// `GameRng` passed in, so each call is independent of the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    faces: u32,
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}

impl Die {
    /// Create a standard six-sided die.
    #[must_use]
    pub const fn new() -> Self {
        Self { faces: DIE_FACES }
    }

    /// Highest face value.
    #[must_use]
    pub const fn faces(self) -> u32 {
        self.faces
    }

    /// Roll the die, returning a face value uniformly distributed over `1..=faces`.
    pub fn roll(&self, rng: &mut GameRng) -> u32 {
        rng.gen_range_inclusive(1, self.faces)
    }
}

/// The two dice a game rolls for every turn.
///
/// Each die draws from its own stream derived from the game seed, so a
/// whole race is reproducible from that seed.
#[derive(Clone, Debug)]
pub struct DicePair {
    dice: [Die; 2],
    streams: [GameRng; 2],
}

impl DicePair {
    /// Create two standard dice seeded from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let rng = GameRng::new(seed);
        Self {
            dice: [Die::new(), Die::new()],
            streams: [rng.for_context("die-1"), rng.for_context("die-2")],
        }
    }

    /// Roll both dice.
    pub fn roll(&mut self) -> (u32, u32) {
        let first = self.dice[0].roll(&mut self.streams[0]);
        let second = self.dice[1].roll(&mut self.streams[1]);
        (first, second)
    }

    /// Checkpoint both streams.
    #[must_use]
    pub fn state(&self) -> [GameRngState; 2] {
        [self.streams[0].state(), self.streams[1].state()]
    }

    /// Restore a pair from a checkpoint taken with `state`.
    #[must_use]
    pub fn from_state(state: &[GameRngState; 2]) -> Self {
        Self {
            dice: [Die::new(), Die::new()],
            streams: [GameRng::from_state(&state[0]), GameRng::from_state(&state[1])],
        }
    }
}
