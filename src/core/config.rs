//! Race configuration and fixed game constants.
//!
//! The board geometry and roster limits are fixed by the rules of the game.
//! `RaceConfig` carries what a driver may choose per game: how many players,
//! how much fuel they start with, and the seed for the dice.

use serde::{Deserialize, Serialize};

use super::error::SpaceRaceError;

/// Total number of squares on the board, Start and Finish included.
pub const NUMBER_OF_SQUARES: usize = 56;

/// Square every player starts on.
pub const START_SQUARE_NUMBER: usize = 0;

/// Square a player must reach to win.
pub const FINISH_SQUARE_NUMBER: usize = NUMBER_OF_SQUARES - 1;

/// Fewest players a race can have.
pub const MIN_PLAYERS: usize = 2;

/// Most players a race can have.
pub const MAX_PLAYERS: usize = 6;

/// Fuel each player starts a race with.
pub const INITIAL_FUEL_AMOUNT: u32 = 60;

/// Player names, in turn order.
pub const PLAYER_NAMES: [&str; MAX_PLAYERS] = ["One", "Two", "Three", "Four", "Five", "Six"];

/// Check a player count against `MIN_PLAYERS..=MAX_PLAYERS`.
pub fn validate_player_count(count: usize) -> Result<(), SpaceRaceError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(SpaceRaceError::InvalidPlayerCount {
            count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}

/// Per-game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Number of players in the race.
    pub player_count: usize,

    /// Fuel each player starts with.
    pub initial_fuel: u32,

    /// Seed for the dice.
    pub seed: u64,

    /// Round limit for headless runs.
    pub max_rounds: u32,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            initial_fuel: INITIAL_FUEL_AMOUNT,
            seed: 0,
            max_rounds: 1000,
        }
    }
}

impl RaceConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the starting fuel.
    #[must_use]
    pub fn with_initial_fuel(mut self, fuel: u32) -> Self {
        self.initial_fuel = fuel;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Check the configuration before a game is set up.
    pub fn validate(&self) -> Result<(), SpaceRaceError> {
        validate_player_count(self.player_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_constants() {
        assert_eq!(NUMBER_OF_SQUARES, 56);
        assert_eq!(START_SQUARE_NUMBER, 0);
        assert_eq!(FINISH_SQUARE_NUMBER, 55);
    }

    #[test]
    fn test_default_config() {
        let config = RaceConfig::default();

        assert_eq!(config.player_count, 2);
        assert_eq!(config.initial_fuel, INITIAL_FUEL_AMOUNT);
        assert_eq!(config.max_rounds, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = RaceConfig::new()
            .with_players(5)
            .with_initial_fuel(30)
            .with_seed(99)
            .with_max_rounds(10);

        assert_eq!(config.player_count, 5);
        assert_eq!(config.initial_fuel, 30);
        assert_eq!(config.seed, 99);
        assert_eq!(config.max_rounds, 10);
    }

    #[test]
    fn test_player_count_bounds() {
        for count in MIN_PLAYERS..=MAX_PLAYERS {
            assert!(validate_player_count(count).is_ok());
        }

        assert_eq!(
            validate_player_count(1),
            Err(SpaceRaceError::InvalidPlayerCount { count: 1, min: 2, max: 6 })
        );
        assert!(RaceConfig::new().with_players(7).validate().is_err());
        assert!(RaceConfig::new().with_players(0).validate().is_err());
    }

    #[test]
    fn test_invalid_count_message() {
        let err = validate_player_count(9).unwrap_err();
        assert_eq!(err.to_string(), "player count 9 is outside the allowed range 2-6");
    }

    #[test]
    fn test_config_serde() {
        let config = RaceConfig::new().with_players(4).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RaceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
