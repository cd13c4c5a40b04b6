//! Core engine types: players, dice, RNG, configuration, errors.
//!
//! Everything here is independent of the board layout except player
//! movement, which reads squares from a borrowed `Board`.

pub mod config;
pub mod die;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    validate_player_count, RaceConfig, FINISH_SQUARE_NUMBER, INITIAL_FUEL_AMOUNT, MAX_PLAYERS,
    MIN_PLAYERS, NUMBER_OF_SQUARES, PLAYER_NAMES, START_SQUARE_NUMBER,
};
pub use die::{DicePair, Die, DIE_FACES};
pub use error::SpaceRaceError;
pub use player::{Movement, Player, PlayerId, TokenColour, TurnRecord};
pub use rng::{GameRng, GameRngState};
