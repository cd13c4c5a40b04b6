//! # space-race
//!
//! Simulation engine for Space Race, a dice race along a line of 56 squares.
//!
//! ## Rules
//!
//! - Each turn a player rolls two dice and moves that many squares, burning
//!   the same amount of fuel. Overshooting Finish stops on Finish.
//! - Wormholes throw a landing player forward, blackholes throw them back.
//!   Either way the jump burns extra fuel and never chains.
//! - A player with no fuel stays where they are for the rest of the race.
//! - The race ends when someone reaches Finish, or nobody has fuel left.
//!
//! ## Architecture
//!
//! - **Explicit ownership**: the `Board` is built once and borrowed by each
//!   `Game`; the `Game` owns its players and dice. No global state.
//! - **Deterministic dice**: every roll comes from a seeded ChaCha8 stream,
//!   so a race is reproducible from its seed.
//!
//! ## Modules
//!
//! - `core`: Players, dice, RNG, configuration, errors
//! - `board`: Squares, hole tables, board construction
//! - `game`: Round coordination and race results

pub mod board;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    DicePair, Die, GameRng, GameRngState, Movement, Player, PlayerId, RaceConfig, SpaceRaceError,
    TokenColour, TurnRecord,
};

pub use crate::board::{Board, HoleDef, HoleKind, Jump, Square, SquareKind};

pub use crate::game::{Game, GameResult, RoundSummary};
