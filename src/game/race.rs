//! Round coordination.

use log::info;
use smallvec::SmallVec;

use super::result::{GameResult, RoundSummary};
use crate::board::Board;
use crate::core::{
    validate_player_count, DicePair, GameRngState, Player, PlayerId, RaceConfig, SpaceRaceError,
    TokenColour, INITIAL_FUEL_AMOUNT, MAX_PLAYERS, PLAYER_NAMES,
};

/// A race on a shared board.
///
/// Owns the roster and the dice; borrows the board. Players take turns in
/// roster order, and only `set_up_players` / `reset_players` change who is
/// in the roster.
#[derive(Clone, Debug)]
pub struct Game<'b> {
    board: &'b Board,
    players: SmallVec<[Player; MAX_PLAYERS]>,
    dice: DicePair,
    initial_fuel: u32,
    round: u32,
}

impl<'b> Game<'b> {
    /// Create a game with an empty roster and dice seeded from `seed`.
    #[must_use]
    pub fn new(board: &'b Board, seed: u64) -> Self {
        Self {
            board,
            players: SmallVec::new(),
            dice: DicePair::new(seed),
            initial_fuel: INITIAL_FUEL_AMOUNT,
            round: 0,
        }
    }

    /// Create a game from a configuration, with the roster already set up.
    pub fn from_config(board: &'b Board, config: &RaceConfig) -> Result<Self, SpaceRaceError> {
        config.validate()?;

        let mut game = Self::new(board, config.seed);
        game.initial_fuel = config.initial_fuel;
        game.try_set_up_players(config.player_count)?;
        Ok(game)
    }

    /// Set up `count` players on Start with full fuel.
    ///
    /// # Panics
    ///
    /// Panics if `count` is outside `MIN_PLAYERS..=MAX_PLAYERS`. Callers are
    /// expected to validate user input first; see `try_set_up_players`.
    pub fn set_up_players(&mut self, count: usize) {
        if let Err(e) = self.try_set_up_players(count) {
            panic!("{e}");
        }
    }

    /// Set up `count` players on Start with full fuel, replacing the roster.
    pub fn try_set_up_players(&mut self, count: usize) -> Result<(), SpaceRaceError> {
        validate_player_count(count)?;

        self.players.clear();
        self.round = 0;

        for (index, (id, name)) in PlayerId::all(count).zip(PLAYER_NAMES).enumerate() {
            self.players.push(Player::new(
                id,
                name,
                TokenColour::for_index(index),
                self.initial_fuel,
            ));
        }

        info!(
            "set up {} players with {} fuel each",
            self.players.len(),
            self.initial_fuel
        );
        Ok(())
    }

    /// Every player in the roster takes one turn, in order.
    pub fn play_one_round(&mut self) -> RoundSummary {
        self.round += 1;

        let turns = self
            .players
            .iter_mut()
            .filter_map(|player| player.play(self.board, &mut self.dice))
            .collect();

        let summary = RoundSummary {
            round: self.round,
            turns,
        };

        match self.result() {
            Some(GameResult::Winners(winners)) => {
                let names: Vec<_> = winners
                    .iter()
                    .filter_map(|&id| self.player(id))
                    .map(Player::name)
                    .collect();
                info!("round {}: {} reached Finish", self.round, names.join(", "));
            }
            Some(GameResult::Stalled) => {
                info!("round {}: every player is out of fuel", self.round);
            }
            None => info!("round {}: {} players moved", self.round, summary.turns.len()),
        }

        summary
    }

    /// Clear the roster.
    pub fn reset_players(&mut self) {
        self.players.clear();
        self.round = 0;
    }

    /// The roster, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn board(&self) -> &'b Board {
        self.board
    }

    /// Rounds played since the roster was set up.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Players on Finish, in turn order.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.has_finished())
            .map(Player::id)
            .collect()
    }

    /// Check if the race is over.
    ///
    /// Returns `None` while anyone can still move and nobody has finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.players.is_empty() {
            return None;
        }

        let winners = self.winners();
        if !winners.is_empty() {
            return Some(GameResult::Winners(winners));
        }

        if self.players.iter().all(Player::is_out_of_fuel) {
            return Some(GameResult::Stalled);
        }

        None
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Checkpoint of both dice streams.
    #[must_use]
    pub fn rng_state(&self) -> [GameRngState; 2] {
        self.dice.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FINISH_SQUARE_NUMBER, START_SQUARE_NUMBER};

    #[test]
    fn test_set_up_players() {
        let board = Board::build();
        let mut game = Game::new(&board, 42);

        game.set_up_players(3);

        let names: Vec<_> = game.players().iter().map(Player::name).collect();
        assert_eq!(names, ["One", "Two", "Three"]);
        for (i, player) in game.players().iter().enumerate() {
            assert_eq!(player.id(), PlayerId::new(i as u8));
            assert_eq!(player.position(), START_SQUARE_NUMBER);
            assert_eq!(player.fuel(), INITIAL_FUEL_AMOUNT);
            assert_eq!(player.colour(), TokenColour::for_index(i));
        }
    }

    #[test]
    fn test_set_up_replaces_roster() {
        let board = Board::build();
        let mut game = Game::new(&board, 42);

        game.set_up_players(6);
        game.play_one_round();
        game.set_up_players(2);

        assert_eq!(game.players().len(), 2);
        assert_eq!(game.round(), 0);
        assert!(game.players().iter().all(|p| p.position() == START_SQUARE_NUMBER));
    }

    #[test]
    #[should_panic(expected = "player count 7 is outside the allowed range 2-6")]
    fn test_set_up_too_many_players() {
        let board = Board::build();
        Game::new(&board, 0).set_up_players(7);
    }

    #[test]
    fn test_try_set_up_rejects_one_player() {
        let board = Board::build();
        let mut game = Game::new(&board, 0);

        assert!(game.try_set_up_players(1).is_err());
        assert!(game.players().is_empty());
    }

    #[test]
    fn test_round_moves_every_player_once() {
        let board = Board::build();
        let mut game = Game::new(&board, 7);
        game.set_up_players(4);

        let summary = game.play_one_round();

        assert_eq!(summary.round, 1);
        assert_eq!(summary.turns.len(), 4);
        let order: Vec<_> = summary.turns.iter().map(|t| t.player).collect();
        assert_eq!(order, PlayerId::all(4).collect::<Vec<_>>());
        for turn in &summary.turns {
            let player = game.player(turn.player).unwrap();
            assert_eq!(player.position(), turn.movement.to);
            assert_eq!(player.fuel(), turn.movement.fuel_after);
        }
    }

    #[test]
    fn test_reset_players() {
        let board = Board::build();
        let mut game = Game::new(&board, 1);
        game.set_up_players(2);
        game.play_one_round();

        game.reset_players();

        assert!(game.players().is_empty());
        assert_eq!(game.round(), 0);
        assert!(game.result().is_none());
    }

    #[test]
    fn test_from_config() {
        let board = Board::build();
        let config = RaceConfig::new().with_players(5).with_initial_fuel(25).with_seed(3);

        let game = Game::from_config(&board, &config).unwrap();

        assert_eq!(game.players().len(), 5);
        assert!(game.players().iter().all(|p| p.fuel() == 25));
    }

    #[test]
    fn test_from_config_invalid() {
        let board = Board::build();
        let config = RaceConfig::new().with_players(0);

        assert!(matches!(
            Game::from_config(&board, &config),
            Err(SpaceRaceError::InvalidPlayerCount { count: 0, .. })
        ));
    }

    #[test]
    fn test_race_reaches_result() {
        let board = Board::build();
        let mut game = Game::new(&board, 2024);
        game.set_up_players(6);

        let mut rounds = 0;
        while !game.is_over() && rounds < 500 {
            game.play_one_round();
            rounds += 1;
        }

        match game.result() {
            Some(GameResult::Winners(winners)) => {
                assert!(!winners.is_empty());
                for id in winners {
                    assert_eq!(game.player(id).unwrap().position(), FINISH_SQUARE_NUMBER);
                }
            }
            Some(GameResult::Stalled) => {
                assert!(game.players().iter().all(Player::is_out_of_fuel));
            }
            None => panic!("race should end once every player stops moving"),
        }
    }

    #[test]
    fn test_stalled_when_no_fuel() {
        let board = Board::build();
        let config = RaceConfig::new().with_players(2).with_initial_fuel(0);
        let mut game = Game::from_config(&board, &config).unwrap();

        assert_eq!(game.result(), Some(GameResult::Stalled));
        let summary = game.play_one_round();
        assert!(summary.turns.is_empty());
    }

    #[test]
    fn test_same_seed_same_race() {
        let board = Board::build();
        let mut game1 = Game::new(&board, 99);
        let mut game2 = Game::new(&board, 99);
        game1.set_up_players(3);
        game2.set_up_players(3);

        for _ in 0..10 {
            assert_eq!(game1.play_one_round(), game2.play_one_round());
        }
        assert_eq!(game1.players(), game2.players());
        assert_eq!(game1.rng_state(), game2.rng_state());
    }
}
