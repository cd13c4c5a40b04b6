//! Headless Space Race runner.
//!
//! Plays one race to completion and prints each player's status after
//! every round, then the finishers and final standings.
//!
//! Usage:
//!   cargo run --bin space-race -- [OPTIONS]
//!
//! Options:
//!   --players N      Number of players, 2-6 (default: 2)
//!   --seed N         Dice seed (default: 0)
//!   --max-rounds N   Stop after this many rounds (default: 1000)
//!
//! Set `RUST_LOG=debug` to see every roll and jump.

use std::env;
use std::process;

use space_race::{Board, Game, GameResult, RaceConfig};

fn print_usage() {
    eprintln!("Usage: space-race [--players N] [--seed N] [--max-rounds N]");
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    match value.map(|v| v.parse()) {
        Some(Ok(parsed)) => parsed,
        _ => {
            eprintln!("invalid {} value", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn parse_args() -> RaceConfig {
    let args: Vec<String> = env::args().collect();
    let mut config = RaceConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--players" => {
                i += 1;
                config.player_count = parse_value("--players", args.get(i));
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value("--seed", args.get(i));
            }
            "--max-rounds" => {
                i += 1;
                config.max_rounds = parse_value("--max-rounds", args.get(i));
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn main() {
    env_logger::init();

    let config = parse_args();
    let board = Board::build();

    let mut game = match Game::from_config(&board, &config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("Welcome to Space Race.\n");

    while !game.is_over() && game.round() < config.max_rounds {
        game.play_one_round();

        println!("Round {}", game.round());
        for player in game.players() {
            if player.is_out_of_fuel() && !player.has_finished() {
                println!("\t{} at square {} has run out of fuel.", player.name(), player.position());
            } else {
                println!(
                    "\t{} on square {} with {} yottawatt of power remaining.",
                    player.name(),
                    player.position(),
                    player.fuel()
                );
            }
        }
    }

    match game.result() {
        Some(GameResult::Winners(winners)) => {
            println!("\nThe following player(s) finished the game\n");
            for id in winners {
                if let Some(player) = game.player(id) {
                    println!("\t{}", player.name());
                }
            }
        }
        Some(GameResult::Stalled) => println!("\nEvery player ran out of fuel before Finish."),
        None => println!("\nNo result after {} rounds.", game.round()),
    }

    println!("\nIndividual players finished with their remaining fuel at the locations specified.");
    for player in game.players() {
        println!(
            "\t{} with {} yottawatt of power at square {}",
            player.name(),
            player.fuel(),
            player.position()
        );
    }
}
