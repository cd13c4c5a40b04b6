//! Board construction from hole tables.
//!
//! The board is laid out by walking squares `1..FINISH` in order with one
//! cursor into each hole table. At each square the next unconsumed
//! blackhole is tested first, then the next unconsumed wormhole; anything
//! else is ordinary. Start and Finish are placed outside the walk.
//!
//! Tables must be sorted by source square for the cursor walk to see every
//! entry. `Board::from_tables` checks that along with the rest of the table
//! invariants before anything is built.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::core::config::{FINISH_SQUARE_NUMBER, NUMBER_OF_SQUARES, START_SQUARE_NUMBER};
use crate::core::error::SpaceRaceError;

/// A hole definition: (source square, destination square, fuel cost).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoleDef {
    pub source: usize,
    pub destination: usize,
    pub fuel_cost: u32,
}

impl HoleDef {
    pub const fn new(source: usize, destination: usize, fuel_cost: u32) -> Self {
        Self {
            source,
            destination,
            fuel_cost,
        }
    }
}

/// The eight wormholes, sorted by source.
///
/// `(2, 22, 10)` is a wormhole on square 2 jumping to square 22 for 10 fuel.
pub const WORMHOLES: [HoleDef; 8] = [
    HoleDef::new(2, 22, 10),
    HoleDef::new(3, 9, 3),
    HoleDef::new(5, 17, 6),
    HoleDef::new(12, 24, 6),
    HoleDef::new(16, 47, 15),
    HoleDef::new(29, 38, 4),
    HoleDef::new(40, 51, 5),
    HoleDef::new(45, 54, 4),
];

/// The eight blackholes, sorted by source.
///
/// `(10, 4, 6)` is a blackhole on square 10 dropping back to square 4 for 6 fuel.
pub const BLACKHOLES: [HoleDef; 8] = [
    HoleDef::new(10, 4, 6),
    HoleDef::new(26, 8, 18),
    HoleDef::new(30, 19, 11),
    HoleDef::new(35, 11, 24),
    HoleDef::new(36, 34, 2),
    HoleDef::new(49, 13, 36),
    HoleDef::new(52, 41, 11),
    HoleDef::new(53, 42, 11),
];

/// Check one table. `forward` is true for wormholes.
fn validate_table(
    table: &[HoleDef],
    forward: bool,
    seen: &mut FxHashSet<usize>,
) -> Result<(), SpaceRaceError> {
    let mut previous: Option<usize> = None;

    for def in table {
        if def.source == START_SQUARE_NUMBER || def.source >= FINISH_SQUARE_NUMBER {
            return Err(SpaceRaceError::HoleSourceOutOfRange(def.source));
        }
        if def.destination >= NUMBER_OF_SQUARES {
            return Err(SpaceRaceError::HoleDestinationOutOfRange {
                square: def.source,
                destination: def.destination,
            });
        }

        let right_way = if forward {
            def.destination > def.source
        } else {
            def.destination < def.source
        };
        if !right_way {
            return Err(SpaceRaceError::WrongHoleDirection {
                square: def.source,
                destination: def.destination,
            });
        }

        if !seen.insert(def.source) {
            return Err(SpaceRaceError::DuplicateHoleSource(def.source));
        }
        if previous.is_some_and(|p| def.source < p) {
            return Err(SpaceRaceError::UnsortedHoleTable(def.source));
        }
        previous = Some(def.source);
    }

    Ok(())
}

/// Validate both tables together. Sources must be unique across them.
pub fn validate_tables(blackholes: &[HoleDef], wormholes: &[HoleDef]) -> Result<(), SpaceRaceError> {
    let mut seen = FxHashSet::default();
    validate_table(blackholes, false, &mut seen)?;
    validate_table(wormholes, true, &mut seen)?;
    Ok(())
}

/// Lay out the squares. Tables must already be validated.
pub(crate) fn lay_out(blackholes: &[HoleDef], wormholes: &[HoleDef]) -> Vec<Square> {
    let mut squares = Vec::with_capacity(NUMBER_OF_SQUARES);
    squares.push(Square::ordinary(START_SQUARE_NUMBER, "Start"));

    let mut black_cursor = 0;
    let mut worm_cursor = 0;

    for position in START_SQUARE_NUMBER + 1..FINISH_SQUARE_NUMBER {
        let square = match (blackholes.get(black_cursor), wormholes.get(worm_cursor)) {
            (Some(def), _) if def.source == position => {
                black_cursor += 1;
                Square::blackhole(position, def.destination, def.fuel_cost)
            }
            (_, Some(def)) if def.source == position => {
                worm_cursor += 1;
                Square::wormhole(position, def.destination, def.fuel_cost)
            }
            _ => Square::ordinary(position, position.to_string()),
        };
        squares.push(square);
    }

    squares.push(Square::ordinary(FINISH_SQUARE_NUMBER, "Finish"));

    assert_eq!(black_cursor, blackholes.len(), "blackhole definitions left unplaced");
    assert_eq!(worm_cursor, wormholes.len(), "wormhole definitions left unplaced");

    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_validate() {
        assert_eq!(validate_tables(&BLACKHOLES, &WORMHOLES), Ok(()));
    }

    #[test]
    fn test_duplicate_source_across_tables() {
        let black = [HoleDef::new(10, 4, 6)];
        let worm = [HoleDef::new(10, 20, 3)];

        assert_eq!(
            validate_tables(&black, &worm),
            Err(SpaceRaceError::DuplicateHoleSource(10))
        );
    }

    #[test]
    fn test_source_on_start_or_finish() {
        assert_eq!(
            validate_tables(&[], &[HoleDef::new(0, 5, 1)]),
            Err(SpaceRaceError::HoleSourceOutOfRange(0))
        );
        assert_eq!(
            validate_tables(&[HoleDef::new(55, 5, 1)], &[]),
            Err(SpaceRaceError::HoleSourceOutOfRange(55))
        );
    }

    #[test]
    fn test_wrong_direction() {
        assert_eq!(
            validate_tables(&[], &[HoleDef::new(20, 10, 1)]),
            Err(SpaceRaceError::WrongHoleDirection { square: 20, destination: 10 })
        );
        assert_eq!(
            validate_tables(&[HoleDef::new(20, 30, 1)], &[]),
            Err(SpaceRaceError::WrongHoleDirection { square: 20, destination: 30 })
        );
    }

    #[test]
    fn test_destination_off_board() {
        assert_eq!(
            validate_tables(&[], &[HoleDef::new(20, 60, 1)]),
            Err(SpaceRaceError::HoleDestinationOutOfRange { square: 20, destination: 60 })
        );
    }

    #[test]
    fn test_unsorted_table() {
        let worm = [HoleDef::new(12, 24, 6), HoleDef::new(3, 9, 3)];
        assert_eq!(
            validate_tables(&[], &worm),
            Err(SpaceRaceError::UnsortedHoleTable(3))
        );
    }

    #[test]
    fn test_lay_out_places_every_hole() {
        let squares = lay_out(&BLACKHOLES, &WORMHOLES);

        assert_eq!(squares.len(), NUMBER_OF_SQUARES);
        for def in WORMHOLES.iter().chain(BLACKHOLES.iter()) {
            let jump = squares[def.source].jump().unwrap();
            assert_eq!(jump.destination, def.destination);
            assert_eq!(jump.fuel_cost, def.fuel_cost);
        }
        assert_eq!(squares.iter().filter(|s| s.is_special()).count(), 16);
    }

    #[test]
    fn test_lay_out_empty_tables() {
        let squares = lay_out(&[], &[]);

        assert_eq!(squares.len(), NUMBER_OF_SQUARES);
        assert!(squares.iter().all(|s| !s.is_special()));
        assert_eq!(squares[17].name(), "17");
    }
}
