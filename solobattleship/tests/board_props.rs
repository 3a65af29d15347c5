// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use solobattleship::{Board, Coordinate, Descriptor, Orientation, PlacementOptions, ShotOutcome};

const FLEET: &str = "10 : 10
porte-avion : 5
croiseur : 4
contre-torpilleur : 3
sous-marin : 3
torpilleur : 2
";

fn random_board(seed: u64) -> Board {
    let descriptor: Descriptor = FLEET.parse().unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    Board::build(&descriptor, &mut rng, &PlacementOptions::default()).unwrap()
}

fn assert_health_accounting(board: &Board) {
    let health: usize = board.remaining_health().iter().map(|(_, h)| h).sum();
    assert_eq!(health + board.confirmed_hits(), board.occupied_cells());
}

#[test]
fn placement_never_overlaps_or_leaves_the_grid() {
    let descriptor: Descriptor = FLEET.parse().unwrap();
    let dim = *descriptor.dimensions();
    for seed in 0..1000 {
        let board = random_board(seed);
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        for ship in board.iter_ships() {
            let placement = ship.placement();
            order.push(ship.name());
            assert_eq!(placement.len(), ship.ship().len());
            assert_eq!(ship.health(), ship.ship().len());
            for (offset, coord) in placement.iter().enumerate() {
                assert!(dim.contains(coord), "seed {}: {:?} off the grid", seed, coord);
                assert!(seen.insert(*coord), "seed {}: {:?} occupied twice", seed, coord);
                let start = placement.start();
                let expected = match placement.orientation() {
                    Orientation::Horizontal => Coordinate::new(start.col + offset, start.row),
                    Orientation::Vertical => Coordinate::new(start.col, start.row + offset),
                };
                assert_eq!(*coord, expected, "seed {}: run is not contiguous", seed);
                let cell = board.get_cell(*coord).unwrap();
                assert_eq!(cell.ship().map(|s| s.name()), Some(ship.name()));
            }
        }
        assert_eq!(seen.len(), descriptor.total_cells());
        let expected: Vec<_> = descriptor.ships().iter().map(|s| s.name()).collect();
        assert_eq!(order, expected);
    }
}

#[test]
fn same_seed_same_board() {
    let cells = |board: &Board| -> Vec<Option<String>> {
        board
            .iter_board()
            .flatten()
            .map(|cell| cell.ship().map(|s| s.name().to_owned()))
            .collect()
    };
    assert_eq!(cells(&random_board(17)), cells(&random_board(17)));
}

#[test]
fn sinking_one_ship_sinks_only_that_ship() {
    let mut board = random_board(5);
    let cells: Vec<Coordinate> = board.ship("croiseur").unwrap().placement().to_vec();
    let (last, rest) = cells.split_last().unwrap();
    for coord in rest {
        assert_eq!(board.fire(*coord), Ok(ShotOutcome::Hit("croiseur".into())));
    }
    assert_eq!(board.fire(*last), Ok(ShotOutcome::Sunk("croiseur".into())));
    for ship in board.iter_ships() {
        assert_eq!(ship.sunk(), ship.name() == "croiseur");
    }
    // Firing at the sunk ship again is rejected and changes nothing.
    assert!(board.fire(*last).is_err());
    assert!(board.ship("croiseur").unwrap().sunk());
    assert_eq!(board.ship("croiseur").unwrap().health(), 0);
    assert_health_accounting(&board);
}

#[test]
fn all_sunk_only_after_the_last_ship() {
    let mut board = random_board(11);
    let targets: Vec<Coordinate> = board
        .iter_ships()
        .flat_map(|ship| ship.placement().to_vec())
        .collect();
    let (last, rest) = targets.split_last().unwrap();
    for coord in rest {
        board.fire(*coord).unwrap();
        assert!(!board.all_sunk());
    }
    board.fire(*last).unwrap();
    assert!(board.all_sunk());

    // No ship comes back, whatever else is fired.
    let dim = *board.dimensions();
    for coord in dim.iter_coordinates().flatten() {
        let _ = board.fire(coord);
        assert!(board.all_sunk());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn health_accounting_holds(
        seed in any::<u64>(),
        shots in prop::collection::vec((0usize..=12, 0usize..=12), 0..150),
    ) {
        let mut board = random_board(seed);
        let mut fired = HashSet::new();
        for (col, row) in shots {
            let coord = Coordinate::new(col, row);
            let result = board.fire(coord);
            if fired.insert(coord) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(result.is_err());
            }
            let health: usize = board.remaining_health().iter().map(|(_, h)| h).sum();
            prop_assert_eq!(health + board.confirmed_hits(), board.occupied_cells());
        }
        prop_assert_eq!(board.shot_count(), fired.len());
        prop_assert_eq!(board.shots_fired().collect::<HashSet<_>>(), fired);
    }

    #[test]
    fn off_grid_shots_always_miss(
        seed in any::<u64>(),
        col in 11usize..1000,
        row in 0usize..1000,
    ) {
        let mut board = random_board(seed);
        prop_assert_eq!(board.fire(Coordinate::new(col, row)), Ok(ShotOutcome::Miss));
        prop_assert_eq!(board.fire(Coordinate::new(row, 0)), Ok(ShotOutcome::Miss));
        prop_assert_eq!(board.confirmed_hits(), 0);
    }
}
