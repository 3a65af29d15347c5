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
//! Single-player Battleship.
//!
//! A [`Descriptor`] gives the board size and the fleet. [`Board::build`] places the
//! fleet at random without overlap, then a [`Game`] takes shots with [`Game::fire`]
//! until every ship is sunk. The finished game's [`ScoreRecord`] can be appended to a
//! [`ScoreLog`].
//!
//! All coordinates are 1-indexed `(col, row)` pairs with `(1, 1)` at the top left.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use solobattleship::{Board, Descriptor, Game, PlacementOptions};
//!
//! let descriptor: Descriptor = "4 : 4\ncanoe : 2\n".parse().unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//! let board = Board::build(&descriptor, &mut rng, &PlacementOptions::default()).unwrap();
//! let mut game = Game::new("Jean Bart", "1", board);
//! for coord in descriptor.dimensions().iter_coordinates().flatten() {
//!     if game.is_won() {
//!         break;
//!     }
//!     game.fire(coord).unwrap();
//! }
//! assert!(game.is_won());
//! ```

pub mod board;
pub mod descriptor;
pub mod game;
pub mod score;
pub mod ships;

pub use crate::{
    board::{
        Board, BoardSetup, Coordinate, Dimensions, DuplicateShotError, ParseCoordinateError,
        PlacementError, PlacementOptions, ShotOutcome,
    },
    descriptor::{Descriptor, FormatError, LoadError},
    game::{Game, GameStatus, ShotError},
    score::{ScoreLog, ScoreRecord},
    ships::{Orientation, Ship},
};
