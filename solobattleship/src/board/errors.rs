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
//! Errors used by the `Board` and `BoardSetup`.

use thiserror::Error;

use crate::{board::Coordinate, ships::Ship};

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Part of the ship would lie outside the grid.
    #[error("insufficient space for the ship at the specified position")]
    OutOfBounds,
    /// One or more of the cells was already occupied by another ship.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
    /// A ship with the same name was already placed.
    #[error("a ship with that name was already placed")]
    DuplicateName,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error)]
#[error("could not place ship {ship}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl PlaceError {
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the ship that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }
}

/// Error returned when random placement fails to find room for a ship.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// No free position was found within the retry budget.
    #[error("could not place ship {ship} after {attempts} attempts")]
    Exhausted { ship: Ship, attempts: usize },
    /// The ship can never be placed on this board, regardless of position.
    #[error(transparent)]
    Rejected(#[from] PlaceError),
    /// There were no ships to place, so the board can never be played.
    #[error("no ships to place")]
    NoShips,
}

impl PlacementError {
    /// Get the ship that failed to be placed, if the failure was about a ship.
    pub fn ship(&self) -> Option<&Ship> {
        match self {
            PlacementError::Exhausted { ship, .. } => Some(ship),
            PlacementError::Rejected(err) => Some(err.ship()),
            PlacementError::NoShips => None,
        }
    }
}

/// Error returned when firing at a cell that was already targeted. The board is left
/// unchanged.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("a shot was already fired at {coord}")]
pub struct DuplicateShotError {
    coord: Coordinate,
}

impl DuplicateShotError {
    pub(super) fn new(coord: Coordinate) -> Self {
        Self { coord }
    }

    /// Get the coordinate of the repeated shot.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Error returned when shot input is not of the form `<col>,<row>` with two positive
/// integers.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid shot {input:?}: expected two positive integers separated by a comma")]
pub struct ParseCoordinateError {
    input: String,
}

impl ParseCoordinateError {
    pub(super) fn new<S: Into<String>>(input: S) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Get the text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}
