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
//! Implements the setup phase of the board.
use std::collections::HashSet;

use rand::{distributions::Uniform, Rng};
use tracing::{debug, trace, warn};

use crate::{
    board::{
        Board, CannotPlaceReason, Coordinate, Dimensions, Grid, PlaceError, PlacedShip,
        PlacementError,
    },
    ships::{Orientation, Placement, Ship},
};

/// Setup phase for a [`Board`]. Allows placing ships and does not allow shooting.
#[derive(Debug)]
pub struct BoardSetup {
    /// Grid for placement of ships.
    grid: Grid,

    /// Ships placed so far, in placement order.
    ships: Vec<PlacedShip>,
}

impl BoardSetup {
    /// Begin setup by constructing a new empty board with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
        }
    }

    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Tries to finish setup. If at least one ship is placed, returns a [`Board`] ready
    /// for play, otherwise returns self.
    pub fn start(self) -> Result<Board, Self> {
        if !self.ready() {
            Err(self)
        } else {
            Ok(Board {
                grid: self.grid,
                ships: self.ships,
                off_grid_shots: HashSet::new(),
                shot_count: 0,
            })
        }
    }

    /// Returns `true` if at least one ship has been placed.
    pub fn ready(&self) -> bool {
        !self.ships.is_empty()
    }

    /// Returns `true` if a ship with the given name has already been placed.
    pub fn is_placed(&self, name: &str) -> bool {
        self.ships.iter().any(|placed| placed.ship.name() == name)
    }

    /// Get an iterator over the placed ships and the cells they cover.
    pub fn iter_ships(&self) -> impl Iterator<Item = (&Ship, &Placement)> {
        self.ships
            .iter()
            .map(|placed| (&placed.ship, &placed.placement))
    }

    /// Get an iterator over the rows of the grid. Each row iterates the name of the ship
    /// in each cell, if any.
    pub fn iter_board<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Option<&'a str>>> {
        let grid = &self.grid;
        let ships = &self.ships;
        grid.dim.iter_coordinates().map(move |row| {
            row.map(move |coord| grid[coord].ship.map(|idx| ships[idx].ship.name()))
        })
    }

    /// Check if the given placement would be valid, without attempting to actually place
    /// the ship. Returns the cells the ship would cover.
    pub fn check_placement(
        &self,
        ship: &Ship,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<Placement, CannotPlaceReason> {
        if self.is_placed(ship.name()) {
            return Err(CannotPlaceReason::DuplicateName);
        }
        let placement = Placement::project(anchor, orientation, ship.len(), &self.grid.dim)
            .ok_or(CannotPlaceReason::OutOfBounds)?;
        if placement.iter().any(|coord| self.grid[coord].ship.is_some()) {
            return Err(CannotPlaceReason::AlreadyOccupied);
        }
        Ok(placement)
    }

    /// Try to place the ship with its first cell at `anchor`, extending in the given
    /// orientation. On failure the setup is unchanged.
    pub fn place(
        &mut self,
        ship: Ship,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        match self.check_placement(&ship, anchor, orientation) {
            Ok(placement) => {
                self.commit(ship, placement);
                Ok(())
            }
            Err(reason) => Err(PlaceError::new(reason, ship)),
        }
    }

    /// Place the ship at a uniformly random anchor and orientation, resampling both
    /// until the ship fits without overlap. `max_attempts` bounds the number of samples;
    /// `None` retries until a position is found.
    ///
    /// Ships that could never fit (longer than both sides of the board, or longer than
    /// the number of free cells) are rejected without sampling.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship: Ship,
        max_attempts: Option<usize>,
    ) -> Result<(), PlacementError> {
        if self.is_placed(ship.name()) {
            return Err(PlaceError::new(CannotPlaceReason::DuplicateName, ship).into());
        }
        let dim = self.grid.dim;
        if ship.len() > dim.width().max(dim.height()) {
            return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, ship).into());
        }
        let free = self.grid.cells.iter().filter(|cell| cell.ship.is_none()).count();
        if ship.len() > free {
            return Err(PlaceError::new(CannotPlaceReason::AlreadyOccupied, ship).into());
        }

        let cols = Uniform::new_inclusive(1, dim.width());
        let rows = Uniform::new_inclusive(1, dim.height());
        let mut attempts = 0;
        loop {
            if let Some(max) = max_attempts {
                if attempts >= max {
                    warn!(ship = %ship, attempts, "giving up on random placement");
                    return Err(PlacementError::Exhausted { ship, attempts });
                }
            }
            attempts += 1;
            let orientation: Orientation = rng.gen();
            let anchor = Coordinate::new(rng.sample(cols), rng.sample(rows));
            match self.check_placement(&ship, anchor, orientation) {
                Ok(placement) => {
                    debug!(ship = %ship, %anchor, ?orientation, attempts, "placed ship");
                    self.commit(ship, placement);
                    return Ok(());
                }
                Err(reason) => {
                    trace!(ship = %ship, %anchor, ?orientation, %reason, "rejected placement");
                }
            }
        }
    }

    /// Record a placement that was already checked.
    fn commit(&mut self, ship: Ship, placement: Placement) {
        let idx = self.ships.len();
        for coord in placement.iter() {
            self.grid[coord].ship = Some(idx);
        }
        self.ships.push(PlacedShip {
            health: ship.len(),
            ship,
            placement,
        });
    }
}
