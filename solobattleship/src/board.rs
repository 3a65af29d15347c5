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
//! Types that make up the game board.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info};

use crate::{
    descriptor::Descriptor,
    ships::{Placement, Ship},
};

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{
        CannotPlaceReason, DuplicateShotError, ParseCoordinateError, PlaceError, PlacementError,
    },
    setup::BoardSetup,
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod setup;

/// Retry budget used by [`PlacementOptions::default`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Tunables for building a board from a [`Descriptor`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlacementOptions {
    /// Maximum number of random positions tried for each ship before giving up. `None`
    /// retries forever, which never terminates if a ship cannot fit.
    pub max_attempts: Option<usize>,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

/// A ship on the board together with its position and remaining health.
#[derive(Debug)]
struct PlacedShip {
    ship: Ship,
    placement: Placement,
    /// Number of cells of this ship not yet hit.
    health: usize,
}

/// Handle to a ship that allows getting information about its status.
#[derive(Debug, Copy, Clone)]
pub struct ShipRef<'a> {
    placed: &'a PlacedShip,
}

impl<'a> ShipRef<'a> {
    /// Get the template of the ship.
    pub fn ship(&self) -> &'a Ship {
        &self.placed.ship
    }

    /// Get the name of the ship.
    pub fn name(&self) -> &'a str {
        self.placed.ship.name()
    }

    /// Number of cells of this ship that have not been hit.
    pub fn health(&self) -> usize {
        self.placed.health
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.placed.health == 0
    }

    /// Get the cells covered by this ship.
    pub fn placement(&self) -> &'a Placement {
        &self.placed.placement
    }
}

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Whether this cell was shot at.
    shot: bool,

    /// Reference to the ship that occupies this cell if any.
    ship: Option<ShipRef<'a>>,
}

impl<'a> CellRef<'a> {
    /// Whether this cell has been shot at previously.
    pub fn shot(&self) -> bool {
        self.shot
    }

    /// The ship that occupies this cell, if any.
    pub fn ship(&self) -> Option<ShipRef<'a>> {
        self.ship
    }
}

/// Result of a shot on the board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the named ship, but did not sink it.
    Hit(String),
    /// The shot hit the named ship and it has no cells left.
    Sunk(String),
}

/// The grid with its ships and the shots fired at it, for a single game.
#[derive(Debug)]
pub struct Board {
    /// Grid of cells occupied by ships, with per-cell shot marks.
    grid: Grid,

    /// All ships, in the order they were placed.
    ships: Vec<PlacedShip>,

    /// Shots that landed outside the grid. They can never hit anything but still count
    /// as fired.
    off_grid_shots: HashSet<Coordinate>,

    /// Number of distinct shots fired.
    shot_count: usize,
}

impl Board {
    /// Build a board from a descriptor, placing every ship at random in descriptor order.
    pub fn build<R: Rng + ?Sized>(
        descriptor: &Descriptor,
        rng: &mut R,
        options: &PlacementOptions,
    ) -> Result<Self, PlacementError> {
        let mut setup = BoardSetup::new(*descriptor.dimensions());
        for ship in descriptor.ships() {
            setup.place_random(rng, ship.clone(), options.max_attempts)?;
        }
        let board = setup.start().map_err(|_| PlacementError::NoShips)?;
        info!(
            width = board.dimensions().width(),
            height = board.dimensions().height(),
            ships = board.ships.len(),
            "built board"
        );
        Ok(board)
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Fire a shot at the given coordinate. Coordinates outside the grid are accepted
    /// and always miss. Each coordinate may be fired at only once; a repeated shot is
    /// rejected and leaves the board unchanged.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, DuplicateShotError> {
        let hit_ship = match self.grid.get_mut(&coord) {
            None => {
                if !self.off_grid_shots.insert(coord) {
                    return Err(DuplicateShotError::new(coord));
                }
                None
            }
            Some(cell) if cell.shot => return Err(DuplicateShotError::new(coord)),
            Some(cell) => {
                cell.shot = true;
                cell.ship
            }
        };
        self.shot_count += 1;

        let outcome = match hit_ship {
            None => ShotOutcome::Miss,
            Some(idx) => {
                let placed = &mut self.ships[idx];
                // Each cell is shot at most once, so health cannot underflow.
                placed.health -= 1;
                let name = placed.ship.name().to_owned();
                if placed.health == 0 {
                    ShotOutcome::Sunk(name)
                } else {
                    ShotOutcome::Hit(name)
                }
            }
        };
        debug!(%coord, ?outcome, "resolved shot");
        Ok(outcome)
    }

    /// Returns true if every ship on the board has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|placed| placed.health == 0)
    }

    /// Snapshot of the remaining health of each ship, in placement order.
    pub fn remaining_health(&self) -> Vec<(&str, usize)> {
        self.ships
            .iter()
            .map(|placed| (placed.ship.name(), placed.health))
            .collect()
    }

    /// Get an iterator over all ships on this board, in placement order.
    pub fn iter_ships(&self) -> impl Iterator<Item = ShipRef> {
        self.ships.iter().map(|placed| ShipRef { placed })
    }

    /// Get the ship with the specified name if it exists.
    pub fn ship(&self, name: &str) -> Option<ShipRef> {
        self.iter_ships().find(|ship| ship.name() == name)
    }

    /// Get a reference to the cell at the given coordinate. Returns None if the
    /// coordinate is out of bounds.
    pub fn get_cell(&self, coord: Coordinate) -> Option<CellRef> {
        self.grid.get(&coord).map(|cell| CellRef {
            shot: cell.shot,
            ship: cell.ship.map(|idx| ShipRef {
                placed: &self.ships[idx],
            }),
        })
    }

    /// Get an iterator over the board. The iterator's item is another iterator that
    /// iterates over a single row, left to right.
    pub fn iter_board<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellRef<'a>>> {
        self.dimensions().iter_coordinates().map(move |row| {
            // Every coordinate produced by the dimensions is in bounds.
            row.filter_map(move |coord| self.get_cell(coord))
        })
    }

    /// Returns true if a shot was already fired at the coordinate.
    pub fn was_fired(&self, coord: Coordinate) -> bool {
        match self.grid.get(&coord) {
            Some(cell) => cell.shot,
            None => self.off_grid_shots.contains(&coord),
        }
    }

    /// Get every coordinate fired at so far, in no particular order.
    pub fn shots_fired(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.dimensions()
            .iter_coordinates()
            .flatten()
            .filter(move |coord| self.grid[coord].shot)
            .chain(self.off_grid_shots.iter().copied())
    }

    /// Number of distinct shots fired, including misses and off-grid shots.
    pub fn shot_count(&self) -> usize {
        self.shot_count
    }

    /// Number of shots that hit a ship.
    pub fn confirmed_hits(&self) -> usize {
        self.grid
            .cells
            .iter()
            .filter(|cell| cell.shot && cell.ship.is_some())
            .count()
    }

    /// Total number of cells occupied by ships.
    pub fn occupied_cells(&self) -> usize {
        self.ships.iter().map(|placed| placed.ship.len()).sum()
    }
}
