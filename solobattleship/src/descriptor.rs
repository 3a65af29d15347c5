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
//! Board descriptors: the textual description of a game's dimensions and fleet.
//!
//! A descriptor looks like this:
//!
//! ```text
//! 10 : 8
//! porte-avion : 5
//! croiseur : 4
//! sous-marin : 3
//! ```
//!
//! The first line gives the width and height of the board. Each following line names a
//! ship (letters and hyphens only) and gives its length.
use std::{collections::HashSet, fs, path::Path, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{board::Dimensions, ships::Ship};

pub use self::errors::{FormatError, LoadError};

mod errors;

/// Parsed board descriptor: board dimensions and the ships to place, in order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Descriptor {
    dim: Dimensions,
    ships: Vec<Ship>,
}

impl Descriptor {
    /// Build a descriptor directly. Returns `None` if `ships` is empty or two ships
    /// share a name.
    pub fn try_new(dim: Dimensions, ships: Vec<Ship>) -> Option<Self> {
        let mut names = HashSet::new();
        if ships.is_empty() || !ships.iter().all(|ship| names.insert(ship.name())) {
            return None;
        }
        Some(Self { dim, ships })
    }

    /// Name of the file holding the descriptor for the given game version, for example
    /// `jeu1.txt` for version `1`.
    pub fn file_name(version: &str) -> String {
        format!("jeu{}.txt", version)
    }

    /// Read and parse the descriptor at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        let descriptor = text.parse().map_err(|source| LoadError::Format {
            path: path.to_owned(),
            source,
        })?;
        debug!(path = %path.display(), "loaded descriptor");
        Ok(descriptor)
    }

    /// Get the dimensions of the board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// Get the ships to place, in the order they were listed.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Total number of cells the ships will occupy.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(Ship::len).sum()
    }
}

impl FromStr for Descriptor {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        static DIMENSIONS: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^([0-9]+)\s*:\s*([0-9]+)$").unwrap());
        static SHIP: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^([A-Za-z-]+)\s*:\s*([0-9]+)$").unwrap());

        let mut lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .collect();
        while lines.last().map_or(false, |(_, line)| line.is_empty()) {
            lines.pop();
        }
        let mut lines = lines.into_iter();

        let (line, text) = lines.next().ok_or(FormatError::Empty)?;
        let captures = DIMENSIONS
            .captures(text)
            .ok_or_else(|| FormatError::BadDimensions {
                line,
                text: text.to_owned(),
            })?;
        let width = parse_positive(line, &captures[1])?;
        let height = parse_positive(line, &captures[2])?;
        // Both sides are nonzero here, so only the size limit can fail.
        let dim = Dimensions::try_new(width, height).ok_or(FormatError::TooLarge {
            line,
            width,
            height,
            max: Dimensions::MAX_CELLS,
        })?;

        let mut ships = Vec::new();
        let mut names = HashSet::new();
        for (line, text) in lines {
            let captures = SHIP.captures(text).ok_or_else(|| FormatError::BadShip {
                line,
                text: text.to_owned(),
            })?;
            let name = captures.get(1).map_or("", |m| m.as_str());
            if !names.insert(name) {
                return Err(FormatError::DuplicateShip {
                    line,
                    name: name.to_owned(),
                });
            }
            let len = parse_positive(line, &captures[2])?;
            ships.push(Ship::new(name, len));
        }
        if ships.is_empty() {
            return Err(FormatError::NoShips);
        }
        Ok(Self { dim, ships })
    }
}

/// Parse a run of ascii digits as a nonzero `usize`.
fn parse_positive(line: usize, digits: &str) -> Result<usize, FormatError> {
    match digits.parse() {
        Ok(0) | Err(_) => Err(FormatError::InvalidNumber {
            line,
            text: digits.to_owned(),
        }),
        Ok(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimensions_and_ships_in_order() {
        let descriptor: Descriptor = "10 : 8\nporte-avion : 5\ncroiseur : 4\nsous-marin : 3\n"
            .parse()
            .unwrap();
        assert_eq!(descriptor.dimensions(), &Dimensions::new(10, 8));
        let ships: Vec<_> = descriptor
            .ships()
            .iter()
            .map(|ship| (ship.name(), ship.len()))
            .collect();
        assert_eq!(
            ships,
            vec![("porte-avion", 5), ("croiseur", 4), ("sous-marin", 3)]
        );
        assert_eq!(descriptor.total_cells(), 12);
    }

    #[test]
    fn tolerates_spacing_and_line_endings() {
        let descriptor: Descriptor = "5:1\r\n  Canoe:3  \r\n\r\n\n".parse().unwrap();
        assert_eq!(descriptor.dimensions(), &Dimensions::new(5, 1));
        assert_eq!(descriptor.ships(), &[Ship::new("Canoe", 3)][..]);
    }

    #[test]
    fn rejects_missing_pieces() {
        assert_eq!("".parse::<Descriptor>(), Err(FormatError::Empty));
        assert_eq!("\n\n".parse::<Descriptor>(), Err(FormatError::Empty));
        assert_eq!("5 : 5\n".parse::<Descriptor>(), Err(FormatError::NoShips));
        assert_eq!(
            "Canoe : 3\n".parse::<Descriptor>(),
            Err(FormatError::BadDimensions {
                line: 1,
                text: "Canoe : 3".into()
            })
        );
    }

    #[test]
    fn rejects_bad_ship_lines() {
        assert_eq!(
            "5 : 5\nCanoe : 3\n\nRaft : 2".parse::<Descriptor>(),
            Err(FormatError::BadShip {
                line: 3,
                text: "".into()
            })
        );
        assert_eq!(
            "5 : 5\nCanoe2 : 3".parse::<Descriptor>(),
            Err(FormatError::BadShip {
                line: 2,
                text: "Canoe2 : 3".into()
            })
        );
        assert_eq!(
            "5 : 5\nCanoe : three".parse::<Descriptor>(),
            Err(FormatError::BadShip {
                line: 2,
                text: "Canoe : three".into()
            })
        );
        assert_eq!(
            "5 : 5\nsous marin : 3".parse::<Descriptor>(),
            Err(FormatError::BadShip {
                line: 2,
                text: "sous marin : 3".into()
            })
        );
    }

    #[test]
    fn rejects_zero_and_overflowing_numbers() {
        assert_eq!(
            "0 : 5\nCanoe : 3".parse::<Descriptor>(),
            Err(FormatError::InvalidNumber {
                line: 1,
                text: "0".into()
            })
        );
        assert_eq!(
            "5 : 5\nCanoe : 0".parse::<Descriptor>(),
            Err(FormatError::InvalidNumber {
                line: 2,
                text: "0".into()
            })
        );
        assert!(matches!(
            "5 : 5\nCanoe : 99999999999999999999999".parse::<Descriptor>(),
            Err(FormatError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn rejects_oversized_boards() {
        assert_eq!(
            "1000000 : 1000000\nCanoe : 3\n".parse::<Descriptor>(),
            Err(FormatError::TooLarge {
                line: 1,
                width: 1_000_000,
                height: 1_000_000,
                max: Dimensions::MAX_CELLS,
            })
        );
        assert!(matches!(
            "18446744073709551615 : 2\nCanoe : 3".parse::<Descriptor>(),
            Err(FormatError::TooLarge { line: 1, .. })
        ));
        let descriptor: Descriptor = "1024 : 1024\nCanoe : 3\n".parse().unwrap();
        assert_eq!(descriptor.dimensions().total_size(), Dimensions::MAX_CELLS);
    }

    #[test]
    fn rejects_duplicate_names() {
        assert_eq!(
            "5 : 5\nCanoe : 3\nCanoe : 2".parse::<Descriptor>(),
            Err(FormatError::DuplicateShip {
                line: 3,
                name: "Canoe".into()
            })
        );
    }

    #[test]
    fn does_not_check_that_ships_fit() {
        let descriptor: Descriptor = "2 : 2\nLong : 9".parse().unwrap();
        assert_eq!(descriptor.total_cells(), 9);
    }

    #[test]
    fn try_new_rejects_empty_and_duplicate_fleets() {
        let dim = Dimensions::new(3, 3);
        assert!(Descriptor::try_new(dim, vec![]).is_none());
        assert!(Descriptor::try_new(dim, vec![Ship::new("A", 1), Ship::new("A", 2)]).is_none());
        assert!(Descriptor::try_new(dim, vec![Ship::new("A", 1)]).is_some());
    }

    #[test]
    fn empty_fleet_builds_no_board() {
        use rand::{rngs::StdRng, SeedableRng};

        use crate::board::{Board, PlacementError, PlacementOptions};

        // Only reachable from inside the crate: both constructors refuse an empty fleet.
        let descriptor = Descriptor {
            dim: Dimensions::new(3, 3),
            ships: Vec::new(),
        };
        let mut rng = StdRng::seed_from_u64(0);
        match Board::build(&descriptor, &mut rng, &PlacementOptions::default()) {
            Err(err @ PlacementError::NoShips) => assert!(err.ship().is_none()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn file_name_follows_version() {
        assert_eq!(Descriptor::file_name("1"), "jeu1.txt");
        assert_eq!(Descriptor::file_name("12"), "jeu12.txt");
    }
}
