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
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::ParseCoordinateError;

/// The coordinates of a cell on the board. Both components are 1-indexed: `(1, 1)` is
/// the top-left cell, columns grow rightward and rows grow downward.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub col: usize,
    /// Vertical position of the cell.
    pub row: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `col` and `row`.
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Get the coordinate `offset` cells away in the given direction, or `None` on
    /// overflow.
    pub(crate) fn step(self, horizontal: bool, offset: usize) -> Option<Self> {
        if horizontal {
            self.col.checked_add(offset).map(|col| Self::new(col, self.row))
        } else {
            self.row.checked_add(offset).map(|row| Self::new(self.col, row))
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse a shot as typed by a player: `<col>,<row>`, two positive decimal integers.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        static SHOT: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^\s*([0-9]+)\s*,\s*([0-9]+)\s*$").unwrap());

        let err = || ParseCoordinateError::new(input);
        let captures = SHOT.captures(input).ok_or_else(err)?;
        // Digits only, so the parse can fail only on overflow.
        let col: usize = captures[1].parse().map_err(|_| err())?;
        let row: usize = captures[2].parse().map_err(|_| err())?;
        if col == 0 || row == 0 {
            return Err(err());
        }
        Ok(Self::new(col, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_col_then_row() {
        assert_eq!("3,7".parse(), Ok(Coordinate::new(3, 7)));
        assert_eq!(" 10 , 2\n".parse(), Ok(Coordinate::new(10, 2)));
    }

    #[test]
    fn rejects_malformed_shots() {
        for input in &["", "3", "3,", ",4", "3;4", "a,b", "-1,2", "1,2,3", "1.5,2"] {
            let err = input.parse::<Coordinate>().unwrap_err();
            assert_eq!(err.input(), *input);
        }
    }

    #[test]
    fn rejects_zero_and_overflow() {
        assert!("0,1".parse::<Coordinate>().is_err());
        assert!("1,0".parse::<Coordinate>().is_err());
        assert!("1,99999999999999999999999999".parse::<Coordinate>().is_err());
    }

    #[test]
    fn display_matches_input_format() {
        let coord = Coordinate::new(4, 9);
        assert_eq!(coord.to_string().parse(), Ok(coord));
    }
}
