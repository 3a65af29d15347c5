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
use std::ops::Deref;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{Coordinate, Dimensions};

/// Placement orientation of a ship. Ships always extend from their anchor toward
/// increasing coordinates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship extends rightward from its anchor along a row.
    Horizontal,
    /// The ship extends downward from its anchor along a column.
    Vertical,
}

impl Distribution<Orientation> for Standard {
    /// Pick either orientation with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// The cells covered by a ship: a contiguous horizontal or vertical run starting at the
/// anchor. Only constructed through [`Placement::project`], so it always has at least one
/// cell and every cell is in bounds for the dimensions it was projected onto.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Placement {
    orientation: Orientation,
    cells: Vec<Coordinate>,
}

impl Placement {
    /// Project a run of `len` cells from `anchor` in the given orientation. Returns `None`
    /// if any cell of the run would fall outside `dim`, or if `len` is 0.
    pub fn project(
        anchor: Coordinate,
        orientation: Orientation,
        len: usize,
        dim: &Dimensions,
    ) -> Option<Self> {
        if len == 0 || !dim.contains(anchor) {
            return None;
        }
        let horizontal = orientation == Orientation::Horizontal;
        // Only the far end needs checking, the run is monotone from the anchor.
        let end = anchor.step(horizontal, len - 1)?;
        if !dim.contains(end) {
            return None;
        }
        let cells = (0..len)
            .map(|offset| anchor.step(horizontal, offset))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { orientation, cells })
    }

    /// Get the direction this placement runs in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get the coordinate where this placement starts.
    pub fn start(&self) -> &Coordinate {
        // Never empty, see `project`.
        &self.cells[0]
    }
}

impl Deref for Placement {
    type Target = [Coordinate];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn horizontal_runs_rightward() {
        let dim = Dimensions::new(5, 1);
        let placement =
            Placement::project(Coordinate::new(2, 1), Orientation::Horizontal, 3, &dim).unwrap();
        assert_eq!(
            &placement[..],
            &[
                Coordinate::new(2, 1),
                Coordinate::new(3, 1),
                Coordinate::new(4, 1)
            ]
        );
        assert_eq!(placement.start(), &Coordinate::new(2, 1));
        assert_eq!(placement.orientation(), Orientation::Horizontal);
    }

    #[test]
    fn vertical_runs_downward() {
        let dim = Dimensions::new(3, 4);
        let placement =
            Placement::project(Coordinate::new(3, 2), Orientation::Vertical, 3, &dim).unwrap();
        assert_eq!(
            &placement[..],
            &[
                Coordinate::new(3, 2),
                Coordinate::new(3, 3),
                Coordinate::new(3, 4)
            ]
        );
    }

    #[test]
    fn runs_past_the_edge_are_rejected() {
        let dim = Dimensions::new(5, 5);
        assert!(Placement::project(Coordinate::new(4, 1), Orientation::Horizontal, 3, &dim).is_none());
        assert!(Placement::project(Coordinate::new(1, 4), Orientation::Vertical, 3, &dim).is_none());
        assert!(Placement::project(Coordinate::new(0, 1), Orientation::Horizontal, 1, &dim).is_none());
        assert!(Placement::project(Coordinate::new(6, 1), Orientation::Vertical, 1, &dim).is_none());
        assert!(Placement::project(Coordinate::new(1, 1), Orientation::Vertical, 0, &dim).is_none());
    }

    #[test]
    fn single_cell_fits_either_way() {
        let dim = Dimensions::new(1, 1);
        for &orientation in &[Orientation::Horizontal, Orientation::Vertical] {
            let placement = Placement::project(Coordinate::new(1, 1), orientation, 1, &dim).unwrap();
            assert_eq!(placement.len(), 1);
        }
    }

    #[test]
    fn both_orientations_are_sampled() {
        let mut rng = StdRng::seed_from_u64(7);
        let horizontal = (0..1000)
            .filter(|_| rng.gen::<Orientation>() == Orientation::Horizontal)
            .count();
        assert!(horizontal > 400 && horizontal < 600, "got {}", horizontal);
    }
}
