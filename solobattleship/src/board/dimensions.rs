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
//! Extents of the rectangular grid.
use std::borrow::Borrow;

use crate::board::Coordinate;

/// Width and height of a board, in cells. Valid coordinates are
/// `[1, width] x [1, height]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Number of columns. This cooresponds to the `col` of a [`Coordinate`].
    width: usize,
    /// Number of rows. This cooresponds to the `row` of a [`Coordinate`].
    height: usize,
}

impl Dimensions {
    /// Largest number of cells a board may have. The grid stores every cell, so this
    /// bounds the memory a descriptor can ask for.
    pub const MAX_CELLS: usize = 1 << 20;

    /// Create new [`Dimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds [`Dimensions::MAX_CELLS`] or if `width` or
    /// `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => {
                if width == 0 || height == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", width, height);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        width,
                        height,
                        Self::MAX_CELLS
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified width and height.
    /// Returns `None` if `width * height` exceeds [`Dimensions::MAX_CELLS`] or if `width`
    /// or `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            width
                .checked_mul(height)
                .filter(|&cells| cells <= Self::MAX_CELLS)
                .map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells. Used to allocate storage for the board.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if the coordinate lies on the grid.
    pub fn contains<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a linear index. Returns `None` if the coordinate is out
    /// of bounds.
    pub(crate) fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| (coord.row - 1) * self.width + (coord.col - 1))
    }

    /// Get an iterator over rows of this grid, top to bottom. Each row is an iterator
    /// over the coordinates of that row, left to right.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (1..=self.height).map(move |row| (1..=width).map(move |col| Coordinate { col, row }))
    }

    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if (1..=self.width).contains(&c.col) && (1..=self.height).contains(&c.row) {
            Some(coord)
        } else {
            None
        }
    }
}
