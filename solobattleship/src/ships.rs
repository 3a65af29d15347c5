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
//! Types used for defining ships and their shapes.
use std::fmt;

pub use self::linear::{Orientation, Placement};

mod linear;

/// Template for a ship: a unique name and the number of cells it occupies. Ships are
/// immutable; hits are tracked by the [`Board`][crate::board::Board].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Ship {
    name: String,
    len: usize,
}

impl Ship {
    /// Construct a ship with the given name and length. Panics if `len` is 0.
    pub fn new<S: Into<String>>(name: S, len: usize) -> Self {
        assert!(len > 0, "ship length must be nonzero");
        Self {
            name: name.into(),
            len,
        }
    }

    /// Name of the ship. Unique within a board.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cells this ship occupies.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.name)
    }
}
