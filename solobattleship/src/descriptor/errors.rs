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
use std::{io, path::PathBuf};

use thiserror::Error;

/// Error returned when descriptor text does not follow the expected grammar. Line
/// numbers are 1-based.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FormatError {
    /// The text has no non-blank lines.
    #[error("descriptor is empty")]
    Empty,
    /// The first line is not `<width> : <height>`.
    #[error("line {line}: expected `<width> : <height>`, found {text:?}")]
    BadDimensions { line: usize, text: String },
    /// A ship line is not `<name> : <size>`, or the name has characters other than
    /// letters and hyphens.
    #[error("line {line}: expected `<name> : <size>`, found {text:?}")]
    BadShip { line: usize, text: String },
    /// A width, height or size is zero or too large.
    #[error("line {line}: {text:?} is not a positive integer in range")]
    InvalidNumber { line: usize, text: String },
    /// The board would have more than [`Dimensions::MAX_CELLS`] cells.
    ///
    /// [`Dimensions::MAX_CELLS`]: crate::board::Dimensions::MAX_CELLS
    #[error("line {line}: a {width}x{height} board has more than {max} cells")]
    TooLarge {
        line: usize,
        width: usize,
        height: usize,
        max: usize,
    },
    /// Two ships share a name.
    #[error("line {line}: ship {name:?} is listed more than once")]
    DuplicateShip { line: usize, name: String },
    /// The dimension line is not followed by any ship.
    #[error("descriptor lists no ships")]
    NoShips,
}

/// Error returned when a descriptor file cannot be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read descriptor {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file was read but its contents are malformed.
    #[error("malformed descriptor {}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

impl LoadError {
    /// Get the path of the descriptor that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Format { path, .. } => path,
        }
    }
}
