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
//! A single game session.
//!
//! Setup happens on a [`BoardSetup`][crate::board::BoardSetup] (or through
//! [`Board::build`]). Once the board is ready it is handed to a [`Game`], which is
//! [`InProgress`][GameStatus::InProgress] until the last ship sinks and then
//! [`Won`][GameStatus::Won] for good.
use tracing::info;

use crate::{
    board::{Board, Coordinate, ShotOutcome},
    score::ScoreRecord,
};

pub use self::errors::ShotError;

mod errors;

/// Status of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameStatus {
    /// Ships remain afloat.
    InProgress,
    /// Every ship has been sunk. Terminal.
    Won,
}

/// Handles gameplay for one player on one board.
#[derive(Debug)]
pub struct Game {
    /// Name of the player.
    player: String,

    /// Identifier of the descriptor the board was built from.
    descriptor_id: String,

    /// The board being played. Owned exclusively by this game.
    board: Board,

    /// Number of shots taken, not counting rejected ones.
    shots: usize,

    status: GameStatus,
}

impl Game {
    /// Start a game on a board that has finished setup.
    pub fn new<P, D>(player: P, descriptor_id: D, board: Board) -> Self
    where
        P: Into<String>,
        D: Into<String>,
    {
        let status = if board.all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        Self {
            player: player.into(),
            descriptor_id: descriptor_id.into(),
            board,
            shots: 0,
            status,
        }
    }

    /// Fire at the specified coordinate. Rejected shots leave the game untouched and
    /// do not count as a turn.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.status == GameStatus::Won {
            return Err(ShotError::GameOver);
        }
        let outcome = self.board.fire(coord)?;
        self.shots += 1;
        if self.board.all_sunk() {
            self.status = GameStatus::Won;
            info!(player = %self.player, shots = self.shots, "all ships sunk");
        }
        Ok(outcome)
    }

    /// Get the status of the game.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once every ship has been sunk.
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Number of shots taken so far.
    pub fn shot_count(&self) -> usize {
        self.shots
    }

    /// Get the board being played.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Name of the player.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Identifier of the descriptor the board was built from.
    pub fn descriptor_id(&self) -> &str {
        &self.descriptor_id
    }

    /// Get the record to log for this game, stamped now. Returns `None` until the game
    /// is won.
    pub fn score_record(&self) -> Option<ScoreRecord> {
        if self.is_won() {
            Some(ScoreRecord::new(
                self.player.as_str(),
                self.descriptor_id.as_str(),
                self.shots,
            ))
        } else {
            None
        }
    }
}
