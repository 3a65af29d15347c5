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
//! Append-only log of finished games.
use std::{
    fmt,
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime, Timelike};
use tracing::info;

/// Default name of the score file.
pub const DEFAULT_SCORE_FILE: &str = "bataille_navale_scores.txt";

/// Result of one finished game. Displays as a single log line:
/// `<player>:<descriptor>:<shots>:<YYYY-MM-DD HH:MM:SS.ffffff>`. The fraction is left
/// out when the game finished on a whole second.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScoreRecord {
    player: String,
    descriptor: String,
    shots: usize,
    timestamp: NaiveDateTime,
}

impl ScoreRecord {
    /// Record a game finished now, in local time.
    pub fn new<P: Into<String>, D: Into<String>>(player: P, descriptor: D, shots: usize) -> Self {
        Self::with_timestamp(player, descriptor, shots, Local::now().naive_local())
    }

    /// Record a game finished at the given time.
    pub fn with_timestamp<P: Into<String>, D: Into<String>>(
        player: P,
        descriptor: D,
        shots: usize,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            player: player.into(),
            descriptor: descriptor.into(),
            shots,
            timestamp,
        }
    }

    /// Name of the player.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Identifier of the descriptor the game was played on.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Number of shots the player needed.
    pub fn shots(&self) -> usize {
        self.shots
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            Field(&self.player),
            Field(&self.descriptor),
            self.shots,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
        )?;
        let micros = self.timestamp.nanosecond() / 1_000 % 1_000_000;
        if micros != 0 {
            write!(f, ".{:06}", micros)?;
        }
        Ok(())
    }
}

/// Display helper that keeps a free-text field from breaking the line format: the
/// separator and control characters are written as `_`.
struct Field<'a>(&'a str);

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        for c in self.0.chars() {
            f.write_char(if c == ':' || c.is_control() { '_' } else { c })?;
        }
        Ok(())
    }
}

/// Handle to the score file. Each record is appended as one line.
#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    /// Create a handle to the log at `path`. The file is created on first append.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record. The whole line goes out in a single write to a file opened in
    /// append mode, so lines from concurrent writers are never interleaved.
    pub fn append(&self, record: &ScoreRecord) -> io::Result<()> {
        let line = format!("{}\n", record);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        info!(
            path = %self.path.display(),
            player = record.player(),
            shots = record.shots,
            "saved score"
        );
        Ok(())
    }
}

impl Default for ScoreLog {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn finished_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 4, 20)
            .unwrap()
            .and_hms_micro_opt(14, 3, 9, 42)
            .unwrap()
    }

    #[test]
    fn line_format() {
        let record = ScoreRecord::with_timestamp("Jean Bart", "1", 37, finished_at());
        assert_eq!(
            record.to_string(),
            "Jean Bart:1:37:2020-04-20 14:03:09.000042"
        );
    }

    #[test]
    fn whole_seconds_have_no_fraction() {
        let at = NaiveDate::from_ymd_opt(2020, 4, 20)
            .unwrap()
            .and_hms_opt(14, 3, 9)
            .unwrap();
        let record = ScoreRecord::with_timestamp("Jean Bart", "2", 12, at);
        assert_eq!(record.to_string(), "Jean Bart:2:12:2020-04-20 14:03:09");

        let at = NaiveDate::from_ymd_opt(2020, 4, 20)
            .unwrap()
            .and_hms_micro_opt(14, 3, 9, 500_000)
            .unwrap();
        let record = ScoreRecord::with_timestamp("Jean Bart", "2", 12, at);
        assert_eq!(record.to_string(), "Jean Bart:2:12:2020-04-20 14:03:09.500000");
    }

    #[test]
    fn separators_are_escaped() {
        let record = ScoreRecord::with_timestamp("a:b\nc", "x:y", 1, finished_at());
        assert_eq!(record.to_string(), "a_b_c:x_y:1:2020-04-20 14:03:09.000042");
        assert_eq!(record.player(), "a:b\nc");
    }
}
