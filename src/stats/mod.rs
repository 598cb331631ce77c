//! Results history and aggregate player statistics
//!
//! The game core hands finished games over as [`GameResult`]s. A [`ResultStore`]
//! keeps them with an id and timestamp, and folds each outcome into
//! [`GameStats`].

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemStore;

use crate::config::MAX_ATTEMPTS;
use crate::session::GameResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

/// Errors from a results store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corrupt results data: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("no platform data directory available")]
    NoDataDir,
}

/// A saved result with its id and save time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub id: u64,
    #[serde(flatten)]
    pub result: GameResult,
    pub played_at: DateTime<Utc>,
}

/// Running totals across every finished game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub total_games: u32,
    pub total_wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub total_points: u64,
    /// Wins by attempt count; index 0 is a first-guess win
    pub guess_distribution: [u32; MAX_ATTEMPTS],
    pub last_played: Option<DateTime<Utc>>,
}

impl GameStats {
    /// Fold one finished game into the totals
    ///
    /// A loss resets the current streak. Only wins touch the distribution.
    pub fn record(&mut self, result: &GameResult, now: DateTime<Utc>) {
        self.total_games += 1;
        self.total_points += u64::from(result.points);
        self.last_played = Some(now);

        if result.is_win {
            self.total_wins += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            if let Some(slot) = result
                .attempts
                .checked_sub(1)
                .and_then(|i| self.guess_distribution.get_mut(i))
            {
                *slot += 1;
            }
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.total_wins) / f64::from(self.total_games) * 100.0
        }
    }
}

/// Persisted results plus the running stats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    pub next_id: u64,
    pub results: Vec<StoredResult>,
    pub stats: GameStats,
}

impl StoreData {
    fn push(&mut self, result: GameResult, now: DateTime<Utc>) -> StoredResult {
        self.next_id += 1;
        let stored = StoredResult {
            id: self.next_id,
            result,
            played_at: now,
        };
        self.results.push(stored.clone());
        stored
    }

    fn recent(&self, limit: usize) -> Vec<StoredResult> {
        self.results.iter().rev().take(limit).cloned().collect()
    }
}

/// Storage for finished games
pub trait ResultStore {
    /// Keep a result, assigning it an id and timestamp
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be written.
    fn save_result(
        &mut self,
        result: GameResult,
        now: DateTime<Utc>,
    ) -> Result<StoredResult, StoreError>;

    /// Up to `limit` results, newest first
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    fn recent_results(&self, limit: usize) -> Result<Vec<StoredResult>, StoreError>;

    /// Current aggregate stats
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    fn stats(&self) -> Result<GameStats, StoreError>;

    /// Fold a finished game into the stats and return the new totals
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be written.
    fn record_outcome(
        &mut self,
        result: &GameResult,
        now: DateTime<Utc>,
    ) -> Result<GameStats, StoreError>;

    /// Save a result and update the stats in one step
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if either step fails.
    fn finish_game(
        &mut self,
        result: GameResult,
        now: DateTime<Utc>,
    ) -> Result<StoredResult, StoreError> {
        let stored = self.save_result(result, now)?;
        self.record_outcome(&stored.result, now)?;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use chrono::TimeZone;

    pub(super) fn result(won: bool, attempts: usize, points: u32) -> GameResult {
        GameResult {
            word: Word::new("house").unwrap(),
            attempts,
            time_elapsed: 30,
            points,
            is_win: won,
            is_challenge_mode: false,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn stats_track_streaks() {
        let mut stats = GameStats::default();
        stats.record(&result(true, 3, 700), now());
        stats.record(&result(true, 2, 850), now());
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);

        stats.record(&result(false, 6, 0), now());
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);

        stats.record(&result(true, 1, 1000), now());
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.total_wins, 3);
        assert_eq!(stats.total_points, 2550);
        assert_eq!(stats.last_played, Some(now()));
    }

    #[test]
    fn distribution_counts_wins_only() {
        let mut stats = GameStats::default();
        stats.record(&result(true, 3, 700), now());
        stats.record(&result(true, 3, 700), now());
        stats.record(&result(false, 6, 0), now());
        stats.record(&result(true, 6, 250), now());
        assert_eq!(stats.guess_distribution, [0, 0, 2, 0, 0, 1]);
    }

    #[test]
    fn win_rate() {
        let mut stats = GameStats::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        stats.record(&result(true, 3, 700), now());
        stats.record(&result(false, 6, 0), now());
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stored_result_flattens_fields() {
        let stored = StoredResult {
            id: 7,
            result: result(true, 4, 550),
            played_at: now(),
        };
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["word"], "HOUSE");
        assert_eq!(json["isWin"], true);
        assert!(json["playedAt"].is_string());
    }
}
