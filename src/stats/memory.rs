//! In-memory results store

use super::{GameStats, ResultStore, StoreData, StoreError, StoredResult};
use crate::session::GameResult;
use chrono::{DateTime, Utc};

/// Store that lives as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    data: StoreData,
}

impl MemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemStore {
    fn save_result(
        &mut self,
        result: GameResult,
        now: DateTime<Utc>,
    ) -> Result<StoredResult, StoreError> {
        Ok(self.data.push(result, now))
    }

    fn recent_results(&self, limit: usize) -> Result<Vec<StoredResult>, StoreError> {
        Ok(self.data.recent(limit))
    }

    fn stats(&self) -> Result<GameStats, StoreError> {
        Ok(self.data.stats.clone())
    }

    fn record_outcome(
        &mut self,
        result: &GameResult,
        now: DateTime<Utc>,
    ) -> Result<GameStats, StoreError> {
        self.data.stats.record(result, now);
        Ok(self.data.stats.clone())
    }
}
