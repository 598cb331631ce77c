//! Results store backed by a single JSON file
//!
//! The whole file is read on open and rewritten after every change. A missing
//! file is an empty store.

use super::{GameStats, ResultStore, StoreData, StoreError, StoredResult};
use crate::session::GameResult;
use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "wordpop";
const FILE_NAME: &str = "results.json";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonFileStore {
    /// `<platform data dir>/wordpop/results.json`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` when the platform has no data directory.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
            .ok_or(StoreError::NoDataDir)
    }

    /// Open the store at `path`, starting empty if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No results file at {}, starting fresh", path.display());
                StoreData::default()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self { path, data })
    }

    /// Open the store at [`Self::default_path`]
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if there is no data directory or the file is unreadable.
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(Self::default_path()?)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, text).map_err(io_err)?;
        log::debug!("Wrote {} results to {}", self.data.results.len(), self.path.display());
        Ok(())
    }
}

impl ResultStore for JsonFileStore {
    fn save_result(
        &mut self,
        result: GameResult,
        now: DateTime<Utc>,
    ) -> Result<StoredResult, StoreError> {
        let stored = self.data.push(result, now);
        self.flush()?;
        Ok(stored)
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
        self.flush()?;
        Ok(self.data.stats.clone())
    }
}
