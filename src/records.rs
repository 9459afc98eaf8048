#![warn(clippy::all, clippy::pedantic)]

//! High score and leaderboard storage.
//!
//! Records are a small TOML file. Saving is best effort: the caller logs a
//! failed save and keeps playing.

use bevy_ecs::prelude::Resource;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::scoring::Leaderboard;

// Fallback records path when no data directory is available
const RECORDS_FILE_PATH: &str = "blockfall_records.toml";

// Environment variable that overrides the records location
pub const RECORDS_ENV_VAR: &str = "BLOCKFALL_RECORDS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Records {
    pub high_score: u32,
    pub leaderboard: Leaderboard,
}

impl Records {
    pub fn load_from(path: &Path) -> Result<Self, RecordsError> {
        let contents = fs::read_to_string(path)?;
        let records: Records = toml::from_str(&contents)?;
        // Files edited by hand may be out of order
        Ok(Records {
            leaderboard: Leaderboard::from_entries(records.leaderboard.entries().to_vec()),
            ..records
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), RecordsError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Records plus where they live. A store without a path keeps everything in memory.
#[derive(Resource, Debug, Clone, Default)]
pub struct RecordStore {
    records: Records,
    path: Option<PathBuf>,
    max_entries: Option<usize>,
}

impl RecordStore {
    /// Opens the store at `path`. A missing file starts empty; an unreadable one
    /// is logged and also starts empty.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let records = if path.exists() {
            match Records::load_from(&path) {
                Ok(records) => records,
                Err(e) => {
                    warn!("Ignoring unreadable records at {}: {e}", path.display());
                    Records::default()
                }
            }
        } else {
            debug!("No records at {}, starting fresh", path.display());
            Records::default()
        };

        Self {
            records,
            path: Some(path),
            max_entries: None,
        }
    }

    #[must_use]
    pub fn in_memory(records: Records) -> Self {
        Self {
            records,
            path: None,
            max_entries: None,
        }
    }

    #[must_use]
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self.records.leaderboard.truncate(max_entries);
        self
    }

    #[must_use]
    pub fn records(&self) -> &Records {
        &self.records
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_high_score(&mut self, score: u32) {
        self.records.high_score = self.records.high_score.max(score);
    }

    pub fn set_leaderboard(&mut self, leaderboard: Leaderboard) {
        self.records.leaderboard = leaderboard;
        if let Some(max_entries) = self.max_entries {
            self.records.leaderboard.truncate(max_entries);
        }
    }

    /// Writes the records to disk. In-memory stores always succeed.
    pub fn persist(&self) -> Result<(), RecordsError> {
        match &self.path {
            Some(path) => self.records.save_to(path),
            None => Ok(()),
        }
    }
}

// Get the path to the records file
#[must_use]
pub fn records_file_path() -> PathBuf {
    if let Ok(path) = std::env::var(RECORDS_ENV_VAR) {
        return PathBuf::from(path);
    }

    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("blockfall").join("records.toml")
    } else {
        PathBuf::from(RECORDS_FILE_PATH)
    }
}

#[derive(Debug)]
pub enum RecordsError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for RecordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordsError::Io(err) => write!(f, "records I/O error: {err}"),
            RecordsError::Parse(err) => write!(f, "invalid records file: {err}"),
            RecordsError::Serialize(err) => write!(f, "could not serialize records: {err}"),
        }
    }
}

impl std::error::Error for RecordsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordsError::Io(err) => Some(err),
            RecordsError::Parse(err) => Some(err),
            RecordsError::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for RecordsError {
    fn from(err: io::Error) -> Self {
        RecordsError::Io(err)
    }
}

impl From<toml::de::Error> for RecordsError {
    fn from(err: toml::de::Error) -> Self {
        RecordsError::Parse(err)
    }
}

impl From<toml::ser::Error> for RecordsError {
    fn from(err: toml::ser::Error) -> Self {
        RecordsError::Serialize(err)
    }
}
