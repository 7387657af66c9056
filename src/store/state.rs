//! Persistent last-period state
//!
//! Manages `state.json`, a single JSON file holding the one tracked value,
//! the start of the last recorded period, as an RFC 3339 timestamp. The file
//! is overwritten on every mark; no history is kept and nothing ever deletes
//! it.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cycle::tracker::in_supported_range;

const STATE_FILE_NAME: &str = "state.json";
const DATA_DIR_NAME: &str = ".lunacycle";

/// The whole persisted state: one anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    /// Start of the last recorded period (stored as an RFC 3339 string)
    pub last_period: DateTime<Utc>,
}

/// Result of loading the state file.
///
/// Absence is not an error: a missing file is the ordinary first-run case,
/// and an unreadable one is demoted to "unset" rather than failing the
/// command. Only I/O failures propagate as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateLoad {
    /// The file existed and parsed
    Present(TrackerState),
    /// No state file yet
    Missing,
    /// The file existed but was not valid state (bad JSON, bad timestamp,
    /// or a date outside the supported year range)
    Corrupt,
}

impl StateLoad {
    /// The parsed state, if any. `Missing` and `Corrupt` are both unset.
    #[must_use]
    pub const fn state(self) -> Option<TrackerState> {
        match self {
            Self::Present(state) => Some(state),
            Self::Missing | Self::Corrupt => None,
        }
    }
}

/// Reads and writes the single tracked value under a data directory.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store targeting `<data_dir>/state.json`, creating the
    /// directory if needed.
    pub fn new(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(Self {
            path: data_dir.join(STATE_FILE_NAME),
        })
    }

    /// Load the stored state.
    ///
    /// Returns `Missing` when the file does not exist and `Corrupt` when its
    /// content does not parse as state.
    pub fn load(&self) -> Result<StateLoad> {
        if !self.path.exists() {
            return Ok(StateLoad::Missing);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        Ok(serde_json::from_str::<TrackerState>(&content)
            .ok()
            .filter(|state| in_supported_range(state.last_period))
            .map_or(StateLoad::Corrupt, StateLoad::Present))
    }

    /// Atomically overwrite the stored state (write to temp, then rename).
    pub fn save(&self, state: &TrackerState) -> Result<()> {
        let json = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes())
            .with_context(|| format!("Failed to write temp file: {}", tmp_path.display()))?;
        std::fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }

    /// Path of the state file.
    #[must_use]
    pub fn state_path(&self) -> &Path {
        &self.path
    }
}

/// Default data directory: `~/.lunacycle`, or `./.lunacycle` when no home
/// directory can be resolved.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(DATA_DIR_NAME),
        |home| PathBuf::from(home).join(DATA_DIR_NAME),
    )
}
