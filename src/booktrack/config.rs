use crate::errlog::DEFAULT_LOG_FILE;
use crate::error::{CatalogError, Result};
use crate::store::DuplicatePolicy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "booktrack.json";
const DEFAULT_WORKERS: usize = 4;

/// Optional settings, read from `booktrack.json` next to the catalog.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// File name of the error log, created in the catalog's directory
    #[serde(default = "default_error_log")]
    pub error_log: String,

    /// Refuse adds whose ISBN is already in the catalog
    #[serde(default)]
    pub reject_duplicate_isbn: bool,

    /// Worker threads used for a batch of tasks
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_error_log() -> String {
    DEFAULT_LOG_FILE.to_string()
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            error_log: default_error_log(),
            reject_duplicate_isbn: false,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl TrackerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: TrackerConfig =
            serde_json::from_str(&content).map_err(CatalogError::Config)?;
        Ok(config)
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.reject_duplicate_isbn {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Allow
        }
    }
}
