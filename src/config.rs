use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "data.dat";
pub const DEFAULT_SEARCH_NAME: &str = "edgardo";

/// Runtime settings. Every field may be omitted from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub data_path: PathBuf,
    pub search_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            search_name: DEFAULT_SEARCH_NAME.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Apply command-line overrides on top of the current values.
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, search_name: Option<String>) -> Self {
        if let Some(data_path) = data_path {
            self.data_path = data_path;
        }
        if let Some(search_name) = search_name {
            self.search_name = search_name;
        }
        self
    }
}
