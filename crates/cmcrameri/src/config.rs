//! Loader configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CMCRAMERI_DATA_DIR";

/// Environment variable overriding the registry prefix.
pub const PREFIX_ENV: &str = "CMCRAMERI_PREFIX";

/// Prepended to map names when publishing to an external registry.
pub const DEFAULT_PREFIX: &str = "cmc.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directory holding the `*.txt` colour tables.
    pub data_dir: PathBuf,
    /// Registry key prefix.
    pub prefix: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("cmaps"),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Defaults overridden by `CMCRAMERI_DATA_DIR` and `CMCRAMERI_PREFIX`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(prefix) = std::env::var(PREFIX_ENV) {
            config.prefix = prefix;
        }
        config
    }

    /// Registry key for a map name.
    pub fn registry_key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}
