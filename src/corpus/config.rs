//! Corpus configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "MUSHAF_DATA_DIR";

/// Environment variable toggling parallel whole-corpus search.
pub const PARALLEL_SEARCH_ENV: &str = "MUSHAF_PARALLEL_SEARCH";

/// Configuration for a [`Mushaf`](crate::Mushaf).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MushafConfig {
    /// Directory holding the verse text and translation files.
    /// Without one, only the metadata tables are available.
    pub data_dir: Option<PathBuf>,
    /// Scan chapters in parallel when searching the whole corpus.
    pub parallel_search: bool,
}

impl Default for MushafConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            parallel_search: true,
        }
    }
}

impl MushafConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data directory.
    pub fn data_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Enable or disable parallel whole-corpus search.
    pub fn parallel_search(mut self, enabled: bool) -> Self {
        self.parallel_search = enabled;
        self
    }

    /// Read the configuration from the environment.
    ///
    /// Unset or unparseable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(value) = lookup(PARALLEL_SEARCH_ENV) {
            match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.parallel_search = true,
                "0" | "false" | "no" | "off" => config.parallel_search = false,
                other => log::warn!("Ignoring {PARALLEL_SEARCH_ENV}={other}"),
            }
        }

        config
    }
}
