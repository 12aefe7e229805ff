//! REPL configuration from TOML (`[repl]` section)

use crate::config::ConfigLoader;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file; a leading `~/` is the home directory
    pub history_file: Option<String>,
}

impl FileReplConfig {
    /// Resolve the history file, falling back to the data directory
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref() {
            Some(raw) => match raw.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(raw)),
            },
            None => ConfigLoader::default_history_path(),
        }
    }
}
