//! Content configuration from TOML (`[content]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw content configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContentConfig {
    /// Extra deck file to load (see `DeckLoader` for the format)
    pub deck_file: Option<PathBuf>,
    /// Use only the decks from `deck_file`, dropping the built-in ones
    pub replace_builtin: bool,
}
