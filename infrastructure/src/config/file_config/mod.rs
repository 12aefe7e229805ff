//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod content;
mod game;
mod output;
mod repl;

pub use content::FileContentConfig;
pub use game::FileGameConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use tod_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Roster, theme and quota
    pub game: FileGameConfig,
    /// Extra prompt decks
    pub content: FileContentConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// `themes` are the themes registered in the content bank that will be
    /// used for the game.
    pub fn validate(&self, themes: &[String]) -> Vec<ConfigIssue> {
        self.game.validate(themes)
    }
}
