//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use tod_domain::OutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Standings format; unset means text
    pub format: Option<OutputFormat>,
    /// Colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Standings format after applying a command-line override
    pub fn format_with(&self, overridden: Option<OutputFormat>) -> OutputFormat {
        overridden.or(self.format).unwrap_or_default()
    }

    /// Whether to color output, given the `--no-color` flag
    pub fn color_with(&self, no_color: bool) -> bool {
        self.color && !no_color
    }
}
