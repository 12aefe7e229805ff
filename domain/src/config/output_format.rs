//! Output format value object

use serde::{Deserialize, Serialize};

/// How the final standings are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable table (default)
    #[default]
    Text,
    /// Machine-readable session summary
    Json,
}
