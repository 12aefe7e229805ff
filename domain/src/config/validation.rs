//! Configuration validation issues.
//!
//! Config loading collects every problem it finds instead of stopping at
//! the first one. Callers decide what to do based on [`Severity`].

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: a game cannot start with this configuration.
    Error,
    /// Non-fatal: the game works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// Quota of zero questions per player.
    ZeroQuota,
    /// Quota outside the offered presets.
    NonPresetQuota { value: u32 },
    /// Theme is not registered in the content bank.
    UnknownTheme { theme: String },
    /// Fewer than two non-blank player names listed.
    TooFewPlayers { found: usize },
    /// The same player name listed twice.
    DuplicatePlayer { name: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
