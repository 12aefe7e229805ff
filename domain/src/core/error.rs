//! Domain error types

use crate::prompt::PromptKind;
use thiserror::Error;

/// Domain-level errors
///
/// All variants are validation failures: the operation that produced them
/// leaves the session untouched and the caller may correct its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please enter at least 2 player names (got {found})")]
    InsufficientPlayers { found: usize },

    #[error("Player name '{0}' is used more than once")]
    DuplicatePlayer(String),

    #[error("Questions per player must be positive (got {0})")]
    InvalidQuota(u32),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Theme '{theme}' has no {kind} prompts")]
    EmptyDeck { theme: String, kind: PromptKind },
}

impl DomainError {
    /// Check if the caller can recover by asking the user for new input
    ///
    /// `UnknownTheme` and `EmptyDeck` point at broken configuration or content
    /// data and retrying with the same theme will fail again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::InsufficientPlayers { .. }
                | DomainError::DuplicatePlayer(_)
                | DomainError::InvalidQuota(_)
        )
    }
}
