//! Content bank trait

use crate::core::error::DomainError;
use crate::prompt::PromptKind;

/// Read-only source of prompts grouped by theme
///
/// This is a domain-level abstraction over the prompt data and the random
/// draw. Implementations live in the infrastructure layer; tests can swap
/// in a seeded or scripted bank to assert exactly which prompt is shown.
pub trait ContentBank: Send + Sync {
    /// Draw one prompt of `kind` from `theme`
    ///
    /// Each call is an independent uniform draw with replacement, so the
    /// same prompt may come up more than once in a session.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownTheme`] if the theme is not registered.
    fn prompt(&self, theme: &str, kind: PromptKind) -> Result<String, DomainError>;

    /// Check whether a theme is registered
    fn has_theme(&self, theme: &str) -> bool;

    /// Registered theme names, sorted
    fn themes(&self) -> Vec<String>;
}
