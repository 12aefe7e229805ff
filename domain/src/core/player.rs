//! Player value object and entity

use serde::{Deserialize, Serialize};

/// A player's display name (Value Object)
///
/// Always trimmed and never empty. Two names are equal when their trimmed
/// text is equal, which is what duplicate detection relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    /// Try to create a name from raw input, returning None if it is blank
    pub fn try_new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A participant in a session (Entity)
///
/// Identity is the roster position; the name is the lookup key exposed to
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: PlayerName,
    completed: u32,
}

impl Player {
    pub fn new(name: PlayerName) -> Self {
        Self { name, completed: 0 }
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    /// Number of turns this player has completed
    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub(crate) fn record_completed_turn(&mut self) {
        self.completed += 1;
    }
}
