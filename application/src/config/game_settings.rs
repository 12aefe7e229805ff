//! Game settings collected before a session starts.

use tod_domain::Quota;

/// Default theme when none is configured
pub const DEFAULT_THEME: &str = "General";

/// Everything needed to start a session.
///
/// Player names are kept raw; trimming and validation happen when the
/// session starts so the same settings can be reused for a rematch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    /// Player names as entered, before trimming
    pub players: Vec<String>,
    /// Theme key into the content bank
    pub theme: String,
    /// Completed turns required per player
    pub questions_per_player: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            theme: DEFAULT_THEME.to_string(),
            questions_per_player: Quota::default().get(),
        }
    }
}

impl GameSettings {
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_questions_per_player(mut self, questions: u32) -> Self {
        self.questions_per_player = questions;
        self
    }
}
