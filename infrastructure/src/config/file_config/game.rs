//! Game configuration from TOML (`[game]` section)
//!
//! ```toml
//! [game]
//! theme = "Outdoor"
//! questions_per_player = 20
//! players = ["Alice", "Bob", "Carol"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tod_application::{DEFAULT_THEME, GameSettings};
use tod_domain::{ConfigIssue, ConfigIssueCode, MIN_PLAYERS, PlayerName, Quota};

/// Raw game configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Theme key into the content bank
    pub theme: String,
    /// Completed turns required per player
    pub questions_per_player: u32,
    /// Default roster (may be overridden on the command line)
    pub players: Vec<String>,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            questions_per_player: Quota::default().get(),
            players: Vec::new(),
        }
    }
}

impl FileGameConfig {
    /// Convert into the application-level settings
    pub fn to_settings(&self) -> GameSettings {
        GameSettings::new(self.players.iter().cloned())
            .with_theme(self.theme.clone())
            .with_questions_per_player(self.questions_per_player)
    }

    /// Check the section against the registered themes
    pub fn validate(&self, themes: &[String]) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        match Quota::new(self.questions_per_player) {
            Err(_) => issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroQuota,
                "game.questions_per_player must be at least 1",
            )),
            Ok(quota) if !quota.is_preset() => issues.push(ConfigIssue::warning(
                ConfigIssueCode::NonPresetQuota {
                    value: quota.get(),
                },
                format!(
                    "game.questions_per_player: {} is not one of the usual {:?}",
                    quota,
                    Quota::PRESETS
                ),
            )),
            Ok(_) => {}
        }

        if !themes.iter().any(|t| t == &self.theme) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::UnknownTheme {
                    theme: self.theme.clone(),
                },
                format!(
                    "game.theme: unknown theme '{}' (available: {})",
                    self.theme,
                    themes.join(", ")
                ),
            ));
        }

        // An empty list means "ask at startup"
        if !self.players.is_empty() {
            let names: Vec<PlayerName> =
                self.players.iter().filter_map(PlayerName::try_new).collect();
            if names.len() < MIN_PLAYERS {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::TooFewPlayers { found: names.len() },
                    format!(
                        "game.players: need at least {} non-blank names, found {}",
                        MIN_PLAYERS,
                        names.len()
                    ),
                ));
            }
            let mut seen = HashSet::new();
            for name in &names {
                if !seen.insert(name.as_str()) {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::DuplicatePlayer {
                            name: name.to_string(),
                        },
                        format!("game.players: '{}' is listed more than once", name),
                    ));
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn themes() -> Vec<String> {
        vec!["General".to_string(), "Outdoor".to_string()]
    }

    #[test]
    fn test_default_is_valid() {
        assert!(FileGameConfig::default().validate(&themes()).is_empty());
    }

    #[test]
    fn test_zero_quota_is_error() {
        let config = FileGameConfig {
            questions_per_player: 0,
            ..Default::default()
        };
        let issues = config.validate(&themes());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].code, ConfigIssueCode::ZeroQuota);
    }

    #[test]
    fn test_non_preset_quota_warns() {
        let config = FileGameConfig {
            questions_per_player: 5,
            ..Default::default()
        };
        let issues = config.validate(&themes());
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_unknown_theme_is_error() {
        let config = FileGameConfig {
            theme: "Space".to_string(),
            ..Default::default()
        };
        let issues = config.validate(&themes());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::UnknownTheme {
                theme: "Space".to_string()
            }
        );
    }

    #[test]
    fn test_player_list_checks() {
        let config = FileGameConfig {
            players: vec!["Alice".into(), " ".into()],
            ..Default::default()
        };
        assert_eq!(
            config.validate(&themes())[0].code,
            ConfigIssueCode::TooFewPlayers { found: 1 }
        );

        let config = FileGameConfig {
            players: vec!["Alice".into(), "Bob".into(), "Alice ".into()],
            ..Default::default()
        };
        assert_eq!(
            config.validate(&themes())[0].code,
            ConfigIssueCode::DuplicatePlayer {
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn test_to_settings() {
        let config = FileGameConfig {
            theme: "Outdoor".to_string(),
            questions_per_player: 40,
            players: vec!["A".into(), "B".into()],
        };
        let settings = config.to_settings();
        assert_eq!(settings.theme, "Outdoor");
        assert_eq!(settings.questions_per_player, 40);
        assert_eq!(settings.players, vec!["A", "B"]);
    }
}
