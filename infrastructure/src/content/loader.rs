//! TOML deck file loader
//!
//! Deck files register extra themes or extend existing ones:
//!
//! ```toml
//! [themes.Party]
//! truths = ["What's the worst gift you've ever received?"]
//! dares = ["Sing the chorus of the last song you listened to"]
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tod_domain::{DomainError, ThemeDeck};
use tracing::{debug, info};

use super::builtin::builtin_decks;
use crate::config::FileContentConfig;

/// Errors that can occur while loading a deck file
#[derive(Error, Debug)]
pub enum DeckLoadError {
    #[error("Failed to read deck file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid deck file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid deck: {0}")]
    Invalid(#[from] DomainError),

    #[error("Deck file defines no themes")]
    NoThemes,

    #[error("Deck file has a theme with a blank name")]
    BlankThemeName,
}

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    themes: BTreeMap<String, RawDeck>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDeck {
    truths: Vec<String>,
    dares: Vec<String>,
}

fn clean(prompts: Vec<String>) -> Vec<String> {
    prompts
        .into_iter()
        .map(|prompt| prompt.trim().to_string())
        .filter(|prompt| !prompt.is_empty())
        .collect()
}

/// Loader for TOML deck files
pub struct DeckLoader;

impl DeckLoader {
    /// Read and validate a deck file
    pub fn load(path: &Path) -> Result<BTreeMap<String, ThemeDeck>, DeckLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| DeckLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decks = Self::parse(&content)?;
        info!("Loaded {} theme(s) from {}", decks.len(), path.display());
        Ok(decks)
    }

    /// Parse deck file content
    ///
    /// Prompts are trimmed and blank entries dropped before the non-empty
    /// check, so a theme of only blank strings is rejected. Theme names are
    /// trimmed too; names that collide after trimming share one deck.
    pub fn parse(content: &str) -> Result<BTreeMap<String, ThemeDeck>, DeckLoadError> {
        let file: DeckFile = toml::from_str(content)?;
        if file.themes.is_empty() {
            return Err(DeckLoadError::NoThemes);
        }

        let mut decks = BTreeMap::new();
        for (theme, raw) in file.themes {
            let theme = theme.trim();
            if theme.is_empty() {
                return Err(DeckLoadError::BlankThemeName);
            }
            let deck = ThemeDeck::new(theme, clean(raw.truths), clean(raw.dares))?;
            Self::merge(&mut decks, BTreeMap::from([(theme.to_string(), deck)]));
        }
        Ok(decks)
    }

    /// Build the deck set described by the `[content]` section
    ///
    /// Starts from the built-in decks unless `replace_builtin` is set, then
    /// merges the deck file on top.
    pub fn resolve(
        config: &FileContentConfig,
    ) -> Result<BTreeMap<String, ThemeDeck>, DeckLoadError> {
        let mut decks = if config.replace_builtin && config.deck_file.is_some() {
            BTreeMap::new()
        } else {
            builtin_decks()?
        };

        if let Some(path) = &config.deck_file {
            Self::merge(&mut decks, Self::load(path)?);
        }
        Ok(decks)
    }

    /// Merge loaded decks into `base`
    ///
    /// Themes already in `base` get the new prompts appended; new themes
    /// are added as-is.
    pub fn merge(base: &mut BTreeMap<String, ThemeDeck>, extra: BTreeMap<String, ThemeDeck>) {
        for (theme, deck) in extra {
            match base.get_mut(&theme) {
                Some(existing) => {
                    debug!("Extending theme '{}'", theme);
                    existing.extend(deck);
                }
                None => {
                    debug!("Adding theme '{}'", theme);
                    base.insert(theme, deck);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tod_domain::PromptKind;

    const PARTY: &str = r#"
[themes.Party]
truths = ["Worst gift?", "   ", "Best trip?"]
dares = ["Sing a song"]
"#;

    #[test]
    fn test_parse_drops_blank_prompts() {
        let decks = DeckLoader::parse(PARTY).unwrap();
        let party = &decks["Party"];
        assert_eq!(party.prompts(PromptKind::Truth), ["Worst gift?", "Best trip?"]);
        assert_eq!(party.prompts(PromptKind::Dare), ["Sing a song"]);
    }

    #[test]
    fn test_parse_rejects_missing_dares() {
        let err = DeckLoader::parse("[themes.Quiet]\ntruths = [\"Why?\"]\n").unwrap_err();
        assert!(matches!(
            err,
            DeckLoadError::Invalid(DomainError::EmptyDeck {
                kind: PromptKind::Dare,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_file() {
        assert!(matches!(
            DeckLoader::parse("").unwrap_err(),
            DeckLoadError::NoThemes
        ));
    }

    #[test]
    fn test_parse_rejects_blank_theme_name() {
        let content = "[themes.\"  \"]\ntruths = [\"Why?\"]\ndares = [\"Jump\"]\n";
        assert!(matches!(
            DeckLoader::parse(content).unwrap_err(),
            DeckLoadError::BlankThemeName
        ));
    }

    #[test]
    fn test_parse_joins_names_equal_after_trim() {
        let decks = DeckLoader::parse(
            r#"
[themes." Party"]
truths = ["Padded truth"]
dares = ["Padded dare"]

[themes.Party]
truths = ["Plain truth"]
dares = ["Plain dare"]
"#,
        )
        .unwrap();

        assert_eq!(decks.len(), 1);
        let party = &decks["Party"];
        assert_eq!(party.prompts(PromptKind::Truth).len(), 2);
        assert!(party.prompts(PromptKind::Truth).contains(&"Padded truth".to_string()));
        assert!(party.prompts(PromptKind::Dare).contains(&"Plain dare".to_string()));
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(matches!(
            DeckLoader::parse("[themes.Party\n").unwrap_err(),
            DeckLoadError::Parse(_)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PARTY.as_bytes()).unwrap();

        let decks = DeckLoader::load(file.path()).unwrap();
        assert!(decks.contains_key("Party"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DeckLoader::load(Path::new("/nonexistent/decks.toml")).unwrap_err();
        assert!(matches!(err, DeckLoadError::Io { .. }));
    }

    #[test]
    fn test_resolve_defaults_to_builtin() {
        let decks = DeckLoader::resolve(&FileContentConfig::default()).unwrap();
        assert_eq!(decks.len(), 2);
    }

    #[test]
    fn test_resolve_replaces_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PARTY.as_bytes()).unwrap();

        let config = FileContentConfig {
            deck_file: Some(file.path().to_path_buf()),
            replace_builtin: true,
        };
        let decks = DeckLoader::resolve(&config).unwrap();
        assert_eq!(decks.keys().collect::<Vec<_>>(), vec!["Party"]);
    }

    #[test]
    fn test_replace_without_deck_file_keeps_builtin() {
        let config = FileContentConfig {
            deck_file: None,
            replace_builtin: true,
        };
        assert_eq!(DeckLoader::resolve(&config).unwrap().len(), 2);
    }

    #[test]
    fn test_merge_extends_and_adds() {
        let mut base = builtin_decks().unwrap();
        let extra = DeckLoader::parse(
            r#"
[themes.General]
truths = ["Extra truth"]
dares = ["Extra dare"]

[themes.Party]
truths = ["Party truth"]
dares = ["Party dare"]
"#,
        )
        .unwrap();

        DeckLoader::merge(&mut base, extra);

        assert_eq!(base.len(), 3);
        let general = base["General"].prompts(PromptKind::Truth);
        assert_eq!(general.len(), 11);
        assert_eq!(general.last().map(String::as_str), Some("Extra truth"));
    }
}
