//! Random-draw content bank

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::sync::Mutex;
use tod_domain::{ContentBank, DomainError, PromptKind, ThemeDeck};

use super::builtin::builtin_decks;

/// Content bank drawing uniformly at random from in-memory theme decks
///
/// The random source is pluggable: production uses OS entropy, tests and
/// `--seed` use a seeded [`StdRng`] for reproducible games.
pub struct ThemedContentBank<R: Rng + Send = StdRng> {
    decks: BTreeMap<String, ThemeDeck>,
    rng: Mutex<R>,
}

impl ThemedContentBank<StdRng> {
    /// Bank seeded from OS entropy
    pub fn from_entropy(decks: BTreeMap<String, ThemeDeck>) -> Self {
        Self::with_rng(decks, StdRng::from_entropy())
    }

    /// Bank with a fixed seed; the same seed yields the same draws
    pub fn seeded(decks: BTreeMap<String, ThemeDeck>, seed: u64) -> Self {
        Self::with_rng(decks, StdRng::seed_from_u64(seed))
    }

    /// Bank over the built-in decks
    pub fn builtin() -> Result<Self, DomainError> {
        Ok(Self::from_entropy(builtin_decks()?))
    }
}

impl<R: Rng + Send> ThemedContentBank<R> {
    pub fn with_rng(decks: BTreeMap<String, ThemeDeck>, rng: R) -> Self {
        Self {
            decks,
            rng: Mutex::new(rng),
        }
    }

    /// Look up the deck registered for a theme
    pub fn deck(&self, theme: &str) -> Option<&ThemeDeck> {
        self.decks.get(theme)
    }
}

impl<R: Rng + Send> ContentBank for ThemedContentBank<R> {
    fn prompt(&self, theme: &str, kind: PromptKind) -> Result<String, DomainError> {
        let deck = self
            .decks
            .get(theme)
            .ok_or_else(|| DomainError::UnknownTheme(theme.to_string()))?;

        // Draws stay valid after a poisoned lock
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        deck.prompts(kind)
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| DomainError::EmptyDeck {
                theme: theme.to_string(),
                kind,
            })
    }

    fn has_theme(&self, theme: &str) -> bool {
        self.decks.contains_key(theme)
    }

    fn themes(&self) -> Vec<String> {
        self.decks.keys().cloned().collect()
    }
}
