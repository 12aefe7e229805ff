//! Theme deck value object

use crate::core::error::DomainError;
use crate::prompt::PromptKind;

/// The prompts registered for a single theme (Value Object)
///
/// Both sequences are guaranteed non-empty, so a random draw from a
/// registered theme is always defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDeck {
    truths: Vec<String>,
    dares: Vec<String>,
}

impl ThemeDeck {
    /// Build a deck for `theme`, rejecting empty sequences
    pub fn new(
        theme: &str,
        truths: Vec<String>,
        dares: Vec<String>,
    ) -> Result<Self, DomainError> {
        for (kind, prompts) in [(PromptKind::Truth, &truths), (PromptKind::Dare, &dares)] {
            if prompts.is_empty() {
                return Err(DomainError::EmptyDeck {
                    theme: theme.to_string(),
                    kind,
                });
            }
        }
        Ok(Self { truths, dares })
    }

    /// Prompts of the given kind, in registration order
    pub fn prompts(&self, kind: PromptKind) -> &[String] {
        match kind {
            PromptKind::Truth => &self.truths,
            PromptKind::Dare => &self.dares,
        }
    }

    /// Append prompts from another deck, keeping this deck's order first
    pub fn extend(&mut self, other: ThemeDeck) {
        self.truths.extend(other.truths);
        self.dares.extend(other.dares);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_truths_rejected() {
        let err = ThemeDeck::new("Party", vec![], strings(&["Sing"])).unwrap_err();
        assert_eq!(
            err,
            DomainError::EmptyDeck {
                theme: "Party".to_string(),
                kind: PromptKind::Truth
            }
        );
    }

    #[test]
    fn test_empty_dares_rejected() {
        let err = ThemeDeck::new("Party", strings(&["Why?"]), vec![]).unwrap_err();
        assert!(matches!(
            err,
            DomainError::EmptyDeck {
                kind: PromptKind::Dare,
                ..
            }
        ));
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut deck = ThemeDeck::new("Party", strings(&["a"]), strings(&["x"])).unwrap();
        deck.extend(ThemeDeck::new("Party", strings(&["b"]), strings(&["y"])).unwrap());
        assert_eq!(deck.prompts(PromptKind::Truth), ["a", "b"]);
        assert_eq!(deck.prompts(PromptKind::Dare), ["x", "y"]);
    }
}
