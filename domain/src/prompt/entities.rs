//! Prompt entities

use serde::{Deserialize, Serialize};

/// Kind of prompt a player picks for their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Truth,
    Dare,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Truth => "truth",
            PromptKind::Dare => "dare",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PromptKind::Truth => "Truth",
            PromptKind::Dare => "Dare",
        }
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PromptKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "truth" | "t" => Ok(PromptKind::Truth),
            "dare" | "d" => Ok(PromptKind::Dare),
            other => Err(format!("unknown prompt kind '{}' (expected truth or dare)", other)),
        }
    }
}

/// A prompt drawn for the current turn (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub kind: PromptKind,
    pub text: String,
}

impl Prompt {
    pub fn new(kind: PromptKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.display_name(), self.text)
    }
}
