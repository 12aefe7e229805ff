//! Infrastructure layer for truth-or-dare
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers: the random-draw content bank, deck file
//! loading and configuration file loading.

pub mod config;
pub mod content;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileContentConfig, FileGameConfig, FileOutputConfig,
    FileReplConfig,
};
pub use content::{DeckLoadError, DeckLoader, ThemedContentBank, builtin_decks};
