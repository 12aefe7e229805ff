//! Prompt content adapters
//!
//! - [`ThemedContentBank`]: RNG-backed [`ContentBank`](tod_domain::ContentBank)
//! - [`builtin_decks`]: the General and Outdoor decks shipped with the game
//! - [`DeckLoader`]: extra decks from a TOML file

mod bank;
mod builtin;
mod loader;

pub use bank::ThemedContentBank;
pub use builtin::builtin_decks;
pub use loader::{DeckLoadError, DeckLoader};
