//! Prompt domain
//!
//! What a player is asked to do on their turn: a truth to answer or a dare
//! to perform.

mod entities;

pub use entities::{Prompt, PromptKind};
