//! Domain layer for truth-or-dare
//!
//! This crate contains the game rules: players, prompts, content banks and
//! the session state machine. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A [`Session`] moves through three phases:
//!
//! - **Setup**: roster, theme and quota are being chosen
//! - **Active**: players take turns picking a truth or a dare
//! - **Finished**: every player completed the quota
//!
//! ## Turn
//!
//! On each turn the current player chooses a [`PromptKind`]. The drawn
//! prompt is either passed (same player chooses again) or completed
//! (the turn counts and rotation moves on, skipping players who are done).

pub mod config;
pub mod content;
pub mod core;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use content::{bank::ContentBank, deck::ThemeDeck};
pub use core::{
    error::DomainError,
    player::{Player, PlayerName},
    quota::Quota,
};
pub use prompt::{Prompt, PromptKind};
pub use session::{
    entities::{Phase, Session, Transition},
    roster::{MIN_PLAYERS, build_roster},
    summary::{PlayerProgress, SessionSummary},
};
