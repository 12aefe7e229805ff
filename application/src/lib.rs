//! Application layer for truth-or-dare
//!
//! This crate contains the session engine use case, port definitions and
//! game settings. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_THEME, GameSettings};
pub use ports::turn_notifier::{NoTurnNotifier, TurnNotifier};
pub use use_cases::play_session::SessionEngine;
