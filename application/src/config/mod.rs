//! Application-level configuration.
//!
//! - [`GameSettings`]: roster, theme and quota handed to the session engine

pub mod game_settings;

pub use game_settings::{DEFAULT_THEME, GameSettings};
