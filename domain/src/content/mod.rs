//! Content domain.
//!
//! - [`deck::ThemeDeck`]: the truths and dares registered for one theme
//! - [`bank::ContentBank`]: trait for drawing prompts by theme and kind

pub mod bank;
pub mod deck;
