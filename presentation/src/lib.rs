//! Presentation layer for truth-or-dare
//!
//! This crate contains CLI definitions, output formatters,
//! the console turn reporter, and the interactive game REPL.

pub mod cli;
pub mod config;
pub mod game;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use game::{GameRepl, ReplCommand};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::TurnReporter;
