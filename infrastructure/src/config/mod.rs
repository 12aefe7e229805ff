//! Configuration file loading for truth-or-dare
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRUTH_OR_DARE_*` environment variables (e.g. `TRUTH_OR_DARE_GAME__THEME`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./truth-or-dare.toml` or `./.truth-or-dare.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/truth-or-dare/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileContentConfig, FileGameConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
