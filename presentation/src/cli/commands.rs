//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final standings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored standings table
    Text,
    /// JSON session summary
    Json,
}

impl From<OutputFormat> for tod_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => tod_domain::OutputFormat::Text,
            OutputFormat::Json => tod_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for truth-or-dare
#[derive(Parser, Debug)]
#[command(name = "truth-or-dare")]
#[command(author, version, about = "Turn-based Truth or Dare for the terminal")]
#[command(long_about = r#"
Truth or Dare rotates turns between players. On each turn the current
player picks a truth or a dare, then either passes (and picks again) or
completes it. The game ends once every player has completed the chosen
number of questions.

Configuration files are loaded from (in priority order):
1. --config <path>            Explicit config file
2. ./truth-or-dare.toml       Project-level config
3. ~/.config/truth-or-dare/config.toml   Global config

TRUTH_OR_DARE_* environment variables override every file, with `__`
separating sections (e.g. TRUTH_OR_DARE_GAME__THEME=Party).

Example:
  truth-or-dare Alice Bob Carol
  truth-or-dare -t Outdoor -q 20 Alice Bob
  truth-or-dare --decks party.toml -t Party
"#)]
pub struct Cli {
    /// Player names (asked interactively when omitted)
    #[arg(value_name = "PLAYER")]
    pub players: Vec<String>,

    /// Theme to draw prompts from
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Questions each player must complete (usually 10, 20 or 40)
    #[arg(short = 'q', long = "questions", value_name = "N",
          value_parser = clap::value_parser!(u32).range(1..))]
    pub questions: Option<u32>,

    /// Seed for prompt selection, for reproducible games
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Extra deck file (TOML) to load
    #[arg(long, value_name = "PATH")]
    pub decks: Option<PathBuf>,

    /// Output format for the final standings
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_long_about_lists_env_overrides() {
        let command = Cli::command();
        let about = command.get_long_about().unwrap().to_string();
        assert!(about.contains("TRUTH_OR_DARE_GAME__THEME"));
    }

    #[test]
    fn test_parse_players_and_options() {
        let cli = Cli::parse_from([
            "truth-or-dare",
            "-t",
            "Outdoor",
            "-q",
            "20",
            "--seed",
            "7",
            "Alice",
            "Bob",
        ]);
        assert_eq!(cli.players, vec!["Alice", "Bob"]);
        assert_eq!(cli.theme.as_deref(), Some("Outdoor"));
        assert_eq!(cli.questions, Some(20));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_zero_questions_rejected() {
        assert!(Cli::try_parse_from(["truth-or-dare", "-q", "0"]).is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        let cli = Cli::parse_from(["truth-or-dare", "-o", "json", "-vv"]);
        let format: tod_domain::OutputFormat = cli.output.unwrap().into();
        assert_eq!(format, tod_domain::OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }
}
