//! CLI entrypoint for truth-or-dare
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tod_domain::{ContentBank, OutputFormat};
use tod_infrastructure::{ConfigLoader, DeckLoader, ThemedContentBank};
use tod_presentation::{Cli, GameRepl, OutputConfig, ReplConfig};
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Guard flushes the log file on drop
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting truth-or-dare");

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if let Some(path) = cli.decks {
        config.content.deck_file = Some(path);
    }
    if !cli.players.is_empty() {
        config.game.players = cli.players;
    }
    if let Some(theme) = cli.theme {
        config.game.theme = theme;
    }
    if let Some(questions) = cli.questions {
        config.game.questions_per_player = questions;
    }

    // === Dependency Injection ===
    let decks = DeckLoader::resolve(&config.content).context("Failed to load prompt decks")?;
    let bank = match cli.seed {
        Some(seed) => {
            debug!("Using seeded prompt draws (seed {})", seed);
            ThemedContentBank::seeded(decks, seed)
        }
        None => ThemedContentBank::from_entropy(decks),
    };
    let themes = bank.themes();

    if cli.list_themes {
        for theme in &themes {
            println!("{}", theme);
        }
        return Ok(());
    }

    let issues = config.validate(&themes);
    for issue in issues.iter().filter(|issue| !issue.is_error()) {
        warn!("{}", issue.message);
    }
    let errors: Vec<&str> = issues
        .iter()
        .filter(|issue| issue.is_error())
        .map(|issue| issue.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    let output = OutputConfig {
        format: config.output.format_with(cli.output.map(OutputFormat::from)),
        color: config.output.color_with(cli.no_color),
    };
    let repl = ReplConfig {
        history_file: config.repl.history_path(),
    };

    let mut game = GameRepl::new(Arc::new(bank), config.game.to_settings())
        .with_output(output)
        .with_repl(repl);
    game.run()?;

    Ok(())
}

/// Install the tracing subscriber
///
/// The `-v` count picks the level (warn, info, debug, trace) unless
/// `RUST_LOG` is set. Logs go to stderr, or to `log_file` when given.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
            let log_dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));

            let file_appender = tracing_appender::rolling::never(log_dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            builder.with_ansi(false).with_writer(non_blocking).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}
