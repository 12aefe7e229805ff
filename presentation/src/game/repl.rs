//! REPL (Read-Eval-Print Loop) for an interactive game

use super::command::ReplCommand;
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::TurnReporter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tod_application::{GameSettings, SessionEngine};
use tod_domain::{ContentBank, DomainError, Transition};
use tracing::{debug, warn};

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameOutcome {
    Finished,
    Quit,
}

/// Interactive game REPL
pub struct GameRepl<B: ContentBank + ?Sized + 'static> {
    bank: Arc<B>,
    settings: GameSettings,
    output: OutputConfig,
    repl: ReplConfig,
}

impl<B: ContentBank + ?Sized + 'static> GameRepl<B> {
    /// Create a new GameRepl
    pub fn new(bank: Arc<B>, settings: GameSettings) -> Self {
        Self {
            bank,
            settings,
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
        }
    }

    /// Set output configuration
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Set REPL configuration
    pub fn with_repl(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Run the interactive REPL until the players quit
    pub fn run(&mut self) -> RlResult<()> {
        if !self.output.color {
            colored::control::set_override(false);
        }

        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.repl.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match self.play_game(&mut rl)? {
                GameOutcome::Quit => {
                    println!("Bye!");
                    break;
                }
                GameOutcome::Finished => {
                    if !Self::ask_replay(&mut rl)? {
                        println!("Thanks for playing!");
                        break;
                    }
                }
            }
        }

        if let Some(ref path) = self.repl.history_file
            && let Err(e) = rl.save_history(path)
        {
            warn!("Failed to save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                Truth or Dare                │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Theme: {}  |  Questions per player: {}",
            self.settings.theme, self.settings.questions_per_player
        );
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  t, truth       - Pick a truth");
        println!("  d, dare        - Pick a dare");
        println!("  p, pass        - Skip the shown prompt and pick again");
        println!("  n, next, done  - Finish the shown prompt");
        println!("  /score         - Show current standings");
        println!("  /help, /h, /?  - Show this help");
        println!("  /quit, /exit, /q - Exit the game");
        println!();
    }

    /// Start a session and play it to the end or until the players quit
    fn play_game(&mut self, rl: &mut DefaultEditor) -> RlResult<GameOutcome> {
        let Some(mut engine) = self.start_engine(rl)? else {
            return Ok(GameOutcome::Quit);
        };

        loop {
            if engine.is_finished() {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_summary(&engine.summary(), self.output.format)
                );
                return Ok(GameOutcome::Finished);
            }

            let prompt = if engine.current_prompt().is_some() {
                "[n]ext / [p]ass > "
            } else {
                "[t]ruth or [d]are? > "
            };

            let line = match rl.readline(prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(GameOutcome::Quit),
                Err(err) => return Err(err),
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let _ = rl.add_history_entry(line);

            match ReplCommand::parse(line) {
                ReplCommand::Choose(kind) => match engine.choose_kind(kind) {
                    Ok(Transition::Applied) => {}
                    Ok(Transition::Ignored) => {
                        println!(
                            "{}",
                            "Finish this one first: type n when done or p to pass".dimmed()
                        );
                    }
                    Err(e) => {
                        eprintln!("{} {}", "Error:".red().bold(), e);
                        return Ok(GameOutcome::Quit);
                    }
                },
                ReplCommand::Pass => {
                    if engine.pass() == Transition::Ignored {
                        println!("{}", "Nothing to pass yet: pick t or d".dimmed());
                    }
                }
                ReplCommand::Next => {
                    if engine.advance_turn() == Transition::Ignored {
                        println!("{}", "Pick t or d first".dimmed());
                    }
                }
                ReplCommand::Score => {
                    println!("{}", ConsoleFormatter::format_standings(&engine.summary()));
                }
                ReplCommand::Help => Self::print_help(),
                ReplCommand::Quit => return Ok(GameOutcome::Quit),
                ReplCommand::Unknown(input) => {
                    println!("Unknown command: {}", input);
                    println!("Type /help for available commands");
                }
            }
        }
    }

    /// Build an engine and start it, asking for players until the roster is valid
    ///
    /// Returns `None` when the players leave during setup or the settings
    /// cannot start a game.
    fn start_engine(&mut self, rl: &mut DefaultEditor) -> RlResult<Option<SessionEngine<B>>> {
        loop {
            if self.settings.players.is_empty() {
                match Self::collect_players(rl)? {
                    Some(players) => self.settings.players = players,
                    None => return Ok(None),
                }
            }

            let mut engine = SessionEngine::new(Arc::clone(&self.bank))
                .with_notifier(Arc::new(TurnReporter::new()));

            match engine.start_with(&self.settings) {
                Ok(_) => return Ok(Some(engine)),
                Err(
                    e @ (DomainError::InsufficientPlayers { .. } | DomainError::DuplicatePlayer(_)),
                ) => {
                    debug!("Roster rejected: {}", e);
                    eprintln!("{} {}", "Error:".red().bold(), e);
                    self.settings.players.clear();
                }
                Err(e) => {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                    return Ok(None);
                }
            }
        }
    }

    /// Read player names, one per line, until an empty line
    fn collect_players(rl: &mut DefaultEditor) -> RlResult<Option<Vec<String>>> {
        println!("Enter player names, one per line. Leave a line empty to start.");
        let mut players = Vec::new();
        loop {
            let prompt = format!("Player {}: ", players.len() + 1);
            match rl.readline(&prompt) {
                Ok(line) => {
                    let name = line.trim();
                    if name.is_empty() {
                        return Ok(Some(players));
                    }
                    if name == "/quit" || name == "/exit" || name == "/q" {
                        return Ok(None);
                    }
                    players.push(name.to_string());
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(err),
            }
        }
    }

    fn ask_replay(rl: &mut DefaultEditor) -> RlResult<bool> {
        match rl.readline("Play again with the same settings? [y/N] ") {
            Ok(answer) => Ok(matches!(
                answer.trim().to_lowercase().as_str(),
                "y" | "yes"
            )),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
