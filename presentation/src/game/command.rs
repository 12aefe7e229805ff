//! REPL command parsing

use tod_domain::PromptKind;

/// A line of input during a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Pick truth or dare for the current turn
    Choose(PromptKind),
    /// Skip the shown prompt and choose again
    Pass,
    /// Mark the shown prompt as done and move on
    Next,
    /// Show current standings
    Score,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if let Ok(kind) = input.parse::<PromptKind>() {
            return ReplCommand::Choose(kind);
        }
        match input.to_lowercase().as_str() {
            "p" | "pass" => ReplCommand::Pass,
            "n" | "next" | "done" => ReplCommand::Next,
            "/score" | "/s" => ReplCommand::Score,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(input.to_string()),
        }
    }
}
