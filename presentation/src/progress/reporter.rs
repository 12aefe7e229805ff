//! Console reporting of session events

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use tod_application::TurnNotifier;
use tod_domain::{Player, Prompt, Quota, SessionSummary};

/// Prints each session event to stdout as it happens
pub struct TurnReporter;

impl TurnReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TurnReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnNotifier for TurnReporter {
    fn on_session_started(&self, roster: &[Player], quota: Quota, theme: &str) {
        println!(
            "{}",
            ConsoleFormatter::format_session_start(roster, quota, theme)
        );
    }

    fn on_turn_started(&self, player: &Player, quota: Quota) {
        println!("{}", ConsoleFormatter::format_turn_header(player, quota));
    }

    fn on_prompt_revealed(&self, _player: &Player, prompt: &Prompt) {
        println!("{}", ConsoleFormatter::format_prompt(prompt));
    }

    fn on_passed(&self, player: &Player) {
        println!("{} {} passed", "->".cyan(), player.name());
    }

    fn on_turn_completed(&self, player: &Player, quota: Quota) {
        println!(
            "  {} {} ({}/{})",
            "v".green(),
            player.name(),
            player.completed(),
            quota
        );
    }

    fn on_session_finished(&self, summary: &SessionSummary) {
        println!(
            "\n{} Everyone completed {} questions!",
            "*".green().bold(),
            summary.questions_per_player
        );
    }
}
