//! Console output formatter for game state

use colored::Colorize;
use tod_domain::{OutputFormat, Player, Prompt, PromptKind, Quota, SessionSummary};

const WIDTH: usize = 48;
const BAR_WIDTH: usize = 20;

/// Formats turns, prompts and standings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner shown when a session starts
    pub fn format_session_start(roster: &[Player], quota: Quota, theme: &str) -> String {
        let names = roster
            .iter()
            .map(|p| p.name().as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}\n{} {}\n{} {}\n{} {}\n",
            Self::header("Truth or Dare"),
            "Players:".cyan().bold(),
            names,
            "Theme:".cyan().bold(),
            theme,
            "Questions each:".cyan().bold(),
            quota
        )
    }

    /// Line announcing whose turn it is, with their progress so far
    pub fn format_turn_header(player: &Player, quota: Quota) -> String {
        format!(
            "\n{} {}",
            format!("── {}'s Turn ──", player.name()).yellow().bold(),
            format!("({}/{})", player.completed(), quota).dimmed()
        )
    }

    /// A revealed prompt
    pub fn format_prompt(prompt: &Prompt) -> String {
        let label = format!("{}:", prompt.kind.display_name());
        let label = match prompt.kind {
            PromptKind::Truth => label.blue().bold(),
            PromptKind::Dare => label.red().bold(),
        };
        format!("{}\n{}", label, Self::indent(&prompt.text, "  "))
    }

    /// Standings table with a progress bar per player
    pub fn format_standings(summary: &SessionSummary) -> String {
        let quota = summary.questions_per_player;
        let name_width = summary
            .players
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut output = Self::section_header("Standings");
        for player in &summary.players {
            let line = format!(
                "  {:<width$}  {}  {}/{}",
                player.name,
                Self::bar(player.completed, quota),
                player.completed,
                quota,
                width = name_width
            );
            if player.completed >= quota {
                output.push_str(&line.green().to_string());
            } else {
                output.push_str(&line);
            }
            output.push('\n');
        }
        output.push_str(&format!(
            "\n  {} {}/{}\n",
            "Turns played:".dimmed(),
            summary.turns_completed,
            summary.turns_required()
        ));
        output
    }

    /// Format as JSON
    pub fn format_json(summary: &SessionSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
    }

    /// Final standings in the configured format
    pub fn format_summary(summary: &SessionSummary, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format!(
                "{}{}{}",
                Self::header("Game Over"),
                Self::format_standings(summary),
                Self::footer()
            ),
            OutputFormat::Json => Self::format_json(summary),
        }
    }

    fn bar(completed: u32, quota: u32) -> String {
        let filled = if quota == 0 {
            BAR_WIDTH
        } else {
            (u64::from(completed.min(quota)) * BAR_WIDTH as u64 / u64::from(quota)) as usize
        };
        format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "{}\n{:^width$}\n{}\n",
            line.cyan(),
            title.bold(),
            line.cyan(),
            width = WIDTH
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(32))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(WIDTH).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
