//! Turn notification port
//!
//! Defines the interface for reporting what happens during a session.

use tod_domain::{Player, Prompt, Quota, SessionSummary};

/// Callback for session events
///
/// Implementations live in the presentation layer and can render turns
/// in various ways (console, GUI, etc.). Every method has a no-op default
/// so implementors only override what they display.
pub trait TurnNotifier: Send + Sync {
    /// Called once when the session becomes active
    fn on_session_started(&self, _roster: &[Player], _quota: Quota, _theme: &str) {}

    /// Called when a player's turn begins (including the first turn)
    fn on_turn_started(&self, _player: &Player, _quota: Quota) {}

    /// Called when a prompt is drawn for the current player
    fn on_prompt_revealed(&self, _player: &Player, _prompt: &Prompt) {}

    /// Called when the current player passes on their prompt
    fn on_passed(&self, _player: &Player) {}

    /// Called after a turn is counted, with the player's updated progress
    fn on_turn_completed(&self, _player: &Player, _quota: Quota) {}

    /// Called when every player has reached the quota
    fn on_session_finished(&self, _summary: &SessionSummary) {}
}

/// No-op notifier for when session events are not displayed
pub struct NoTurnNotifier;

impl TurnNotifier for NoTurnNotifier {}
