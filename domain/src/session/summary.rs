//! Session standings snapshot

use super::entities::Phase;
use serde::{Deserialize, Serialize};

/// Progress of one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub name: String,
    pub completed: u32,
}

/// Point-in-time view of a session, used for standings and JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub theme: String,
    pub questions_per_player: u32,
    pub phase: Phase,
    pub players: Vec<PlayerProgress>,
    pub turns_completed: u64,
}

impl SessionSummary {
    /// Total turns the session needs before it can finish
    pub fn turns_required(&self) -> u64 {
        u64::from(self.questions_per_player) * self.players.len() as u64
    }
}
