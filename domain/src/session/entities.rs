//! Session domain entities

use super::roster::build_roster;
use super::summary::{PlayerProgress, SessionSummary};
use crate::core::error::DomainError;
use crate::core::player::Player;
use crate::core::quota::Quota;
use crate::prompt::{Prompt, PromptKind};
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Collecting players, theme and quota
    #[default]
    Setup,
    /// Turns are being played
    Active,
    /// Every player reached the quota
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Setup => "setup",
            Phase::Active => "active",
            Phase::Finished => "finished",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a state-changing call
///
/// Calls made in a phase or sub-state that does not permit them are
/// ignored rather than treated as errors; the session is left exactly as
/// it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        self == Transition::Applied
    }
}

/// A single game of Truth or Dare (Aggregate Root)
///
/// Owns the roster, the turn pointer, per-player progress and the pending
/// prompt. Roster, quota and theme are frozen by [`Session::start`].
///
/// Invariants while [`Phase::Active`]:
/// - the roster holds at least two players
/// - the current player is below quota
#[derive(Debug, Clone, Default)]
pub struct Session {
    roster: Vec<Player>,
    quota: Quota,
    theme: String,
    current: usize,
    pending: Option<Prompt>,
    phase: Phase,
}

impl Session {
    /// Create a session in the setup phase
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and begin play
    ///
    /// Names are trimmed and blanks dropped before validation. On error the
    /// session stays in setup. Once started (or finished) further calls are
    /// ignored: a new game needs a new session.
    pub fn start<S: AsRef<str>>(
        &mut self,
        raw_names: &[S],
        theme: impl Into<String>,
        quota_per_player: u32,
    ) -> Result<Transition, DomainError> {
        if self.phase != Phase::Setup {
            return Ok(Transition::Ignored);
        }

        let roster = build_roster(raw_names)?;
        let quota = Quota::new(quota_per_player)?;

        self.roster = roster;
        self.quota = quota;
        self.theme = theme.into();
        self.current = 0;
        self.pending = None;
        self.phase = Phase::Active;
        Ok(Transition::Applied)
    }

    /// Whether the current player may pick truth or dare right now
    pub fn awaiting_choice(&self) -> bool {
        self.phase == Phase::Active && self.pending.is_none()
    }

    /// Show a drawn prompt to the current player
    pub fn reveal(&mut self, prompt: Prompt) -> Transition {
        if !self.awaiting_choice() {
            return Transition::Ignored;
        }
        self.pending = Some(prompt);
        Transition::Applied
    }

    /// Discard the pending prompt without using up the turn
    ///
    /// The same player stays current and may choose again.
    pub fn pass(&mut self) -> Transition {
        if self.phase != Phase::Active || self.pending.is_none() {
            return Transition::Ignored;
        }
        self.pending = None;
        Transition::Applied
    }

    /// Complete the current turn and rotate to the next player below quota
    ///
    /// Requires a pending prompt, so a turn cannot be skipped without
    /// drawing one.
    pub fn advance_turn(&mut self) -> Transition {
        if self.phase != Phase::Active || self.pending.is_none() {
            return Transition::Ignored;
        }

        self.roster[self.current].record_completed_turn();
        self.pending = None;

        if self.all_reached_quota() {
            self.phase = Phase::Finished;
            return Transition::Applied;
        }

        self.current = self.next_eligible();
        Transition::Applied
    }

    /// Find the next player below quota, scanning forward cyclically
    ///
    /// Bounded by the roster length; the current player is the last
    /// candidate.
    fn next_eligible(&self) -> usize {
        let len = self.roster.len();
        let quota = self.quota.get();
        (1..=len)
            .map(|step| (self.current + step) % len)
            .find(|&index| self.roster[index].completed() < quota)
            .unwrap_or_else(|| {
                panic!(
                    "no player below quota {} in an active session of {} players",
                    quota, len
                )
            })
    }

    fn all_reached_quota(&self) -> bool {
        self.roster
            .iter()
            .all(|player| player.completed() >= self.quota.get())
    }

    // ==================== Queries ====================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn quota(&self) -> Quota {
        self.quota
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Index of the current player, `None` before the session starts
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Setup => None,
            Phase::Active | Phase::Finished => Some(self.current),
        }
    }

    /// The player whose turn it is, `None` unless the session is active
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::Active => self.roster.get(self.current),
            Phase::Setup | Phase::Finished => None,
        }
    }

    /// The prompt shown for the current turn, if one has been chosen
    pub fn current_prompt(&self) -> Option<&Prompt> {
        self.pending.as_ref()
    }

    pub fn pending_kind(&self) -> Option<PromptKind> {
        self.pending.as_ref().map(|prompt| prompt.kind)
    }

    /// Completed turns for the named player
    ///
    /// The name is trimmed before lookup; unknown names return `None`.
    pub fn progress(&self, player_name: &str) -> Option<u32> {
        let wanted = player_name.trim();
        self.roster
            .iter()
            .find(|player| player.name().as_str() == wanted)
            .map(Player::completed)
    }

    /// Turns completed across the whole roster
    pub fn turns_completed(&self) -> u64 {
        self.roster
            .iter()
            .map(|player| u64::from(player.completed()))
            .sum()
    }

    pub fn turns_remaining(&self) -> u64 {
        let quota = self.quota.get();
        self.roster
            .iter()
            .map(|player| u64::from(quota.saturating_sub(player.completed())))
            .sum()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            theme: self.theme.clone(),
            questions_per_player: self.quota.get(),
            phase: self.phase,
            players: self
                .roster
                .iter()
                .map(|player| PlayerProgress {
                    name: player.name().to_string(),
                    completed: player.completed(),
                })
                .collect(),
            turns_completed: self.turns_completed(),
        }
    }
}
