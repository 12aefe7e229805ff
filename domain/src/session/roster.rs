//! Roster construction from raw name input

use crate::core::error::DomainError;
use crate::core::player::{Player, PlayerName};
use std::collections::HashSet;

/// Minimum number of players a session needs
pub const MIN_PLAYERS: usize = 2;

/// Normalize raw names into a roster
///
/// Names are trimmed and blank entries dropped, keeping the relative order
/// of the rest. Fails if fewer than [`MIN_PLAYERS`] names remain or if two
/// names collide after trimming.
pub fn build_roster<S: AsRef<str>>(raw_names: &[S]) -> Result<Vec<Player>, DomainError> {
    let names: Vec<PlayerName> = raw_names.iter().filter_map(PlayerName::try_new).collect();

    if names.len() < MIN_PLAYERS {
        return Err(DomainError::InsufficientPlayers { found: names.len() });
    }

    let mut seen = HashSet::with_capacity(names.len());
    for name in &names {
        if !seen.insert(name.as_str()) {
            return Err(DomainError::DuplicatePlayer(name.to_string()));
        }
    }

    Ok(names.into_iter().map(Player::new).collect())
}
