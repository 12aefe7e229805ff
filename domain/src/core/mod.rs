//! Core domain concepts shared across all subdomains.
//!
//! - [`player::PlayerName`]: a validated, trimmed display name
//! - [`player::Player`]: a roster entry with its completed turn count
//! - [`quota::Quota`]: completed turns required per player
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod player;
pub mod quota;
