//! Game session domain.
//!
//! - [`entities::Session`]: the aggregate owning roster, turn pointer and phase
//! - [`entities::Phase`]: setup → active → finished lifecycle
//! - [`roster`]: turning raw name input into a validated roster
//! - [`summary::SessionSummary`]: serializable standings snapshot

pub mod entities;
pub mod roster;
pub mod summary;
