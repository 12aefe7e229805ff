//! Quota value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Completed turns required from every player before a session finishes
///
/// Any positive count is accepted; [`Quota::PRESETS`] lists the values
/// front ends offer by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quota(u32);

impl Quota {
    /// Quotas offered in the setup screen
    pub const PRESETS: [u32; 3] = [10, 20, 40];

    pub fn new(per_player: u32) -> Result<Self, DomainError> {
        if per_player == 0 {
            Err(DomainError::InvalidQuota(per_player))
        } else {
            Ok(Self(per_player))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Whether this quota is one of the offered presets
    pub fn is_preset(self) -> bool {
        Self::PRESETS.contains(&self.0)
    }
}

impl Default for Quota {
    fn default() -> Self {
        Self(Self::PRESETS[0])
    }
}

impl TryFrom<u32> for Quota {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quota> for u32 {
    fn from(quota: Quota) -> Self {
        quota.0
    }
}

impl std::fmt::Display for Quota {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
