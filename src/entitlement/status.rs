//! Resolution status of the most recent entitlement fetch.

use serde::{Deserialize, Serialize};

/// Outcome of the latest attempt to fetch authoritative entitlement data.
///
/// `Resolved` means a fresh server answer arrived this cycle. `Degraded`
/// means the fetch failed but a previously cached answer may exist. Every
/// other outcome carries no usable signal for access derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionStatus {
    Resolved,
    Degraded,
    Error,
    Pending,
    /// Any status tag not in the known set. Fail-closed: derives to no access.
    #[serde(other)]
    Unknown,
}

impl ResolutionStatus {
    /// Status name as string (for config, logging).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::Degraded => "degraded",
            Self::Error => "error",
            Self::Pending => "pending",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a status tag. Total: unrecognized tags map to `Unknown`
    /// rather than failing, so a malformed caller input can never grant
    /// more than the no-signal path.
    pub fn parse(s: &str) -> Self {
        match s {
            "resolved" => Self::Resolved,
            "degraded" => Self::Degraded,
            "error" => Self::Error,
            "pending" => Self::Pending,
            _ => Self::Unknown,
        }
    }
}

impl From<&str> for ResolutionStatus {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
