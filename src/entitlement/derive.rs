//! Access source and the four pure derivation functions.
//!
//! All functions are total and side-effect-free. Absence of certainty
//! never grants access: unrecognized statuses and missing records fall
//! through to `None`/`false`.

use serde::{Deserialize, Serialize};

use super::record::CachedAccessRecord;
use super::status::ResolutionStatus;

/// Provenance of the current access decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessSource {
    /// Fresh authoritative server answer, this request cycle.
    Server,
    /// Stale but previously authoritative cached answer.
    Cache,
    /// No usable signal.
    None,
}

impl AccessSource {
    /// Source name as string (for logging).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Cache => "cache",
            Self::None => "none",
        }
    }
}

/// Derive where the access decision is sourced from.
///
/// `Resolved` means a fresh answer arrived this cycle, so the cache flag is
/// never consulted — resolved-but-cache-absent is still `Server`. The cache
/// only backs the decision when the server fetch degraded AND a cached
/// record exists.
pub fn derive_access_source(
    status: ResolutionStatus,
    has_cached_record: bool,
) -> AccessSource {
    match status {
        ResolutionStatus::Resolved => AccessSource::Server,
        ResolutionStatus::Degraded if has_cached_record => AccessSource::Cache,
        _ => AccessSource::None,
    }
}

/// Whether the caller has any basis, fresh or stale, for an access decision.
pub fn derive_is_access_known(source: AccessSource) -> bool {
    source != AccessSource::None
}

/// Whether cached data suffices for authenticated-tier access.
///
/// The one place a stale entitlement snapshot stands in for a live server
/// answer. Requires all of: the source is explicitly `Cache` (server
/// degraded), the record is present at the qualifying level, and the grant
/// is still active. `is_access_active` is precomputed by the caller from
/// its expiry bookkeeping; this function does not interpret time.
pub fn derive_has_cached_authenticated_access(
    source: AccessSource,
    record: Option<&CachedAccessRecord>,
    is_access_active: bool,
) -> bool {
    source == AccessSource::Cache
        && record.is_some_and(CachedAccessRecord::grants_authenticated)
        && is_access_active
}

/// The single gate consumed by feature-gating UI.
///
/// `is_access_resolved` is the caller's live check: a fresh server-confirmed
/// authenticated grant is active right now. Access is granted if either the
/// live check passed or the stale-cache fallback qualifies.
pub fn derive_can_access_authenticated(
    is_access_resolved: bool,
    has_cached_authenticated_access: bool,
) -> bool {
    is_access_resolved || has_cached_authenticated_access
}
