//! AccessDecision — one-shot snapshot of all derived access state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::derive::{
    derive_access_source, derive_can_access_authenticated,
    derive_has_cached_authenticated_access, derive_is_access_known, AccessSource,
};
use super::record::CachedAccessRecord;
use super::status::ResolutionStatus;

/// All derived access state for one (status, record, activity) snapshot.
///
/// Convenience bundle for callers that want every derived value at once;
/// composes the four canonical derivation functions and nothing else.
/// Recomputed on every call, never cached by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    pub source: AccessSource,
    pub is_access_known: bool,
    pub has_cached_authenticated_access: bool,
    pub can_access_authenticated: bool,
}

impl AccessDecision {
    /// Evaluate the full derivation for one snapshot of caller state.
    ///
    /// The caller is responsible for supplying an internally consistent
    /// snapshot: `is_access_active` comes from its expiry bookkeeping and
    /// `is_access_resolved` from its live server-confirmed check.
    pub fn evaluate(
        status: ResolutionStatus,
        record: Option<&CachedAccessRecord>,
        is_access_active: bool,
        is_access_resolved: bool,
    ) -> Self {
        let source = derive_access_source(status, record.is_some());
        let is_access_known = derive_is_access_known(source);
        let has_cached_authenticated_access =
            derive_has_cached_authenticated_access(source, record, is_access_active);
        let can_access_authenticated =
            derive_can_access_authenticated(is_access_resolved, has_cached_authenticated_access);

        debug!(
            status = status.as_str(),
            source = source.as_str(),
            can_access_authenticated,
            "Access derivation evaluated"
        );

        Self {
            source,
            is_access_known,
            has_cached_authenticated_access,
            can_access_authenticated,
        }
    }
}
