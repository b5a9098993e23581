//! Deprecated tier-named aliases over the canonical derivation functions.
//!
//! Older dashboard code gated on "premium tier" names before the rename to
//! authenticated access. These are thin renaming wrappers, never a second
//! implementation — behavior is identical by construction.

use super::derive::{
    derive_access_source, derive_can_access_authenticated,
    derive_has_cached_authenticated_access, AccessSource,
};
use super::record::CachedAccessRecord;
use super::status::ResolutionStatus;

/// Legacy name for [`AccessSource`].
#[deprecated(note = "use AccessSource")]
pub type TierSource = AccessSource;

/// Legacy name for [`derive_access_source`].
#[deprecated(note = "use derive_access_source")]
pub fn derive_tier_source(status: ResolutionStatus, has_cached_record: bool) -> AccessSource {
    derive_access_source(status, has_cached_record)
}

/// Legacy name for [`derive_has_cached_authenticated_access`].
#[deprecated(note = "use derive_has_cached_authenticated_access")]
pub fn derive_has_cached_premium(
    source: AccessSource,
    record: Option<&CachedAccessRecord>,
    is_access_active: bool,
) -> bool {
    derive_has_cached_authenticated_access(source, record, is_access_active)
}

/// Legacy name for [`derive_can_access_authenticated`].
#[deprecated(note = "use derive_can_access_authenticated")]
pub fn derive_can_access_premium(
    is_access_resolved: bool,
    has_cached_premium: bool,
) -> bool {
    derive_can_access_authenticated(is_access_resolved, has_cached_premium)
}
