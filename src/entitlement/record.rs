//! Cached entitlement record from a previous access check.

use serde::{Deserialize, Serialize};

use crate::errors::RecordError;

/// Access level that qualifies for the authenticated tier.
const LEVEL_AUTHENTICATED: &str = "authenticated";
/// Legacy tier value that qualifies. Older cached payloads carried a `tier`
/// field instead of `accessLevel`; both must keep working.
const LEGACY_TIER_PREMIUM: &str = "premium";

/// Snapshot of a previous entitlement check, as cached by the dashboard.
///
/// Payloads exist in two historical shapes: current ones carry
/// `accessLevel`, older ones carry `tier`. Both fields are optional and
/// unknown extra fields are tolerated, since cached payloads outlive
/// schema changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CachedAccessRecord {
    /// Current field name, value `"authenticated"` for the gated tier.
    #[serde(rename = "accessLevel", skip_serializing_if = "Option::is_none")]
    pub access_level: Option<String>,
    /// Legacy field name, value `"premium"` for the same tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

impl CachedAccessRecord {
    /// Whether this record counts as authenticated-level access.
    ///
    /// Single source of truth for the dual-field compatibility read:
    /// either the current `accessLevel` or the legacy `tier` alias
    /// satisfies the check. Activity/expiry is not this record's concern.
    pub fn grants_authenticated(&self) -> bool {
        self.access_level.as_deref() == Some(LEVEL_AUTHENTICATED)
            || self.tier.as_deref() == Some(LEGACY_TIER_PREMIUM)
    }

    /// Decode a cached JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, RecordError> {
        serde_json::from_str(payload).map_err(|e| RecordError::MalformedPayload {
            message: e.to_string(),
        })
    }
}
