//! # propsight-access
//!
//! Access and entitlement derivation for the Propsight market analytics
//! dashboard. Computes, from the resolution status of the latest entitlement
//! fetch and a previously cached entitlement record, the provenance of the
//! current access decision and the final gate for authenticated-tier
//! features. Every derivation is a pure function of its inputs; the UI layer
//! supplies already-fetched data and consumes the derived booleans.

pub mod entitlement;
pub mod errors;

// Re-export the most commonly used types at the crate root.
pub use entitlement::decision::AccessDecision;
pub use entitlement::derive::{
    derive_access_source, derive_can_access_authenticated,
    derive_has_cached_authenticated_access, derive_is_access_known, AccessSource,
};
pub use entitlement::record::CachedAccessRecord;
pub use entitlement::status::ResolutionStatus;
pub use errors::RecordError;
