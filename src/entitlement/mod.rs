//! Entitlement derivation — access provenance and feature gating inputs.
//!
//! ## Flow
//! - **status** — resolution status of the latest entitlement fetch
//! - **record** — cached entitlement snapshot from a previous check
//! - **derive** — AccessSource + the four pure derivation functions
//! - **decision** — AccessDecision: one-shot snapshot of all derived values
//! - **legacy** — deprecated tier-named aliases over the same functions

pub mod decision;
pub mod derive;
pub mod legacy;
pub mod record;
pub mod status;

pub use decision::AccessDecision;
pub use derive::{
    derive_access_source, derive_can_access_authenticated,
    derive_has_cached_authenticated_access, derive_is_access_known, AccessSource,
};
pub use record::CachedAccessRecord;
pub use status::ResolutionStatus;
