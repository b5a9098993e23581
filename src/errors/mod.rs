//! Error types. Derivation itself is total — only cached payload
//! decoding can fail.

/// Errors that can occur decoding a cached entitlement payload.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("malformed cached entitlement payload: {message}")]
    MalformedPayload { message: String },
}
