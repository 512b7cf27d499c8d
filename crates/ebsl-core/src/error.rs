use thiserror::Error;

/// Engine-wide error types for the EBSL trust system.
#[derive(Debug, Error)]
pub enum TrustError {
    /// Caller supplied an argument outside the operator's domain
    /// (e.g. a negative scalar multiplier).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// External attestation store error (snapshot fetch failed).
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TrustError {
    fn from(e: serde_json::Error) -> Self {
        TrustError::Serialization(e.to_string())
    }
}
