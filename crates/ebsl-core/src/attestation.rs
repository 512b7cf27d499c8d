// crates/ebsl-core/src/attestation.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signed trust statement by one participant (attester) about another
/// (subject).
///
/// Attestations are the only input the reputation engine consumes. They are
/// created and updated by the attester and logically deleted by flipping
/// `is_active` to false — records are never physically removed, so the
/// history stays immutable. Signature verification happens upstream; the
/// engine carries `signature` as an opaque field only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attestation {
    /// Identifier of the participant making the statement.
    pub attester: String,
    /// Identifier of the participant the statement is about.
    pub subject: String,
    /// Trust level in [0, 100]. Out-of-range values from malformed external
    /// data are clamped at the point of use, never rejected.
    pub trust_level: i64,
    /// Free-form comment attached by the attester.
    pub comment: String,
    /// Opaque signature bytes (hex/base64 as produced upstream). Not
    /// verified here.
    pub signature: String,
    /// When the attestation was made.
    pub timestamp: DateTime<Utc>,
    /// Soft-delete flag. Inactive attestations are excluded from every
    /// computation but remain in the record set.
    pub is_active: bool,
}

impl Attestation {
    /// Create an active attestation timestamped now.
    pub fn new(
        attester: impl Into<String>,
        subject: impl Into<String>,
        trust_level: i64,
        comment: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            attester: attester.into(),
            subject: subject.into(),
            trust_level,
            comment: comment.into(),
            signature: signature.into(),
            timestamp: Utc::now(),
            is_active: true,
        }
    }

    /// Soft-delete this attestation. The record remains; it just stops
    /// contributing to graph builds and reputation computations.
    pub fn revoke(&mut self) {
        self.is_active = false;
    }

    /// Trust level clamped to the valid [0, 100] range.
    pub fn clamped_trust_level(&self) -> i64 {
        self.trust_level.clamp(0, 100)
    }
}
