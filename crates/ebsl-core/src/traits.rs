// crates/ebsl-core/src/traits.rs

use async_trait::async_trait;

use crate::attestation::Attestation;
use crate::error::TrustError;

/// Trait for the external attestation store the engine reads from.
///
/// Implemented by whatever holds the attestation records — a ledger
/// client, a smart-contract reader, an in-memory fixture in tests. The
/// engine only needs the reads below to be internally consistent within a
/// single call; it never writes.
#[async_trait]
pub trait AttestationStore: Send + Sync {
    /// Fetch a snapshot of every attestation record, active or not.
    async fn fetch_all(&self) -> Result<Vec<Attestation>, TrustError>;

    /// Fetch all attestations made by the given attester.
    async fn fetch_given(&self, attester: &str) -> Result<Vec<Attestation>, TrustError>;

    /// Fetch all attestations whose subject is the given participant.
    async fn fetch_received(&self, subject: &str) -> Result<Vec<Attestation>, TrustError>;
}
