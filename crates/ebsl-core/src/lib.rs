// crates/ebsl-core/src/lib.rs
//
// ebsl-core: Core types, errors, and store traits for the EBSL
// web-of-trust engine.
//
// This is the leaf crate the engine crate depends on. It defines the
// canonical attestation record, the workspace error type, and the trait
// seam to the external attestation store.

pub mod attestation;
pub mod error;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use ebsl_core::Attestation;`

pub use attestation::Attestation;
pub use error::TrustError;
pub use traits::AttestationStore;
