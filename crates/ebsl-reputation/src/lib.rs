// crates/ebsl-reputation/src/lib.rs
//
// ebsl-reputation: Opinion algebra, trust graph, path search, and
// reputation scoring for the EBSL web-of-trust engine.
//
// The engine is purely functional and stateless: every computation
// consumes an immutable attestation snapshot and produces a fresh result,
// so concurrent calls need no synchronization and there is nothing to
// cache or invalidate.

pub mod calculator;
pub mod discount;
pub mod graph;
pub mod opinion;
pub mod path;
pub mod summary;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use ebsl_reputation::Opinion;`

pub use calculator::{
    calculate_reputation, reputation_from_store, ComputationMethod, PathContribution,
    ReputationOptions, ReputationResult, DEFAULT_EVIDENCE_AMOUNT, SEED_EVIDENCE_AMOUNT,
};
pub use discount::{DiscountMethod, DEFAULT_THETA};
pub use graph::AttestationGraph;
pub use opinion::{Evidence, Opinion, DEFAULT_CERTAINTY};
pub use path::{find_trust_paths, TrustPath, DEFAULT_MAX_DEPTH};
pub use summary::{ReputationSummary, TrustCategory};
