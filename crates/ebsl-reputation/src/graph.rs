// crates/ebsl-reputation/src/graph.rs
//
// Attestation graph: adjacency view over a snapshot of attestation
// records.
//
// The graph is an immutable value rebuilt from the snapshot on every
// computation. There is no long-lived mutable graph to keep in sync,
// which removes the stale-cache class of bugs outright.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ebsl_core::Attestation;

/// Adjacency mapping from lower-cased attester identifier to that
/// attester's currently-active attestations, in snapshot order.
///
/// Soft-deleted records are dropped at build time. Repeated
/// (attester, subject) pairs are kept as-is — callers needing a single
/// current record per pair must pre-filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttestationGraph {
    /// Sparse adjacency entries: attester (lower-cased) -> active edges.
    pub edges: HashMap<String, Vec<Attestation>>,
}

impl AttestationGraph {
    /// Build the graph from a flat snapshot in arbitrary order.
    pub fn build(snapshot: &[Attestation]) -> Self {
        let mut edges: HashMap<String, Vec<Attestation>> = HashMap::new();
        for att in snapshot {
            if !att.is_active {
                continue;
            }
            edges
                .entry(att.attester.to_lowercase())
                .or_default()
                .push(att.clone());
        }
        Self { edges }
    }

    /// Active attestations made by `attester` (case-insensitive).
    pub fn given_by(&self, attester: &str) -> &[Attestation] {
        self.edges
            .get(&attester.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First active attestation from `attester` to `subject`
    /// (case-insensitive on both identifiers).
    pub fn find_attestation(&self, attester: &str, subject: &str) -> Option<&Attestation> {
        let subject = subject.to_lowercase();
        self.given_by(attester)
            .iter()
            .find(|att| att.subject.to_lowercase() == subject)
    }

    /// Number of attesters with at least one active attestation.
    pub fn participant_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of active attestations in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn att(attester: &str, subject: &str, level: i64) -> Attestation {
        Attestation::new(attester, subject, level, "", "0xsig")
    }

    #[test]
    fn empty_snapshot_builds_empty_graph() {
        let graph = AttestationGraph::build(&[]);
        assert_eq!(graph.participant_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.given_by("alice").is_empty());
    }

    #[test]
    fn inactive_attestations_are_excluded() {
        let mut revoked = att("alice", "bob", 90);
        revoked.revoke();
        let graph = AttestationGraph::build(&[att("alice", "carol", 70), revoked]);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.find_attestation("alice", "bob").is_none());
        assert!(graph.find_attestation("alice", "carol").is_some());
    }

    #[test]
    fn attester_keys_are_lowercased() {
        let graph = AttestationGraph::build(&[att("Alice", "Bob", 80)]);
        assert_eq!(graph.given_by("alice").len(), 1);
        assert_eq!(graph.given_by("ALICE").len(), 1);
        assert!(graph.find_attestation("aLiCe", "BOB").is_some());
    }

    #[test]
    fn snapshot_order_is_preserved_per_attester() {
        let graph = AttestationGraph::build(&[
            att("alice", "bob", 10),
            att("alice", "carol", 20),
            att("alice", "bob", 30),
        ]);
        let given = graph.given_by("alice");
        let levels: Vec<i64> = given.iter().map(|a| a.trust_level).collect();
        assert_eq!(levels, vec![10, 20, 30]);
    }

    #[test]
    fn duplicate_pairs_are_not_deduplicated() {
        let graph = AttestationGraph::build(&[
            att("alice", "bob", 10),
            att("alice", "bob", 90),
        ]);
        assert_eq!(graph.edge_count(), 2);
        // First active match wins on lookup.
        assert_eq!(
            graph.find_attestation("alice", "bob").unwrap().trust_level,
            10
        );
    }

    #[test]
    fn rebuild_after_revocation_matches_never_included() {
        let keep = att("alice", "carol", 70);
        let mut revocable = att("alice", "bob", 90);

        let with_both = AttestationGraph::build(&[keep.clone(), revocable.clone()]);
        assert_eq!(with_both.edge_count(), 2);

        revocable.revoke();
        let after_revoke = AttestationGraph::build(&[keep.clone(), revocable]);
        let never_included = AttestationGraph::build(&[keep]);
        assert_eq!(after_revoke.edge_count(), never_included.edge_count());
        assert_eq!(
            after_revoke.given_by("alice"),
            never_included.given_by("alice")
        );
    }
}
