// crates/ebsl-reputation/src/path.rs
//
// Bounded breadth-first search for trust paths through the attestation
// graph.
//
// The search keeps one global visited set, so every participant is
// enqueued at most once and at most one (shortest, by hop count) path per
// reachable node is discovered. This is deliberately NOT full simple-path
// enumeration, which blows up exponentially in dense graphs.

use std::collections::{HashSet, VecDeque};

use crate::graph::AttestationGraph;

/// Default bound on transitive path length, in hops.
pub const DEFAULT_MAX_DEPTH: i64 = 3;

/// An ordered chain of participant identifiers from observer to target.
pub type TrustPath = Vec<String>;

/// Find trust paths from `source` to `target`, breadth-first, bounded at
/// `max_depth` hops and `max_paths` results.
///
/// Identifiers are matched case-insensitively. Negative bounds behave as
/// zero. Given the single-visit policy the result holds at most one path
/// per call; the plural shape keeps the cap meaningful should multi-path
/// search ever be needed.
pub fn find_trust_paths(
    source: &str,
    target: &str,
    graph: &AttestationGraph,
    max_depth: i64,
    max_paths: i64,
) -> Vec<TrustPath> {
    let max_depth = max_depth.max(0) as usize;
    let max_paths = max_paths.max(0) as usize;

    let source = source.to_lowercase();
    let target = target.to_lowercase();

    let mut paths: Vec<TrustPath> = Vec::new();
    if max_paths == 0 {
        return paths;
    }

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(source.clone());

    let mut frontier: VecDeque<TrustPath> = VecDeque::new();
    frontier.push_back(vec![source]);

    while let Some(path) = frontier.pop_front() {
        let Some(last) = path.last() else {
            continue;
        };

        // A path that reached the target is recorded, not expanded.
        if *last == target {
            paths.push(path);
            if paths.len() >= max_paths {
                break;
            }
            continue;
        }

        // Hop budget exhausted for this path.
        if path.len() - 1 >= max_depth {
            continue;
        }

        for att in graph.given_by(last) {
            let next = att.subject.to_lowercase();
            if visited.insert(next.clone()) {
                let mut extended = path.clone();
                extended.push(next);
                frontier.push_back(extended);
            }
        }
    }

    tracing::debug!(
        to = %target,
        found = paths.len(),
        max_depth,
        "trust path search complete"
    );
    paths
}
