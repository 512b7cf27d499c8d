// crates/ebsl-reputation/src/calculator.rs
//
// Reputation calculation: direct + transitive evidence combination.
//
// Orchestrates the full pipeline: fold direct attestations into one
// opinion, search for a trust path when an observer is given, discount
// each valid path's hop opinions back toward the observer, fuse
// everything, and collapse to a 0-100 score.

use serde::{Deserialize, Serialize};

use ebsl_core::{Attestation, AttestationStore, TrustError};

use crate::discount::DiscountMethod;
use crate::graph::AttestationGraph;
use crate::opinion::Opinion;
use crate::path::{find_trust_paths, TrustPath, DEFAULT_MAX_DEPTH};

/// Evidence amount behind the first direct attestation's conversion.
pub const SEED_EVIDENCE_AMOUNT: f64 = 1.0;

/// Default evidence amount for every other trust-level conversion
/// (subsequent direct attestations and transitive hops).
///
/// Deliberately distinct from `SEED_EVIDENCE_AMOUNT`; the asymmetry is
/// load-bearing for score compatibility and must not be unified.
pub const DEFAULT_EVIDENCE_AMOUNT: f64 = 10.0;

/// Tunable knobs for a reputation computation. All optional in spirit —
/// `Default` gives the canonical configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationOptions {
    /// Bound on transitive path length, in hops.
    pub max_path_depth: i64,
    /// Cap on the number of returned trust paths.
    pub max_paths: i64,
    /// Discount strategy for multi-hop propagation.
    pub discount_method: DiscountMethod,
    /// Minimum trust level a hop attestation needs; any weaker hop
    /// discards its whole path.
    pub min_trust_level: i64,
    /// Evidence amount for the first direct attestation.
    pub seed_evidence_amount: f64,
    /// Evidence amount for subsequent direct attestations and for
    /// transitive hops.
    pub evidence_amount: f64,
}

impl Default for ReputationOptions {
    fn default() -> Self {
        Self {
            max_path_depth: DEFAULT_MAX_DEPTH,
            max_paths: 10,
            discount_method: DiscountMethod::default(),
            min_trust_level: 50,
            seed_evidence_amount: SEED_EVIDENCE_AMOUNT,
            evidence_amount: DEFAULT_EVIDENCE_AMOUNT,
        }
    }
}

/// How a reputation result was computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ComputationMethod {
    /// Global query: direct attestations only, no path search.
    DirectOnly,
    /// Personalized query: direct evidence plus discounted trust paths
    /// from the observer.
    Transitive,
}

/// One valid trust path's contribution to the final opinion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathContribution {
    /// The chain of participants, observer first, target last.
    pub path: TrustPath,
    /// The path's discounted opinion.
    pub opinion: Opinion,
    /// Scalar expectation of that opinion.
    pub expectation: f64,
}

/// The outcome of a reputation computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationResult {
    /// The combined opinion about the target.
    pub opinion: Opinion,
    /// Expectation of the combined opinion scaled to [0, 100].
    pub score: f64,
    /// Number of direct attestations folded in.
    pub direct_count: usize,
    /// Number of valid transitive paths fused in.
    pub transitive_count: usize,
    /// Per-path breakdown for explainability.
    pub paths: Vec<PathContribution>,
    /// Which pipeline produced this result.
    pub method: ComputationMethod,
}

/// Fold pre-filtered direct attestations into a single opinion.
///
/// Empty input yields the neutral opinion. The first attestation converts
/// with the seed evidence amount, every subsequent one with the general
/// amount, each fused cumulatively into the accumulator.
fn direct_opinion(attestations: &[Attestation], options: &ReputationOptions) -> Opinion {
    let Some(first) = attestations.first() else {
        return Opinion::neutral();
    };
    let mut acc = Opinion::from_trust_level(first.trust_level, options.seed_evidence_amount);
    for att in &attestations[1..] {
        let op = Opinion::from_trust_level(att.trust_level, options.evidence_amount);
        acc = acc.fuse(&op);
    }
    acc
}

/// Convert one trust path into a discounted opinion.
///
/// Walks consecutive pairs, requiring an active attestation per hop with
/// trust level at or above the minimum; any missing or weak hop discards
/// the whole path (no partial credit). Hop opinions fold through the
/// discount operator from the last hop backward to the first, so opinions
/// closer to the observer discount the accumulated result more deeply.
fn path_opinion(
    path: &TrustPath,
    graph: &AttestationGraph,
    options: &ReputationOptions,
) -> Result<Option<Opinion>, TrustError> {
    if path.len() < 2 {
        // A trivial path carries no hop evidence.
        return Ok(None);
    }

    let mut hops: Vec<Opinion> = Vec::with_capacity(path.len() - 1);
    for pair in path.windows(2) {
        let Some(att) = graph.find_attestation(&pair[0], &pair[1]) else {
            tracing::debug!(from = %pair[0], to = %pair[1], "hop has no active attestation, path discarded");
            return Ok(None);
        };
        if att.clamped_trust_level() < options.min_trust_level {
            tracing::debug!(
                from = %pair[0],
                to = %pair[1],
                level = att.trust_level,
                min = options.min_trust_level,
                "hop below minimum trust level, path discarded"
            );
            return Ok(None);
        }
        hops.push(Opinion::from_trust_level(
            att.trust_level,
            options.evidence_amount,
        ));
    }

    let mut acc = match hops.pop() {
        Some(op) => op,
        None => return Ok(None),
    };
    while let Some(hop) = hops.pop() {
        acc = options.discount_method.apply(&hop, &acc)?;
    }
    Ok(Some(acc))
}

/// Compute the reputation of `target` from an immutable snapshot view.
///
/// `direct_attestations` are the pre-filtered active attestations whose
/// subject is `target`. Without an `observer` the result is direct-only;
/// with one, trust paths from the observer are searched, discounted, and
/// fused in. Total and deterministic: malformed trust levels are clamped
/// and negative bounds behave as zero. The only loud failure is an
/// invalid discount weight (e.g. a caller-supplied negative theta).
pub fn calculate_reputation(
    target: &str,
    direct_attestations: &[Attestation],
    graph: &AttestationGraph,
    observer: Option<&str>,
    options: &ReputationOptions,
) -> Result<ReputationResult, TrustError> {
    let direct = direct_opinion(direct_attestations, options);
    let direct_count = direct_attestations.len();

    let Some(observer) = observer else {
        // Global queries never trigger the transitive search.
        return Ok(ReputationResult {
            score: direct.expectation() * 100.0,
            opinion: direct,
            direct_count,
            transitive_count: 0,
            paths: Vec::new(),
            method: ComputationMethod::DirectOnly,
        });
    };

    let found = find_trust_paths(
        observer,
        target,
        graph,
        options.max_path_depth,
        options.max_paths,
    );

    let mut contributions: Vec<PathContribution> = Vec::new();
    for path in found {
        if let Some(opinion) = path_opinion(&path, graph, options)? {
            contributions.push(PathContribution {
                path,
                expectation: opinion.expectation(),
                opinion,
            });
        }
    }

    // Fusion is commutative and associative, so the combine order does
    // not matter.
    let mut combined = direct;
    for contribution in &contributions {
        combined = combined.fuse(&contribution.opinion);
    }

    tracing::debug!(
        subject = %target,
        observer = %observer,
        direct_count,
        transitive_count = contributions.len(),
        score = combined.expectation() * 100.0,
        "reputation computed"
    );

    Ok(ReputationResult {
        score: combined.expectation() * 100.0,
        opinion: combined,
        direct_count,
        transitive_count: contributions.len(),
        paths: contributions,
        method: ComputationMethod::Transitive,
    })
}

/// Compute reputation straight from an external attestation store.
///
/// Pulls one snapshot (full set for the graph, received set for the
/// direct evidence), rebuilds the graph, and delegates to
/// `calculate_reputation`. The two reads need only be internally
/// consistent for this call.
pub async fn reputation_from_store(
    store: &dyn AttestationStore,
    target: &str,
    observer: Option<&str>,
    options: &ReputationOptions,
) -> Result<ReputationResult, TrustError> {
    let snapshot = store.fetch_all().await?;
    let graph = AttestationGraph::build(&snapshot);
    let direct: Vec<Attestation> = store
        .fetch_received(target)
        .await?
        .into_iter()
        .filter(|att| att.is_active)
        .collect();
    calculate_reputation(target, &direct, &graph, observer, options)
}
