// crates/ebsl-reputation/src/summary.rs
//
// Display-ready summaries derived from reputation results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculator::ReputationResult;

/// Trust band for a reputation score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrustCategory {
    #[serde(rename = "Highly Trusted")]
    HighlyTrusted,
    Trusted,
    Neutral,
    #[serde(rename = "Low Trust")]
    LowTrust,
    Untrusted,
}

impl TrustCategory {
    /// Band an unrounded score in [0, 100] into a category.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            TrustCategory::HighlyTrusted
        } else if score >= 60.0 {
            TrustCategory::Trusted
        } else if score >= 40.0 {
            TrustCategory::Neutral
        } else if score >= 20.0 {
            TrustCategory::LowTrust
        } else {
            TrustCategory::Untrusted
        }
    }
}

impl fmt::Display for TrustCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrustCategory::HighlyTrusted => "Highly Trusted",
            TrustCategory::Trusted => "Trusted",
            TrustCategory::Neutral => "Neutral",
            TrustCategory::LowTrust => "Low Trust",
            TrustCategory::Untrusted => "Untrusted",
        };
        f.write_str(label)
    }
}

/// Rounded, human-readable view of a `ReputationResult`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReputationSummary {
    /// Score rounded to one decimal place.
    pub score: f64,
    /// Trust band, derived from the unrounded score.
    pub category: TrustCategory,
    /// Confidence percentage: round((1 - uncertainty) * 100).
    pub confidence: u32,
    /// Belief component as a whole percentage.
    pub belief_percent: u32,
    /// Disbelief component as a whole percentage.
    pub disbelief_percent: u32,
    /// Uncertainty component as a whole percentage.
    pub uncertainty_percent: u32,
    /// Direct attestations that contributed.
    pub direct_count: usize,
    /// Valid transitive paths that contributed.
    pub transitive_count: usize,
    /// Sum of direct and transitive contributions.
    pub total_evidence: usize,
}

impl ReputationSummary {
    pub fn from_result(result: &ReputationResult) -> Self {
        let op = &result.opinion;
        Self {
            score: (result.score * 10.0).round() / 10.0,
            category: TrustCategory::from_score(result.score),
            confidence: ((1.0 - op.uncertainty) * 100.0).round() as u32,
            belief_percent: (op.belief * 100.0).round() as u32,
            disbelief_percent: (op.disbelief * 100.0).round() as u32,
            uncertainty_percent: (op.uncertainty * 100.0).round() as u32,
            direct_count: result.direct_count,
            transitive_count: result.transitive_count,
            total_evidence: result.direct_count + result.transitive_count,
        }
    }
}

impl From<&ReputationResult> for ReputationSummary {
    fn from(result: &ReputationResult) -> Self {
        Self::from_result(result)
    }
}
