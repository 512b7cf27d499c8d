// crates/ebsl-reputation/src/discount.rs
//
// Trust-discounting strategies for multi-hop reasoning.
//
// Discounting propagates an opinion through an intermediary: x is the
// opinion held about the intermediary, y the intermediary's opinion about
// the proposition. The canonical strategies reduce to one shared
// scalar-discount step parameterized by how the weight is extracted
// from x.

use serde::{Deserialize, Serialize};

use ebsl_core::TrustError;

use crate::opinion::{Opinion, DEFAULT_CERTAINTY};

/// Default evidence ceiling for the EBSL weight extraction.
pub const DEFAULT_THETA: f64 = 100.0;

/// Strategy for discounting an opinion through an intermediary's trust.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DiscountMethod {
    /// EBSL discount (⊡): weight = positive evidence of x / theta.
    /// Theta must exceed the maximum positive evidence reachable by any
    /// opinion in the system; that is the caller's responsibility.
    Ebsl {
        theta: f64,
    },
    /// Belief-weighted discount (⊙): weight = x.belief clamped to [0, 1].
    /// The default.
    Generic,
    /// Josang's original multiplication-style discount (⊗). Kept for
    /// compatibility only; it does not distribute over fusion and is
    /// never the default.
    Legacy,
}

impl Default for DiscountMethod {
    fn default() -> Self {
        DiscountMethod::Generic
    }
}

impl DiscountMethod {
    /// Discount opinion `y` through opinion `x` using this strategy.
    pub fn apply(&self, x: &Opinion, y: &Opinion) -> Result<Opinion, TrustError> {
        match self {
            DiscountMethod::Ebsl { theta } => {
                let g = x.to_evidence(DEFAULT_CERTAINTY).positive / theta;
                y.scalar_multiply(g)
            }
            DiscountMethod::Generic => {
                let g = x.belief.clamp(0.0, 1.0);
                y.scalar_multiply(g)
            }
            DiscountMethod::Legacy => Ok(Opinion {
                belief: x.belief * y.belief,
                disbelief: x.belief * y.disbelief,
                uncertainty: x.disbelief + x.uncertainty + x.belief * y.uncertainty,
                base_rate: y.base_rate,
            }),
        }
    }
}
