// crates/ebsl-reputation/src/opinion.rs
//
// Subjective-logic opinions and the EBSL evidence mapping.
//
// An opinion is a four-component representation of belief under
// uncertainty. Evidence counts map to opinions through the certainty
// constant `c`: more observations shrink uncertainty toward zero.

use serde::{Deserialize, Serialize};

use ebsl_core::TrustError;

/// Default certainty constant `c` for the evidence <-> opinion mapping.
pub const DEFAULT_CERTAINTY: f64 = 2.0;

/// Tolerance for the belief + disbelief + uncertainty = 1 invariant.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Positive/negative observation counts underlying an opinion.
///
/// Counts are non-negative reals. A fully dogmatic opinion (zero
/// uncertainty) has no finite evidence representation and maps to the
/// infinite-evidence sentinel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Evidence {
    /// Positive observation count.
    pub positive: f64,
    /// Negative observation count.
    pub negative: f64,
}

/// A subjective-logic opinion: belief, disbelief, uncertainty, base rate.
///
/// All components lie in [0, 1] and belief + disbelief + uncertainty = 1
/// (within `SUM_TOLERANCE`). The base rate is the prior used when
/// collapsing the opinion to a scalar expectation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Opinion {
    pub belief: f64,
    pub disbelief: f64,
    pub uncertainty: f64,
    pub base_rate: f64,
}

impl Opinion {
    /// The neutral opinion: no evidence either way, full uncertainty.
    pub fn neutral() -> Self {
        Self {
            belief: 0.0,
            disbelief: 0.0,
            uncertainty: 1.0,
            base_rate: 0.5,
        }
    }

    /// Map evidence counts to an opinion.
    ///
    /// With `total = p + n + c`: belief = p/total, disbelief = n/total,
    /// uncertainty = c/total, base rate 0.5. The sum-to-one invariant
    /// holds by construction. Negative counts are clamped to zero.
    pub fn from_evidence(positive: f64, negative: f64, certainty: f64) -> Self {
        let p = positive.max(0.0);
        let n = negative.max(0.0);
        let total = p + n + certainty;
        Self {
            belief: p / total,
            disbelief: n / total,
            uncertainty: certainty / total,
            base_rate: 0.5,
        }
    }

    /// Map a raw trust level in [0, 100] to an opinion backed by
    /// `evidence_amount` total observations.
    ///
    /// The level is clamped, normalized to t in [0, 1], and split into
    /// `t * amount` positive and `(1 - t) * amount` negative evidence.
    pub fn from_trust_level(trust_level: i64, evidence_amount: f64) -> Self {
        let t = trust_level.clamp(0, 100) as f64 / 100.0;
        Self::from_evidence(
            t * evidence_amount,
            (1.0 - t) * evidence_amount,
            DEFAULT_CERTAINTY,
        )
    }

    /// Recover the evidence counts behind this opinion.
    ///
    /// Inverse of `from_evidence` for the same `certainty`. A dogmatic
    /// opinion (uncertainty = 0) returns the infinite-evidence sentinel.
    pub fn to_evidence(&self, certainty: f64) -> Evidence {
        if self.uncertainty == 0.0 {
            return Evidence {
                positive: f64::INFINITY,
                negative: f64::INFINITY,
            };
        }
        let scale = certainty / self.uncertainty;
        Evidence {
            positive: self.belief * scale,
            negative: self.disbelief * scale,
        }
    }

    /// Cumulative fusion (⊕): combine two independent bodies of evidence
    /// about the same proposition.
    ///
    /// Commutative and associative within floating tolerance. When both
    /// inputs are fully certain the denominator vanishes; that degenerate
    /// case falls back to the neutral opinion rather than dividing by
    /// zero.
    pub fn fuse(&self, other: &Opinion) -> Opinion {
        let u1 = self.uncertainty;
        let u2 = other.uncertainty;
        let denom = u1 + u2 - u1 * u2;
        if denom < 1e-12 {
            return Opinion::neutral();
        }
        Opinion {
            belief: (self.belief * u2 + other.belief * u1) / denom,
            disbelief: (self.disbelief * u2 + other.disbelief * u1) / denom,
            uncertainty: (u1 * u2) / denom,
            base_rate: (self.base_rate * u2 + other.base_rate * u1) / (u1 + u2),
        }
    }

    /// Scale the evidence behind this opinion by `alpha`.
    ///
    /// `alpha = 0` erases all evidence, leaving full uncertainty with the
    /// base rate preserved. A negative `alpha` is a caller bug and fails
    /// with `TrustError::InvalidArgument`.
    pub fn scalar_multiply(&self, alpha: f64) -> Result<Opinion, TrustError> {
        if alpha < 0.0 {
            return Err(TrustError::InvalidArgument(format!(
                "scalar multiplier must be non-negative, got {alpha}"
            )));
        }
        if alpha == 0.0 {
            return Ok(Opinion {
                belief: 0.0,
                disbelief: 0.0,
                uncertainty: 1.0,
                base_rate: self.base_rate,
            });
        }
        let denom = alpha * (self.belief + self.disbelief) + self.uncertainty;
        Ok(Opinion {
            belief: alpha * self.belief / denom,
            disbelief: alpha * self.disbelief / denom,
            uncertainty: self.uncertainty / denom,
            base_rate: self.base_rate,
        })
    }

    /// The scalar probability estimate for this opinion:
    /// belief + uncertainty * base_rate, in [0, 1].
    pub fn expectation(&self) -> f64 {
        self.belief + self.uncertainty * self.base_rate
    }

    /// Whether the components satisfy the opinion invariants.
    pub fn is_valid(&self) -> bool {
        let in_range = |x: f64| (0.0..=1.0).contains(&x);
        in_range(self.belief)
            && in_range(self.disbelief)
            && in_range(self.uncertainty)
            && in_range(self.base_rate)
            && (self.belief + self.disbelief + self.uncertainty - 1.0).abs() <= SUM_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() < tol, "expected {a} ≈ {b} (tol {tol})");
    }

    #[test]
    fn from_evidence_components_sum_to_one() {
        let cases = [
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (5.0, 3.0),
            (100.0, 0.5),
            (0.25, 0.75),
        ];
        for (p, n) in cases {
            let op = Opinion::from_evidence(p, n, DEFAULT_CERTAINTY);
            assert!(op.is_valid(), "invalid opinion for evidence ({p}, {n}): {op:?}");
            assert_close(op.belief + op.disbelief + op.uncertainty, 1.0, SUM_TOLERANCE);
        }
    }

    #[test]
    fn zero_evidence_is_neutral() {
        let op = Opinion::from_evidence(0.0, 0.0, DEFAULT_CERTAINTY);
        assert_eq!(op, Opinion::neutral());
        assert_close(op.expectation(), 0.5, 1e-12);
    }

    #[test]
    fn negative_evidence_counts_are_clamped() {
        let op = Opinion::from_evidence(-3.0, -1.0, DEFAULT_CERTAINTY);
        assert_eq!(op, Opinion::neutral());
    }

    #[test]
    fn evidence_roundtrip_recovers_counts() {
        let cases = [(3.0, 1.0), (0.0, 7.0), (12.5, 0.0), (0.1, 0.2)];
        for (p, n) in cases {
            let ev = Opinion::from_evidence(p, n, DEFAULT_CERTAINTY)
                .to_evidence(DEFAULT_CERTAINTY);
            assert_close(ev.positive, p, 1e-9);
            assert_close(ev.negative, n, 1e-9);
        }
    }

    #[test]
    fn dogmatic_opinion_yields_infinite_evidence() {
        let dogmatic = Opinion {
            belief: 1.0,
            disbelief: 0.0,
            uncertainty: 0.0,
            base_rate: 0.5,
        };
        let ev = dogmatic.to_evidence(DEFAULT_CERTAINTY);
        assert!(ev.positive.is_infinite());
        assert!(ev.negative.is_infinite());
    }

    #[test]
    fn trust_level_clamps_out_of_range_input() {
        let high = Opinion::from_trust_level(150, 1.0);
        let max = Opinion::from_trust_level(100, 1.0);
        assert_eq!(high, max);

        let low = Opinion::from_trust_level(-50, 1.0);
        let min = Opinion::from_trust_level(0, 1.0);
        assert_eq!(low, min);
    }

    #[test]
    fn fusing_with_full_uncertainty_is_identity() {
        let op = Opinion::from_evidence(4.0, 1.0, DEFAULT_CERTAINTY);
        let fused = op.fuse(&Opinion::neutral());
        assert_close(fused.belief, op.belief, 1e-12);
        assert_close(fused.disbelief, op.disbelief, 1e-12);
        assert_close(fused.uncertainty, op.uncertainty, 1e-12);
    }

    #[test]
    fn fusion_is_commutative() {
        let a = Opinion::from_evidence(5.0, 2.0, DEFAULT_CERTAINTY);
        let b = Opinion::from_evidence(1.0, 4.0, DEFAULT_CERTAINTY);
        let ab = a.fuse(&b);
        let ba = b.fuse(&a);
        assert_close(ab.belief, ba.belief, 1e-12);
        assert_close(ab.disbelief, ba.disbelief, 1e-12);
        assert_close(ab.uncertainty, ba.uncertainty, 1e-12);
        assert_close(ab.base_rate, ba.base_rate, 1e-12);
    }

    #[test]
    fn fusion_is_associative_within_tolerance() {
        let a = Opinion::from_evidence(5.0, 2.0, DEFAULT_CERTAINTY);
        let b = Opinion::from_evidence(1.0, 4.0, DEFAULT_CERTAINTY);
        let c = Opinion::from_evidence(3.0, 3.0, DEFAULT_CERTAINTY);
        let left = a.fuse(&b).fuse(&c);
        let right = a.fuse(&b.fuse(&c));
        assert_close(left.belief, right.belief, 1e-9);
        assert_close(left.disbelief, right.disbelief, 1e-9);
        assert_close(left.uncertainty, right.uncertainty, 1e-9);
    }

    #[test]
    fn fusion_accumulates_evidence() {
        // Fusing two independent observations of the same evidence should
        // behave like counting the evidence twice.
        let single = Opinion::from_evidence(3.0, 1.0, DEFAULT_CERTAINTY);
        let fused = single.fuse(&single);
        let doubled = Opinion::from_evidence(6.0, 2.0, DEFAULT_CERTAINTY);
        assert_close(fused.belief, doubled.belief, 1e-9);
        assert_close(fused.uncertainty, doubled.uncertainty, 1e-9);
    }

    #[test]
    fn fusing_two_dogmatic_opinions_falls_back_to_neutral() {
        let yes = Opinion {
            belief: 1.0,
            disbelief: 0.0,
            uncertainty: 0.0,
            base_rate: 0.5,
        };
        let no = Opinion {
            belief: 0.0,
            disbelief: 1.0,
            uncertainty: 0.0,
            base_rate: 0.5,
        };
        assert_eq!(yes.fuse(&no), Opinion::neutral());
    }

    #[test]
    fn scalar_multiply_by_zero_erases_evidence() {
        let op = Opinion::from_evidence(9.0, 1.0, DEFAULT_CERTAINTY);
        let scaled = op.scalar_multiply(0.0).unwrap();
        assert_eq!(scaled.belief, 0.0);
        assert_eq!(scaled.disbelief, 0.0);
        assert_eq!(scaled.uncertainty, 1.0);
        assert_eq!(scaled.base_rate, op.base_rate);
    }

    #[test]
    fn scalar_multiply_by_one_is_identity() {
        let op = Opinion::from_evidence(9.0, 1.0, DEFAULT_CERTAINTY);
        let scaled = op.scalar_multiply(1.0).unwrap();
        assert_close(scaled.belief, op.belief, 1e-12);
        assert_close(scaled.disbelief, op.disbelief, 1e-12);
        assert_close(scaled.uncertainty, op.uncertainty, 1e-12);
    }

    #[test]
    fn scalar_multiply_negative_is_invalid_argument() {
        let op = Opinion::neutral();
        let err = op.scalar_multiply(-0.5).unwrap_err();
        assert!(matches!(err, ebsl_core::TrustError::InvalidArgument(_)));
    }

    #[test]
    fn scalar_multiply_preserves_invariant() {
        let op = Opinion::from_evidence(4.0, 2.0, DEFAULT_CERTAINTY);
        for alpha in [0.1, 0.5, 2.0, 10.0] {
            let scaled = op.scalar_multiply(alpha).unwrap();
            assert!(scaled.is_valid(), "invalid after alpha={alpha}: {scaled:?}");
        }
    }

    #[test]
    fn expectation_matches_definition() {
        let op = Opinion {
            belief: 0.6,
            disbelief: 0.1,
            uncertainty: 0.3,
            base_rate: 0.5,
        };
        assert_close(op.expectation(), 0.6 + 0.3 * 0.5, 1e-12);
    }
}
