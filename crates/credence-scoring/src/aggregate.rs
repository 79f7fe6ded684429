//! Weighted blend of the two engine scores.

use credence_core::{CredibilityReport, LinguisticResult, Result, RuleResult, Weights};
use tracing::debug;

/// Combine both engine results into a report.
///
/// Weights are validated here; with convex weights and clamped inputs the
/// blend is already within 0..=100.
#[allow(clippy::suboptimal_flops)]
pub fn aggregate(
    rules: RuleResult,
    linguistic: LinguisticResult,
    weights: Weights,
) -> Result<CredibilityReport> {
    weights.validate()?;

    let final_score =
        f64::from(rules.score) * weights.rule_based + linguistic.score * weights.ml_based;

    debug!(
        rule_score = rules.score,
        linguistic_score = linguistic.score,
        final_score,
        "aggregated credibility score"
    );

    Ok(CredibilityReport {
        final_score,
        rules,
        linguistic,
        weights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use credence_core::{CredibilityError, ScoreExplanation};

    fn rules(score: u8) -> RuleResult {
        RuleResult {
            score,
            explanations: vec![ScoreExplanation::scored(0, "Citations", "none")],
        }
    }

    fn linguistic(score: f64) -> LinguisticResult {
        LinguisticResult {
            score,
            explanations: vec![],
            sentiment: None,
        }
    }

    #[test]
    fn blends_with_weights() {
        let report = aggregate(rules(90), linguistic(60.0), Weights::default()).unwrap();
        // 90 * 0.4 + 60 * 0.6
        assert!((report.final_score - 72.0).abs() < 1e-9);
        assert_eq!(report.rules.score, 90);
        assert_eq!(report.weights, Weights::default());
    }

    #[test]
    fn extremes_stay_in_range() {
        let w = Weights::new(0.5, 0.5).unwrap();
        let top = aggregate(rules(100), linguistic(100.0), w).unwrap();
        assert!((top.final_score - 100.0).abs() < 1e-9);

        let bottom = aggregate(rules(0), linguistic(0.0), w).unwrap();
        assert!(bottom.final_score.abs() < 1e-9);
    }

    #[test]
    fn unvalidated_weights_are_rejected() {
        let w = Weights {
            rule_based: 0.8,
            ml_based: 0.8,
        };
        let err = aggregate(rules(50), linguistic(50.0), w).unwrap_err();
        assert!(matches!(err, CredibilityError::InvalidWeights(_)));
    }

    #[test]
    fn explanations_pass_through_in_order() {
        let r = RuleResult {
            score: 40,
            explanations: vec![
                ScoreExplanation::scored(-5, "Author Presence", "a"),
                ScoreExplanation::scored(15, "Citations", "b"),
            ],
        };
        let report = aggregate(r.clone(), linguistic(10.0), Weights::default()).unwrap();
        assert_eq!(report.rules, r);
    }
}
