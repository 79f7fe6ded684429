use serde::{Deserialize, Serialize};

use super::ScoreExplanation;
use crate::config::Weights;

/// Raw signals from a sentiment/subjectivity analyzer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Sentiment direction and intensity, -1.0 (negative) to 1.0 (positive)
    pub polarity: f64,

    /// 0.0 = fully objective, 1.0 = fully subjective
    pub subjectivity: f64,
}

impl Sentiment {
    /// Build a sentiment, clamping both signals into their ranges.
    /// Non-finite signals are treated as 0.0.
    #[must_use]
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        let finite_or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            polarity: finite_or_zero(polarity).clamp(-1.0, 1.0),
            subjectivity: finite_or_zero(subjectivity).clamp(0.0, 1.0),
        }
    }
}

/// Output of the rule-based engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Baseline plus deltas, clamped to 0..=100
    pub score: u8,

    /// One entry per evaluated check, in evaluation order
    pub explanations: Vec<ScoreExplanation>,
}

impl RuleResult {
    /// Sum of all deltas before clamping
    #[must_use]
    pub fn raw_adjustment(&self) -> i64 {
        self.explanations.iter().map(|e| i64::from(e.points())).sum()
    }
}

/// Output of the linguistic engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticResult {
    /// Mean of objectivity and neutrality, clamped to 0..=100
    pub score: f64,

    /// Descriptive notes, one per metric
    pub explanations: Vec<ScoreExplanation>,

    /// Analyzer signals; absent when there was no text to analyze
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// The final artifact of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityReport {
    /// Weighted blend of both engine scores, 0.0..=100.0
    pub final_score: f64,

    /// Rule-based breakdown
    pub rules: RuleResult,

    /// Linguistic breakdown
    pub linguistic: LinguisticResult,

    /// Weights used for the blend
    pub weights: Weights,
}
