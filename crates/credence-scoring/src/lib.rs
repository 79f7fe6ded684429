//! # credence-scoring
//!
//! The scoring core: two independent engines and the blend that joins them.
//!
//! ## Pipeline
//!
//! ```text
//! text, url?, title? ──> RuleEngine ──────> RuleResult ───────┐
//!                                                             ├─> aggregate() ──> CredibilityReport
//! text ───────────────> score_linguistics ─> LinguisticResult ┘
//! ```
//!
//! Everything here is pure and synchronous. The only collaborator is the
//! [`SentimentAnalyzer`], which defaults to the embedded [`LexiconAnalyzer`].

pub mod aggregate;
pub mod lexicon;
pub mod linguistic;
pub mod report;
pub mod rules;

pub use aggregate::aggregate;
pub use lexicon::{LexiconAnalyzer, SentimentAnalyzer};
pub use linguistic::{score_linguistics, score_linguistics_with};
pub use report::{render_markdown, render_text};
pub use rules::{score_rules, RuleEngine};

/// Clamp a score into the 0..=100 range
#[must_use]
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
