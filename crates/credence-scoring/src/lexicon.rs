//! Sentiment and subjectivity estimation.
//!
//! [`SentimentAnalyzer`] is the seam the linguistic engine depends on. The
//! built-in [`LexiconAnalyzer`] averages per-word scores from a small
//! embedded adjective lexicon, with intensifiers and negation applied to the
//! word that follows them.

use credence_core::Sentiment;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Anything that can turn text into polarity and subjectivity signals.
pub trait SentimentAnalyzer: Send + Sync {
    /// Analyze non-empty text
    fn analyze(&self, text: &str) -> Sentiment;
}

/// Negation flips and dampens polarity of the next lexicon word
const NEGATION_FACTOR: f64 = -0.5;

/// A negation only reaches this many tokens ahead
const NEGATION_REACH: usize = 3;

// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    ("absurd", -0.5, 1.0),
    ("accurate", 0.4, 0.57),
    ("alarming", -0.6, 0.9),
    ("amazing", 0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("appalling", -0.8, 1.0),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("bizarre", -0.3, 0.8),
    ("boring", -1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("careful", -0.1, 1.0),
    ("catastrophic", -0.9, 1.0),
    ("certain", 0.21, 0.57),
    ("clear", 0.1, 0.38),
    ("corrupt", -0.5, 0.8),
    ("crazy", -0.6, 0.9),
    ("critical", 0.0, 0.8),
    ("dangerous", -0.6, 0.9),
    ("dark", -0.15, 0.4),
    ("deadly", -0.2, 0.6),
    ("delightful", 1.0, 1.0),
    ("destructive", -0.6, 0.8),
    ("difficult", -0.5, 1.0),
    ("dirty", -0.6, 0.8),
    ("disastrous", -0.9, 1.0),
    ("disgusting", -1.0, 1.0),
    ("dishonest", -0.6, 0.9),
    ("dreadful", -1.0, 1.0),
    ("dumb", -0.375, 0.5),
    ("easy", 0.43, 0.83),
    ("effective", 0.6, 0.8),
    ("evil", -1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("exciting", 0.3, 0.8),
    ("extraordinary", 0.3, 0.75),
    ("fabulous", 0.4, 0.9),
    ("fair", 0.7, 0.9),
    ("fake", -0.5, 1.0),
    ("false", -0.4, 0.6),
    ("fantastic", 0.4, 0.9),
    ("fascinating", 0.7, 0.9),
    ("fine", 0.42, 0.5),
    ("foolish", -0.6, 0.9),
    ("fortunate", 0.4, 0.8),
    ("frightening", -0.7, 0.9),
    ("funny", 0.25, 1.0),
    ("glorious", 0.7, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("harmful", -0.5, 0.8),
    ("honest", 0.6, 0.9),
    ("horrible", -1.0, 1.0),
    ("horrific", -1.0, 1.0),
    ("huge", 0.4, 0.9),
    ("hysterical", -0.3, 0.9),
    ("ideal", 0.9, 0.9),
    ("idiotic", -0.8, 1.0),
    ("important", 0.4, 1.0),
    ("impossible", -0.67, 1.0),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("insane", -1.0, 1.0),
    ("interesting", 0.5, 0.5),
    ("kind", 0.6, 0.9),
    ("lame", -0.5, 1.0),
    ("lovely", 0.5, 0.75),
    ("lucky", 0.33, 1.0),
    ("magnificent", 1.0, 1.0),
    ("marvelous", 1.0, 1.0),
    ("massive", 0.0, 1.0),
    ("miserable", -1.0, 1.0),
    ("monstrous", -0.8, 1.0),
    ("nasty", -1.0, 1.0),
    ("nice", 0.6, 1.0),
    ("obvious", 0.0, 0.5),
    ("outrageous", -0.8, 1.0),
    ("perfect", 1.0, 1.0),
    ("pathetic", -1.0, 1.0),
    ("pleasant", 0.73, 0.97),
    ("poor", -0.4, 0.6),
    ("positive", 0.23, 0.55),
    ("negative", -0.3, 0.4),
    ("powerful", 0.3, 1.0),
    ("pretty", 0.25, 1.0),
    ("proud", 0.8, 1.0),
    ("radical", 0.1, 0.4),
    ("ridiculous", -0.33, 1.0),
    ("sad", -0.5, 1.0),
    ("scandalous", -0.8, 1.0),
    ("scary", -0.5, 1.0),
    ("serious", -0.33, 0.67),
    ("shameful", -0.9, 1.0),
    ("shocking", -1.0, 1.0),
    ("silly", -0.5, 0.9),
    ("sinister", -0.6, 0.9),
    ("spectacular", 0.6, 0.9),
    ("strange", 0.0, 0.15),
    ("strong", 0.43, 0.73),
    ("stunning", 0.5, 1.0),
    ("stupid", -0.8, 1.0),
    ("successful", 0.75, 0.95),
    ("superb", 1.0, 1.0),
    ("surprising", 0.3, 0.8),
    ("terrible", -1.0, 1.0),
    ("terrific", 1.0, 1.0),
    ("terrifying", -1.0, 1.0),
    ("tragic", -0.75, 1.0),
    ("tremendous", 0.5, 0.8),
    ("true", 0.35, 0.65),
    ("ugly", -0.7, 1.0),
    ("unbelievable", 0.5, 0.9),
    ("unfair", -0.5, 0.9),
    ("unfortunate", -0.5, 0.8),
    ("unprecedented", 0.1, 0.9),
    ("useful", 0.3, 0.0),
    ("useless", -0.5, 0.2),
    ("vile", -1.0, 1.0),
    ("violent", -0.8, 1.0),
    ("wise", 0.7, 0.9),
    ("wonderful", 1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("completely", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.2),
    ("so", 1.2),
    ("too", 1.2),
    ("totally", 1.3),
    ("truly", 1.2),
    ("utterly", 1.5),
    ("very", 1.3),
];

static WORDS: Lazy<HashMap<&'static str, (f64, f64)>> =
    Lazy::new(|| LEXICON.iter().map(|(w, p, s)| (*w, (*p, *s))).collect());

static BOOSTERS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

/// Lexicon-based analyzer shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    /// Create the analyzer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    #[allow(clippy::cast_precision_loss)]
    fn analyze(&self, text: &str) -> Sentiment {
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();

        let mut boost = 1.0_f64;
        let mut negation_left = 0_usize;

        for token in tokens(text) {
            if is_negation(&token) {
                negation_left = NEGATION_REACH;
                continue;
            }
            if let Some(factor) = BOOSTERS.get(token.as_str()) {
                boost *= factor;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = WORDS.get(token.as_str()) {
                let mut polarity = (polarity * boost).clamp(-1.0, 1.0);
                if negation_left > 0 {
                    polarity *= NEGATION_FACTOR;
                }
                polarities.push(polarity);
                subjectivities.push((subjectivity * boost).min(1.0));
                negation_left = 0;
            } else {
                negation_left = negation_left.saturating_sub(1);
            }
            boost = 1.0;
        }

        if polarities.is_empty() {
            return Sentiment::default();
        }

        let n = polarities.len() as f64;
        Sentiment::new(
            polarities.iter().sum::<f64>() / n,
            subjectivities.iter().sum::<f64>() / n,
        )
    }
}

/// Lower-cased word tokens; apostrophes are kept so "don't" stays whole
fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase().replace('’', "'"))
}

fn is_negation(token: &str) -> bool {
    matches!(token, "not" | "no" | "never" | "nor" | "cannot" | "without")
        || token.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> Sentiment {
        LexiconAnalyzer::new().analyze(text)
    }

    #[test]
    fn factual_text_is_neutral_and_objective() {
        let s = analyze("The committee met on Tuesday and published its annual budget figures.");
        assert!(s.polarity.abs() < f64::EPSILON);
        assert!(s.subjectivity.abs() < f64::EPSILON);
    }

    #[test]
    fn emotional_text_is_polar_and_subjective() {
        let s = analyze("This is a terrible, disgusting and horrible decision.");
        assert!(s.polarity < -0.9);
        assert!(s.subjectivity > 0.9);

        let s = analyze("What a wonderful, perfect day.");
        assert!(s.polarity > 0.9);
    }

    #[test]
    fn negation_flips_and_dampens() {
        let plain = analyze("The plan is good.");
        let negated = analyze("The plan is not good.");
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
        assert!(negated.polarity.abs() < plain.polarity.abs());

        let contraction = analyze("It isn't good.");
        assert!(contraction.polarity < 0.0);
    }

    #[test]
    fn intensifier_strengthens_next_word() {
        let plain = analyze("a good result");
        let boosted = analyze("a very good result");
        assert!(boosted.polarity > plain.polarity);
        assert!(boosted.polarity <= 1.0);
        assert!(boosted.subjectivity <= 1.0);
    }

    #[test]
    fn negation_does_not_reach_far() {
        let s = analyze("not one of the members of the panel said it was good");
        assert!(s.polarity > 0.0);
    }

    #[test]
    fn signals_stay_in_range() {
        let s = analyze(&"utterly extremely incredibly awesome ".repeat(50));
        assert!((-1.0..=1.0).contains(&s.polarity));
        assert!((0.0..=1.0).contains(&s.subjectivity));
    }
}
