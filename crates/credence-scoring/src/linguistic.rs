//! Linguistic scoring from sentiment signals.

use credence_core::{LinguisticResult, ScoreExplanation, Sentiment};
use tracing::debug;

use crate::clamp_score;
use crate::lexicon::{LexiconAnalyzer, SentimentAnalyzer};

const HIGH_SUBJECTIVITY: f64 = 0.6;
const HIGH_OBJECTIVITY: f64 = 0.3;
const STRONG_SENTIMENT: f64 = 0.5;

/// Score text with the built-in lexicon analyzer
#[must_use]
pub fn score_linguistics(text: &str) -> LinguisticResult {
    score_linguistics_with(&LexiconAnalyzer, text)
}

/// Score text with any analyzer.
///
/// Blank text is not an error: it scores 0 with a single note, so an
/// aggregate report can still be produced.
#[must_use]
pub fn score_linguistics_with(analyzer: &dyn SentimentAnalyzer, text: &str) -> LinguisticResult {
    if text.trim().is_empty() {
        return LinguisticResult {
            score: 0.0,
            explanations: vec![ScoreExplanation::scored(
                -100,
                "Text Content",
                "No text could be extracted.",
            )],
            sentiment: None,
        };
    }

    let raw = analyzer.analyze(text);
    let sentiment = Sentiment::new(raw.polarity, raw.subjectivity);
    let Sentiment {
        polarity,
        subjectivity,
    } = sentiment;

    let objectivity_score = (1.0 - subjectivity) * 100.0;
    let neutrality_score = (1.0 - polarity.abs()) * 100.0;
    let score = clamp_score((objectivity_score + neutrality_score) / 2.0);

    debug!(polarity, subjectivity, score, "linguistic analysis");

    LinguisticResult {
        score,
        explanations: vec![
            ScoreExplanation::note("Linguistic Analysis", describe_subjectivity(subjectivity)),
            ScoreExplanation::note("Sentiment Analysis", describe_polarity(polarity)),
        ],
        sentiment: Some(sentiment),
    }
}

fn describe_subjectivity(subjectivity: f64) -> String {
    if subjectivity > HIGH_SUBJECTIVITY {
        format!("High Subjectivity ({subjectivity:.2}). The text seems heavily opinion-based.")
    } else if subjectivity < HIGH_OBJECTIVITY {
        format!("High Objectivity ({subjectivity:.2}). The text appears to be fact-based.")
    } else {
        format!("Moderate Subjectivity ({subjectivity:.2}). A mix of facts and opinion.")
    }
}

fn describe_polarity(polarity: f64) -> String {
    if polarity.abs() > STRONG_SENTIMENT {
        format!("Strong Sentiment ({polarity:.2}). Language is highly emotional.")
    } else {
        format!("Neutral Sentiment ({polarity:.2}). The tone is relatively neutral.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Sentiment);

    impl SentimentAnalyzer for Fixed {
        fn analyze(&self, _text: &str) -> Sentiment {
            self.0
        }
    }

    fn score_with(polarity: f64, subjectivity: f64) -> LinguisticResult {
        let analyzer = Fixed(Sentiment::new(polarity, subjectivity));
        score_linguistics_with(&analyzer, "some article text")
    }

    #[test]
    fn blank_text_scores_zero_with_one_note() {
        for text in ["", "   \n\t "] {
            let r = score_linguistics(text);
            assert!(r.score.abs() < f64::EPSILON);
            assert_eq!(r.explanations.len(), 1);
            assert_eq!(r.explanations[0].label, "Text Content");
            assert!(r.sentiment.is_none());
        }
    }

    #[test]
    fn score_is_mean_of_objectivity_and_neutrality() {
        let r = score_with(-0.4, 0.2);
        // objectivity 80, neutrality 60
        assert!((r.score - 70.0).abs() < 1e-9);

        let r = score_with(0.0, 0.0);
        assert!((r.score - 100.0).abs() < 1e-9);

        let r = score_with(1.0, 1.0);
        assert!(r.score.abs() < 1e-9);
    }

    #[test]
    fn subjectivity_bands() {
        assert!(score_with(0.0, 0.61).explanations[0].detail.starts_with("High Subjectivity (0.61)"));
        assert!(score_with(0.0, 0.6).explanations[0].detail.starts_with("Moderate Subjectivity"));
        assert!(score_with(0.0, 0.3).explanations[0].detail.starts_with("Moderate Subjectivity"));
        assert!(score_with(0.0, 0.29).explanations[0].detail.starts_with("High Objectivity (0.29)"));
    }

    #[test]
    fn polarity_bands_use_magnitude() {
        assert!(score_with(-0.75, 0.5).explanations[1].detail.starts_with("Strong Sentiment (-0.75)"));
        assert!(score_with(0.51, 0.5).explanations[1].detail.starts_with("Strong Sentiment"));
        assert!(score_with(0.5, 0.5).explanations[1].detail.starts_with("Neutral Sentiment (0.50)"));
    }

    #[test]
    fn out_of_range_analyzer_is_clamped() {
        let analyzer = Fixed(Sentiment {
            polarity: 7.0,
            subjectivity: -3.0,
        });
        let r = score_linguistics_with(&analyzer, "text");
        assert!((0.0..=100.0).contains(&r.score));
    }

    #[test]
    fn lexicon_default_runs() {
        let r = score_linguistics("The council approved the budget on Monday.");
        assert!((r.score - 100.0).abs() < 1e-9);
        assert_eq!(r.explanations.len(), 2);
    }
}
