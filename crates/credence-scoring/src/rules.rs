//! Rule-based credibility checks.
//!
//! Starts from a neutral 50 and applies six independent checks in a fixed
//! order. The order of the resulting explanations is part of the output:
//! the report is read top to bottom.

use credence_core::{
    host_from_url, DomainTable, DomainTier, ReputationDeltas, RuleResult, ScoreExplanation,
    ScoringConfig,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Neutral starting score
pub const BASELINE: i32 = 50;

/// Only the opening of an article is searched for a byline
const BYLINE_WINDOW_CHARS: usize = 500;

const BYLINE_BONUS: i32 = 10;
const NO_BYLINE_PENALTY: i32 = -5;
const CITATION_BONUS: i32 = 15;
const CLICKBAIT_PENALTY: i32 = -15;
const SHALLOW_PENALTY: i32 = -10;

/// Either count above this triggers the sensationalism check
const SENSATIONAL_TRIGGER: usize = 5;
/// Combined count that is tolerated before points are taken
const SENSATIONAL_ALLOWANCE: usize = 10;
const MAX_SENSATIONAL_PENALTY: usize = 20;

// "by"/"author" followed by at least two name-like words. Matched
// case-insensitively, so the capitalization is not actually enforced.
static BYLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(by|author)\s+([A-Z][a-z]+(\s+[A-Z][a-z]+)+)").expect("valid byline regex")
});

static CITATIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(sources|references|citations|bibliography)\b")
        .expect("valid citation regex")
});

static ALL_CAPS_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{4,}\b").expect("valid caps regex"));

static CLICKBAIT_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(will blow your mind|you won['’]t believe|shocking|secret|what happens next)\b",
    )
    .expect("valid clickbait regex")
});

static LISTICLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\d+\s+(reasons|tips|tricks|ways)\s+").expect("valid listicle regex")
});

/// Rule engine bound to one configuration.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    domains: DomainTable,
    reputation: ReputationDeltas,
    word_count_threshold: usize,
}

impl RuleEngine {
    /// Build an engine from a scoring configuration
    #[must_use]
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            domains: DomainTable::from_config(&config.domains),
            reputation: config.reputation,
            word_count_threshold: config.word_count_threshold,
        }
    }

    /// The domain table used for source reputation
    #[must_use]
    pub const fn domains(&self) -> &DomainTable {
        &self.domains
    }

    /// Score an article.
    ///
    /// Source reputation is only checked when `url` is given and the
    /// headline only when `title` is non-blank; every other check always
    /// contributes one explanation.
    #[must_use]
    pub fn score(&self, text: &str, url: Option<&str>, title: Option<&str>) -> RuleResult {
        let mut explanations = Vec::with_capacity(6);

        if let Some(url) = url {
            explanations.push(self.check_source(url));
        }
        explanations.push(check_byline(text));
        explanations.push(check_citations(text));
        explanations.push(check_sensationalism(text));
        if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
            explanations.push(check_headline(title));
        }
        explanations.push(self.check_depth(text));

        for e in &explanations {
            debug!(check = %e.label, delta = e.points(), "rule evaluated");
        }

        // Summed as i64 so configured deltas cannot overflow.
        let raw = i64::from(BASELINE)
            + explanations
                .iter()
                .map(|e| i64::from(e.points()))
                .sum::<i64>();

        RuleResult {
            score: clamp_points(raw),
            explanations,
        }
    }

    fn check_source(&self, url: &str) -> ScoreExplanation {
        const LABEL: &str = "Source Reputation";

        let Some(host) = host_from_url(url) else {
            return ScoreExplanation::scored(0, LABEL, "Domain is not on predefined lists.");
        };

        match self.domains.classify(&host) {
            DomainTier::High => ScoreExplanation::scored(
                self.reputation.high,
                LABEL,
                format!("Domain '{host}' is highly credible."),
            ),
            DomainTier::Medium => ScoreExplanation::scored(
                self.reputation.medium,
                LABEL,
                format!("Domain '{host}' is moderately credible (often opinionated)."),
            ),
            DomainTier::Low => ScoreExplanation::scored(
                self.reputation.low,
                LABEL,
                format!("Domain '{host}' has low credibility."),
            ),
            DomainTier::Unclassified => {
                ScoreExplanation::scored(0, LABEL, "Domain is not on predefined lists.")
            }
        }
    }

    fn check_depth(&self, text: &str) -> ScoreExplanation {
        const LABEL: &str = "Article Depth";

        let words = word_count(text);
        if words < self.word_count_threshold {
            ScoreExplanation::scored(
                SHALLOW_PENALTY,
                LABEL,
                format!("The article is very short ({words} words), suggesting a lack of depth."),
            )
        } else {
            ScoreExplanation::scored(
                0,
                LABEL,
                format!("Article has sufficient length ({words} words)."),
            )
        }
    }
}

/// Score an article with a one-off engine built from `config`
#[must_use]
pub fn score_rules(
    config: &ScoringConfig,
    text: &str,
    url: Option<&str>,
    title: Option<&str>,
) -> RuleResult {
    RuleEngine::from_config(config).score(text, url, title)
}

/// Whitespace-separated word count
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Points taken for all-caps words and exclamation marks.
///
/// Zero until the combined count passes the allowance, then two points per
/// extra occurrence, capped. Never negative.
#[must_use]
pub fn sensationalism_penalty(caps: usize, exclamations: usize) -> i32 {
    let excess = caps
        .saturating_add(exclamations)
        .saturating_sub(SENSATIONAL_ALLOWANCE);
    let penalty = excess.saturating_mul(2).min(MAX_SENSATIONAL_PENALTY);
    i32::try_from(penalty).unwrap_or(i32::MAX)
}

/// Returns true if a headline matches any clickbait pattern
#[must_use]
pub fn is_clickbait(title: &str) -> bool {
    let title = title.trim();
    CLICKBAIT_PHRASE.is_match(title) || title.ends_with('?') || LISTICLE.is_match(title)
}

fn check_byline(text: &str) -> ScoreExplanation {
    const LABEL: &str = "Author Presence";

    if BYLINE.is_match(leading_chars(text, BYLINE_WINDOW_CHARS)) {
        ScoreExplanation::scored(BYLINE_BONUS, LABEL, "An author byline was found.")
    } else {
        ScoreExplanation::scored(NO_BYLINE_PENALTY, LABEL, "No clear author byline detected.")
    }
}

fn check_citations(text: &str) -> ScoreExplanation {
    const LABEL: &str = "Citations";

    if CITATIONS.is_match(text) {
        ScoreExplanation::scored(CITATION_BONUS, LABEL, "The article appears to cite sources.")
    } else {
        ScoreExplanation::scored(0, LABEL, "No dedicated sources section found.")
    }
}

fn check_sensationalism(text: &str) -> ScoreExplanation {
    const LABEL: &str = "Sensationalism";

    let caps = ALL_CAPS_WORD.find_iter(text).count();
    let exclamations = text.matches('!').count();

    if caps > SENSATIONAL_TRIGGER || exclamations > SENSATIONAL_TRIGGER {
        ScoreExplanation::scored(
            -sensationalism_penalty(caps, exclamations),
            LABEL,
            format!(
                "Excessive use of ALL CAPS or '!' detected ({caps} all-caps words, {exclamations} exclamation marks)."
            ),
        )
    } else {
        ScoreExplanation::scored(0, LABEL, "Language appears temperate.")
    }
}

fn check_headline(title: &str) -> ScoreExplanation {
    const LABEL: &str = "Headline Analysis";

    if is_clickbait(title) {
        ScoreExplanation::scored(CLICKBAIT_PENALTY, LABEL, "The title appears to be clickbait.")
    } else {
        ScoreExplanation::scored(0, LABEL, "Title seems straightforward.")
    }
}

/// The first `n` characters of `text`, on a char boundary
fn leading_chars(text: &str, n: usize) -> &str {
    text.char_indices().nth(n).map_or(text, |(i, _)| &text[..i])
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn clamp_points(raw: i64) -> u8 {
    if raw < 0 {
        0
    } else if raw > 100 {
        100
    } else {
        raw as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credence_core::Preset;
    use proptest::prelude::*;

    fn engine() -> RuleEngine {
        RuleEngine::from_config(&Preset::Standard.config())
    }

    /// `n` words of plain lower-case filler with no byline, citation or caps.
    fn filler(n: usize) -> String {
        vec!["the"; n].join(" ")
    }

    fn labels(result: &RuleResult) -> Vec<&str> {
        result.explanations.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn text_only_runs_four_checks_in_order() {
        let r = engine().score(&filler(300), None, None);
        assert_eq!(
            labels(&r),
            ["Author Presence", "Citations", "Sensationalism", "Article Depth"]
        );
        // 50 - 5 (no byline)
        assert_eq!(r.score, 45);
    }

    #[test]
    fn all_checks_in_order_with_url_and_title() {
        let r = engine().score(&filler(300), Some("https://example.org/a"), Some("Plain title"));
        assert_eq!(
            labels(&r),
            [
                "Source Reputation",
                "Author Presence",
                "Citations",
                "Sensationalism",
                "Headline Analysis",
                "Article Depth"
            ]
        );
        assert!(r.explanations.iter().all(|e| e.delta.is_some()));
    }

    #[test]
    fn subdomain_gets_high_tier_bonus() {
        let text = filler(300);
        let with = engine().score(&text, Some("http://news.bbc.com/x"), None);
        let without = engine().score(&text, None, None);
        assert_eq!(with.explanations[0].delta, Some(30));
        assert_eq!(i32::from(with.score) - i32::from(without.score), 30);
    }

    #[test]
    fn tier_deltas() {
        let text = filler(300);
        let e = engine();
        let first = |url: &str| e.score(&text, Some(url), None).explanations[0].points();
        assert_eq!(first("https://www.forbes.com/x"), 5);
        assert_eq!(first("https://infowars.com/x"), -35);
        assert_eq!(first("https://unknown.example/x"), 0);
        assert_eq!(first("not a url"), 0);
    }

    #[test]
    fn clickbait_title_costs_exactly_fifteen() {
        let text = filler(300);
        let bait = engine().score(&text, None, Some("You Won't Believe What Happens Next!"));
        let plain = engine().score(&text, None, Some("Report on Economic Trends"));
        assert_eq!(i32::from(plain.score) - i32::from(bait.score), 15);
        assert!(bait
            .explanations
            .iter()
            .any(|e| e.detail.to_lowercase().contains("clickbait")));
    }

    #[test]
    fn clickbait_patterns() {
        assert!(is_clickbait("The SECRET they don't want you to know"));
        assert!(is_clickbait("Is coffee good for you?"));
        assert!(is_clickbait("10 reasons to move to Lisbon"));
        assert!(is_clickbait("You won’t believe this"));
        assert!(!is_clickbait("Report on Economic Trends"));
        assert!(!is_clickbait("Secretary of State visits Berlin"));
        assert!(!is_clickbait("10 reasons"));
    }

    #[test]
    fn blank_title_is_skipped() {
        let r = engine().score(&filler(300), None, Some("   "));
        assert!(!labels(&r).contains(&"Headline Analysis"));
    }

    #[test]
    fn byline_detection() {
        let e = engine();
        let with = format!("By Jane Doe\n{}", filler(300));
        assert_eq!(e.score(&with, None, None).explanations[0].delta, Some(10));

        let author = format!("Author: nothing here. author Maria Lopez wrote {}", filler(10));
        assert_eq!(e.score(&author, None, None).explanations[0].delta, Some(10));

        // Single token after "by" is not a byline
        let single = format!("by Reuters. {}", filler(300));
        assert_eq!(e.score(&single, None, None).explanations[0].delta, Some(-5));
    }

    #[test]
    fn byline_only_searched_in_opening() {
        let late = format!("{} By Jane Doe", filler(200));
        assert!(late.chars().count() > 500);
        assert_eq!(engine().score(&late, None, None).explanations[0].delta, Some(-5));
    }

    #[test]
    fn citations_need_whole_words() {
        let e = engine();
        let cited = format!("{} Sources: the agency", filler(10));
        assert_eq!(e.score(&cited, None, None).explanations[1].delta, Some(15));

        let partial = format!("{} resourcesful", filler(10));
        assert_eq!(e.score(&partial, None, None).explanations[1].delta, Some(0));
    }

    #[test]
    fn depth_penalty_is_exactly_ten() {
        let e = engine();
        let short = e.score(&filler(249), None, None);
        let long = e.score(&filler(250), None, None);
        assert_eq!(i32::from(long.score) - i32::from(short.score), 10);
    }

    #[test]
    fn sensationalism_penalty_shape() {
        assert_eq!(sensationalism_penalty(0, 0), 0);
        assert_eq!(sensationalism_penalty(6, 0), 0);
        assert_eq!(sensationalism_penalty(6, 6), 4);
        assert_eq!(sensationalism_penalty(10, 10), 20);
        assert_eq!(sensationalism_penalty(10_000, 10_000), 20);

        let mut last = 0;
        for n in 0..100 {
            let p = sensationalism_penalty(n, n / 2);
            assert!(p >= last);
            assert!(p <= 20);
            last = p;
        }
    }

    #[test]
    fn temperate_language_is_neutral() {
        let text = format!("NASA and the FBI said {}!", filler(300));
        let r = engine().score(&text, None, None);
        assert_eq!(r.explanations[2].delta, Some(0));
        assert_eq!(r.explanations[2].detail, "Language appears temperate.");
    }

    #[test]
    fn shouting_is_clamped_at_zero() {
        let text = format!("{} {}", "WAKE UP SHEEPLE".repeat(50), "!".repeat(10_000));
        let r = engine().score(&text, Some("https://infowars.com/x"), Some("SHOCKING secret?"));
        assert_eq!(r.score, 0);
        assert!(r.raw_adjustment() < -50);
    }

    #[test]
    fn best_case_is_clamped_at_hundred() {
        let config = ScoringConfig {
            reputation: ReputationDeltas {
                high: 80,
                medium: 5,
                low: -35,
            },
            ..Preset::Standard.config()
        };
        let text = format!("By Jane Doe. References below. {}", filler(300));
        let r = score_rules(&config, &text, Some("https://reuters.com/a"), None);
        assert_eq!(r.score, 100);
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        let text = "By Jane Doe. Sources listed below.";

        let generous = ScoringConfig {
            reputation: ReputationDeltas {
                high: i32::MAX,
                medium: 5,
                low: -35,
            },
            ..Preset::Standard.config()
        };
        let r = score_rules(&generous, text, Some("https://bbc.com/x"), None);
        assert_eq!(r.score, 100);
        assert!(r.raw_adjustment() > i64::from(i32::MAX));

        let harsh = ScoringConfig {
            reputation: ReputationDeltas {
                high: 30,
                medium: 5,
                low: i32::MIN,
            },
            ..Preset::Standard.config()
        };
        let r = score_rules(&harsh, "WAKE UP!!!!!!", Some("https://infowars.com/x"), None);
        assert_eq!(r.score, 0);
    }

    #[test]
    fn nytimes_end_to_end_rule_score() {
        let body = format!(
            "{} The figures come from several official sources and are listed in the references.",
            filler(290)
        );
        assert!(word_count(&body) >= 250);

        let e = engine();
        let url = Some("https://www.nytimes.com/article");
        let title = Some("Report on Economic Trends");

        let without_byline = e.score(&body, url, title);
        assert_eq!(without_byline.score, 90);

        let with_byline = e.score(&format!("By Jane Doe. {body}"), url, title);
        assert_eq!(with_byline.score, 100);
    }

    #[test]
    fn classic_preset_uses_its_own_deltas() {
        let config = Preset::Classic.config();
        let r = score_rules(&config, &filler(300), Some("https://bbc.com/x"), None);
        assert_eq!(r.explanations[0].delta, Some(25));
        // forbes.com is not classified without a medium tier
        let r = score_rules(&config, &filler(300), Some("https://forbes.com/x"), None);
        assert_eq!(r.explanations[0].delta, Some(0));
    }

    proptest! {
        #[test]
        fn score_always_in_range(
            text in ".{0,400}",
            title in proptest::option::of(".{0,40}"),
            bangs in 0usize..2000,
        ) {
            let text = format!("{text}{}", "!".repeat(bangs));
            let r = engine().score(&text, Some("https://infowars.com/"), title.as_deref());
            prop_assert!(r.score <= 100);
            prop_assert!(r.explanations.len() >= 4);
        }

        #[test]
        fn scoring_is_deterministic(text in ".{0,300}", title in ".{0,40}") {
            let e = engine();
            let a = e.score(&text, Some("https://bbc.com/x"), Some(title.as_str()));
            let b = e.score(&text, Some("https://bbc.com/x"), Some(title.as_str()));
            prop_assert_eq!(a, b);
        }
    }
}
