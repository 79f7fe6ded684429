//! Scoring configuration and built-in presets.
//!
//! A [`ScoringConfig`] is built once (from a [`Preset`] or a TOML file),
//! validated, and then passed by reference into the engines. Nothing in the
//! scoring path mutates it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{CredibilityError, Result};

/// Tolerance when checking that the blend weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Largest magnitude a reputation delta may have
pub const MAX_REPUTATION_DELTA: i32 = 100;

/// Blend weights for the two engines.
///
/// Both weights must lie in 0.0..=1.0 and sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Weight of the rule-based score
    pub rule_based: f64,
    /// Weight of the linguistic score
    pub ml_based: f64,
}

impl Weights {
    /// Create validated weights
    pub fn new(rule_based: f64, ml_based: f64) -> Result<Self> {
        let weights = Self {
            rule_based,
            ml_based,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Check range and sum
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("rule_based", self.rule_based), ("ml_based", self.ml_based)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CredibilityError::InvalidWeights(format!(
                    "{name} must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        let sum = self.rule_based + self.ml_based;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CredibilityError::InvalidWeights(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }

        Ok(())
    }

    /// Rule weight as a whole percentage, for display
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rule_percent(&self) -> i64 {
        (self.rule_based * 100.0).round() as i64
    }

    /// Linguistic weight as a whole percentage, for display
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn ml_percent(&self) -> i64 {
        (self.ml_based * 100.0).round() as i64
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            rule_based: 0.4,
            ml_based: 0.6,
        }
    }
}

/// Domain suffix lists per reputation tier.
///
/// Order within a list is match priority; tiers are always consulted
/// high, then medium, then low.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainLists {
    /// High credibility suffixes
    #[serde(default = "standard_high")]
    pub high: Vec<String>,
    /// Medium credibility suffixes
    #[serde(default = "standard_medium")]
    pub medium: Vec<String>,
    /// Low credibility suffixes
    #[serde(default = "standard_low")]
    pub low: Vec<String>,
}

/// Points awarded by the source reputation check per tier.
///
/// Each delta must lie within +/-[`MAX_REPUTATION_DELTA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationDeltas {
    /// Bonus for a high-tier source
    pub high: i32,
    /// Bonus for a medium-tier source
    pub medium: i32,
    /// Adjustment for a low-tier source (negative)
    pub low: i32,
}

impl Default for ReputationDeltas {
    fn default() -> Self {
        Self {
            high: 30,
            medium: 5,
            low: -35,
        }
    }
}

/// Immutable configuration for one scoring setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Blend weights
    pub weights: Weights,

    /// Reputation tier lists
    pub domains: DomainLists,

    /// Points per reputation tier
    pub reputation: ReputationDeltas,

    /// Articles below this many words lose depth points
    pub word_count_threshold: usize,

    /// Raw text below this many words is not analyzed at all
    pub min_input_words: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Preset::Standard.config()
    }
}

impl ScoringConfig {
    /// Parse and validate a TOML document. Missing fields fall back to the
    /// standard preset.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check weights, reputation deltas and domain entries
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        let deltas = [
            ("high", self.reputation.high),
            ("medium", self.reputation.medium),
            ("low", self.reputation.low),
        ];
        for (tier, delta) in deltas {
            if !(-MAX_REPUTATION_DELTA..=MAX_REPUTATION_DELTA).contains(&delta) {
                return Err(CredibilityError::Config(format!(
                    "{tier} reputation delta {delta} is outside \
                     -{MAX_REPUTATION_DELTA}..={MAX_REPUTATION_DELTA}"
                )));
            }
        }

        let lists = [
            ("high", &self.domains.high),
            ("medium", &self.domains.medium),
            ("low", &self.domains.low),
        ];
        for (tier, entries) in lists {
            if let Some(bad) = entries.iter().find(|e| e.trim().is_empty()) {
                return Err(CredibilityError::Config(format!(
                    "empty domain entry {bad:?} in {tier} list"
                )));
            }
        }

        Ok(())
    }

    /// Replace the weights, validating them
    pub fn with_weights(mut self, weights: Weights) -> Result<Self> {
        weights.validate()?;
        self.weights = weights;
        Ok(self)
    }
}

/// Built-in scoring setups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Full tier lists, 40/60 rule/linguistic blend
    #[default]
    Standard,
    /// The first-generation setup: no medium tier, 50/50 blend
    Classic,
    /// Standard lists with an even 50/50 blend
    Balanced,
}

impl Preset {
    /// All presets, for listings
    pub const ALL: [Self; 3] = [Self::Standard, Self::Classic, Self::Balanced];

    /// One-line summary
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Standard => "Full high/medium/low lists, 40% rules / 60% linguistic",
            Self::Classic => "Short high/low lists, no medium tier, 50% / 50%",
            Self::Balanced => "Standard lists, 50% rules / 50% linguistic",
        }
    }

    /// Build the configuration for this preset
    #[must_use]
    pub fn config(self) -> ScoringConfig {
        match self {
            Self::Standard => ScoringConfig {
                weights: Weights::default(),
                domains: standard_domains(),
                reputation: ReputationDeltas::default(),
                word_count_threshold: 250,
                min_input_words: 50,
            },
            Self::Classic => ScoringConfig {
                weights: Weights {
                    rule_based: 0.5,
                    ml_based: 0.5,
                },
                domains: classic_domains(),
                reputation: ReputationDeltas {
                    high: 25,
                    medium: 5,
                    low: -30,
                },
                word_count_threshold: 250,
                min_input_words: 50,
            },
            Self::Balanced => ScoringConfig {
                weights: Weights {
                    rule_based: 0.5,
                    ml_based: 0.5,
                },
                ..Self::Standard.config()
            },
        }
    }
}

impl FromStr for Preset {
    type Err = CredibilityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "default" => Ok(Self::Standard),
            "classic" => Ok(Self::Classic),
            "balanced" => Ok(Self::Balanced),
            _ => Err(CredibilityError::Config(format!(
                "unknown preset: {s} (valid presets: standard, classic, balanced)"
            ))),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Classic => write!(f, "classic"),
            Self::Balanced => write!(f, "balanced"),
        }
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn standard_domains() -> DomainLists {
    DomainLists {
        high: owned(&[
            // News & journalism
            "reuters.com",
            "apnews.com",
            "bbc.com",
            "npr.org",
            "pbs.org",
            "nytimes.com",
            "wsj.com",
            "washingtonpost.com",
            "theguardian.com",
            "propublica.org",
            "theatlantic.com",
            "economist.com",
            // Academic & scientific
            ".gov",
            ".edu",
            "nature.com",
            "sciencemag.org",
            "thelancet.com",
            "cell.com",
            "arxiv.org",
            "jstor.org",
            "pubmed.ncbi.nlm.nih.gov",
        ]),
        medium: owned(&[
            "forbes.com",
            "huffpost.com",
            "buzzfeednews.com",
            "theverge.com",
            "vox.com",
            "slate.com",
            "vice.com",
            "salon.com",
            "msnbc.com",
            "foxnews.com",
            "nypost.com",
        ]),
        low: owned(&[
            "infowars.com",
            "breitbart.com",
            "dailycaller.com",
            "thegatewaypundit.com",
            "naturalnews.com",
            "wnd.com",
            "theblaze.com",
            "dailywire.com",
            // Satire
            "theonion.com",
            "babylonbee.com",
            "worldnewsdailyreport.com",
        ]),
    }
}

fn standard_high() -> Vec<String> {
    standard_domains().high
}

fn standard_medium() -> Vec<String> {
    standard_domains().medium
}

fn standard_low() -> Vec<String> {
    standard_domains().low
}

fn classic_domains() -> DomainLists {
    DomainLists {
        high: owned(&[
            "reuters.com",
            "apnews.com",
            "bbc.com",
            "npr.org",
            "pbs.org",
            "nytimes.com",
            "wsj.com",
            "washingtonpost.com",
            "theguardian.com",
            ".gov",
            ".edu",
            "nature.com",
            "sciencemag.org",
        ]),
        medium: Vec::new(),
        low: owned(&[
            "infowars.com",
            "breitbart.com",
            "dailycaller.com",
            "thegatewaypundit.com",
            "naturalnews.com",
            "worldnewsdailyreport.com",
        ]),
    }
}
