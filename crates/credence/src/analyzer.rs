//! Input routing: URL or raw text in, credibility report out.

use credence_client::{ArticleFetcher, FetchConfig, HttpFetcher};
use credence_core::{CredibilityError, CredibilityReport, Result, ScoringConfig};
use credence_scoring::rules::word_count;
use credence_scoring::{
    aggregate, score_linguistics_with, LexiconAnalyzer, RuleEngine, SentimentAnalyzer,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// How a piece of user input will be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// An `http://` or `https://` address to fetch
    Url(&'a str),
    /// Article text to score directly
    Text(&'a str),
}

impl<'a> Input<'a> {
    /// Classify trimmed input by its scheme prefix
    #[must_use]
    pub fn classify(input: &'a str) -> Self {
        let input = input.trim();
        if input.starts_with("http://") || input.starts_with("https://") {
            Self::Url(input)
        } else {
            Self::Text(input)
        }
    }

    /// Returns true if the input will be fetched
    #[must_use]
    pub const fn is_url(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

/// Credibility analyzer bound to one scoring configuration.
///
/// Cheap to clone; clones share the configuration and collaborators.
#[derive(Clone)]
pub struct Analyzer {
    inner: Arc<AnalyzerInner>,
}

struct AnalyzerInner {
    config: ScoringConfig,
    rules: RuleEngine,
    sentiment: Box<dyn SentimentAnalyzer>,
    fetcher: Box<dyn ArticleFetcher>,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Create an analyzer with the standard preset, the built-in lexicon and
    /// the default HTTP fetcher
    pub fn new() -> Result<Self> {
        AnalyzerBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// The configuration this analyzer scores with
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.inner.config
    }

    /// Analyze a URL or a block of article text.
    ///
    /// URLs are fetched; any fetch failure or an empty extraction yields
    /// [`CredibilityError::ContentUnavailable`]. Raw text shorter than the
    /// configured minimum yields [`CredibilityError::InputTooShort`] before
    /// either engine runs.
    pub async fn analyze(&self, input: &str) -> Result<CredibilityReport> {
        match Input::classify(input) {
            Input::Url(url) => {
                let article = match self.inner.fetcher.fetch(url).await {
                    Ok(article) => article,
                    Err(e) => {
                        warn!(url, error = %e, "could not fetch article");
                        return Err(CredibilityError::ContentUnavailable {
                            url: url.to_string(),
                        });
                    }
                };

                if article.text.trim().is_empty() {
                    warn!(url, "no article text extracted");
                    return Err(CredibilityError::ContentUnavailable {
                        url: url.to_string(),
                    });
                }

                self.analyze_text(&article.text, Some(url), article.title.as_deref())
            }
            Input::Text(text) => {
                let words = word_count(text);
                let minimum = self.inner.config.min_input_words;
                if words < minimum {
                    debug!(words, minimum, "input below minimum word count");
                    return Err(CredibilityError::InputTooShort { words, minimum });
                }

                self.analyze_text(text, None, None)
            }
        }
    }

    /// Score already-extracted text, skipping routing and the length gate
    pub fn analyze_text(
        &self,
        text: &str,
        url: Option<&str>,
        title: Option<&str>,
    ) -> Result<CredibilityReport> {
        let rules = self.inner.rules.score(text, url, title);
        let linguistic = score_linguistics_with(self.inner.sentiment.as_ref(), text);
        aggregate(rules, linguistic, self.inner.config.weights)
    }
}

/// Builder for configuring an [`Analyzer`]
pub struct AnalyzerBuilder {
    config: ScoringConfig,
    sentiment: Option<Box<dyn SentimentAnalyzer>>,
    fetcher: Option<Box<dyn ArticleFetcher>>,
    fetch_config: FetchConfig,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerBuilder {
    /// Start from the standard preset
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
            sentiment: None,
            fetcher: None,
            fetch_config: FetchConfig::default(),
        }
    }

    /// Use a scoring configuration
    #[must_use]
    pub fn config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom sentiment analyzer instead of the built-in lexicon
    #[must_use]
    pub fn sentiment(mut self, analyzer: impl SentimentAnalyzer + 'static) -> Self {
        self.sentiment = Some(Box::new(analyzer));
        self
    }

    /// Use a custom fetcher instead of the HTTP fetcher
    #[must_use]
    pub fn fetcher(mut self, fetcher: impl ArticleFetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Settings for the default HTTP fetcher; ignored with a custom fetcher
    #[must_use]
    pub fn fetch_config(mut self, config: FetchConfig) -> Self {
        self.fetch_config = config;
        self
    }

    /// Validate the configuration and build the analyzer
    pub fn build(self) -> Result<Analyzer> {
        self.config.validate()?;

        let fetcher: Box<dyn ArticleFetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Box::new(HttpFetcher::with_config(self.fetch_config)?),
        };
        let sentiment: Box<dyn SentimentAnalyzer> = self
            .sentiment
            .unwrap_or_else(|| Box::new(LexiconAnalyzer::new()));

        Ok(Analyzer {
            inner: Arc::new(AnalyzerInner {
                rules: RuleEngine::from_config(&self.config),
                config: self.config,
                sentiment,
                fetcher,
            }),
        })
    }
}
