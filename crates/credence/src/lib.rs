//! Heuristic credibility scoring for news articles.
//!
//! Combines a transparent rule-based score (source reputation, byline,
//! citations, sensationalism, headline and depth) with a linguistic score
//! derived from subjectivity and polarity, and explains every point.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use credence::{render_text, Analyzer};
//!
//! #[tokio::main]
//! async fn main() -> credence::Result<()> {
//!     let analyzer = Analyzer::new()?;
//!
//!     let report = analyzer
//!         .analyze("https://www.bbc.com/news/some-article")
//!         .await?;
//!     println!("{}", render_text(&report));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/credence/0.3.0")]

mod analyzer;

pub use analyzer::{Analyzer, AnalyzerBuilder, Input};

// Re-export core types
pub use credence_core::*;

// Re-export scoring engines and renderers
pub use credence_scoring::{
    aggregate, render_markdown, render_text, score_linguistics, score_linguistics_with,
    score_rules, LexiconAnalyzer, RuleEngine, SentimentAnalyzer,
};

// Re-export fetching
pub use credence_client::{extract_article, ArticleFetcher, FetchConfig, FetchedArticle, HttpFetcher};
