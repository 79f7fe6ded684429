//! Article fetching for credence.
//!
//! This crate provides the [`ArticleFetcher`] seam used by the analyzer and
//! the default [`HttpFetcher`] that downloads a page and extracts its main
//! text and title.

#![doc(html_root_url = "https://docs.rs/credence-client/0.3.0")]

mod config;
mod extract;
mod fetcher;

pub use config::FetchConfig;
pub use credence_core::{CredibilityError, Result};
pub use extract::extract_article;
pub use fetcher::{ArticleFetcher, FetchedArticle, HttpFetcher};
