//! The fetch seam and its HTTP implementation.

use async_trait::async_trait;
use credence_core::{CredibilityError, Result};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::config::FetchConfig;
use crate::extract::extract_article;

/// Main text and title recovered from a page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedArticle {
    /// Extracted body text; may be empty
    pub text: String,

    /// Page title, if one was found
    pub title: Option<String>,
}

/// Anything that can turn a URL into article text.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Download and extract one article
    async fn fetch(&self, url: &str) -> Result<FetchedArticle>;
}

/// Fetches pages over HTTP(S) with reqwest
#[derive(Clone)]
pub struct HttpFetcher {
    inner: Arc<FetcherInner>,
}

struct FetcherInner {
    http: HttpClient,
    max_body_bytes: usize,
}

impl HttpFetcher {
    /// Create a fetcher with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::default())
    }

    /// Create a fetcher with custom settings
    pub fn with_config(config: FetchConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| CredibilityError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner: Arc::new(FetcherInner {
                http,
                max_body_bytes: config.max_body_bytes,
            }),
        })
    }

    fn parse_url(url: &str) -> Result<Url> {
        let parsed =
            Url::parse(url).map_err(|e| CredibilityError::InvalidUrl(format!("{url}: {e}")))?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(CredibilityError::InvalidUrl(format!(
                "{url}: unsupported scheme {other}"
            ))),
        }
    }
}

#[async_trait]
impl ArticleFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedArticle> {
        let url = Self::parse_url(url)?;
        debug!(url = %url, "GET article");

        let mut response = self
            .inner
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CredibilityError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "article request rejected");
            return Err(CredibilityError::Http {
                status: status.as_u16(),
            });
        }

        let max = self.inner.max_body_bytes;
        let too_large = |len: usize| {
            CredibilityError::Fetch(format!("page is at least {len} bytes, limit is {max}"))
        };

        if let Some(len) = response.content_length() {
            let len = usize::try_from(len).unwrap_or(usize::MAX);
            if len > max {
                return Err(too_large(len));
            }
        }

        // Content-Length is optional, so the cap is enforced while reading.
        let mut buf = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| CredibilityError::Fetch(e.to_string()))?
        {
            if buf.len() + chunk.len() > max {
                warn!(url = %url, limit = max, "article body over limit");
                return Err(too_large(buf.len() + chunk.len()));
            }
            buf.extend_from_slice(&chunk);
        }
        let body = String::from_utf8_lossy(&buf);

        let article = extract_article(&body);
        debug!(
            url = %url,
            words = article.text.split_whitespace().count(),
            has_title = article.title.is_some(),
            "article extracted"
        );

        Ok(article)
    }
}
