//! Source reputation lookup by domain suffix.

use url::Url;

use crate::config::DomainLists;
use crate::types::DomainTier;

/// Static classification of hostnames into reputation tiers.
///
/// Entries are matched as suffixes: `.gov` matches any host ending in
/// `.gov`, and `bbc.com` matches both `bbc.com` and `news.bbc.com`.
#[derive(Debug, Clone, Default)]
pub struct DomainTable {
    high: Vec<String>,
    medium: Vec<String>,
    low: Vec<String>,
}

impl DomainTable {
    /// Build a table from configured lists. Entries are lower-cased.
    #[must_use]
    pub fn from_config(lists: &DomainLists) -> Self {
        let normalize = |list: &[String]| -> Vec<String> {
            list.iter().map(|e| e.trim().to_lowercase()).collect()
        };

        Self {
            high: normalize(&lists.high),
            medium: normalize(&lists.medium),
            low: normalize(&lists.low),
        }
    }

    /// Classify an already-normalized hostname.
    ///
    /// Tiers are tested high, medium, low; the first suffix match wins.
    #[must_use]
    pub fn classify(&self, host: &str) -> DomainTier {
        DomainTier::RANKED
            .into_iter()
            .find(|tier| self.entries(*tier).iter().any(|s| host.ends_with(s.as_str())))
            .unwrap_or(DomainTier::Unclassified)
    }

    /// Configured suffixes for a tier
    #[must_use]
    pub fn entries(&self, tier: DomainTier) -> &[String] {
        match tier {
            DomainTier::High => &self.high,
            DomainTier::Medium => &self.medium,
            DomainTier::Low => &self.low,
            DomainTier::Unclassified => &[],
        }
    }

    /// Total number of configured suffixes
    #[must_use]
    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    /// Returns true if no suffixes are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extract the lookup hostname from a URL: authority host only, lower-cased,
/// with one leading `www.` removed.
///
/// Returns `None` when the URL does not parse or has no host.
#[must_use]
pub fn host_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").map_or_else(|| host.clone(), str::to_string);

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
