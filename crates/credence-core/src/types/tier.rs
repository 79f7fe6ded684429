use serde::{Deserialize, Serialize};

/// Coarse reputation bucket assigned to a source hostname
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainTier {
    /// Established newsrooms, academic and government sources
    High,
    /// Outlets with a partisan slant or opinion focus
    Medium,
    /// Known misinformation, conspiracy or satire sites
    Low,
    /// Not on any configured list
    Unclassified,
}

impl DomainTier {
    /// Tiers that can be matched, in lookup priority order
    pub const RANKED: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns true if the host matched one of the configured lists
    #[must_use]
    pub const fn is_classified(self) -> bool {
        !matches!(self, Self::Unclassified)
    }
}

impl Default for DomainTier {
    fn default() -> Self {
        Self::Unclassified
    }
}

impl std::fmt::Display for DomainTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
            Self::Unclassified => write!(f, "unclassified"),
        }
    }
}
