use thiserror::Error;

/// Result type alias for credence operations
pub type Result<T> = std::result::Result<T, CredibilityError>;

/// Errors that can occur while configuring or running an analysis
#[derive(Error, Debug)]
pub enum CredibilityError {
    /// Nothing could be extracted from the given URL
    #[error("could not retrieve content from {url}")]
    ContentUnavailable {
        /// The URL that was requested
        url: String,
    },

    /// Raw text input is below the minimum word count
    #[error("input is too short for a meaningful credibility analysis ({words} words, at least {minimum} required)")]
    InputTooShort {
        /// Words found in the input
        words: usize,
        /// Minimum configured word count
        minimum: usize,
    },

    /// Blend weights are out of range or do not sum to 1.0
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Download or extraction failed
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Server answered with a non-success status
    #[error("HTTP status {status}")]
    Http {
        /// HTTP status code
        status: u16,
    },

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Reading a configuration file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML configuration could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CredibilityError {
    /// Returns true if the error is an analysis outcome to show the user
    /// rather than a fault in configuration or environment
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::ContentUnavailable { .. } | Self::InputTooShort { .. }
        )
    }

    /// Returns true if the error came from the fetch collaborator
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Fetch(_) | Self::Http { .. } | Self::InvalidUrl(_)
        )
    }

    /// Returns the HTTP status code if the server rejected the request
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }
}
