//! Fetcher configuration types.

use std::time::Duration;

/// Settings for the HTTP fetcher
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request timeout
    pub timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Pages larger than this are rejected
    pub max_body_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("credence/{}", env!("CARGO_PKG_VERSION")),
            max_body_bytes: 5 * 1024 * 1024,
        }
    }
}

impl FetchConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the maximum accepted page size
    #[must_use]
    pub const fn max_body_bytes(mut self, max: usize) -> Self {
        self.max_body_bytes = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = FetchConfig::new()
            .timeout(Duration::from_secs(3))
            .user_agent("test-agent")
            .max_body_bytes(1024);

        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn default_agent_names_the_crate() {
        assert!(FetchConfig::default().user_agent.starts_with("credence/"));
    }
}
