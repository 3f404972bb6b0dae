//! Public configuration for the selection service client.

use std::time::Duration;

use lectio_core::DEFAULT_BASE_URL;

/// Where the selection service lives and how patiently to talk to it.
///
/// ```
/// use lectio_api::ApiClientConfig;
/// use std::time::Duration;
///
/// let config = ApiClientConfig::new()
///     .with_base_url("https://bible.example.org/")
///     .with_timeout(Duration::from_secs(10))
///     .with_max_retries(1);
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    /// Extra attempts after a 5xx or network failure.
    pub(crate) max_retries: u8,
    /// First backoff step; doubles on every retry.
    pub(crate) retry_base_delay: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl ApiClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Service root. Defaults to `http://localhost:5000`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Per-request timeout. Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retries for transient failures. Defaults to 3; 0 disables retrying.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }
}

/// `User-Agent` sent with every request.
pub(crate) const USER_AGENT: &str = concat!("lectio/", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiClientConfig::new();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
        assert!(USER_AGENT.starts_with("lectio/"));
    }

    #[test]
    fn test_overrides() {
        let config = ApiClientConfig::new()
            .with_base_url("https://bible.example.org/api/")
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(0);

        assert_eq!(config.base_url, "https://bible.example.org/api/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.retry_base_delay, Duration::from_millis(500));
    }
}
