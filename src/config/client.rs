//! Immutable settings for an [`AnalysisClient`](crate::client::AnalysisClient)

use std::time::Duration;

use crate::error::ConfigError;

/// Default per-request timeout (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default cache time-to-live (5 minutes)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_millis(300_000);

/// Default maximum number of cached responses
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

/// Connection settings for the analysis API.
///
/// Built once and handed to the client; there are no setters after that.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    token: String,
    timeout: Duration,
    cache_ttl: Duration,
    cache_capacity: usize,
}

impl ClientConfig {
    /// Create a config with default timeout and cache settings.
    ///
    /// Trailing slashes are stripped from `base_url`. Fails if either value is
    /// blank or the URL has no http(s) scheme.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> std::result::Result<Self, ConfigError> {
        let base_url = base_url.into();
        let token = token.into();

        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "API URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(ConfigError::MissingToken);
        }

        Ok(Self {
            base_url,
            token,
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        })
    }

    /// Override the per-request timeout. Zero keeps the current value, since
    /// an immediate deadline would fail every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if timeout.is_zero() {
            log::warn!("Ignoring zero request timeout; keeping {:?}", self.timeout);
        } else {
            self.timeout = timeout;
        }
        self
    }

    /// Override the cache time-to-live.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Override the cache capacity. Zero is bumped to one.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }
}
