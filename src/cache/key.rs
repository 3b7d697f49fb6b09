//! Cache keys built from the HTTP method and endpoint path

use std::fmt;

use reqwest::Method;

/// Identifies a cached response by `(method, endpoint)`.
///
/// Rendered as `METHOD:endpoint`, e.g. `GET:/api/v2/health`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    method: Method,
    endpoint: String,
}

impl CacheKey {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
        }
    }

    /// Only reads are eligible for caching.
    pub fn is_cacheable(&self) -> bool {
        self.method == Method::GET
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.method, self.endpoint)
    }
}
