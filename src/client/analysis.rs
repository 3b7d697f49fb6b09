//! HTTP implementation of the analysis API

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{
    AnalysisResult, DataEnvelope, HealthStatus, JobHandle, QueuedJob, failure_message,
};
use super::{
    AnalysisApi, CHARTS_DASHBOARD_PATH, DETECT_ANOMALIES_PATH, FULL_ANALYSIS_PATH, HEALTH_PATH,
    HEALTH_SCORE_PATH, PREDICT_CATEGORY_PATH, PREDICT_MONTHLY_PATH, QUEUE_ANALYSIS_PATH,
    QUICK_ANALYSIS_PATH, SAVINGS_TIPS_PATH, job_path,
};
use crate::cache::{CacheKey, CacheStats, ResponseCache};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, NETWORK_ERROR_MESSAGE};

/// Client for the FinancialAI analysis API.
///
/// `GET` responses are cached for the configured TTL; every other method goes
/// straight to the network. Safe to share across tasks.
pub struct AnalysisClient {
    http: HttpClient,
    config: ClientConfig,
    cache: ResponseCache,
}

impl AnalysisClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("finai/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let cache = ResponseCache::new(config.cache_ttl(), config.cache_capacity());

        Ok(Self {
            http,
            config,
            cache,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request, answering `GET`s from the cache while they are fresh.
    ///
    /// A cache hit returns the same `Arc` that was stored.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> ApiResult<Arc<Value>> {
        let key = CacheKey::new(method.clone(), endpoint);

        if key.is_cacheable() {
            if let Some(cached) = self.cache.lookup(&key) {
                log::debug!("Cache hit: {}", key);
                return Ok(cached);
            }
            log::debug!("Cache miss: {}", key);
        }

        let payload = Arc::new(self.send(method, endpoint, body).await?);

        if key.is_cacheable() {
            self.cache.store(key, Arc::clone(&payload));
        }

        Ok(payload)
    }

    /// Send a request without consulting or populating the cache.
    pub async fn request_uncached(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        self.send(method, endpoint, body).await
    }

    /// Cached `GET` returning an owned copy of the body.
    async fn read(&self, endpoint: &str) -> ApiResult<Value> {
        let payload = self.request(Method::GET, endpoint, None).await?;
        Ok(Value::clone(&payload))
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) -> usize {
        let removed = self.cache.clear();
        log::debug!("Cleared {} cache entries", removed);
        removed
    }

    /// Cached entry count and keys.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Race the call against the request timeout.
    ///
    /// Dropping the losing future aborts the in-flight request and cancels
    /// the timer, whichever finishes first.
    async fn send(&self, method: Method, endpoint: &str, body: Option<&Value>) -> ApiResult<Value> {
        let url = format!("{}{}", self.config.base_url(), endpoint);
        log::debug!("{} {}", method, url);

        match tokio::time::timeout(self.config.timeout(), self.execute(method, &url, body)).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!(
                    "Request to {} timed out after {:?}",
                    url,
                    self.config.timeout()
                );
                Err(ApiError::Network(NETWORK_ERROR_MESSAGE.to_string()))
            }
        }
    }

    async fn execute(&self, method: Method, url: &str, body: Option<&Value>) -> ApiResult<Value> {
        let mut request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token()))
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| ApiError::Network(format!("Invalid request body: {}", e)))?;
            request = request.body(bytes);
        }

        let response = request.send().await.map_err(|e| {
            log::warn!("Request to {} failed: {}", url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            });
        }

        let text = response.text().await.map_err(ApiError::from)?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| ApiError::Network(format!("Invalid API response: {}", e)))?;

        if let Some(message) = failure_message(&body) {
            return Err(ApiError::Api(message));
        }

        Ok(body)
    }
}

/// Decode a JSON payload into a model
fn decode<T: DeserializeOwned>(payload: &Value) -> ApiResult<T> {
    T::deserialize(payload).map_err(|e| ApiError::Network(format!("Invalid API response: {}", e)))
}

#[async_trait]
impl AnalysisApi for AnalysisClient {
    async fn quick_analysis(&self) -> ApiResult<AnalysisResult> {
        let payload = self.request(Method::POST, QUICK_ANALYSIS_PATH, None).await?;
        decode(&payload)
    }

    async fn full_analysis(&self) -> ApiResult<AnalysisResult> {
        let payload = self.request(Method::POST, FULL_ANALYSIS_PATH, None).await?;
        decode(&payload)
    }

    async fn queue_analysis(&self) -> ApiResult<QueuedJob> {
        let payload = self.request(Method::POST, QUEUE_ANALYSIS_PATH, None).await?;
        let envelope: DataEnvelope<QueuedJob> = decode(&payload)?;
        Ok(envelope.data)
    }

    /// Job status is never cached so a poll always sees the latest transition
    async fn check_job(&self, job_id: &str) -> ApiResult<JobHandle> {
        let payload = self
            .request_uncached(Method::GET, &job_path(job_id), None)
            .await?;
        let envelope: DataEnvelope<JobHandle> = decode(&payload)?;
        Ok(envelope.data)
    }

    async fn cancel_job(&self, job_id: &str) -> ApiResult<Value> {
        self.request_uncached(Method::DELETE, &job_path(job_id), None)
            .await
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        let payload = self.request(Method::GET, HEALTH_PATH, None).await?;
        decode(&payload)
    }

    async fn predict_category(&self) -> ApiResult<Value> {
        self.read(PREDICT_CATEGORY_PATH).await
    }

    async fn predict_monthly(&self) -> ApiResult<Value> {
        self.read(PREDICT_MONTHLY_PATH).await
    }

    async fn detect_anomalies(&self) -> ApiResult<Value> {
        self.read(DETECT_ANOMALIES_PATH).await
    }

    async fn savings_tips(&self) -> ApiResult<Value> {
        self.read(SAVINGS_TIPS_PATH).await
    }

    async fn health_score(&self) -> ApiResult<Value> {
        self.read(HEALTH_SCORE_PATH).await
    }

    async fn charts_dashboard(&self) -> ApiResult<Value> {
        self.read(CHARTS_DASHBOARD_PATH).await
    }
}
