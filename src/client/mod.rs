//! FinancialAI API client

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;

pub mod analysis;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod polling;

pub use analysis::AnalysisClient;
#[cfg(test)]
pub use mock::MockAnalysisClient;
pub use models::{AnalysisResult, HealthStatus, JobHandle, JobStatus, QueuedJob};
pub use polling::WaitOptions;

/// Quick analysis endpoint
pub const QUICK_ANALYSIS_PATH: &str = "/api/v2/analysis/quick";
/// Full analysis endpoint
pub const FULL_ANALYSIS_PATH: &str = "/api/v2/analysis/full";
/// Job queue endpoint
pub const QUEUE_ANALYSIS_PATH: &str = "/api/v2/analysis/queue";
/// Health endpoint
pub const HEALTH_PATH: &str = "/api/v2/health";

/// Single-section reads kept by the server for older clients; each is a cached `GET`
pub const PREDICT_CATEGORY_PATH: &str = "/api/v2/predict-category";
pub const PREDICT_MONTHLY_PATH: &str = "/api/v2/predict-monthly";
pub const DETECT_ANOMALIES_PATH: &str = "/api/v2/detect-anomalies";
pub const SAVINGS_TIPS_PATH: &str = "/api/v2/savings/tips";
pub const HEALTH_SCORE_PATH: &str = "/api/v2/savings/health-score";
pub const CHARTS_DASHBOARD_PATH: &str = "/api/v2/charts/dashboard";

/// Path of a single job resource
pub fn job_path(job_id: &str) -> String {
    format!("/api/v2/analysis/job/{}", job_id)
}

/// FinancialAI analysis API.
///
/// Every method fails with a single [`ApiError`](crate::error::ApiError) type.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Low-latency analysis (never cached)
    async fn quick_analysis(&self) -> ApiResult<AnalysisResult>;

    /// Complete synchronous analysis (never cached)
    async fn full_analysis(&self) -> ApiResult<AnalysisResult>;

    /// Enqueue a deep analysis job and return its id immediately
    async fn queue_analysis(&self) -> ApiResult<QueuedJob>;

    /// Current state of a job
    async fn check_job(&self, job_id: &str) -> ApiResult<JobHandle>;

    /// Cancel a queued or running job
    async fn cancel_job(&self, job_id: &str) -> ApiResult<Value>;

    /// API and model availability
    async fn health(&self) -> ApiResult<HealthStatus>;

    /// Predicted spend per category (cached read)
    async fn predict_category(&self) -> ApiResult<Value>;

    /// Predicted spend per month (cached read)
    async fn predict_monthly(&self) -> ApiResult<Value>;

    /// Detected spending anomalies (cached read)
    async fn detect_anomalies(&self) -> ApiResult<Value>;

    /// Savings tips (cached read)
    async fn savings_tips(&self) -> ApiResult<Value>;

    /// Financial health score (cached read)
    async fn health_score(&self) -> ApiResult<Value>;

    /// Dashboard chart data (cached read)
    async fn charts_dashboard(&self) -> ApiResult<Value>;

    /// Poll `check_job` until the job completes, fails, or `options.timeout` elapses.
    async fn wait_for_job(&self, job_id: &str, options: &WaitOptions) -> ApiResult<Value> {
        polling::wait_for_job(self, job_id, options).await
    }

    /// Queue a job and wait for its result.
    async fn full_analysis_async(&self, options: &WaitOptions) -> ApiResult<Value> {
        polling::full_analysis_async(self, options).await
    }
}
