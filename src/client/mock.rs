//! Mock analysis API client for testing
//!
//! Provides a mock implementation of [`AnalysisApi`] for unit testing
//! without making real API calls.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::AnalysisApi;
use super::fixtures::AnalysisResultBuilder;
use super::models::{AnalysisLevel, AnalysisResult, HealthStatus, JobHandle, JobStatus, QueuedJob};
use crate::error::{ApiError, ApiResult};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockAnalysisClient::new()
///     .with_job_states(vec![JobHandleBuilder::new("job_1").completed(json!({})).build()])
///     .await;
///
/// let value = mock.wait_for_job("job_1", &WaitOptions::default()).await?;
/// ```
#[derive(Default)]
pub struct MockAnalysisClient {
    /// Result to return from quick_analysis/full_analysis
    analysis: Arc<Mutex<Option<AnalysisResult>>>,
    /// Job id to return from queue_analysis
    queued_job_id: Arc<Mutex<Option<String>>>,
    /// Successive check_job responses; the last one repeats
    job_states: Arc<Mutex<VecDeque<JobHandle>>>,
    /// Simulated latency of each check_job call
    check_delay: Arc<Mutex<Option<Duration>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Job ids passed to check_job, in order
    checked_job_ids: Arc<Mutex<Vec<String>>>,
}

/// Per-method call counts
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub quick_analysis: usize,
    pub full_analysis: usize,
    pub queue_analysis: usize,
    pub check_job: usize,
    pub cancel_job: usize,
    pub health: usize,
    /// Calls to the single-section read endpoints
    pub section_reads: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.quick_analysis
            + self.full_analysis
            + self.queue_analysis
            + self.check_job
            + self.cancel_job
            + self.health
            + self.section_reads
    }
}

impl MockAnalysisClient {
    /// Create a new mock client with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the result returned by the analysis endpoints.
    pub async fn with_analysis(self, result: AnalysisResult) -> Self {
        *self.analysis.lock().await = Some(result);
        self
    }

    /// Configure the job id returned by queue_analysis.
    pub async fn with_queued_job_id(self, job_id: impl Into<String>) -> Self {
        *self.queued_job_id.lock().await = Some(job_id.into());
        self
    }

    /// Configure the sequence of states check_job walks through.
    pub async fn with_job_states(self, states: Vec<JobHandle>) -> Self {
        *self.job_states.lock().await = states.into();
        self
    }

    /// Make every check_job call take this long.
    pub async fn with_check_delay(self, delay: Duration) -> Self {
        *self.check_delay.lock().await = Some(delay);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Job ids passed to check_job so far.
    pub async fn checked_job_ids(&self) -> Vec<String> {
        self.checked_job_ids.lock().await.clone()
    }

    async fn take_error(&self) -> ApiResult<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn section_read(&self, section: &str) -> ApiResult<Value> {
        self.call_count.lock().await.section_reads += 1;
        self.take_error().await?;
        Ok(json!({"success": true, "data": {"section": section}}))
    }

    async fn analysis_or_default(&self, level: AnalysisLevel) -> AnalysisResult {
        self.analysis
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| AnalysisResultBuilder::new(level).build())
    }
}

#[async_trait]
impl AnalysisApi for MockAnalysisClient {
    async fn quick_analysis(&self) -> ApiResult<AnalysisResult> {
        self.call_count.lock().await.quick_analysis += 1;
        self.take_error().await?;
        Ok(self.analysis_or_default(AnalysisLevel::Quick).await)
    }

    async fn full_analysis(&self) -> ApiResult<AnalysisResult> {
        self.call_count.lock().await.full_analysis += 1;
        self.take_error().await?;
        Ok(self.analysis_or_default(AnalysisLevel::Full).await)
    }

    async fn queue_analysis(&self) -> ApiResult<QueuedJob> {
        self.call_count.lock().await.queue_analysis += 1;
        self.take_error().await?;

        let job_id = self
            .queued_job_id
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| "job_mock".to_string());

        Ok(QueuedJob {
            job_id,
            status: JobStatus::Queued,
            estimated_time_seconds: Some(30.0),
        })
    }

    async fn check_job(&self, job_id: &str) -> ApiResult<JobHandle> {
        self.call_count.lock().await.check_job += 1;
        self.checked_job_ids.lock().await.push(job_id.to_string());

        let delay = *self.check_delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.take_error().await?;

        let mut states = self.job_states.lock().await;
        let state = if states.len() > 1 {
            states.pop_front()
        } else {
            states.front().cloned()
        };

        state.ok_or_else(|| ApiError::Transport {
            status: 404,
            message: format!("Job {} not found", job_id),
        })
    }

    async fn cancel_job(&self, job_id: &str) -> ApiResult<Value> {
        self.call_count.lock().await.cancel_job += 1;
        self.take_error().await?;
        Ok(json!({"success": true, "data": {"job_id": job_id, "status": "cancelled"}}))
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        self.call_count.lock().await.health += 1;
        self.take_error().await?;
        Ok(HealthStatus {
            status: "ok".to_string(),
            timestamp: None,
            firebase: true,
            available_models: Default::default(),
        })
    }

    async fn predict_category(&self) -> ApiResult<Value> {
        self.section_read("predict-category").await
    }

    async fn predict_monthly(&self) -> ApiResult<Value> {
        self.section_read("predict-monthly").await
    }

    async fn detect_anomalies(&self) -> ApiResult<Value> {
        self.section_read("detect-anomalies").await
    }

    async fn savings_tips(&self) -> ApiResult<Value> {
        self.section_read("savings-tips").await
    }

    async fn health_score(&self) -> ApiResult<Value> {
        self.section_read("health-score").await
    }

    async fn charts_dashboard(&self) -> ApiResult<Value> {
        self.section_read("charts-dashboard").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::JobHandleBuilder;

    #[tokio::test]
    async fn test_error_consumed_once() {
        let mock = MockAnalysisClient::new()
            .with_error(ApiError::Api("quota exceeded".to_string()))
            .await;

        assert!(mock.quick_analysis().await.is_err());
        assert!(mock.quick_analysis().await.is_ok());
        assert_eq!(mock.call_counts().await.quick_analysis, 2);
    }

    #[tokio::test]
    async fn test_last_job_state_repeats() {
        let mock = MockAnalysisClient::new()
            .with_job_states(vec![
                JobHandleBuilder::new("job_1").build(),
                JobHandleBuilder::new("job_1")
                    .status(JobStatus::Processing)
                    .build(),
            ])
            .await;

        assert_eq!(mock.check_job("job_1").await.unwrap().status, JobStatus::Queued);
        assert_eq!(
            mock.check_job("job_1").await.unwrap().status,
            JobStatus::Processing
        );
        assert_eq!(
            mock.check_job("job_1").await.unwrap().status,
            JobStatus::Processing
        );
        assert_eq!(mock.call_counts().await.total(), 3);
    }

    #[tokio::test]
    async fn test_unknown_job_is_not_found() {
        let mock = MockAnalysisClient::new();
        let err = mock.check_job("missing").await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_section_reads_counted() {
        let mock = MockAnalysisClient::new();

        let tips = mock.savings_tips().await.unwrap();
        mock.charts_dashboard().await.unwrap();

        assert_eq!(tips["data"]["section"], "savings-tips");
        let counts = mock.call_counts().await;
        assert_eq!(counts.section_reads, 2);
        assert_eq!(counts.total(), 2);
    }
}
