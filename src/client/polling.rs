//! Job polling
//!
//! Fixed-interval polling of a job resource. There is no backoff and no retry:
//! a failed poll ends the wait with that failure.

use std::time::Duration;

use serde_json::Value;
use tokio::time::Instant;

use super::AnalysisApi;
use super::models::{JobHandle, JobStatus};
use crate::error::{ApiError, ApiResult};

/// Default overall wait (2 minutes)
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_millis(120_000);

/// Default delay between polls (2 seconds)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2_000);

/// Fallback when a failed job carries no message
const JOB_FAILED: &str = "Job failed";

/// Per-call overrides for [`wait_for_job`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Overall budget, independent of the per-request timeout
    pub timeout: Duration,
    /// Fixed delay between polls
    pub poll_interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaitOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

/// Poll until the job reaches a terminal state.
///
/// Returns the job's result payload (`null` if the server sent none) on
/// `completed`, the server's message on `error`, and
/// [`ApiError::JobTimeout`] once `options.timeout` has elapsed. A single slow
/// poll is not cut short; the deadline is checked between polls.
pub async fn wait_for_job<A>(api: &A, job_id: &str, options: &WaitOptions) -> ApiResult<Value>
where
    A: AnalysisApi + ?Sized,
{
    let start = Instant::now();
    let mut polls = 0u32;

    while start.elapsed() < options.timeout {
        let job = api.check_job(job_id).await?;
        polls += 1;

        if job.status.is_terminal() {
            log::debug!("Job {} is {} after {} polls", job_id, job.status, polls);
            return terminal_outcome(job);
        }
        log::debug!("Job {} is {} (poll {})", job_id, job.status, polls);

        tokio::time::sleep(options.poll_interval).await;
    }

    log::warn!(
        "Gave up on job {} after {} polls ({:?})",
        job_id,
        polls,
        options.timeout
    );
    Err(ApiError::JobTimeout {
        job_id: job_id.to_string(),
    })
}

/// Result of a job that reached `completed` or `error`
fn terminal_outcome(job: JobHandle) -> ApiResult<Value> {
    match job.status {
        JobStatus::Completed => Ok(job.result.unwrap_or(Value::Null)),
        _ => {
            let message = job.error.unwrap_or_else(|| JOB_FAILED.to_string());
            log::warn!("Job {} failed: {}", job.job_id, message);
            Err(ApiError::Api(message))
        }
    }
}

/// Queue an analysis job, then wait for it.
pub async fn full_analysis_async<A>(api: &A, options: &WaitOptions) -> ApiResult<Value>
where
    A: AnalysisApi + ?Sized,
{
    let queued = api.queue_analysis().await?;
    log::debug!("Queued job {}", queued.job_id);
    wait_for_job(api, &queued.job_id, options).await
}
