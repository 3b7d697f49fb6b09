//! Job display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_as_iso_datetime, truncate_string};
use crate::client::models::{JobHandle, QueuedJob};

/// Job display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct JobDisplay {
    #[tabled(rename = "JOB ID")]
    pub job_id: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    /// ETA for queued jobs, error text for failed ones
    #[tabled(rename = "DETAIL")]
    pub detail: String,

    #[tabled(rename = "UPDATED")]
    pub updated: String,
}

impl From<&JobHandle> for JobDisplay {
    fn from(job: &JobHandle) -> Self {
        Self {
            job_id: job.job_id.clone(),
            status: job.status.to_string(),
            detail: job
                .error
                .as_deref()
                .map(|e| truncate_string(e, 60))
                .unwrap_or_else(|| "--".to_string()),
            updated: job
                .timestamp
                .as_deref()
                .map(format_as_iso_datetime)
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

impl From<&QueuedJob> for JobDisplay {
    fn from(job: &QueuedJob) -> Self {
        Self {
            job_id: job.job_id.clone(),
            status: job.status.to_string(),
            detail: job
                .estimated_time_seconds
                .map(|secs| format!("~{:.0}s", secs))
                .unwrap_or_else(|| "--".to_string()),
            updated: "--".to_string(),
        }
    }
}
