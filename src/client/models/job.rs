//! Asynchronous job models

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Server-side job state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

impl JobStatus {
    /// `completed` and `error` end the job lifecycle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Error)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobStatus::Queued => "queued",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Snapshot of a job as reported by the server.
///
/// The client never updates this locally; every change comes from polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobHandle {
    pub job_id: String,

    #[serde(rename = "usuario_id", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    pub status: JobStatus,

    /// Result payload, set once the job completes
    #[serde(rename = "resultado", default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Failure message, set when the job errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Response of the queue endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedJob {
    pub job_id: String,

    #[serde(default = "queued")]
    pub status: JobStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time_seconds: Option<f64>,
}

fn queued() -> JobStatus {
    JobStatus::Queued
}
