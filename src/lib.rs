//! Client for the FinancialAI analysis API
//!
//! [`AnalysisClient`](client::AnalysisClient) wraps the HTTP API with a
//! per-request timeout, a TTL cache for reads and uniform error
//! normalization. Long-running analyses are queued and polled through
//! [`AnalysisApi::wait_for_job`](client::AnalysisApi::wait_for_job).

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use client::{AnalysisApi, AnalysisClient, WaitOptions};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, ErrorKind};
