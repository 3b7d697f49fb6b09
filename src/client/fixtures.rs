//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::models::{
    AnalysisData, AnalysisLevel, AnalysisMeta, AnalysisResult, Anomalies, JobHandle, JobStatus,
    Prediction, Savings, SavingsGoal, SavingsTip,
};

// ============================================================================
// JobHandleBuilder
// ============================================================================

/// Builder for creating test JobHandle instances.
///
/// # Example
/// ```ignore
/// let job = JobHandleBuilder::new("job_1")
///     .completed(json!({"score": 91}))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct JobHandleBuilder {
    job_id: String,
    status: JobStatus,
    result: Option<Value>,
    error: Option<String>,
}

impl JobHandleBuilder {
    /// Create a new builder for a queued job.
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            status: JobStatus::Queued,
            result: None,
            error: None,
        }
    }

    /// Set the job status.
    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Mark the job completed with a result payload.
    pub fn completed(mut self, result: Value) -> Self {
        self.status = JobStatus::Completed;
        self.result = Some(result);
        self
    }

    /// Mark the job failed with a message.
    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.status = JobStatus::Error;
        self.error = Some(message.into());
        self
    }

    /// Build the JobHandle.
    pub fn build(self) -> JobHandle {
        JobHandle {
            job_id: self.job_id,
            user_id: Some("user-test".to_string()),
            status: self.status,
            result: self.result,
            error: self.error,
            timestamp: None,
        }
    }
}

// ============================================================================
// AnalysisResultBuilder
// ============================================================================

/// Builder for creating test AnalysisResult instances.
#[derive(Debug, Clone)]
pub struct AnalysisResultBuilder {
    level: AnalysisLevel,
    prediction: Option<Prediction>,
    savings: Option<Savings>,
    processing_time_ms: f64,
    cache_hit: bool,
}

impl AnalysisResultBuilder {
    /// Create a new builder for an empty result at the given level.
    pub fn new(level: AnalysisLevel) -> Self {
        Self {
            level,
            prediction: None,
            savings: None,
            processing_time_ms: 150.0,
            cache_hit: false,
        }
    }

    /// Add per-category predictions and an anomaly summary.
    pub fn prediction(mut self, categories: &[(&str, f64)], anomalies: Option<(u64, f64)>) -> Self {
        let by_category: BTreeMap<String, f64> = categories
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect();
        self.prediction = Some(Prediction {
            by_category: Some(by_category),
            anomalies: anomalies.map(|(detected, percentage)| Anomalies {
                detected,
                percentage,
            }),
            ..Default::default()
        });
        self
    }

    /// Add savings data.
    pub fn savings(mut self, health_score: Option<f64>, tips: &[&str]) -> Self {
        self.savings = Some(Savings {
            health_score,
            tips: Some(tips.iter().map(|t| SavingsTip::from(*t)).collect()),
            goals: Some(vec![SavingsGoal {
                name: "Emergency fund".to_string(),
                target: 1000.0,
                priority: "alta".to_string(),
            }]),
            budget_alerts: None,
            extra: Map::new(),
        });
        self
    }

    /// Set the reported processing time.
    pub fn processing_time_ms(mut self, ms: f64) -> Self {
        self.processing_time_ms = ms;
        self
    }

    /// Set the reported cache-hit flag.
    pub fn cache_hit(mut self, hit: bool) -> Self {
        self.cache_hit = hit;
        self
    }

    /// Build the AnalysisResult.
    pub fn build(self) -> AnalysisResult {
        AnalysisResult {
            success: true,
            data: AnalysisData {
                user_id: "user-test".to_string(),
                prediction: self.prediction,
                statistics: None,
                savings: self.savings,
                charts: None,
            },
            meta: AnalysisMeta {
                processing_time_ms: self.processing_time_ms,
                timestamp: "2025-01-15T12:00:00".to_string(),
                cache_hit: self.cache_hit,
                level: self.level,
                models_used: None,
            },
            errors: Vec::new(),
        }
    }
}
