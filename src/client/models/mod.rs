//! FinancialAI API data models
//!
//! Domain types returned by the analysis API, organized by resource.

mod analysis;
mod envelope;
mod health;
mod job;

pub use analysis::{
    AnalysisData, AnalysisLevel, AnalysisMeta, AnalysisResult, Anomalies, BudgetAlerts, Charts,
    Clustering, Dashboard, DetailedTip, Prediction, Savings, SavingsGoal, SavingsTip, Statistics,
    Trends,
};
pub use envelope::{DataEnvelope, UNKNOWN_ERROR, failure_message};
pub use health::HealthStatus;
pub use job::{JobHandle, JobStatus, QueuedJob};
