//! Text report formatting for analysis results
//!
//! Produces plain multi-line summaries; colouring is left to the caller.

use crate::client::models::{AnalysisMeta, AnalysisResult, Prediction, Savings};
use crate::models::display::format_as_iso_datetime;

/// Rating label for a financial health score.
///
/// Above 80 is excellent, above 60 is good, anything else needs work.
pub fn health_rating(score: f64) -> &'static str {
    if score > 80.0 {
        "Excellent"
    } else if score > 60.0 {
        "Good"
    } else {
        "Needs improvement"
    }
}

/// Format a processing time in milliseconds.
///
/// # Example output
/// - `850ms`
/// - `1.83s`
pub fn format_duration_ms(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{:.2}s", ms / 1000.0)
    } else {
        format!("{:.0}ms", ms)
    }
}

/// Predicted spend per category plus the anomaly summary.
pub fn format_prediction_summary(prediction: &Prediction) -> String {
    let mut lines = vec!["PREDICTIONS".to_string()];

    if let Some(categories) = &prediction.by_category {
        lines.push(String::new());
        lines.push("Spending by category:".to_string());
        for (category, amount) in categories {
            lines.push(format!("  • {}: ${:.2}", category, amount));
        }
    }

    if let Some(anomalies) = &prediction.anomalies {
        lines.push(String::new());
        lines.push(format!(
            "Anomalies: {} ({:.1}%)",
            anomalies.detected, anomalies.percentage
        ));
    }

    lines.join("\n")
}

/// Health score, tips and goals.
pub fn format_savings_summary(savings: &Savings) -> String {
    let mut lines = vec!["SAVINGS".to_string()];

    if let Some(score) = savings.health_score {
        lines.push(String::new());
        lines.push(format!(
            "Financial health: {}% {}",
            score,
            health_rating(score)
        ));
    }

    if let Some(tips) = savings.tips.as_ref().filter(|tips| !tips.is_empty()) {
        lines.push(String::new());
        lines.push("Recommendations:".to_string());
        for tip in tips {
            lines.push(format!("  • {}", tip.summary()));
        }
    }

    if let Some(goals) = savings.goals.as_ref().filter(|goals| !goals.is_empty()) {
        lines.push(String::new());
        lines.push("Savings goals:".to_string());
        for goal in goals {
            let mut line = format!("  • {}: ${:.2}", goal.name, goal.target);
            if !goal.priority.is_empty() {
                line.push_str(&format!(" ({})", goal.priority));
            }
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// How the server produced the result.
pub fn format_performance_stats(meta: &AnalysisMeta) -> String {
    let mut lines = vec![
        "PERFORMANCE".to_string(),
        String::new(),
        format!("Processing time: {}", format_duration_ms(meta.processing_time_ms)),
        format!("Timestamp:       {}", format_as_iso_datetime(&meta.timestamp)),
        format!("Analysis level:  {}", meta.level),
        format!("Cache hit:       {}", meta.cache_hit),
    ];

    if let Some(models) = meta.models_used.as_ref().filter(|m| !m.is_empty()) {
        lines.push(format!("Models:          {}", models.join(", ")));
    }

    lines.join("\n")
}

/// Full report: every section present in the result, then performance.
pub fn format_report(result: &AnalysisResult) -> String {
    let mut sections = Vec::new();

    if let Some(prediction) = &result.data.prediction {
        sections.push(format_prediction_summary(prediction));
    }

    if let Some(savings) = &result.data.savings {
        sections.push(format_savings_summary(savings));
    }

    sections.push(format_performance_stats(&result.meta));

    if !result.errors.is_empty() {
        let mut warnings = vec!["WARNINGS".to_string(), String::new()];
        warnings.extend(result.errors.iter().map(|e| format!("  • {}", e)));
        sections.push(warnings.join("\n"));
    }

    sections.join("\n\n")
}
