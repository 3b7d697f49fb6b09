//! Analysis result models
//!
//! Wire names follow the API (Spanish); Rust names are English.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Response envelope of the quick and full analysis endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub success: bool,

    pub data: AnalysisData,

    pub meta: AnalysisMeta,

    /// Non-fatal problems reported alongside a successful result
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Analysis sections; each is present only when the server computed it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisData {
    #[serde(rename = "usuario_id")]
    pub user_id: String,

    #[serde(rename = "prediccion", default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Prediction>,

    #[serde(rename = "estadisticas", default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,

    #[serde(rename = "ahorro", default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<Savings>,

    #[serde(rename = "graficos", default, skip_serializing_if = "Option::is_none")]
    pub charts: Option<Charts>,
}

/// Spending predictions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted spend per category
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub by_category: Option<BTreeMap<String, f64>>,

    /// Predicted spend per month
    #[serde(rename = "mensual", default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<BTreeMap<String, f64>>,

    #[serde(rename = "anomalias", default, skip_serializing_if = "Option::is_none")]
    pub anomalies: Option<Anomalies>,

    /// Model name to score
    #[serde(rename = "modelos", default, skip_serializing_if = "Option::is_none")]
    pub models: Option<BTreeMap<String, f64>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anomalies {
    #[serde(rename = "detectadas")]
    pub detected: u64,

    #[serde(rename = "porcentaje")]
    pub percentage: f64,
}

/// Statistical analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(rename = "correlaciones", default, skip_serializing_if = "Option::is_none")]
    pub correlations: Option<BTreeMap<String, f64>>,

    #[serde(rename = "tendencias", default, skip_serializing_if = "Option::is_none")]
    pub trends: Option<Trends>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clustering: Option<Clustering>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trends {
    #[serde(rename = "promedio_diario")]
    pub daily_average: f64,

    #[serde(rename = "máximo", alias = "maximo")]
    pub maximum: f64,

    #[serde(rename = "mínimo", alias = "minimo")]
    pub minimum: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clustering {
    #[serde(rename = "grupos")]
    pub groups: u32,

    #[serde(rename = "varianza")]
    pub variance: f64,
}

/// Savings recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Savings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<SavingsGoal>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<SavingsTip>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_alerts: Option<BudgetAlerts>,

    /// Financial health score, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "meta")]
    pub target: f64,

    #[serde(rename = "prioridad", default)]
    pub priority: String,
}

/// A savings tip: plain text, or a structured tip as the server builds them.
///
/// Unknown shapes are kept verbatim instead of failing the whole result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavingsTip {
    Text(String),
    Detailed(DetailedTip),
    Other(Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedTip {
    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "prioridad", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "accion", default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl SavingsTip {
    /// One-line rendering for reports
    pub fn summary(&self) -> String {
        match self {
            SavingsTip::Text(text) => text.clone(),
            SavingsTip::Detailed(tip) => {
                let mut line = match &tip.priority {
                    Some(priority) => format!("[{}] {}", priority, tip.title),
                    None => tip.title.clone(),
                };
                if let Some(action) = &tip.action {
                    line.push_str(": ");
                    line.push_str(action);
                }
                line
            }
            SavingsTip::Other(value) => value.to_string(),
        }
    }
}

impl From<&str> for SavingsTip {
    fn from(text: &str) -> Self {
        SavingsTip::Text(text.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAlerts {
    #[serde(rename = "limite_recomendado")]
    pub recommended_limit: f64,

    #[serde(rename = "limite_maximo")]
    pub maximum_limit: f64,
}

/// Chart data, passed through for rendering elsewhere
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Charts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sankey: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<Dashboard>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(rename = "total_gastos")]
    pub total_spend: f64,

    #[serde(rename = "gastos_promedio")]
    pub average_spend: f64,

    #[serde(rename = "categorias")]
    pub categories: u32,
}

/// Processing metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMeta {
    pub processing_time_ms: f64,

    /// ISO-8601 timestamp
    pub timestamp: String,

    #[serde(default)]
    pub cache_hit: bool,

    #[serde(rename = "nivel")]
    pub level: AnalysisLevel,

    #[serde(rename = "modelos_utilizados", default, skip_serializing_if = "Option::is_none")]
    pub models_used: Option<Vec<String>>,
}

/// Depth of analysis the server ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisLevel {
    Quick,
    Full,
}

impl fmt::Display for AnalysisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisLevel::Quick => write!(f, "quick"),
            AnalysisLevel::Full => write!(f, "full"),
        }
    }
}
