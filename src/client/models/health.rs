//! API health model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Whether the server's data store is reachable
    #[serde(default)]
    pub firebase: bool,

    /// Forecasting model name to availability
    #[serde(rename = "modelos_disponibles", default)]
    pub available_models: BTreeMap<String, bool>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
