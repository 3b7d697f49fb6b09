//! Health display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::HealthStatus;

/// Availability of one forecasting model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ModelAvailabilityDisplay {
    #[tabled(rename = "MODEL")]
    pub model: String,

    #[tabled(rename = "AVAILABLE")]
    pub available: String,
}

impl ModelAvailabilityDisplay {
    pub fn rows(health: &HealthStatus) -> Vec<Self> {
        health
            .available_models
            .iter()
            .map(|(model, available)| Self {
                model: model.clone(),
                available: if *available { "yes" } else { "no" }.to_string(),
            })
            .collect()
    }
}
