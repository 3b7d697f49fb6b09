//! Response envelope helpers

use serde::Deserialize;
use serde_json::Value;

/// Fallback when a failed response carries no message
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// `{ "success": ..., "data": T }` wrapper used by the job endpoints
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Server message for a body whose `success` flag is `false`.
///
/// Returns `None` for successful bodies, including bodies that omit the flag.
pub fn failure_message(body: &Value) -> Option<String> {
    if body.get("success").and_then(Value::as_bool) != Some(false) {
        return None;
    }

    let message = body
        .get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            body.get("errors")
                .and_then(Value::as_array)
                .and_then(|errors| errors.first())
                .and_then(Value::as_str)
        })
        .unwrap_or(UNKNOWN_ERROR);

    Some(message.to_string())
}
