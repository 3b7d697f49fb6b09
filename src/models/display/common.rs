//! Common display utilities and helpers

use chrono::{DateTime, NaiveDateTime, Utc};

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an API timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// Accepts RFC 3339 and offset-less ISO 8601 (the server emits the latter).
/// Anything else is returned unchanged.
pub fn format_as_iso_datetime(timestamp: &str) -> String {
    if let Ok(dt) = timestamp.parse::<DateTime<Utc>>() {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }

    timestamp.to_string()
}
