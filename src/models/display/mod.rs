//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod health;
mod job;

pub use common::{format_as_iso_datetime, truncate_string};
pub use health::ModelAvailabilityDisplay;
pub use job::JobDisplay;
