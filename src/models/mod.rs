//! Display models for CLI output
//!
//! Converts API response types into table- and JSON-friendly rows.

pub mod display;

pub use display::{JobDisplay, ModelAvailabilityDisplay};
