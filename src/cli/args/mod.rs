//! Shared CLI argument types

mod common;
mod global;

pub use common::{OutputFormat, Section, WaitArgs};
pub use global::GlobalOptions;
