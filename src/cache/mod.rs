//! In-memory cache for API responses
//!
//! Read (`GET`) responses are kept for a fixed time-to-live in a bounded
//! least-recently-used map. Nothing is persisted.

pub mod key;
pub mod storage;

pub use key::CacheKey;
pub use storage::{CacheStats, ResponseCache};
