//! Bounded TTL storage for cached responses

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use lru::LruCache;
use serde::Serialize;
use serde_json::Value;

use super::CacheKey;

/// A stored response and when it was stored
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Arc<Value>,
    stored_at: Instant,
}

/// TTL cache with least-recently-used eviction once `capacity` is reached.
///
/// Stale entries are not removed on lookup; the next store for the same key
/// overwrites them. The lock is never held across an `.await`.
pub struct ResponseCache {
    entries: Mutex<LruCache<CacheKey, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Return the cached payload if it is younger than the TTL.
    pub fn lookup(&self, key: &CacheKey) -> Option<Arc<Value>> {
        self.lookup_at(key, Instant::now())
    }

    fn lookup_at(&self, key: &CacheKey, now: Instant) -> Option<Arc<Value>> {
        let mut entries = self.lock();
        let entry = entries.get(key)?;
        if now.saturating_duration_since(entry.stored_at) < self.ttl {
            Some(Arc::clone(&entry.payload))
        } else {
            None
        }
    }

    /// Store a payload, replacing any previous entry for the key.
    pub fn store(&self, key: CacheKey, payload: Arc<Value>) {
        self.store_at(key, payload, Instant::now());
    }

    fn store_at(&self, key: CacheKey, payload: Arc<Value>, now: Instant) {
        let mut entries = self.lock();
        if let Some((evicted, _)) = entries.push(
            key,
            CacheEntry {
                payload,
                stored_at: now,
            },
        ) && !entries.contains(&evicted)
        {
            log::debug!("Cache evicted: {}", evicted);
        }
    }

    /// Remove every entry, returning how many were dropped.
    pub fn clear(&self) -> usize {
        let mut entries = self.lock();
        let removed = entries.len();
        entries.clear();
        removed
    }

    /// Current entry count and keys, most recently used first.
    pub fn stats(&self) -> CacheStats {
        let entries = self.lock();
        CacheStats {
            size: entries.len(),
            keys: entries.iter().map(|(key, _)| key.to_string()).collect(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<CacheKey, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Snapshot of cache contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
}
