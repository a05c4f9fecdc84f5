//! Value cache capability and its backends.
//!
//! The resolver only sees [`ValueCache`]; the eviction policy is chosen by
//! whoever builds the service.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use num_bigint::BigUint;
use parking_lot::Mutex;

use crate::stats::{AtomicCacheStats, CacheStats};

/// Memoized Fibonacci values keyed by index.
pub trait ValueCache: Send + Sync {
    /// Look up a cached value. Counts as a hit or a miss.
    fn get(&self, index: u64) -> Option<BigUint>;

    /// Store a computed value.
    fn put(&self, index: u64, value: BigUint);

    /// Number of entries currently held.
    fn len(&self) -> usize;

    /// Whether the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Usage counters.
    fn stats(&self) -> CacheStats;
}

/// Bounded least-recently-used cache.
pub struct LruValueCache {
    entries: Mutex<LruCache<u64, BigUint>>,
    stats: AtomicCacheStats,
}

impl LruValueCache {
    /// Create a cache holding at most `capacity` values.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            stats: AtomicCacheStats::new(),
        }
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }
}

impl ValueCache for LruValueCache {
    fn get(&self, index: u64) -> Option<BigUint> {
        let value = self.entries.lock().get(&index).cloned();
        if value.is_some() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        value
    }

    fn put(&self, index: u64, value: BigUint) {
        let mut entries = self.entries.lock();
        if let Some((evicted, _)) = entries.push(index, value) {
            // push returns the old entry on key replacement too
            if evicted != index {
                self.stats.record_eviction();
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }

    fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len(), self.capacity())
    }
}

/// Cache that never stores anything.
#[derive(Debug, Default)]
pub struct NoCache {
    stats: AtomicCacheStats,
}

impl NoCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueCache for NoCache {
    fn get(&self, _index: u64) -> Option<BigUint> {
        self.stats.record_miss();
        None
    }

    fn put(&self, _index: u64, _value: BigUint) {}

    fn len(&self) -> usize {
        0
    }

    fn stats(&self) -> CacheStats {
        self.stats.snapshot(0, 0)
    }
}

/// Build a cache for the configured capacity; zero disables caching.
#[must_use]
pub fn cache_from_capacity(capacity: usize) -> Arc<dyn ValueCache> {
    match NonZeroUsize::new(capacity) {
        Some(capacity) => Arc::new(LruValueCache::new(capacity)),
        None => Arc::new(NoCache::new()),
    }
}
