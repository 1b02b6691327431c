//! Cache Metrics System
//!
//! Counters maintained by the cache engine and reported through the
//! [`CacheMetrics`] trait as a `BTreeMap<String, f64>`.
//!
//! # Why BTreeMap over HashMap?
//!
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Snapshots compare cleanly in tests
//!
//! Counters are updated inside the cache's critical section, so a snapshot
//! taken through [`ConcurrentLruCache`](crate::concurrent::ConcurrentLruCache)
//! is always internally consistent.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::LruCacheMetrics;

/// Common metrics tracked by every cache.
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get`) made against the cache
    pub requests: u64,

    /// Number of lookups that found their key
    pub cache_hits: u64,

    /// Number of new keys inserted (overwrites are not counted)
    pub insertions: u64,

    /// Number of entries evicted because an insertion breached capacity
    pub evictions: u64,

    /// Number of entries currently held
    pub entries: u64,

    /// Maximum number of entries the cache may hold
    pub capacity: u64,
}

impl CoreCacheMetrics {
    /// Creates a new CoreCacheMetrics instance for a cache of `capacity` entries
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Records a lookup that found its key
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that missed.
    ///
    /// Misses are derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new key entering the cache
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
        self.entries += 1;
    }

    /// Records a capacity eviction
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
        self.entries -= 1;
    }

    /// Records an entry leaving the cache for any reason other than eviction
    pub fn record_departure(&mut self) {
        self.entries -= 1;
    }

    /// Resets the live entry count after a clear; cumulative counters are kept
    pub fn record_clear(&mut self) {
        self.entries = 0;
    }

    /// Fraction of lookups that hit, or 0.0 before the first lookup
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, or 0.0 before the first lookup
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// How full the cache is relative to its capacity, or 0.0 at zero capacity
    pub fn cache_utilization(&self) -> f64 {
        if self.capacity > 0 {
            self.entries as f64 / self.capacity as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("requests".to_string(), self.requests as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics.insert("entries".to_string(), self.entries as f64);
        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics.insert("cache_utilization".to_string(), self.cache_utilization());

        if self.insertions > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.insertions as f64,
            );
        }

        metrics
    }
}

/// Trait implemented by every cache for metrics reporting
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs, sorted by name
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// A static string identifying the cache (e.g. "LRU", "ConcurrentLRU")
    fn algorithm_name(&self) -> &'static str;
}
