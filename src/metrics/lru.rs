//! LRU Cache Metrics
//!
//! Metrics specific to the LRU (Least Recently Used) cache algorithm.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU-specific metrics (extends CoreCacheMetrics)
#[derive(Debug, Clone)]
pub struct LruCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,
    /// Entries moved to the head by a hit or an overwrite
    pub promotions: u64,
    /// `put` calls that overwrote an existing value in place
    pub updates: u64,
    /// Entries removed explicitly through `evict`
    pub removals: u64,
}

impl LruCacheMetrics {
    /// Creates a new LruCacheMetrics instance for a cache of `capacity` entries
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(capacity),
            promotions: 0,
            updates: 0,
            removals: 0,
        }
    }

    /// Records an entry moving to the head of the recency order
    pub fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    /// Records an in-place overwrite of an existing key
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an explicit removal
    pub fn record_removal(&mut self) {
        self.removals += 1;
        self.core.record_departure();
    }

    /// Converts LRU metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("promotions".to_string(), self.promotions as f64);
        metrics.insert("updates".to_string(), self.updates as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
