//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides the LRU engine: a hash index from keys to list
//! handles, coupled with an arena-backed doubly linked list that records
//! recency from most recently used (head) to least recently used (tail).
//!
//! # Algorithm
//!
//! Every successful `get`, every `put`, and every `put_if_absent` that
//! inserts moves the touched entry to the head. When an insertion pushes the
//! length past the configured capacity, the tail entry is evicted from both
//! the list and the index. Exactly one eviction is ever needed, because an
//! insertion grows the cache by exactly one entry.
//!
//! `put_if_absent` on a key that is already present neither overwrites the
//! value nor promotes the entry. A plain `get` does promote.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Evict: O(1)
//!   - Clear: O(n)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!   - Each entry stores the key twice (index and list) plus two link handles
//!
//! # Thread Safety
//!
//! `LruCache` is not thread-safe on its own; every method that touches
//! recency needs `&mut self`. Use
//! [`ConcurrentLruCache`](crate::concurrent::ConcurrentLruCache) to share a
//! cache between threads.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::Handle;
use crate::list::{self, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use log::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Upper bound on slots reserved up front. Larger caches grow on demand.
const MAX_PREALLOCATED_SLOTS: usize = 4096;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and removing entries. When an insertion exceeds the
/// capacity, the least recently used entry is evicted.
///
/// # Examples
///
/// ```
/// use lru_collections::LruCache;
///
/// let mut cache = LruCache::new(2);
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<(K, V)>,
    map: HashMap<K, Handle, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates an LRU cache holding at most `cap` entries.
    ///
    /// A `cap` of zero produces a cache that evicts every entry as soon as it
    /// is inserted.
    pub fn new(cap: usize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates an LRU cache from a configuration with an optional hasher.
    ///
    /// ```
    /// use lru_collections::config::LruCacheConfig;
    /// use lru_collections::LruCache;
    ///
    /// let cache: LruCache<u64, String> = LruCache::init(LruCacheConfig { capacity: 64 }, None);
    /// assert!(cache.is_empty());
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        LruCache::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: usize, hash_builder: S) -> Self {
        LruCache::init_with_hasher(LruCacheConfig::new(cap), hash_builder)
    }

    /// Creates a new LRU cache from a configuration and hash builder.
    pub fn init_with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        // One slot beyond capacity: a new entry is linked before the tail is evicted.
        let slots = config.capacity.saturating_add(1).min(MAX_PREALLOCATED_SLOTS);
        debug!("creating LRU cache with capacity {}", config.capacity);
        LruCache {
            config,
            list: List::with_capacity(slots),
            map: HashMap::with_capacity_and_hasher(slots, hash_builder),
            metrics: LruCacheMetrics::new(config.capacity as u64),
        }
    }

    /// Returns the maximum number of entries the cache holds.
    #[inline]
    pub fn cap(&self) -> usize {
        self.config.capacity
    }

    /// Returns the number of entries currently cached.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[cfg(feature = "concurrent")]
    #[inline]
    pub(crate) fn lru_metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    fn promote(&mut self, handle: Handle) {
        if self.list.head() != Some(handle) {
            self.list.move_to_head(handle);
            self.metrics.record_promotion();
        }
    }

    /// Returns the value for `key` and marks the entry as most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(handle) => {
                self.promote(handle);
                self.metrics.core.record_hit();
                Some(&self.list.get(handle).1)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Returns a mutable reference to the value for `key` and marks the entry
    /// as most recently used.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(handle) => {
                self.promote(handle);
                self.metrics.core.record_hit();
                Some(&mut self.list.get_mut(handle).1)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Returns the value for `key` without touching recency or metrics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.map.get(key).copied()?;
        Some(&self.list.get(handle).1)
    }

    /// Returns true if `key` is cached. Does not affect recency.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the most recently used entry (the head) without promoting it.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.list.head().map(|handle| {
            let (k, v) = self.list.get(handle);
            (k, v)
        })
    }

    /// Returns the least recently used entry (the tail), i.e. the next
    /// eviction candidate.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.tail().map(|handle| {
            let (k, v) = self.list.get(handle);
            (k, v)
        })
    }

    /// Removes `key` regardless of its position and returns its value.
    ///
    /// Returns `None` if the key was not cached.
    pub fn evict<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.map.remove(key)?;
        let (_, value) = self.list.remove(handle);
        self.metrics.record_removal();
        Some(value)
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        let dropped = self.map.len();
        self.map.clear();
        self.list.clear();
        self.metrics.core.record_clear();
        debug!("cleared LRU cache, dropped {} entries", dropped);
    }

    /// Iterates over the entries from most to least recently used.
    ///
    /// Iteration does not change recency.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Drops the tail entry from both the list and the index.
    fn evict_lru(&mut self) {
        if let Some((key, _value)) = self.list.pop_back() {
            self.map.remove(&key);
            self.metrics.core.record_eviction();
            trace!(
                "evicted least recently used entry (len={}, capacity={})",
                self.map.len(),
                self.config.capacity
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.map.len(), self.list.len());
        assert!(self.map.len() <= self.config.capacity);
        let mut cursor = self.list.head();
        let mut walked = 0;
        while let Some(handle) = cursor {
            let (key, _) = self.list.get(handle);
            assert_eq!(self.map.get(key).copied(), Some(handle));
            cursor = self.list.next(handle);
            walked += 1;
        }
        assert_eq!(walked, self.map.len());
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Links a new entry at the head and evicts the tail if that breached
    /// capacity. The key must not already be present.
    fn insert(&mut self, key: K, value: V) {
        let handle = self.list.push_front((key.clone(), value));
        self.map.insert(key, handle);
        self.metrics.core.record_insertion();
        if self.map.len() > self.config.capacity {
            self.evict_lru();
        }
    }

    /// Inserts or overwrites `key`.
    ///
    /// A new key is placed at the head; if the cache is then over capacity
    /// the least recently used entry is evicted silently. An existing key has
    /// its value replaced in place and is promoted to the head.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(handle) = self.map.get(&key).copied() {
            self.list.get_mut(handle).1 = value;
            self.metrics.record_update();
            self.promote(handle);
            return;
        }
        self.insert(key, value);
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts `key` only if it is not cached yet.
    ///
    /// Returns `(true, value)` when the entry was inserted (with the same
    /// eviction behaviour as [`put`](Self::put)), or `(false, existing)` when
    /// the key was already present. In the second case neither the value nor
    /// the recency order changes.
    pub fn put_if_absent(&mut self, key: K, value: V) -> (bool, V) {
        if let Some(handle) = self.map.get(&key).copied() {
            return (false, self.list.get(handle).1.clone());
        }
        let inserted = value.clone();
        self.insert(key, value);
        (true, inserted)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> core::fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

/// Iterator over an [`LruCache`] from most to least recently used.
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> core::fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    fn keys<K: Clone, V, S>(cache: &LruCache<K, V, S>) -> Vec<K> {
        cache.list.iter().map(|(k, _)| k.clone()).collect()
    }

    #[test]
    fn test_lru_get_put() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.get(&"apple"), Some(&1));
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), None);
        cache.put("apple", 3);
        assert_eq!(cache.get(&"apple"), Some(&3));
        cache.put("cherry", 4);
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
        cache.assert_consistent();
    }

    #[test]
    fn test_lru_head_and_tail_after_eviction() {
        let mut cache = LruCache::new(3);
        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(3, "c");
        assert_eq!(cache.peek_mru(), Some((&3, &"c")));
        assert_eq!(cache.peek_lru(), Some((&1, &"a")));
        assert_eq!(cache.len(), 3);

        cache.put(4, "d");
        assert_eq!(cache.peek_mru(), Some((&4, &"d")));
        assert_eq!(cache.peek_lru(), Some((&2, &"b")));
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains_key(&1));
        cache.assert_consistent();
    }

    #[test]
    fn test_lru_put_overwrite_promotes() {
        let mut cache = LruCache::new(3);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        cache.put("a", 10);
        assert_eq!(keys(&cache), vec!["a", "c", "b"]);
        assert_eq!(cache.len(), 3);
        cache.put("d", 4);
        assert!(!cache.contains_key(&"b"));
        assert_eq!(cache.peek(&"a"), Some(&10));
        cache.assert_consistent();
    }

    #[test]
    fn test_lru_get_mut() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        if let Some(v) = cache.get_mut(&"apple") {
            *v = 3;
        }
        assert_eq!(cache.get(&"apple"), Some(&3));
        cache.put("cherry", 4);
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
    }

    #[test]
    fn test_lru_put_if_absent() {
        let mut cache = LruCache::new(3);
        assert_eq!(cache.put_if_absent(1, "one"), (true, "one"));
        cache.put(2, "two");
        cache.put(3, "three");
        assert_eq!(cache.put_if_absent(1, "uno"), (false, "one"));
        // no promotion: 1 is still the tail
        assert_eq!(cache.peek_lru(), Some((&1, &"one")));
        cache.put(4, "four");
        assert!(!cache.contains_key(&1));
        assert!(cache.contains_key(&2));
        cache.assert_consistent();
    }

    #[test]
    fn test_lru_put_if_absent_evicts_on_insert() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.put_if_absent("c", 3), (true, 3));
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains_key(&"a"));
        assert_eq!(cache.peek_mru(), Some((&"c", &3)));
    }

    #[test]
    fn test_lru_evict() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.evict(&"apple"), Some(1));
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.evict(&"cherry"), None);
        cache.put("cherry", 3);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
        cache.assert_consistent();
    }

    #[test]
    fn test_lru_evict_head_tail_and_sole() {
        let mut cache = LruCache::new(3);
        cache.put(1, ());
        cache.put(2, ());
        cache.put(3, ());
        assert_eq!(cache.evict(&3), Some(()));
        assert_eq!(cache.peek_mru().map(|(k, _)| *k), Some(2));
        assert_eq!(cache.evict(&1), Some(()));
        assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(2));
        assert_eq!(cache.evict(&2), Some(()));
        assert!(cache.is_empty());
        assert_eq!(cache.peek_mru(), None);
        assert_eq!(cache.peek_lru(), None);
        cache.assert_consistent();
    }

    #[test]
    fn test_lru_clear() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&"apple"), None);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.cap(), 2);
        cache.put("cherry", 3);
        assert_eq!(cache.get(&"cherry"), Some(&3));
        cache.assert_consistent();
    }

    #[test]
    fn test_lru_capacity_limits() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.put("cherry", 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_capacity_one() {
        let mut cache = LruCache::new(1);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.peek_mru(), cache.peek_lru());
        assert_eq!(cache.get(&"b"), Some(&2));
        cache.put("b", 3);
        assert_eq!(cache.get(&"b"), Some(&3));
        cache.assert_consistent();
    }

    #[test]
    fn test_lru_zero_capacity_retains_nothing() {
        let mut cache = LruCache::new(0);
        cache.put("a", 1);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.put_if_absent("b", 2), (true, 2));
        assert!(cache.is_empty());
        assert_eq!(cache.metrics().get("evictions"), Some(&2.0));
        cache.assert_consistent();
    }

    #[test]
    fn test_lru_string_keys() {
        let mut cache = LruCache::new(2);
        let key1 = String::from("apple");
        let key2 = String::from("banana");
        cache.put(key1.clone(), 1);
        cache.put(key2.clone(), 2);
        assert_eq!(cache.get(&key1), Some(&1));
        assert_eq!(cache.get(&key2), Some(&2));
        assert_eq!(cache.get("apple"), Some(&1));
        assert_eq!(cache.evict("banana"), Some(2));
    }

    #[test]
    fn test_lru_iter_in_recency_order() {
        let mut cache = LruCache::new(4);
        for i in 0..4 {
            cache.put(i, i * 10);
        }
        cache.get(&1);
        let order: Vec<_> = cache.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(order, vec![(1, 10), (3, 30), (2, 20), (0, 0)]);
        let oldest_first: Vec<_> = cache.iter().rev().map(|(k, _)| *k).collect();
        assert_eq!(oldest_first, vec![0, 2, 3, 1]);
        assert_eq!(cache.iter().len(), 4);
    }

    #[test]
    fn test_lru_peek_does_not_promote() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.peek(&"a"), Some(&1));
        assert!(cache.contains_key(&"a"));
        cache.put("c", 3);
        assert!(!cache.contains_key(&"a"));
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    struct ComplexValue {
        val: i32,
        description: String,
    }

    #[test]
    fn test_lru_complex_values() {
        let mut cache = LruCache::new(2);
        let fruit = |val: i32, description: &str| ComplexValue {
            val,
            description: String::from(description),
        };
        cache.put(String::from("apple"), fruit(1, "First fruit"));
        cache.put(String::from("banana"), fruit(2, "Second fruit"));
        cache.put(String::from("cherry"), fruit(3, "Third fruit"));
        assert_eq!(cache.evict("apple"), None);
        assert_eq!(cache.peek("banana").map(|v| v.val), Some(2));
        let (inserted, existing) = cache.put_if_absent(String::from("cherry"), fruit(9, "x"));
        assert!(!inserted);
        assert_eq!(existing, fruit(3, "Third fruit"));
    }

    #[test]
    fn test_lru_metrics() {
        let mut cache = LruCache::new(2);
        let metrics = cache.metrics();
        assert_eq!(metrics.get("requests").unwrap(), &0.0);
        assert_eq!(metrics.get("cache_hits").unwrap(), &0.0);
        assert_eq!(metrics.get("cache_misses").unwrap(), &0.0);
        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.get(&"apple");
        cache.get(&"banana");
        cache.get(&"durian");
        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_hits").unwrap(), &2.0);
        assert_eq!(metrics.get("cache_misses").unwrap(), &1.0);
        assert_eq!(metrics.get("requests").unwrap(), &3.0);
        assert_eq!(metrics.get("promotions").unwrap(), &2.0);
        cache.put("cherry", 3);
        cache.put("cherry", 4);
        cache.evict(&"cherry");
        let metrics = cache.metrics();
        assert_eq!(metrics.get("evictions").unwrap(), &1.0);
        assert_eq!(metrics.get("insertions").unwrap(), &3.0);
        assert_eq!(metrics.get("updates").unwrap(), &1.0);
        assert_eq!(metrics.get("removals").unwrap(), &1.0);
        assert_eq!(metrics.get("entries").unwrap(), &1.0);
        assert_eq!(cache.algorithm_name(), "LRU");
    }

    #[test]
    fn test_lru_init_with_config() {
        let cache: LruCache<u32, u32> = LruCache::init(LruCacheConfig { capacity: 10 }, None);
        assert_eq!(cache.cap(), 10);
        let cache: LruCache<u32, u32, _> =
            LruCache::init_with_hasher(LruCacheConfig::new(3), DefaultHashBuilder::default());
        assert_eq!(cache.cap(), 3);
    }

    #[test]
    fn test_lru_init_with_explicit_default_hasher() {
        let mut cache: LruCache<&str, u32> = LruCache::init(
            LruCacheConfig { capacity: 2 },
            Some(DefaultHashBuilder::default()),
        );
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[cfg(feature = "hashbrown")]
    #[test]
    fn test_lru_default_hasher_is_hashbrown_root_export() {
        let mut cache: LruCache<u8, u8, hashbrown::DefaultHashBuilder> = LruCache::new(1);
        cache.put(1, 1);
        assert_eq!(cache.peek(&1), Some(&1));
    }

    #[test]
    fn test_lru_huge_capacity_does_not_preallocate() {
        let mut cache = LruCache::new(usize::MAX);
        for i in 0..100 {
            cache.put(i, i);
        }
        assert_eq!(cache.len(), 100);
        cache.assert_consistent();
    }

    #[test]
    fn test_lru_churn_keeps_index_and_list_in_agreement() {
        let mut cache = LruCache::new(8);
        for i in 0u32..500 {
            let key = (i * 7) % 23;
            match i % 5 {
                0 | 1 => cache.put(key, i),
                2 => {
                    cache.get(&key);
                }
                3 => {
                    cache.put_if_absent(key, i);
                }
                _ => {
                    cache.evict(&key);
                }
            }
            cache.assert_consistent();
        }
    }

    #[test]
    fn test_lru_concurrent_access() {
        extern crate std;
        use std::sync::{Arc, Mutex};
        use std::thread;

        let cache = Arc::new(Mutex::new(LruCache::new(100)));
        let mut handles: Vec<std::thread::JoinHandle<()>> = Vec::new();

        for t in 0..4 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..100 {
                    let key = std::format!("thread_{}_key_{}", t, i);
                    let mut guard = cache.lock().unwrap();
                    guard.put(key.clone(), t * 1000 + i);
                    let _ = guard.get(&key);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let guard = cache.lock().unwrap();
        assert!(guard.len() <= 100);
        guard.assert_consistent();
    }
}
