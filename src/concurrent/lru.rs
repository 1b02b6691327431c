//! Concurrent LRU Cache Implementation
//!
//! A thread-safe LRU cache: the [`LruCache`](crate::LruCache) engine behind a
//! single `parking_lot::RwLock`.
//!
//! # How It Works
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  ConcurrentLruCache                      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │                     RwLock                         │  │
//! │  │  ┌──────────────┐        ┌──────────────────────┐  │  │
//! │  │  │ index        │ handle │ recency list (arena) │  │  │
//! │  │  │ K ─▶ Handle  │───────▶│ head ⇄ ... ⇄ tail    │  │  │
//! │  │  └──────────────┘        └──────────────────────┘  │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The index and the recency list must change together, so both sit behind
//! one lock and every operation runs in a single critical section. There is
//! no sharding: LRU order is global and exact.
//!
//! ## Which operations take which lock
//!
//! | Operation | Lock |
//! |-----------|------|
//! | `put`, `put_if_absent`, `evict`, `clear` | write |
//! | `get`, `get_with`, `get_mut_with` | write (a hit moves the entry to the head) |
//! | `len`, `is_empty`, `capacity`, `contains_key`, `peek_mru`, `peek_lru`, `keys`, `metrics` | read |
//!
//! # Thread Safety
//!
//! `ConcurrentLruCache` is `Send + Sync` whenever `K`, `V`, and `S` are, and
//! can be shared via `Arc`. Values are handed out as clones (or visited through
//! a closure while the lock is held); internal list handles never escape.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::lru::LruCache;
use crate::metrics::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use parking_lot::RwLock;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe, bounded LRU cache.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq + Clone`.
/// - `V`: Value type. Must implement `Clone` for the operations that return
///   values.
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// # Example
///
/// ```
/// use lru_collections::ConcurrentLruCache;
/// use std::sync::Arc;
/// use std::thread;
///
/// let cache = Arc::new(ConcurrentLruCache::new(1000));
///
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let cache = Arc::clone(&cache);
///         thread::spawn(move || {
///             for i in 0..100 {
///                 cache.put(format!("key_{}_{}", t, i), i);
///             }
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(cache.len(), 400);
/// assert_eq!(cache.get("key_0_7"), Some(7));
/// ```
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    inner: RwLock<LruCache<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLruCache<K, V, DefaultHashBuilder> {
    /// Creates a cache holding at most `limit` entries.
    ///
    /// A `limit` of zero produces a cache that evicts every entry as soon as
    /// it is inserted, so `len()` always reports zero.
    pub fn new(limit: usize) -> Self {
        ConcurrentLruCache::with_hasher(limit, DefaultHashBuilder::default())
    }

    /// Creates a concurrent LRU cache from a configuration with an optional
    /// hasher.
    ///
    /// ```
    /// use lru_collections::config::LruCacheConfig;
    /// use lru_collections::ConcurrentLruCache;
    ///
    /// let cache: ConcurrentLruCache<String, Vec<u8>> =
    ///     ConcurrentLruCache::init(LruCacheConfig { capacity: 10_000 }, None);
    /// assert_eq!(cache.capacity(), 10_000);
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        ConcurrentLruCache::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Creates a cache with a custom hash builder.
    pub fn with_hasher(limit: usize, hash_builder: S) -> Self {
        ConcurrentLruCache::init_with_hasher(LruCacheConfig::new(limit), hash_builder)
    }

    /// Creates a cache from a configuration and a custom hash builder.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    pub fn init_with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        ConcurrentLruCache {
            inner: RwLock::new(LruCache::init_with_hasher(config, hash_builder)),
        }
    }

    /// Returns the fixed maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.read().cap()
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Checks whether `key` is cached without changing its recency.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read().contains_key(key)
    }

    /// Retrieves a value and applies a function to it while holding the lock.
    ///
    /// A hit promotes the entry exactly like [`get`](Self::get), but the
    /// value is not cloned. Do not call back into the cache from `f`; the
    /// write lock is held for its duration.
    ///
    /// ```
    /// use lru_collections::ConcurrentLruCache;
    ///
    /// let cache = ConcurrentLruCache::new(4);
    /// cache.put("greeting", String::from("hello world"));
    /// assert_eq!(cache.get_with("greeting", |v| v.len()), Some(11));
    /// ```
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.write().get(key).map(f)
    }

    /// Retrieves a mutable reference and applies a function to it.
    ///
    /// Allows in-place modification of a cached value. Promotes on a hit.
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.write().get_mut(key).map(f)
    }

    /// Removes `key` regardless of recency and returns its value.
    ///
    /// Evicting a key that is not cached is a no-op returning `None`.
    pub fn evict<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().evict(key)
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Inserts or overwrites `key`, making it the most recently used entry.
    ///
    /// If a new key pushes the cache over capacity, the least recently used
    /// entry is evicted in the same critical section.
    pub fn put(&self, key: K, value: V) {
        self.inner.write().put(key, value);
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Retrieves a clone of the value for `key`, promoting the entry to most
    /// recently used.
    ///
    /// Takes the write lock: a hit reorders the recency list.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().get(key).cloned()
    }

    /// Inserts `key` only if absent.
    ///
    /// Returns `(true, value)` after an insertion, or `(false, existing)` if
    /// the key was already cached. An existing entry is neither overwritten
    /// nor promoted.
    pub fn put_if_absent(&self, key: K, value: V) -> (bool, V) {
        self.inner.write().put_if_absent(key, value)
    }

    /// Returns a clone of the most recently used entry.
    pub fn peek_mru(&self) -> Option<(K, V)> {
        self.inner
            .read()
            .peek_mru()
            .map(|(k, v)| (k.clone(), v.clone()))
    }

    /// Returns a clone of the least recently used entry, the next one to be
    /// evicted.
    pub fn peek_lru(&self) -> Option<(K, V)> {
        self.inner
            .read()
            .peek_lru()
            .map(|(k, v)| (k.clone(), v.clone()))
    }

    /// Returns the cached keys ordered from most to least recently used.
    pub fn keys(&self) -> Vec<K> {
        self.inner.read().iter().map(|(k, _)| k.clone()).collect()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for ConcurrentLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.read().lru_metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("ConcurrentLruCache")
            .field("inner", &*inner)
            .finish()
    }
}
