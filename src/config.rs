//! Cache Configuration Module
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: All parameters must be provided at construction
//! - **No boilerplate**: No builder needed, though `new` exists for brevity
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | `LruCacheConfig` | `ConcurrentLruCache` | Same engine behind a single `RwLock` |
//!
//! The peer collections (`ConcurrentMap`, `ConcurrentSet`,
//! `ConcurrentLinkedList`) take their only tunable, an initial capacity,
//! directly in their `with_capacity` constructors.
//!
//! # Examples
//!
//! ```
//! use lru_collections::config::LruCacheConfig;
//! use lru_collections::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.cap(), 1000);
//! ```

use core::fmt;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries. Fixed for the lifetime of the
///   cache; `clear()` does not change it.
///
/// # Zero Capacity
///
/// A capacity of `0` is accepted and yields a cache that retains nothing:
/// every insertion is linked in and then immediately evicted as the least
/// recently used entry. `put_if_absent` still reports the insertion.
///
/// # Examples
///
/// ```
/// use lru_collections::config::LruCacheConfig;
/// use lru_collections::LruCache;
///
/// let config = LruCacheConfig::new(3);
/// let mut cache: LruCache<&str, u32> = LruCache::init(config, None);
/// cache.put("a", 1);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Creates a configuration holding at most `capacity` entries.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
