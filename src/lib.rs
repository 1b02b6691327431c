#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ ConcurrentLruCache          parking_lot::RwLock                 │
//! │ ┌─────────────────────────────────────────────────────────────┐ │
//! │ │ LruCache                                                    │ │
//! │ │  index: HashMap<K, Handle>     list: List<(K, V)>           │ │
//! │ │      key ──────────▶ Handle ──▶ slot in arena               │ │
//! │ │                               head (MRU) ⇄ ... ⇄ tail (LRU) │ │
//! │ │  metrics: LruCacheMetrics                                   │ │
//! │ └─────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Type | Thread-safe | Description |
//! |------|-------------|-------------|
//! | [`LruCache`] | No | LRU engine, `&mut self` for anything touching recency |
//! | [`ConcurrentLruCache`] | Yes | The engine behind a single `RwLock` |
//! | [`ConcurrentMap`] | Yes | Hash map with put-if-absent |
//! | [`ConcurrentSet`] | Yes | Hash set |
//! | [`ConcurrentLinkedList`] | Yes | Doubly linked list |
//!
//! ## Single-threaded use
//!
//! ```rust
//! use lru_collections::LruCache;
//! use lru_collections::config::LruCacheConfig;
//!
//! let config = LruCacheConfig { capacity: 2 };
//! let mut cache = LruCache::init(config, None);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ## Metrics
//!
//! ```rust
//! use lru_collections::LruCache;
//! use lru_collections::metrics::CacheMetrics;
//!
//! let mut cache = LruCache::new(10);
//! cache.put("key", 1);
//! cache.get(&"key");
//! cache.get(&"missing");
//!
//! let metrics = cache.metrics();
//! assert_eq!(metrics.get("cache_hits"), Some(&1.0));
//! assert_eq!(metrics.get("hit_rate"), Some(&0.5));
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the LRU engine
//! - [`concurrent`]: thread-safe collections
//! - [`config`]: cache configuration
//! - [`error`]: error types
//! - [`metrics`]: metrics collection

#![no_std]

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Arena entry and handle types.
///
/// An [`Entry`](entry::Entry) holds a value and the handles of its
/// neighbours; a [`Handle`](entry::Handle) is the stable index of an entry
/// inside its owning list.
pub(crate) mod entry;

/// Arena-backed doubly linked list.
///
/// Shared by the LRU engine (as the recency order) and by
/// [`ConcurrentLinkedList`]. Internal infrastructure; the collections expose
/// values, never handles.
#[cfg_attr(not(feature = "concurrent"), allow(dead_code))]
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Error types.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Cache metrics system.
///
/// Counters maintained by the caches and reported through a common trait.
pub mod metrics;

/// Concurrent collections.
///
/// Thread-safe cache, map, set and linked list, each guarded by a single
/// `parking_lot::RwLock`.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use error::CollectionError;
pub use lru::LruCache;

#[cfg(feature = "concurrent")]
pub use concurrent::{ConcurrentLinkedList, ConcurrentLruCache, ConcurrentMap, ConcurrentSet};
