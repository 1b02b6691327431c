//! Concurrent Collections
//!
//! Thread-safe collections built on `parking_lot::RwLock`. Each instance owns
//! exactly one lock guarding all of its state, so every operation is
//! linearizable and no caller ever sees a half-updated structure.
//!
//! # Lock Discipline
//!
//! Reads take the shared form of the lock, mutations the exclusive form.
//! For the LRU cache, `get()` counts as a mutation: every hit moves the entry
//! to the head of the recency list, so it needs the write lock like `put()`.
//! Only the operations that leave recency alone (`len`, `contains_key`,
//! `peek_mru`, `peek_lru`, `keys`, metrics) can run in parallel.
//!
//! The cache is deliberately not sharded. Its index and recency list must
//! change together, and a single global order is what makes eviction exact.
//!
//! # Available Collections
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ConcurrentLruCache`] | Bounded LRU cache with exact global recency |
//! | [`ConcurrentMap`] | Hash map with put-if-absent and double-checked variants |
//! | [`ConcurrentSet`] | Hash set |
//! | [`ConcurrentLinkedList`] | Doubly linked list with positional and predicate removal |
//!
//! # Example
//!
//! ```rust
//! use lru_collections::concurrent::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! // Create a concurrent cache (can be shared across threads)
//! let cache = Arc::new(ConcurrentLruCache::new(1000));
//!
//! // Spawn multiple threads that access the cache concurrently
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             let key = format!("key_{}_{}", t, i);
//!             cache.put(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 400);
//! ```
//!
//! # Reentrancy
//!
//! Methods that run a caller closure under the lock (`get_with`,
//! `for_each`, `remove_all`, ...) must not call back into a mutating method
//! of the same instance. `parking_lot` locks are not reentrant and doing so
//! deadlocks.
//!
//! `ConcurrentMap` and `ConcurrentSet` take their shared lock recursively, so
//! the closures of `for_each_read` (map) and `for_each` (set) may call the
//! read-only methods of the same collection. Everywhere else, including
//! `ConcurrentLruCache` and `ConcurrentLinkedList`, a nested read can queue
//! behind a waiting writer and deadlock; do not call back into the same
//! instance at all.

mod linked_list;
mod lru;
mod map;
mod set;

pub use self::linked_list::ConcurrentLinkedList;
pub use self::lru::ConcurrentLruCache;
pub use self::map::ConcurrentMap;
pub use self::set::ConcurrentSet;
