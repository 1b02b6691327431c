//! Concurrent hash map.
//!
//! A `HashMap` behind a `parking_lot::RwLock`. Lookups share the lock,
//! mutations take it exclusively. Values are returned as clones so no guard
//! ever escapes a method.
//!
//! Shared acquisitions are recursive: a read nested inside another read on
//! the same thread never queues behind a waiting writer.

extern crate alloc;

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use parking_lot::RwLock;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// A thread-safe hash map.
///
/// The initial capacity given to [`with_capacity`](Self::with_capacity) is
/// remembered: [`clear`](Self::clear) releases any storage grown beyond it.
///
/// # Example
///
/// ```
/// use lru_collections::ConcurrentMap;
///
/// let map = ConcurrentMap::new();
/// assert_eq!(map.put("a", 1), None);
/// assert_eq!(map.put("a", 2), Some(1));
/// assert_eq!(map.put_if_absent("a", 3), (false, 2));
/// assert_eq!(map.get("a"), Some(2));
/// ```
pub struct ConcurrentMap<K, V, S = DefaultHashBuilder> {
    inner: RwLock<HashMap<K, V, S>>,
    capacity: usize,
}

impl<K: Hash + Eq, V> ConcurrentMap<K, V, DefaultHashBuilder> {
    /// Creates an empty map.
    pub fn new() -> Self {
        ConcurrentMap::with_capacity(0)
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        ConcurrentMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentMap<K, V, S> {
    /// Creates an empty map with room for `capacity` entries, using
    /// `hash_builder` to hash keys.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        ConcurrentMap {
            inner: RwLock::new(HashMap::with_capacity_and_hasher(capacity, hash_builder)),
            capacity,
        }
    }

    /// Maps `key` to `value`, returning the previous value if there was one.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read_recursive().contains_key(key)
    }

    /// Removes `key` and returns its value, or `None` if it was absent.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().remove(key)
    }

    /// Like [`remove`](Self::remove), but probes under the shared lock first
    /// and only takes the exclusive lock when the key was seen.
    ///
    /// Cheaper than `remove` when most keys are absent. The key may still
    /// disappear between the probe and the removal, in which case `None` is
    /// returned.
    pub fn remove_double_check<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if !self.contains_key(key) {
            return None;
        }
        self.remove(key)
    }

    /// Calls `f` for every entry while holding the shared lock.
    ///
    /// Other readers may run concurrently, and `f` may call the read-only
    /// methods of this map (`get`, `contains_key`, `len`, ...) even while a
    /// writer is waiting. Calling a mutating method of this map from `f`
    /// deadlocks.
    pub fn for_each_read<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in self.inner.read_recursive().iter() {
            f(k, v);
        }
    }

    /// Calls `f` for every entry with mutable access to the value, holding
    /// the exclusive lock. Do not call back into the map from `f`.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &mut V),
    {
        for (k, v) in self.inner.write().iter_mut() {
            f(k, v);
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.read_recursive().len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read_recursive().is_empty()
    }

    /// Shrinks the backing storage to fit the current number of entries.
    pub fn shrink_to_fit(&self) {
        self.inner.write().shrink_to_fit();
    }

    /// Removes every entry and releases storage grown past the initial
    /// capacity.
    pub fn clear(&self) {
        let mut map = self.inner.write();
        map.clear();
        map.shrink_to(self.capacity);
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> ConcurrentMap<K, V, S> {
    /// Returns the keys in unspecified order.
    pub fn keys(&self) -> Vec<K> {
        self.inner.read_recursive().keys().cloned().collect()
    }
}

impl<K: Hash + Eq, V: Clone, S: BuildHasher> ConcurrentMap<K, V, S> {
    /// Returns a clone of the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read_recursive().get(key).cloned()
    }

    /// Maps `key` to `value` only if `key` is absent.
    ///
    /// Returns `(true, value)` after inserting, or `(false, existing)` when
    /// the key was already mapped; the existing value is left untouched.
    pub fn put_if_absent(&self, key: K, value: V) -> (bool, V) {
        let mut map = self.inner.write();
        if let Some(existing) = map.get(&key) {
            return (false, existing.clone());
        }
        map.insert(key, value.clone());
        (true, value)
    }

    /// Like [`put_if_absent`](Self::put_if_absent), but probes under the
    /// shared lock first and only takes the exclusive lock on a miss.
    pub fn put_if_absent_double_check(&self, key: K, value: V) -> (bool, V) {
        if let Some(existing) = self.get(&key) {
            return (false, existing);
        }
        self.put_if_absent(key, value)
    }
}

impl<K: Clone, V: Clone, S: Clone> ConcurrentMap<K, V, S> {
    /// Returns a shallow copy of the current contents.
    pub fn snapshot(&self) -> HashMap<K, V, S> {
        self.inner.read_recursive().clone()
    }
}

impl<K: Hash + Eq, V> Default for ConcurrentMap<K, V, DefaultHashBuilder> {
    fn default() -> Self {
        ConcurrentMap::new()
    }
}

impl<K, V, S> fmt::Debug for ConcurrentMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentMap")
            .field("len", &self.inner.read_recursive().len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
