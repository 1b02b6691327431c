//! Concurrent hash set.

extern crate alloc;

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use parking_lot::RwLock;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashSet;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashSet;

/// A thread-safe hash set guarded by a `parking_lot::RwLock`.
///
/// Shared acquisitions are recursive, as in the map.
///
/// Like [`ConcurrentMap`](super::ConcurrentMap), the capacity given at
/// construction is remembered across [`clear`](Self::clear).
///
/// ```
/// use lru_collections::ConcurrentSet;
///
/// let set: ConcurrentSet<u32> = [1, 2, 3].into_iter().collect();
/// assert!(set.contains(&2));
/// assert!(!set.add(2));
/// assert!(set.add_all([3, 4]));
/// assert_eq!(set.len(), 4);
/// ```
pub struct ConcurrentSet<T, S = DefaultHashBuilder> {
    inner: RwLock<HashSet<T, S>>,
    capacity: usize,
}

impl<T: Hash + Eq> ConcurrentSet<T, DefaultHashBuilder> {
    /// Creates an empty set.
    pub fn new() -> Self {
        ConcurrentSet::with_capacity(0)
    }

    /// Creates an empty set with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        ConcurrentSet::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T: Hash + Eq, S: BuildHasher> ConcurrentSet<T, S> {
    /// Creates an empty set with room for `capacity` values, hashed with
    /// `hash_builder`.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        ConcurrentSet {
            inner: RwLock::new(HashSet::with_capacity_and_hasher(capacity, hash_builder)),
            capacity,
        }
    }

    /// Adds `value`, returning `true` if it was not already present.
    pub fn add(&self, value: T) -> bool {
        self.inner.write().insert(value)
    }

    /// Adds every value from `values` under a single lock acquisition.
    ///
    /// Returns `true` if the set changed.
    pub fn add_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = self.inner.write();
        let mut changed = false;
        for value in values {
            changed |= set.insert(value);
        }
        changed
    }

    /// Returns `true` if `value` is present.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read_recursive().contains(value)
    }

    /// Removes `value`, returning `true` if it was present.
    pub fn remove<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().remove(value)
    }

    /// Calls `f` for every value while holding the shared lock.
    ///
    /// `f` may call the read-only methods of this set, even while a writer is
    /// waiting. Calling `add`, `remove` or `clear` from `f` deadlocks.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for value in self.inner.read_recursive().iter() {
            f(value);
        }
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.inner.read_recursive().len()
    }

    /// Returns `true` if the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.inner.read_recursive().is_empty()
    }

    /// Removes every value and releases storage grown past the initial
    /// capacity.
    pub fn clear(&self) {
        let mut set = self.inner.write();
        set.clear();
        set.shrink_to(self.capacity);
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher> ConcurrentSet<T, S> {
    /// Returns the values in unspecified order.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.read_recursive().iter().cloned().collect()
    }
}

impl<T: Hash + Eq> Default for ConcurrentSet<T, DefaultHashBuilder> {
    fn default() -> Self {
        ConcurrentSet::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for ConcurrentSet<T, DefaultHashBuilder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let set = ConcurrentSet::with_capacity(iter.size_hint().0);
        set.add_all(iter);
        set
    }
}

impl<T, S> fmt::Debug for ConcurrentSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentSet")
            .field("len", &self.inner.read_recursive().len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
