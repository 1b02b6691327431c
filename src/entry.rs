//! Arena-backed list entries.
//!
//! An [`Entry`] is one node of the recency list: the stored value plus the
//! handles of its neighbours. Entries never point at each other directly.
//! Links are [`Handle`]s into the arena owned by [`List`](crate::list::List),
//! so the arena is the single owner of every node and a removed entry cannot
//! leave a dangling reference behind.
//!
//! # Memory Layout
//!
//! - `val: T` - the stored value (for the LRU cache, the `(K, V)` pair)
//! - `prev: Option<Handle>` - 16 bytes
//! - `next: Option<Handle>` - 16 bytes

use core::fmt;

/// Stable index of an entry inside a list arena.
///
/// A handle stays valid from the moment the entry is inserted until it is
/// removed from the list (or the list is cleared). After that the slot may be
/// recycled for a different entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

impl Handle {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Handle(index)
    }

    /// Returns the arena slot index this handle refers to.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self.0)
    }
}

/// A node in the doubly linked list.
///
/// `prev` points towards the head (more recently used), `next` towards the
/// tail (less recently used). Both are `None` while the entry is detached and
/// for the sole entry of a single-element list.
pub struct Entry<T> {
    pub(crate) val: T,
    pub(crate) prev: Option<Handle>,
    pub(crate) next: Option<Handle>,
}

impl<T> Entry<T> {
    /// Creates a detached entry holding `val`.
    #[inline]
    pub(crate) fn new(val: T) -> Self {
        Entry {
            val,
            prev: None,
            next: None,
        }
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.val
    }

    /// Returns a mutable reference to the stored value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.val
    }

    /// Handle of the neighbour towards the head, if any.
    #[inline]
    pub fn prev(&self) -> Option<Handle> {
        self.prev
    }

    /// Handle of the neighbour towards the tail, if any.
    #[inline]
    pub fn next(&self) -> Option<Handle> {
        self.next
    }

    #[inline]
    pub(crate) fn is_detached(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }

    #[inline]
    pub(crate) fn into_value(self) -> T {
        self.val
    }
}

impl<T: fmt::Debug> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("val", &self.val)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}
