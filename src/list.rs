//! Arena-backed doubly linked list.
//!
//! The list owns every [`Entry`] in a `Vec` of slots and links them through
//! [`Handle`]s instead of pointers. Vacated slots are threaded onto an
//! intrusive free list and reused by the next insertion, so a list whose
//! length stays bounded stops allocating once it has reached that bound.
//!
//! ```text
//!   head                                tail
//!    │                                   │
//!    ▼                                   ▼
//! ┌──────┐ next ┌──────┐ next ┌──────┐
//! │ slot │─────▶│ slot │─────▶│ slot │──▶ None
//! │  3   │◀─────│  0   │◀─────│  2   │
//! └──────┘ prev └──────┘ prev └──────┘
//!
//! slots: [0: Occupied, 1: Vacant(next_free: None), 2: Occupied, 3: Occupied]
//! free:  Some(1)
//! ```
//!
//! All link operations take already-resolved handles and run in O(1).
//! Positional lookups ([`List::handle_at`]) walk from the nearer end.

extern crate alloc;

use crate::entry::{Entry, Handle};
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

enum Slot<T> {
    Occupied(Entry<T>),
    Vacant { next_free: Option<usize> },
}

/// A doubly linked list whose nodes live in an arena owned by the list.
///
/// The front of the list is the "head" (most recently used when the list is
/// driving an LRU cache) and the back is the "tail".
pub struct List<T> {
    slots: Vec<Slot<T>>,
    /// First vacant slot, if any.
    free: Option<usize>,
    head: Option<Handle>,
    tail: Option<Handle>,
    /// Number of linked entries.
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> List<T> {
        List::with_capacity(0)
    }

    /// Creates an empty list with room for `cap` entries before the arena
    /// has to grow.
    pub fn with_capacity(cap: usize) -> List<T> {
        List {
            slots: Vec::with_capacity(cap),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of entries linked into the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the first entry.
    #[inline]
    pub fn head(&self) -> Option<Handle> {
        self.head
    }

    /// Handle of the last entry.
    #[inline]
    pub fn tail(&self) -> Option<Handle> {
        self.tail
    }

    fn entry(&self, handle: Handle) -> &Entry<T> {
        match self.slots.get(handle.index()) {
            Some(Slot::Occupied(entry)) => entry,
            _ => panic!("list handle {:?} does not refer to a live entry", handle),
        }
    }

    fn entry_mut(&mut self, handle: Handle) -> &mut Entry<T> {
        match self.slots.get_mut(handle.index()) {
            Some(Slot::Occupied(entry)) => entry,
            _ => panic!("list handle {:?} does not refer to a live entry", handle),
        }
    }

    /// Returns the value stored under `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not refer to a live entry of this list.
    #[inline]
    pub fn get(&self, handle: Handle) -> &T {
        self.entry(handle).value()
    }

    /// Returns the value stored under `handle` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not refer to a live entry of this list.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.entry_mut(handle).value_mut()
    }

    /// Handle of the entry after `handle` (towards the tail).
    #[inline]
    pub fn next(&self, handle: Handle) -> Option<Handle> {
        self.entry(handle).next()
    }

    /// Handle of the entry before `handle` (towards the head).
    #[inline]
    pub fn prev(&self, handle: Handle) -> Option<Handle> {
        self.entry(handle).prev()
    }

    /// Stores `val` in a detached entry, reusing a vacant slot when one exists.
    fn alloc(&mut self, val: T) -> Handle {
        let entry = Entry::new(val);
        match self.free {
            Some(index) => {
                let slot = &mut self.slots[index];
                self.free = match slot {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => panic!("free list points at occupied slot {}", index),
                };
                *slot = Slot::Occupied(entry);
                Handle::new(index)
            }
            None => {
                self.slots.push(Slot::Occupied(entry));
                Handle::new(self.slots.len() - 1)
            }
        }
    }

    /// Returns a detached entry's slot to the free list.
    fn release(&mut self, handle: Handle) -> Entry<T> {
        let index = handle.index();
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match core::mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied(entry) => {
                self.free = Some(index);
                entry
            }
            Slot::Vacant { .. } => panic!("list handle {:?} released twice", handle),
        }
    }

    /// Links a detached entry in as the new head.
    ///
    /// The previous head (if any) becomes its successor. On an empty list the
    /// entry also becomes the tail.
    pub(crate) fn set_head(&mut self, handle: Handle) {
        debug_assert!(self.entry(handle).is_detached());
        let old_head = self.head;
        {
            let entry = self.entry_mut(handle);
            entry.prev = None;
            entry.next = old_head;
        }
        match old_head {
            Some(old) => self.entry_mut(old).prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.len += 1;
    }

    /// Links a detached entry in as the new tail.
    pub(crate) fn set_tail(&mut self, handle: Handle) {
        debug_assert!(self.entry(handle).is_detached());
        let old_tail = self.tail;
        {
            let entry = self.entry_mut(handle);
            entry.prev = old_tail;
            entry.next = None;
        }
        match old_tail {
            Some(old) => self.entry_mut(old).next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.len += 1;
    }

    /// Splices an entry out of the chain, leaving it detached in its slot.
    fn unlink(&mut self, handle: Handle) {
        let (prev, next) = {
            let entry = self.entry_mut(handle);
            (entry.prev.take(), entry.next.take())
        };
        match prev {
            Some(p) => self.entry_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.entry_mut(n).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }

    /// Moves an entry to the head of the list. No-op if it already is the head.
    pub fn move_to_head(&mut self, handle: Handle) {
        if self.head == Some(handle) {
            return;
        }
        self.unlink(handle);
        self.set_head(handle);
    }

    /// Inserts `val` at the head and returns its handle.
    pub fn push_front(&mut self, val: T) -> Handle {
        let handle = self.alloc(val);
        self.set_head(handle);
        handle
    }

    /// Inserts `val` at the tail and returns its handle.
    pub fn push_back(&mut self, val: T) -> Handle {
        let handle = self.alloc(val);
        self.set_tail(handle);
        handle
    }

    /// Removes the entry under `handle` and returns its value.
    ///
    /// Neighbours are relinked and `head`/`tail` updated when the entry was
    /// at either end. Removing the sole entry leaves the list empty.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not refer to a live entry of this list.
    pub fn remove(&mut self, handle: Handle) -> T {
        self.unlink(handle);
        self.release(handle).into_value()
    }

    /// Removes and returns the head value.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.remove(head))
    }

    /// Removes and returns the tail value.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.remove(tail))
    }

    /// Returns the handle at position `index` counted from the head.
    ///
    /// Walks from whichever end is closer, so the cost is
    /// `O(min(index, len - index))`.
    pub fn handle_at(&self, index: usize) -> Option<Handle> {
        if index >= self.len {
            return None;
        }
        if index < self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = self.next(cursor?);
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(self.len - 1 - index) {
                cursor = self.prev(cursor?);
            }
            cursor
        }
    }

    /// Drops every entry. The arena keeps its allocation for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("slots", &self.slots.len())
            .field("length", &self.len)
            .finish()
    }
}

/// Head-to-tail iterator over a [`List`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        let entry = self.list.entry(handle);
        self.front = entry.next();
        self.remaining -= 1;
        Some(entry.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        let entry = self.list.entry(handle);
        self.back = entry.prev();
        self.remaining -= 1;
        Some(entry.value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
