//! Concurrent doubly linked list.
//!
//! Reuses the crate's arena-backed [`List`] behind a `parking_lot::RwLock`.
//! Every operation, including the removals at either end, runs under the
//! lock. Positional access walks from the nearer end of the list.

extern crate alloc;

use crate::error::{CollectionError, Result};
use crate::list::List;
use alloc::vec::Vec;
use core::fmt;
use parking_lot::RwLock;

/// A thread-safe doubly linked list.
///
/// # Example
///
/// ```
/// use lru_collections::{CollectionError, ConcurrentLinkedList};
///
/// let list: ConcurrentLinkedList<i32> = [1, 2, 3].into_iter().collect();
/// list.add_first(0);
/// assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);
/// assert_eq!(list.remove(1), Ok(1));
/// assert_eq!(
///     list.get(5),
///     Err(CollectionError::IndexOutOfRange { index: 5, len: 3 })
/// );
/// ```
pub struct ConcurrentLinkedList<T> {
    inner: RwLock<List<T>>,
}

impl<T> ConcurrentLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        ConcurrentLinkedList {
            inner: RwLock::new(List::new()),
        }
    }

    /// Inserts `value` at the front.
    pub fn add_first(&self, value: T) {
        self.inner.write().push_front(value);
    }

    /// Appends `value` at the back.
    pub fn add_last(&self, value: T) {
        self.inner.write().push_back(value);
    }

    /// Removes and returns the first value, or `None` if the list is empty.
    pub fn remove_first(&self) -> Option<T> {
        self.inner.write().pop_front()
    }

    /// Removes and returns the last value, or `None` if the list is empty.
    pub fn remove_last(&self) -> Option<T> {
        self.inner.write().pop_back()
    }

    /// Removes and returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove(&self, index: usize) -> Result<T> {
        let mut list = self.inner.write();
        let handle = list
            .handle_at(index)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: list.len(),
            })?;
        Ok(list.remove(handle))
    }

    /// Removes the first value matching `pred`, scanning from the front.
    ///
    /// Returns the position the value held and the value itself.
    pub fn remove_first_occurrence<F>(&self, mut pred: F) -> Option<(usize, T)>
    where
        F: FnMut(&T) -> bool,
    {
        let mut list = self.inner.write();
        let mut cursor = list.head();
        let mut index = 0;
        while let Some(handle) = cursor {
            if pred(list.get(handle)) {
                return Some((index, list.remove(handle)));
            }
            cursor = list.next(handle);
            index += 1;
        }
        None
    }

    /// Removes the last value matching `pred`, scanning from the back.
    ///
    /// Returns the position the value held and the value itself.
    pub fn remove_last_occurrence<F>(&self, mut pred: F) -> Option<(usize, T)>
    where
        F: FnMut(&T) -> bool,
    {
        let mut list = self.inner.write();
        let mut cursor = list.tail();
        let mut index = list.len();
        while let Some(handle) = cursor {
            index -= 1;
            if pred(list.get(handle)) {
                return Some((index, list.remove(handle)));
            }
            cursor = list.prev(handle);
        }
        None
    }

    /// Removes every value matching `pred` and returns how many were removed.
    pub fn remove_all<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut list = self.inner.write();
        let mut cursor = list.head();
        let mut removed = 0;
        while let Some(handle) = cursor {
            cursor = list.next(handle);
            if pred(list.get(handle)) {
                list.remove(handle);
                removed += 1;
            }
        }
        removed
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes every value.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl<T: Clone> ConcurrentLinkedList<T> {
    /// Returns a clone of the first value.
    pub fn get_first(&self) -> Option<T> {
        let list = self.inner.read();
        list.head().map(|h| list.get(h).clone())
    }

    /// Returns a clone of the last value.
    pub fn get_last(&self) -> Option<T> {
        let list = self.inner.read();
        list.tail().map(|h| list.get(h).clone())
    }

    /// Returns a clone of the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T> {
        let list = self.inner.read();
        match list.handle_at(index) {
            Some(handle) => Ok(list.get(handle).clone()),
            None => Err(CollectionError::IndexOutOfRange {
                index,
                len: list.len(),
            }),
        }
    }

    /// Returns the values from front to back.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.read().iter().cloned().collect()
    }
}

impl<T> Default for ConcurrentLinkedList<T> {
    fn default() -> Self {
        ConcurrentLinkedList::new()
    }
}

impl<T> FromIterator<T> for ConcurrentLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = List::with_capacity(iter.size_hint().0);
        for value in iter {
            list.push_back(value);
        }
        ConcurrentLinkedList {
            inner: RwLock::new(list),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ConcurrentLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.read().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::sync::Arc;
    use std::thread;
    use std::vec;

    fn list_of(values: &[i32]) -> ConcurrentLinkedList<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_add_and_get_ends() {
        let list = ConcurrentLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.get_first(), None);
        assert_eq!(list.get_last(), None);

        list.add_last(2);
        list.add_first(1);
        list.add_last(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get_first(), Some(1));
        assert_eq!(list.get_last(), Some(3));
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_get_by_index() {
        let list = list_of(&[10, 20, 30, 40, 50]);
        for (i, expected) in [10, 20, 30, 40, 50].into_iter().enumerate() {
            assert_eq!(list.get(i), Ok(expected));
        }
        assert_eq!(
            list.get(5),
            Err(CollectionError::IndexOutOfRange { index: 5, len: 5 })
        );

        let empty: ConcurrentLinkedList<i32> = ConcurrentLinkedList::new();
        assert_eq!(
            empty.get(0),
            Err(CollectionError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_remove_ends() {
        let list = list_of(&[1, 2, 3]);
        assert_eq!(list.remove_first(), Some(1));
        assert_eq!(list.remove_last(), Some(3));
        assert_eq!(list.remove_last(), Some(2));
        assert_eq!(list.remove_first(), None);
        assert_eq!(list.remove_last(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_by_index() {
        let list = list_of(&[1, 2, 3, 4]);
        assert_eq!(list.remove(3), Ok(4));
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list.remove(1), Ok(3));
        assert_eq!(
            list.remove(1),
            Err(CollectionError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(list.to_vec(), vec![2]);
        assert_eq!(list.get_first(), list.get_last());
    }

    #[test]
    fn test_remove_occurrences() {
        let list = list_of(&[1, 2, 3, 2, 1]);
        assert_eq!(list.remove_first_occurrence(|v| *v == 2), Some((1, 2)));
        assert_eq!(list.to_vec(), vec![1, 3, 2, 1]);

        assert_eq!(list.remove_last_occurrence(|v| *v == 1), Some((3, 1)));
        assert_eq!(list.to_vec(), vec![1, 3, 2]);

        assert_eq!(list.remove_first_occurrence(|v| *v == 9), None);
        assert_eq!(list.remove_last_occurrence(|v| *v == 9), None);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_all() {
        let list = list_of(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(list.remove_all(|v| v % 2 == 1), 4);
        assert_eq!(list.to_vec(), vec![2, 4, 6]);
        assert_eq!(list.get_first(), Some(2));
        assert_eq!(list.get_last(), Some(6));

        assert_eq!(list.remove_all(|_| false), 0);
        assert_eq!(list.remove_all(|_| true), 3);
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear_and_reuse() {
        let list = list_of(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.get_first(), None);
        list.add_last(4);
        assert_eq!(list.to_vec(), vec![4]);
    }

    #[test]
    fn test_debug_output() {
        let list = list_of(&[1, 2]);
        assert_eq!(std::format!("{:?}", list), "[1, 2]");
    }

    #[test]
    fn test_concurrent_producers_and_consumers() {
        let list: Arc<ConcurrentLinkedList<usize>> = Arc::new(ConcurrentLinkedList::new());
        let producers: Vec<_> = (0..4)
            .map(|t| {
                let list = Arc::clone(&list);
                thread::spawn(move || {
                    for i in 0..250 {
                        if i % 2 == 0 {
                            list.add_first(t * 1000 + i);
                        } else {
                            list.add_last(t * 1000 + i);
                        }
                    }
                })
            })
            .collect();
        for handle in producers {
            handle.join().unwrap();
        }
        assert_eq!(list.len(), 1000);

        let consumers: Vec<_> = (0..4)
            .map(|t| {
                let list = Arc::clone(&list);
                thread::spawn(move || {
                    let mut taken = 0usize;
                    for _ in 0..250 {
                        let value = if t % 2 == 0 {
                            list.remove_first()
                        } else {
                            list.remove_last()
                        };
                        if value.is_some() {
                            taken += 1;
                        }
                    }
                    taken
                })
            })
            .collect();
        let taken: usize = consumers.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(taken, 1000);
        assert!(list.is_empty());
    }
}
