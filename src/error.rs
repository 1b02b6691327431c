//! Error types for the collection APIs.
//!
//! Cache lookups never fail: a missing key is reported as `None` (or a
//! `false` flag), not as an error. The only structurally invalid input in the
//! crate is a positional index past the end of a
//! [`ConcurrentLinkedList`](crate::concurrent::ConcurrentLinkedList).

use thiserror::Error;

/// Errors returned by the collection types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A positional index was outside `0..len`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the collection at the time of the request.
        len: usize,
    },
}

/// Result alias for collection operations.
pub type Result<T> = core::result::Result<T, CollectionError>;
