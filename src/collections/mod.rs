//! Heap-ordered collections and the errors they report.

pub mod binary_heap;
pub mod priority_queue;

#[doc(no_inline)]
pub use binary_heap::BinaryHeap;

#[doc(no_inline)]
pub use priority_queue::PriorityQueue;

use alloc::collections::TryReserveError;
use core::fmt::{self, Display};

/// The error type for [`BinaryHeap`] operations.
///
/// Every operation that returns this error has left the heap exactly as it was.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum HeapError {
    /// A store was requested with a capacity of zero.
    InvalidCapacity,

    /// An item was inserted into a fixed-capacity store that is already full.
    Full {
        /// The capacity of the store that rejected the item.
        capacity: usize,
    },

    /// The root was requested from an empty store.
    Empty,

    /// A storage slot outside the live extent of the store was requested.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of live items at the time of the request.
        len: usize,
    },

    /// Reserving storage failed.
    Alloc(TryReserveError),
}

impl From<TryReserveError> for HeapError {
    #[inline]
    fn from(err: TryReserveError) -> Self {
        HeapError::Alloc(err)
    }
}

impl Display for HeapError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidCapacity => fmt.write_str("capacity must be greater than zero"),
            HeapError::Full { capacity } => {
                write!(fmt, "the heap is full (capacity {capacity})")
            }
            HeapError::Empty => fmt.write_str("the heap is empty"),
            HeapError::IndexOutOfRange { index, len } => {
                write!(fmt, "index {index} is out of range for a heap of {len} items")
            }
            HeapError::Alloc(err) => Display::fmt(err, fmt),
        }
    }
}

impl core::error::Error for HeapError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            HeapError::Alloc(err) => Some(err),
            _ => None,
        }
    }
}

/// The error type for [`PriorityQueue`] operations.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum QueueError {
    /// A node was requested from an empty queue.
    Empty,

    /// The underlying heap rejected the operation.
    Heap(HeapError),
}

impl From<HeapError> for QueueError {
    /// Maps [`HeapError::Empty`] to [`QueueError::Empty`]; wraps everything else.
    #[inline]
    fn from(err: HeapError) -> Self {
        match err {
            HeapError::Empty => QueueError::Empty,
            err => QueueError::Heap(err),
        }
    }
}

impl Display for QueueError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => fmt.write_str("the priority queue is empty"),
            QueueError::Heap(err) => Display::fmt(err, fmt),
        }
    }
}

impl core::error::Error for QueueError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            QueueError::Empty => None,
            QueueError::Heap(err) => Some(err),
        }
    }
}
