//! Array-backed binary heaps and priority queues that order their items according to
//! a specified [`TotalOrder`] rather than the [`Ord`] trait.
//!
//! The heap always yields the item that is *greatest* under its total order first, so
//! max-first and min-first behaviour are a matter of which order is supplied at
//! construction (see [`MaxOrder`] and [`MinOrder`]), not of which type is used.
//!
//! ```
//! use prioheap::{MinHeap, MinOrder};
//!
//! let mut heap = MinHeap::new(MinOrder::default());
//! heap.push(3).unwrap();
//! heap.push(1).unwrap();
//! heap.push(2).unwrap();
//!
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(3));
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]

extern crate alloc;

#[macro_use]
mod polyfill;

pub mod collections;
pub mod default;
pub mod order;

pub use collections::binary_heap::{
    BinaryHeap, CapacityPolicy, Fixed, FixedMaxHeap, FixedMinHeap, Growable, MaxHeap, MinHeap,
    DEFAULT_CAPACITY,
};
pub use collections::priority_queue::{
    MaxPriorityQueue, MinPriorityQueue, PriorityNode, PriorityQueue,
};
pub use collections::{HeapError, QueueError};
pub use default::OrdTotalOrder;
pub use order::{FnTotalOrder, MaxOrder, MinOrder, Reversed};

use core::cmp::Ordering;

/// A runtime total order over `Self::OrderedType`.
///
/// The collections in this crate hold a value of some `TotalOrder` type and consult it
/// for every comparison they make, so the order can carry runtime state (for example a
/// closure, or a flag selecting ascending or descending behaviour).
///
/// It is a logic error for the order to change the relative ordering of any two items
/// while they are held by a collection. The behaviour resulting from such a logic error
/// is not specified, but will be encapsulated to the collection that observed it and
/// will not result in undefined behaviour.
pub trait TotalOrder {
    /// The type over which this total order is defined.
    type OrderedType: ?Sized;

    /// Compares `this` with `that`.
    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering;

    /// Tests whether `this` and `that` are equal under this order.
    fn eq(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_eq()
    }
    /// Tests whether `this` and `that` are not equal under this order.
    fn ne(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_ne()
    }

    /// Tests whether `this` is greater than or equal to `that` under this order.
    fn ge(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_ge()
    }
    /// Tests whether `this` is strictly greater than `that` under this order.
    fn gt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Tests whether `this` is less than or equal to `that` under this order.
    fn le(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Tests whether `this` is strictly less than `that` under this order.
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_lt()
    }
}

impl<O: ?Sized + TotalOrder> TotalOrder for &O {
    type OrderedType = O::OrderedType;

    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering {
        (**self).cmp(this, that)
    }
}
