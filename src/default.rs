//! The default total order, which makes prioheap's collections order their items as
//! the standard library's [`BinaryHeap`] would: by the items' own [`Ord`]
//! implementation, greatest first.
//!
//! [`BinaryHeap`]: alloc::collections::BinaryHeap

use crate::TotalOrder;
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A zero-sized total order that delegates to the [`Ord`] implementation
/// of its type parameter `T`.
///
/// Used directly, it produces max-first collections; wrap it in
/// [`Reversed`](crate::Reversed) for min-first ones.
pub struct OrdTotalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> OrdTotalOrder<T> {
    /// Creates the order.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized> fmt::Debug for OrdTotalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdTotalOrder")
    }
}

impl<T: ?Sized + Ord> TotalOrder for OrdTotalOrder<T> {
    type OrderedType = T;

    // Delegate to `T`'s implementation of [`Ord`].
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // The remaining methods delegate to `T`'s [`PartialEq`] and [`PartialOrd`]
    // implementations rather than going through `cmp`.  If, as those traits require,
    // `T`'s implementations are consistent with one another, this has no effect.

    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }
    fn ne(&self, this: &T, that: &T) -> bool {
        this != that
    }

    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
}
