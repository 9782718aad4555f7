//! Ordering strategies beyond the [`Ord`]-delegating default.

use crate::{OrdTotalOrder, TotalOrder};
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// Max-first order over `T`'s [`Ord`] implementation.
pub type MaxOrder<T> = OrdTotalOrder<T>;

/// Min-first order over `T`'s [`Ord`] implementation.
pub type MinOrder<T> = Reversed<OrdTotalOrder<T>>;

/// Inverts the wrapped total order, so that whatever it ranks greatest is ranked least.
///
/// ```
/// use prioheap::{OrdTotalOrder, Reversed, TotalOrder};
///
/// let order = Reversed(OrdTotalOrder::<u8>::new());
/// assert!(order.gt(&1, &2));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<O>(
    /// The order being inverted.
    pub O,
);

impl<O: TotalOrder> TotalOrder for Reversed<O> {
    type OrderedType = O::OrderedType;

    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering {
        self.0.cmp(that, this)
    }

    fn eq(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.eq(that, this)
    }
    fn ne(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.ne(that, this)
    }

    fn ge(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.ge(that, this)
    }
    fn gt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.gt(that, this)
    }
    fn le(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.le(that, this)
    }
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.lt(that, this)
    }
}

/// A total order defined by a comparison function.
///
/// ```
/// use prioheap::{BinaryHeap, FnTotalOrder};
///
/// // Greatest magnitude first.
/// let order = FnTotalOrder::new(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
/// let mut heap = BinaryHeap::new(order);
/// heap.push(3).unwrap();
/// heap.push(-7).unwrap();
/// heap.push(5).unwrap();
/// assert_eq!(heap.pop(), Ok(-7));
/// ```
pub struct FnTotalOrder<T: ?Sized, F> {
    compare: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> FnTotalOrder<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Wraps `compare` as a total order.
    ///
    /// `compare` must define a total order over `T`; if it does not, the collections
    /// using it will behave unpredictably but safely.
    pub fn new(compare: F) -> Self {
        FnTotalOrder { compare, _marker: PhantomData }
    }
}

impl<T: ?Sized, F: Clone> Clone for FnTotalOrder<T, F> {
    fn clone(&self) -> Self {
        FnTotalOrder { compare: self.compare.clone(), _marker: PhantomData }
    }
}

impl<T: ?Sized, F> fmt::Debug for FnTotalOrder<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTotalOrder").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> TotalOrder for FnTotalOrder<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type OrderedType = T;

    fn cmp(&self, this: &T, that: &T) -> Ordering {
        (self.compare)(this, that)
    }
}
