//! An array-backed binary heap whose ordering is supplied at construction.
//!
//! Items are kept in implicit binary tree layout: the children of the item at index
//! `i` live at `2i + 1` and `2i + 2`. Every item is ranked no higher than its parent
//! under the heap's [`TotalOrder`], so the root is always an item that no other item
//! strictly dominates.
//!
//! Inserting and extracting the root are *O*(log(*n*)); peeking at the root is *O*(1).
//! What happens when an insert finds the store full is decided by the heap's
//! [`CapacityPolicy`]: a [`Fixed`] store rejects the item, a [`Growable`] one doubles
//! its capacity.
//!
//! # Examples
//!
//! A bounded min-heap of scheduled tasks, ordered by deadline:
//!
//! ```
//! use prioheap::{BinaryHeap, FnTotalOrder, Fixed, HeapError, Reversed};
//!
//! #[derive(Debug, PartialEq)]
//! struct Task {
//!     deadline: u32,
//!     name: &'static str,
//! }
//!
//! let earliest_first = Reversed(FnTotalOrder::new(|a: &Task, b: &Task| {
//!     a.deadline.cmp(&b.deadline)
//! }));
//! let mut tasks = BinaryHeap::<_, _, Fixed>::with_capacity(earliest_first, 2).unwrap();
//!
//! tasks.push(Task { deadline: 30, name: "deploy" }).unwrap();
//! tasks.push(Task { deadline: 10, name: "review" }).unwrap();
//! assert_eq!(
//!     tasks.push(Task { deadline: 20, name: "lunch" }),
//!     Err(HeapError::Full { capacity: 2 })
//! );
//!
//! assert_eq!(tasks.pop().map(|t| t.name), Ok("review"));
//! assert_eq!(tasks.pop().map(|t| t.name), Ok("deploy"));
//! assert_eq!(tasks.pop().map(|t| t.name), Err(HeapError::Empty));
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::mem::{swap, ManuallyDrop};
use core::ptr;

use alloc::vec::Vec;

use super::HeapError;
use crate::{MaxOrder, MinOrder, OrdTotalOrder, TotalOrder};

mod capacity;
mod index;


pub use capacity::{CapacityPolicy, Fixed, Growable, DEFAULT_CAPACITY};

/// A growable heap that yields its greatest item first.
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder<T>, Growable>;

/// A growable heap that yields its least item first.
pub type MinHeap<T> = BinaryHeap<T, MinOrder<T>, Growable>;

/// A fixed-capacity heap that yields its greatest item first.
pub type FixedMaxHeap<T> = BinaryHeap<T, MaxOrder<T>, Fixed>;

/// A fixed-capacity heap that yields its least item first.
pub type FixedMinHeap<T> = BinaryHeap<T, MinOrder<T>, Fixed>;

/// A binary heap ordered by a runtime [`TotalOrder`].
///
/// The root is the item ranked greatest by the heap's order `O`; supply
/// [`MinOrder`](crate::MinOrder) or wrap any order in [`Reversed`](crate::Reversed)
/// to get least-first behaviour.
///
/// The heap tracks its own capacity rather than relying on that of its backing
/// vector, so that capacity growth is exactly as the policy `P` prescribes.
///
/// It is a logic error for an item to be modified in such a way that its ordering
/// relative to any other item, as determined by the heap's order, changes while it is
/// in the heap. The behaviour resulting from such a logic error is not specified, but
/// will be encapsulated to the `BinaryHeap` that observed it and not result in
/// undefined behaviour.
///
/// # Examples
///
/// ```
/// use prioheap::{MaxHeap, MaxOrder};
///
/// let mut heap = MaxHeap::new(MaxOrder::new());
/// assert!(heap.peek().is_err());
///
/// heap.push(1).unwrap();
/// heap.push(5).unwrap();
/// heap.push(2).unwrap();
///
/// assert_eq!(heap.peek(), Ok(&5));
/// assert_eq!(heap.len(), 3);
///
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Ok(2));
/// assert_eq!(heap.pop(), Ok(1));
/// assert!(heap.is_empty());
/// ```
///
/// # Time complexity
///
/// | [push]  | [pop]         | [peek] |
/// |---------|---------------|--------|
/// | *O*(1)~ | *O*(log(*n*)) | *O*(1) |
///
/// The value for `push` is an expected cost; the method documentation gives a
/// more detailed analysis.
///
/// [push]: BinaryHeap::push
/// [pop]: BinaryHeap::pop
/// [peek]: BinaryHeap::peek
pub struct BinaryHeap<T, O = OrdTotalOrder<T>, P = Growable> {
    data: Vec<T>,
    capacity: usize,
    order: O,
    policy: PhantomData<fn() -> P>,
}

impl<T: Clone, O: Clone, P> Clone for BinaryHeap<T, O, P> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        BinaryHeap { data, capacity: self.capacity, order: self.order.clone(), policy: PhantomData }
    }
}

impl<T, O: TotalOrder<OrderedType = T> + Default> Default for BinaryHeap<T, O, Growable> {
    /// Creates an empty growable `BinaryHeap` with the default capacity.
    #[inline]
    fn default() -> Self {
        BinaryHeap::new(O::default())
    }
}

impl<T: fmt::Debug, O, P> fmt::Debug for BinaryHeap<T, O, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, O: TotalOrder<OrderedType = T>> BinaryHeap<T, O, Growable> {
    /// Creates an empty growable heap with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new(order: O) -> Self {
        BinaryHeap {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            order,
            policy: PhantomData,
        }
    }

    /// Builds a growable heap from `data` in *O*(*n*) by sifting down every parent,
    /// from the last one back to the root.
    ///
    /// The resulting layout satisfies the heap order but is not, in general, the
    /// layout that pushing the same items one at a time would produce. The capacity is
    /// the larger of `data.len()` and [`DEFAULT_CAPACITY`].
    ///
    /// ```
    /// use prioheap::{MinHeap, MinOrder};
    ///
    /// let mut heap = MinHeap::from_vec(MinOrder::default(), vec![4, 1, 3]);
    /// assert_eq!(heap.capacity(), 5);
    /// assert_eq!(heap.pop(), Ok(1));
    /// ```
    #[must_use]
    pub fn from_vec(order: O, mut data: Vec<T>) -> Self {
        let capacity = data.len().max(DEFAULT_CAPACITY);
        data.reserve_exact(capacity - data.len());
        let mut heap = BinaryHeap { data, capacity, order, policy: PhantomData };
        heap.rebuild();
        heap
    }
}

impl<T, O: TotalOrder<OrderedType = T>, P: CapacityPolicy> BinaryHeap<T, O, P> {
    /// Creates an empty heap able to hold `capacity` items before its policy is
    /// consulted.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidCapacity`] if `capacity` is zero, and [`HeapError::Alloc`] if
    /// the storage cannot be reserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use prioheap::{FixedMaxHeap, HeapError, MaxOrder};
    ///
    /// let heap = FixedMaxHeap::<i32>::with_capacity(MaxOrder::new(), 10).unwrap();
    /// assert_eq!(heap.capacity(), 10);
    ///
    /// let err = FixedMaxHeap::<i32>::with_capacity(MaxOrder::new(), 0).unwrap_err();
    /// assert_eq!(err, HeapError::InvalidCapacity);
    /// ```
    pub fn with_capacity(order: O, capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            debug_event!(; "rejected heap with zero capacity");
            return Err(HeapError::InvalidCapacity);
        }

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        Ok(BinaryHeap { data, capacity, order, policy: PhantomData })
    }

    /// Inserts an item, then restores the heap order by sifting it up.
    ///
    /// A full store first asks its policy for more room: a [`Growable`] heap doubles its
    /// capacity (to at least [`DEFAULT_CAPACITY`]), copying the live items across in
    /// place, while a [`Fixed`] one rejects the item.
    ///
    /// # Errors
    ///
    /// [`HeapError::Full`] if the heap is full and may not grow, and
    /// [`HeapError::Alloc`] if growing failed. The heap is unchanged in either case.
    ///
    /// # Time complexity
    ///
    /// The expected cost of `push`, averaged over every possible ordering of the items
    /// being pushed, and over a sufficiently large number of pushes, is *O*(1). In the
    /// worst case, items are pushed in ascending order of rank and each push costs
    /// *O*(log(*n*)). A push that grows the store additionally costs *O*(*n*), amortized
    /// to *O*(1) over the pushes that filled it.
    pub fn push(&mut self, item: T) -> Result<(), HeapError> {
        if self.is_full() {
            self.grow()?;
        }

        let old_len = self.len();
        self.data.push(item);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.sift_up(old_len) };
        Ok(())
    }

    /// Removes the root (the greatest item under the heap's order) and returns it.
    ///
    /// The last item takes the root's place and is sifted down. When both of its
    /// children rank equally, it is compared against the left one.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if there is nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use prioheap::{HeapError, MaxHeap, MaxOrder};
    ///
    /// let mut heap = MaxHeap::new(MaxOrder::new());
    /// heap.push(1).unwrap();
    /// heap.push(3).unwrap();
    ///
    /// assert_eq!(heap.pop(), Ok(3));
    /// assert_eq!(heap.pop(), Ok(1));
    /// assert_eq!(heap.pop(), Err(HeapError::Empty));
    /// ```
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let mut item = self.data.pop().ok_or(HeapError::Empty)?;
        if !self.is_empty() {
            swap(&mut item, &mut self.data[0]);
            // SAFETY: !self.is_empty() means that self.len() > 0
            unsafe { self.sift_down(0) };
        }
        Ok(item)
    }

    /// Consumes the heap and returns its items in ascending order under the heap's
    /// order, that is, with the root last.
    ///
    /// ```
    /// use prioheap::{MaxHeap, MaxOrder};
    ///
    /// let mut heap = MaxHeap::new(MaxOrder::new());
    /// for x in [4, 1, 5, 2] {
    ///     heap.push(x).unwrap();
    /// }
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 4, 5]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            // SAFETY: `end` goes from `self.len() - 1` down to 1, so
            //  0 < end < self.len().
            unsafe { self.sift_down_range(0, end) };
        }
        self.into_vec()
    }

    fn grow(&mut self) -> Result<(), HeapError> {
        let Some(capacity) = P::grow(self.capacity) else {
            debug_event!(capacity = self.capacity; "rejected insert into full heap");
            return Err(HeapError::Full { capacity: self.capacity });
        };

        self.data.try_reserve_exact(capacity - self.data.len())?;
        trace_event!(from = self.capacity, to = capacity; "grew heap storage");
        self.capacity = capacity;
        Ok(())
    }

    // The sift operations take the displaced item out of the vector, leaving a hole
    // that travels along the repair path and is filled once at the end. Moving the
    // hole leaves exactly the layout that pairwise swaps would, in half the moves, and
    // `Hole` refills the vector even if the order panics mid-repair.

    /// Moves the item at `pos` towards the root for as long as it strictly dominates
    /// its parent, and returns its final index.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_up(&mut self, pos: usize) -> usize {
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > 0 {
            let parent = index::parent(hole.pos());

            // SAFETY: hole.pos() > 0, so parent < hole.pos() is a valid index
            //  distinct from hole.pos().
            if self.order.le(hole.element(), unsafe { hole.get(parent) }) {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }

        hole.pos()
    }

    /// Moves the item at `pos` towards the leaves of `data[..end]` for as long as the
    /// more dominant of its children strictly dominates it. Of two equally ranked
    /// children, the left one is chosen.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };
        let mut child = index::left_child(hole.pos());

        while child < end {
            let right = index::right_child(hole.pos());

            // SAFETY: child < end <= self.len() and, when the first condition holds,
            //  right < end too. Both are children of hole.pos(), so neither equals it.
            if right < end && self.order.lt(unsafe { hole.get(child) }, unsafe { hole.get(right) })
            {
                child = right;
            }

            // if we are already in order, stop.
            // SAFETY: child is either the left or the right child, both proven above.
            if self.order.ge(hole.element(), unsafe { hole.get(child) }) {
                return;
            }

            // SAFETY: same as above.
            unsafe { hole.move_to(child) };
            child = index::left_child(hole.pos());
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down(&mut self, pos: usize) {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller and
        //  obviously len = self.len() <= self.len().
        unsafe { self.sift_down_range(pos, len) };
    }

    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n starts from self.len() / 2 and goes down to 0.
            //  The only case when !(n < self.len()) is if
            //  self.len() == 0, but it's ruled out by the loop condition.
            unsafe { self.sift_down(n) };
        }
    }
}

impl<T, O, P> BinaryHeap<T, O, P> {
    /// Returns the root, the greatest item under the heap's order, without removing it.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Returns the item in storage slot `index`.
    ///
    /// This exposes the implicit tree layout, which is determined by the sequence of
    /// operations performed but is otherwise not part of the heap's contract; it exists
    /// for diagnostics and for asserting on that layout in tests.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&T, HeapError> {
        self.data.get(index).ok_or(HeapError::IndexOutOfRange { index, len: self.len() })
    }

    /// Returns the live items in storage order. See [`get`](Self::get).
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrows the heap's order.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the number of items in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the heap has no free slots.
    ///
    /// For a [`Fixed`] heap this means the next push will fail; for a [`Growable`] one,
    /// that the next push will grow the storage.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Returns the number of items the heap can hold before its policy is consulted.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every item. The capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns its items in storage order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// An index of a slice whose value has been moved out; the slot is refilled with that
/// value when the `Hole` is dropped, at whatever position the hole has reached.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Opens a hole at `pos`.
    ///
    /// Unsafe because `pos` must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// The value that was taken out.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Unsafe because `index` must be within the data slice and not equal to `pos`.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Moves the value at `index` into the hole, leaving the hole at `index`.
    ///
    /// Unsafe because `index` must be within the data slice and not equal to `pos`.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: pos is always a valid index, and its slot holds a bitwise copy of a
        //  value that lives elsewhere in the slice (or nothing at all), so overwriting
        //  it neither leaks nor double-drops.
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}
