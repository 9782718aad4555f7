//! A priority queue of `(priority, value)` nodes, built on [`BinaryHeap`].
//!
//! Nodes are ranked by priority alone, under whatever [`TotalOrder`] over priorities
//! the queue was created with; values are carried along untouched. With the default
//! [`MinOrder`] the node with the numerically lowest priority is dequeued first.
//!
//! Nodes of equal priority come out in an order that depends on the history of the
//! queue, not on the order they were enqueued in. Callers that need first-in,
//! first-out behaviour among equal priorities must fold a sequence number into the
//! priority itself.
//!
//! # Examples
//!
//! ```
//! use prioheap::{MinOrder, MinPriorityQueue, QueueError};
//!
//! let mut jobs: MinPriorityQueue<&str> = MinPriorityQueue::new(MinOrder::default());
//! jobs.enqueue(3, "write report").unwrap();
//! jobs.enqueue(1, "fix outage").unwrap();
//! jobs.enqueue(2, "answer email").unwrap();
//!
//! assert_eq!(*jobs.peek().unwrap().priority(), 1);
//! assert_eq!(jobs.dequeue().unwrap().into_value(), "fix outage");
//! assert_eq!(jobs.dequeue().unwrap().into_value(), "answer email");
//! assert_eq!(jobs.dequeue().unwrap().into_value(), "write report");
//! assert_eq!(jobs.dequeue(), Err(QueueError::Empty));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

use alloc::vec::Vec;

use super::binary_heap::{BinaryHeap, CapacityPolicy, Growable};
use super::QueueError;
use crate::{MaxOrder, MinOrder, TotalOrder};

#[cfg(test)]
mod tests;

/// A growable queue that dequeues the lowest priority first.
pub type MinPriorityQueue<V, K = i64> = PriorityQueue<K, V, MinOrder<K>, Growable>;

/// A growable queue that dequeues the highest priority first.
pub type MaxPriorityQueue<V, K = i64> = PriorityQueue<K, V, MaxOrder<K>, Growable>;

/// A priority paired with an opaque value.
///
/// Once enqueued, a node's priority and value are fixed; a dequeued node is owned by
/// the caller and its value may then be changed through [`value_mut`](Self::value_mut).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PriorityNode<K, V> {
    priority: K,
    value: V,
}

impl<K, V> PriorityNode<K, V> {
    /// Pairs `value` with `priority`.
    pub fn new(priority: K, value: V) -> Self {
        PriorityNode { priority, value }
    }

    /// The priority the node was enqueued with.
    pub fn priority(&self) -> &K {
        &self.priority
    }

    /// The value carried by the node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutably borrows the value carried by the node.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Discards the priority and returns the value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Splits the node into its priority and value.
    pub fn into_parts(self) -> (K, V) {
        (self.priority, self.value)
    }
}

/// Ranks [`PriorityNode`]s by applying `O` to their priorities.
pub struct ByPriority<O, V> {
    order: O,
    _marker: PhantomData<fn(&V)>,
}

impl<O, V> ByPriority<O, V> {
    /// Ranks nodes by `order` over their priorities.
    pub fn new(order: O) -> Self {
        ByPriority { order, _marker: PhantomData }
    }

    /// The order over priorities.
    pub fn priority_order(&self) -> &O {
        &self.order
    }
}

impl<O: Clone, V> Clone for ByPriority<O, V> {
    fn clone(&self) -> Self {
        ByPriority::new(self.order.clone())
    }
}

impl<O: Default, V> Default for ByPriority<O, V> {
    fn default() -> Self {
        ByPriority::new(O::default())
    }
}

impl<O: fmt::Debug, V> fmt::Debug for ByPriority<O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByPriority").field(&self.order).finish()
    }
}

impl<O: TotalOrder, V> TotalOrder for ByPriority<O, V>
where
    O::OrderedType: Sized,
{
    type OrderedType = PriorityNode<O::OrderedType, V>;

    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering {
        self.order.cmp(&this.priority, &that.priority)
    }

    fn eq(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.order.eq(&this.priority, &that.priority)
    }
    fn ne(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.order.ne(&this.priority, &that.priority)
    }

    fn ge(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.order.ge(&this.priority, &that.priority)
    }
    fn gt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.order.gt(&this.priority, &that.priority)
    }
    fn le(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.order.le(&this.priority, &that.priority)
    }
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.order.lt(&this.priority, &that.priority)
    }
}

/// A priority queue over priorities of type `K` carrying values of type `V`.
///
/// The node dequeued first is the one whose priority ranks greatest under `O`; the
/// capacity policy `P` behaves as for [`BinaryHeap`].
pub struct PriorityQueue<K, V, O = MinOrder<K>, P = Growable> {
    heap: BinaryHeap<PriorityNode<K, V>, ByPriority<O, V>, P>,
}

impl<K: Clone, V: Clone, O: Clone, P> Clone for PriorityQueue<K, V, O, P> {
    fn clone(&self) -> Self {
        PriorityQueue { heap: self.heap.clone() }
    }
}

impl<K, V, O> Default for PriorityQueue<K, V, O, Growable>
where
    O: TotalOrder<OrderedType = K> + Default,
{
    fn default() -> Self {
        PriorityQueue::new(O::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, O, P> fmt::Debug for PriorityQueue<K, V, O, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.heap, f)
    }
}

impl<K, V, O: TotalOrder<OrderedType = K>> PriorityQueue<K, V, O, Growable> {
    /// Creates an empty growable queue with the default capacity.
    #[must_use]
    pub fn new(order: O) -> Self {
        PriorityQueue { heap: BinaryHeap::new(ByPriority::new(order)) }
    }
}

impl<K, V, O: TotalOrder<OrderedType = K>, P: CapacityPolicy> PriorityQueue<K, V, O, P> {
    /// Creates an empty queue able to hold `capacity` nodes before its policy is
    /// consulted.
    ///
    /// # Errors
    ///
    /// [`QueueError::Heap`] wrapping [`HeapError::InvalidCapacity`] if `capacity` is
    /// zero, or [`HeapError::Alloc`] if the storage cannot be reserved.
    ///
    /// [`HeapError::InvalidCapacity`]: super::HeapError::InvalidCapacity
    /// [`HeapError::Alloc`]: super::HeapError::Alloc
    pub fn with_capacity(order: O, capacity: usize) -> Result<Self, QueueError> {
        let heap = BinaryHeap::with_capacity(ByPriority::new(order), capacity)?;
        Ok(PriorityQueue { heap })
    }

    /// Adds `value` to the queue with the given `priority`.
    ///
    /// # Errors
    ///
    /// [`QueueError::Heap`] if the underlying store is full and may not grow, or
    /// failed to grow. The queue is unchanged in that case.
    pub fn enqueue(&mut self, priority: K, value: V) -> Result<(), QueueError> {
        self.heap.push(PriorityNode::new(priority, value))?;
        Ok(())
    }

    /// Removes and returns the node whose priority ranks greatest.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<PriorityNode<K, V>, QueueError> {
        Ok(self.heap.pop()?)
    }

    /// Consumes the queue and returns its nodes in dequeue order.
    ///
    /// ```
    /// use prioheap::{MaxOrder, MaxPriorityQueue};
    ///
    /// let mut queue: MaxPriorityQueue<char> = MaxPriorityQueue::new(MaxOrder::new());
    /// queue.enqueue(1, 'a').unwrap();
    /// queue.enqueue(3, 'c').unwrap();
    /// queue.enqueue(2, 'b').unwrap();
    ///
    /// let values: Vec<_> = queue.into_sorted_vec().into_iter().map(|n| n.into_value()).collect();
    /// assert_eq!(values, ['c', 'b', 'a']);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<PriorityNode<K, V>> {
        let mut nodes = self.heap.into_sorted_vec();
        nodes.reverse();
        nodes
    }
}

impl<K, V, O, P> PriorityQueue<K, V, O, P> {
    /// Returns the node that would be dequeued next, without removing it.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] if the queue is empty.
    pub fn peek(&self) -> Result<&PriorityNode<K, V>, QueueError> {
        Ok(self.heap.peek()?)
    }

    /// Returns the node in storage slot `index` of the underlying heap; see
    /// [`BinaryHeap::get`].
    ///
    /// # Errors
    ///
    /// [`QueueError::Heap`] wrapping [`HeapError::IndexOutOfRange`] if
    /// `index >= self.len()`.
    ///
    /// [`HeapError::IndexOutOfRange`]: super::HeapError::IndexOutOfRange
    pub fn get(&self, index: usize) -> Result<&PriorityNode<K, V>, QueueError> {
        Ok(self.heap.get(index)?)
    }

    /// Borrows the order over priorities.
    pub fn order(&self) -> &O {
        self.heap.order().priority_order()
    }

    /// Returns the number of nodes in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Checks if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Checks if the queue has no free slots; see [`BinaryHeap::is_full`].
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.heap.is_full()
    }

    /// Returns the number of nodes the queue can hold before its policy is consulted.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Drops every node. The capacity is kept.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
