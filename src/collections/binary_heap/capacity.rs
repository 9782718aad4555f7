//! Capacity policies: what a store does when an insert finds it full.

/// The capacity of growable stores and queues that are created without an explicit one.
pub const DEFAULT_CAPACITY: usize = 5;

mod private {
    pub trait Sealed {}
}

/// Decides whether, and to what size, a full store grows.
///
/// This trait is sealed; [`Fixed`] and [`Growable`] are its only implementations.
pub trait CapacityPolicy: private::Sealed {
    /// Returns the capacity a full store of `capacity` items should grow to, or `None`
    /// if it must reject the insert instead.
    fn grow(capacity: usize) -> Option<usize>;
}

/// Stores that never reallocate: inserting into a full store fails with
/// [`HeapError::Full`](crate::HeapError::Full).
#[derive(Clone, Copy, Debug, Default)]
pub struct Fixed;

impl private::Sealed for Fixed {}

impl CapacityPolicy for Fixed {
    #[inline]
    fn grow(_: usize) -> Option<usize> {
        None
    }
}

/// Stores that double their capacity (and never drop below [`DEFAULT_CAPACITY`])
/// whenever an insert finds them full. They never shrink.
#[derive(Clone, Copy, Debug, Default)]
pub struct Growable;

impl private::Sealed for Growable {}

impl CapacityPolicy for Growable {
    #[inline]
    fn grow(capacity: usize) -> Option<usize> {
        capacity.checked_mul(2).map(|doubled| doubled.max(DEFAULT_CAPACITY))
    }
}
