//! Implicit binary tree layout over a zero-indexed array.
//!
//! The arithmetic saturates instead of overflowing: a saturated child index is never
//! below a store's length, so it reads as "no such child".

/// Index of the parent of the item at `index`. The root is its own parent.
#[inline]
pub(crate) const fn parent(index: usize) -> usize {
    index.saturating_sub(1) / 2
}

#[inline]
pub(crate) const fn left_child(index: usize) -> usize {
    index.saturating_mul(2).saturating_add(1)
}

#[inline]
pub(crate) const fn right_child(index: usize) -> usize {
    index.saturating_mul(2).saturating_add(2)
}
