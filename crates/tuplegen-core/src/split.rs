//! Midpoint split of an ordered list.

/// Split `items` into `(left, right)` at `len / 2`.
///
/// The left half is never longer than the right one; for odd lengths it is
/// one element shorter. Both halves borrow from `items`.
pub fn split<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len() / 2)
}
