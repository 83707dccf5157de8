//! Unsorted Vector Heap implementation
//!
//! The baseline store: elements sit in a `Vec` in insertion order and every
//! `peek`/`pop` scans for the minimum.
//!
//! # Time Complexity
//!
//! | Operation | Complexity       |
//! |-----------|------------------|
//! | `push`    | O(1) amortized   |
//! | `pop`     | O(n)             |
//! | `peek`    | O(n)             |
//! | `merge`   | O(n + m)         |
//!
//! # Example
//!
//! ```rust
//! use rust_mergeable_heaps::MergeableHeap;
//! use rust_mergeable_heaps::unsorted::UnsortedVecHeap;
//!
//! let mut heap = UnsortedVecHeap::new();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! ```

use crate::traits::{MergeableHeap, QueueError};

/// An unsorted min-priority queue backed by a vector
#[derive(Debug, Clone)]
pub struct UnsortedVecHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> MergeableHeap<T> for UnsortedVecHeap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, value: T) {
        self.data.push(value);
    }

    fn peek(&self) -> Result<&T, QueueError> {
        self.min_index().map(|index| &self.data[index])
    }

    fn pop(&mut self) -> Result<T, QueueError> {
        let index = self.min_index()?;
        // Order carries no meaning here, so the O(1) removal is fine
        Ok(self.data.swap_remove(index))
    }

    fn merge(mut self, mut other: Self) -> Self {
        self.data.append(&mut other.data);
        self
    }

    fn validate(&self) -> Result<(), QueueError> {
        Ok(())
    }
}

impl<T: Ord> UnsortedVecHeap<T> {
    /// Returns the stored elements in insertion order (modulo removals)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Linear scan for the position of a minimum element
    fn min_index(&self) -> Result<usize, QueueError> {
        self.data
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(index, _)| index)
            .ok_or(QueueError::Empty)
    }
}

impl<T: Ord> Default for UnsortedVecHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for UnsortedVecHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = UnsortedVecHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.peek(), Err(QueueError::Empty));

        heap.push("pear");
        heap.push("apple");
        heap.push("fig");

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Ok(&"apple"));
        assert_eq!(heap.pop(), Ok("apple"));
        assert_eq!(heap.pop(), Ok("fig"));
        assert_eq!(heap.pop(), Ok("pear"));
        assert_eq!(heap.pop(), Err(QueueError::Empty));
    }

    #[test]
    fn test_merge_concatenates() {
        let mut a = UnsortedVecHeap::new();
        a.extend([5, 1, 3]);
        let mut b = UnsortedVecHeap::new();
        b.extend([4, 2]);

        let mut merged = a.merge(b);
        assert_eq!(merged.as_slice(), &[5, 1, 3, 4, 2]);

        let drained: Vec<_> = std::iter::from_fn(|| merged.pop().ok()).collect();
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_duplicates() {
        let mut heap = UnsortedVecHeap::new();
        heap.extend([2, 2, 1, 2]);
        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.pop(), Ok(2));
        assert!(heap.is_empty());
    }
}
