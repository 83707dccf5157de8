//! Binary Min-Heap implementation
//!
//! An array-backed binary min-heap with explicit capacity management and an
//! O(n + m) merge.
//!
//! Positions are 1-indexed: slot `i` has children `2i` and `2i + 1` and parent
//! `i / 2`. Slot `i` lives at `data[i - 1]`.
//!
//! # Capacity
//!
//! The heap tracks a logical capacity separately from the `Vec` it stores into:
//! - it doubles when an insert finds the heap full;
//! - it halves when an extraction starts with the heap at most a quarter full
//!   (equivalently, the remaining count is below a quarter of capacity);
//! - it never drops below the capacity the heap was built with.
//!
//! The gap between the grow point (full) and the shrink point (a quarter full)
//! keeps alternating push/pop from resizing on every call.
//!
//! # Time Complexity
//!
//! | Operation | Complexity       |
//! |-----------|------------------|
//! | `push`    | O(log n) amortized |
//! | `pop`     | O(log n) amortized |
//! | `peek`    | O(1)             |
//! | `merge`   | O(n + m)         |
//!
//! # Example
//!
//! ```rust
//! use rust_mergeable_heaps::MergeableHeap;
//! use rust_mergeable_heaps::binary::BinaryMinHeap;
//!
//! let mut heap = BinaryMinHeap::with_capacity(2);
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.capacity(), 4);
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(3));
//! assert!(heap.pop().is_err());
//! ```

use crate::traits::{MergeableHeap, QueueError};
use log::debug;

/// Capacity used by [`BinaryMinHeap::new`]
pub const DEFAULT_CAPACITY: usize = 16;

/// A binary min-heap over a 1-indexed array
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<T: Ord> {
    /// Heap-ordered elements; logical slot `i` is `data[i - 1]`
    data: Vec<T>,
    /// Logical capacity, doubled and halved explicitly
    capacity: usize,
    /// Capacity never shrinks below this
    min_capacity: usize,
}

impl<T: Ord> MergeableHeap<T> for BinaryMinHeap<T> {
    fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    /// Places the value at slot `count + 1` and sifts it up
    fn push(&mut self, value: T) {
        if self.data.len() == self.capacity {
            self.grow();
        }
        self.data.push(value);
        self.sift_up(self.data.len());
    }

    fn peek(&self) -> Result<&T, QueueError> {
        self.data.first().ok_or(QueueError::Empty)
    }

    /// Takes slot 1, moves the last element to the root and sifts it down
    fn pop(&mut self) -> Result<T, QueueError> {
        if self.data.is_empty() {
            return Err(QueueError::Empty);
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let min = self.data.pop().ok_or(QueueError::Empty)?;

        if !self.data.is_empty() {
            self.sift_down(1);
        }
        self.maybe_shrink();

        Ok(min)
    }

    /// Concatenates both arrays and heapifies bottom-up
    ///
    /// **Time Complexity**: O(n + m)
    ///
    /// **Algorithm**:
    /// 1. Allocate one buffer for both element arrays (capacity = sum of the
    ///    operand capacities, and at least n + m)
    /// 2. Copy `self` then `other` into it
    /// 3. Sift down every internal node from slot ⌊(n+m)/2⌋ back to slot 1
    ///
    /// Each sift-down costs the height of its subtree, and most nodes sit near
    /// the bottom, so the total is linear: cheaper than n + m inserts.
    fn merge(self, other: Self) -> Self {
        let total = self.data.len() + other.data.len();
        let capacity = (self.capacity + other.capacity).max(total);
        let min_capacity = self.min_capacity.max(other.min_capacity);

        let mut data = self.data;
        data.reserve_exact(capacity - data.len());
        data.extend(other.data);

        let mut merged = Self {
            data,
            capacity,
            min_capacity,
        };
        merged.heapify();
        debug!(
            "merged binary heaps into {} elements (capacity {})",
            total, merged.capacity
        );
        merged
    }

    /// Checks every parent against its children
    fn validate(&self) -> Result<(), QueueError> {
        if self.data.len() > self.capacity {
            return Err(QueueError::SizeMismatch {
                expected: self.capacity,
                found: self.data.len(),
            });
        }
        for index in 2..=self.data.len() {
            if self.slot(index) < self.slot(parent(index)) {
                return Err(QueueError::HeapOrderViolated);
            }
        }
        Ok(())
    }
}

impl<T: Ord> BinaryMinHeap<T> {
    /// Creates an empty heap with room for `hint` elements (at least 1)
    ///
    /// The hint is also the floor below which the heap never shrinks.
    pub fn with_capacity(hint: usize) -> Self {
        let capacity = hint.max(1);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            min_capacity: capacity,
        }
    }

    /// Builds a heap from arbitrary values in O(n)
    pub fn from_vec(data: Vec<T>) -> Self {
        let capacity = data.len().max(DEFAULT_CAPACITY);
        let mut heap = Self {
            data,
            capacity,
            min_capacity: DEFAULT_CAPACITY,
        };
        heap.heapify();
        heap
    }

    /// Returns the current logical capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the elements in array (level) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning its elements in array order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn slot(&self, index: usize) -> &T {
        &self.data[index - 1]
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.data.swap(a - 1, b - 1);
    }

    fn grow(&mut self) {
        let old = self.capacity;
        self.capacity = old * 2;
        self.data.reserve_exact(self.capacity - self.data.len());
        debug!("binary heap capacity grew from {} to {}", old, self.capacity);
    }

    fn maybe_shrink(&mut self) {
        let halved = self.capacity / 2;
        if self.data.len() * 4 < self.capacity && halved >= self.min_capacity {
            let old = self.capacity;
            self.capacity = halved;
            self.data.shrink_to(self.capacity);
            debug!(
                "binary heap capacity shrank from {} to {}",
                old, self.capacity
            );
        }
    }

    /// Re-establishes heap order over the whole array, last internal node first
    fn heapify(&mut self) {
        for index in (1..=self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move the element at slot `index` up while its parent is larger
    fn sift_up(&mut self, mut index: usize) {
        while index > 1 {
            let parent = parent(index);
            if self.slot(index) < self.slot(parent) {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at slot `index` down, always toward the smaller child
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index;
            let right = left + 1;
            let mut smallest = index;

            if left <= len && self.slot(left) < self.slot(smallest) {
                smallest = left;
            }
            if right <= len && self.slot(right) < self.slot(smallest) {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap_slots(index, smallest);
            index = smallest;
        }
    }
}

#[inline]
fn parent(index: usize) -> usize {
    index / 2
}

impl<T: Ord> Default for BinaryMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinaryMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = BinaryMinHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), Err(QueueError::Empty));

        heap.push(3);
        heap.push(1);
        heap.push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Ok(&1));

        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.pop(), Ok(3));
        assert_eq!(heap.pop(), Err(QueueError::Empty));
    }

    #[test]
    fn test_duplicate_values() {
        let mut heap = BinaryMinHeap::new();
        heap.extend([1, 1, 1]);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(1));
    }

    #[test]
    fn test_capacity_grows_by_doubling() {
        let mut heap = BinaryMinHeap::with_capacity(2);
        let mut seen = vec![heap.capacity()];
        for value in [5, 4, 3, 2, 1] {
            heap.push(value);
            if *seen.last().unwrap() != heap.capacity() {
                seen.push(heap.capacity());
            }
        }
        assert_eq!(seen, vec![2, 4, 8]);
        assert!(heap.validate().is_ok());
    }

    #[test]
    fn test_capacity_shrinks_once_draining_to_one() {
        let mut heap = BinaryMinHeap::with_capacity(2);
        heap.extend([5, 4, 3, 2, 1]);
        assert_eq!(heap.capacity(), 8);

        let mut shrinks = 0;
        while heap.len() > 1 {
            let before = heap.capacity();
            heap.pop().unwrap();
            if heap.capacity() < before {
                assert_eq!(heap.capacity(), before / 2);
                shrinks += 1;
            }
        }
        assert_eq!(shrinks, 1);
        assert_eq!(heap.capacity(), 4);
        assert_eq!(heap.peek(), Ok(&5));
    }

    #[test]
    fn test_capacity_never_below_floor() {
        let mut heap = BinaryMinHeap::with_capacity(4);
        heap.extend(0..40);
        while heap.pop().is_ok() {}
        assert_eq!(heap.capacity(), 4);

        let zero_hint: BinaryMinHeap<i32> = BinaryMinHeap::with_capacity(0);
        assert_eq!(zero_hint.capacity(), 1);
    }

    #[test]
    fn test_merge() {
        let mut heap1 = BinaryMinHeap::with_capacity(4);
        let mut heap2 = BinaryMinHeap::with_capacity(2);

        heap1.extend([3, 1, 5]);
        heap2.extend([4, 2]);

        let mut merged = heap1.merge(heap2);

        assert_eq!(merged.len(), 5);
        assert_eq!(merged.capacity(), 6);
        assert!(merged.validate().is_ok());
        for expected in 1..=5 {
            assert_eq!(merged.pop(), Ok(expected));
        }
    }

    #[test]
    fn test_merge_capacity_covers_contents() {
        let mut heap1 = BinaryMinHeap::with_capacity(1);
        heap1.extend(0..9);
        let heap2 = BinaryMinHeap::with_capacity(1);

        let merged = heap1.merge(heap2);
        assert!(merged.capacity() >= merged.len());
        assert!(merged.validate().is_ok());
    }

    #[test]
    fn test_from_vec_heapifies() {
        let heap = BinaryMinHeap::from_vec(vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(heap.validate().is_ok());
        assert_eq!(heap.peek(), Ok(&1));
        assert_eq!(heap.as_slice()[0], 1);
    }

    #[test]
    fn test_validate_detects_disorder() {
        let heap = BinaryMinHeap {
            data: vec![2, 1],
            capacity: 2,
            min_capacity: 2,
        };
        assert_eq!(heap.validate(), Err(QueueError::HeapOrderViolated));
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = BinaryMinHeap::new();

        for i in 0..100 {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Ok(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = BinaryMinHeap::new();

        for i in (0..100).rev() {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Ok(i));
        }
    }
}
