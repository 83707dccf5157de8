//! Common trait and error type for the mergeable heaps
//!
//! Every backing store in this crate implements [`MergeableHeap`], a min-heap
//! interface whose `merge` takes both operands by value. A merged-away heap is
//! moved into the call, so touching it afterwards is a compile error rather than
//! a use-after-free.
//!
//! Heaps of *different* kinds cannot be merged through the trait at all; the
//! runtime-selected [`PriorityQueue`](crate::pqueue::PriorityQueue) facade
//! reports that case as [`QueueError::KindMismatch`].

use crate::degree::Degree;
use crate::pqueue::QueueKind;
use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `pop`/`peek` was called on a queue holding no elements
    Empty,
    /// Two binomial trees that had to share a degree did not
    ///
    /// This can only come from a broken internal invariant, never from user input.
    DegreeMismatch { expected: Degree, found: Degree },
    /// Two queues backed by different stores were passed to merge
    KindMismatch { left: QueueKind, right: QueueKind },
    /// A parent compared greater than one of its children (or a sorted chain went backwards)
    HeapOrderViolated,
    /// A cached element count disagrees with the number of stored elements
    SizeMismatch { expected: usize, found: usize },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "queue is empty"),
            QueueError::DegreeMismatch { expected, found } => {
                write!(
                    f,
                    "binomial tree degree mismatch: expected {}, found {}",
                    expected, found
                )
            }
            QueueError::KindMismatch { left, right } => {
                write!(f, "cannot merge a {} with a {}", left, right)
            }
            QueueError::HeapOrderViolated => write!(f, "heap order violated"),
            QueueError::SizeMismatch { expected, found } => {
                write!(
                    f,
                    "size counter says {} elements but store holds {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// Base trait for the mergeable min-heaps
///
/// Elements are their own priority: the heap only ever compares them with `Ord`.
/// Ties are returned in an unspecified order.
///
/// # Example
///
/// ```rust
/// use rust_mergeable_heaps::MergeableHeap;
/// use rust_mergeable_heaps::binomial::BinomialHeap;
///
/// let mut left = BinomialHeap::new();
/// left.push(5);
/// left.push(1);
///
/// let mut right = BinomialHeap::new();
/// right.push(3);
///
/// let mut merged = left.merge(right);
/// assert_eq!(merged.len(), 3);
/// assert_eq!(merged.pop(), Ok(1));
/// assert_eq!(merged.pop(), Ok(3));
/// assert_eq!(merged.pop(), Ok(5));
/// assert!(merged.pop().is_err());
/// ```
pub trait MergeableHeap<T: Ord>: Sized {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    fn push(&mut self, value: T);

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the heap holds no elements.
    fn peek(&self) -> Result<&T, QueueError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the heap holds no elements.
    fn pop(&mut self) -> Result<T, QueueError>;

    /// Combines two heaps into one, consuming both
    ///
    /// # Time Complexity
    /// Varies by implementation: O(n+m) for the array and list stores, O(log n)
    /// for the binomial heap.
    fn merge(self, other: Self) -> Self;

    /// Checks the structural invariants of the store
    ///
    /// # Errors
    /// Returns the first violated invariant found.
    fn validate(&self) -> Result<(), QueueError>;
}
