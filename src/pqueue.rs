//! Runtime-selected priority queue facade
//!
//! [`PriorityQueue`] wraps one of the four stores behind a single type so that
//! callers can pick the implementation at run time with a [`QueueKind`]. The
//! set of kinds is closed, so dispatch is a plain `match`.
//!
//! When the kind is known at compile time, use the stores directly through
//! [`MergeableHeap`]: merging two different kinds is then a type error instead
//! of a [`QueueError::KindMismatch`].
//!
//! # Example
//!
//! ```rust
//! use rust_mergeable_heaps::{PriorityQueue, QueueKind};
//!
//! let mut one = PriorityQueue::new(QueueKind::BinaryHeap);
//! one.enqueue(1);
//! one.enqueue(5);
//! one.enqueue(3);
//!
//! let mut two = PriorityQueue::new(QueueKind::BinaryHeap);
//! two.enqueue(4);
//! two.enqueue(2);
//!
//! let merged = PriorityQueue::merge(one, two).unwrap();
//! assert_eq!(merged.size(), 5);
//! assert_eq!(merged.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
//! ```

use crate::binary::BinaryMinHeap;
use crate::binomial::BinomialHeap;
use crate::sorted_list::SortedListHeap;
use crate::traits::{MergeableHeap, QueueError};
use crate::unsorted::UnsortedVecHeap;
use log::debug;
use std::fmt;

/// The backing stores a [`PriorityQueue`] can be built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKind {
    /// [`UnsortedVecHeap`]: O(1) insert, O(n) extract
    UnsortedSequence,
    /// [`SortedListHeap`]: O(n) insert, O(1) extract
    SortedLinkedList,
    /// [`BinaryMinHeap`]: O(log n) insert and extract, O(n + m) merge
    BinaryHeap,
    /// [`BinomialHeap`]: O(log n) insert, extract and merge
    BinomialHeap,
}

impl QueueKind {
    /// Every kind, in order of increasing sophistication
    pub const ALL: [QueueKind; 4] = [
        QueueKind::UnsortedSequence,
        QueueKind::SortedLinkedList,
        QueueKind::BinaryHeap,
        QueueKind::BinomialHeap,
    ];

    /// Human-readable name of the implementation
    pub fn name(self) -> &'static str {
        match self {
            QueueKind::UnsortedSequence => "VectorPQueue",
            QueueKind::SortedLinkedList => "LinkedListPQueue",
            QueueKind::BinaryHeap => "HeapPQueue",
            QueueKind::BinomialHeap => "BinomialHeapPQueue",
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
enum Store<T: Ord> {
    Unsorted(UnsortedVecHeap<T>),
    Sorted(SortedListHeap<T>),
    Binary(BinaryMinHeap<T>),
    Binomial(BinomialHeap<T>),
}

/// Applies the same expression to whichever store is active
macro_rules! dispatch {
    ($store:expr, $inner:ident => $body:expr) => {
        match $store {
            Store::Unsorted($inner) => $body,
            Store::Sorted($inner) => $body,
            Store::Binary($inner) => $body,
            Store::Binomial($inner) => $body,
        }
    };
}

impl<T: Ord> Store<T> {
    fn kind(&self) -> QueueKind {
        match self {
            Store::Unsorted(_) => QueueKind::UnsortedSequence,
            Store::Sorted(_) => QueueKind::SortedLinkedList,
            Store::Binary(_) => QueueKind::BinaryHeap,
            Store::Binomial(_) => QueueKind::BinomialHeap,
        }
    }
}

/// A min-priority queue whose backing store is chosen at construction
///
/// The queue keeps its own size counter next to the store; every operation
/// updates both, and [`validate`](PriorityQueue::validate) checks that they agree.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T: Ord> {
    store: Store<T>,
    size: usize,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue backed by the given kind of store
    pub fn new(kind: QueueKind) -> Self {
        let store = match kind {
            QueueKind::UnsortedSequence => Store::Unsorted(UnsortedVecHeap::new()),
            QueueKind::SortedLinkedList => Store::Sorted(SortedListHeap::new()),
            QueueKind::BinaryHeap => Store::Binary(BinaryMinHeap::new()),
            QueueKind::BinomialHeap => Store::Binomial(BinomialHeap::new()),
        };
        Self { store, size: 0 }
    }

    /// Creates an empty queue with a capacity hint
    ///
    /// Only the binary heap preallocates; the other kinds ignore the hint.
    pub fn with_capacity(kind: QueueKind, hint: usize) -> Self {
        match kind {
            QueueKind::BinaryHeap => Self {
                store: Store::Binary(BinaryMinHeap::with_capacity(hint)),
                size: 0,
            },
            _ => Self::new(kind),
        }
    }

    /// Creates a queue of the given kind holding every value from `values`
    pub fn from_values<I: IntoIterator<Item = T>>(kind: QueueKind, values: I) -> Self {
        let mut queue = Self::new(kind);
        queue.extend(values);
        queue
    }

    /// Which store backs this queue
    pub fn kind(&self) -> QueueKind {
        self.store.kind()
    }

    /// Number of elements in the queue, O(1)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the queue holds no elements, O(1)
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts a value
    pub fn enqueue(&mut self, value: T) {
        dispatch!(&mut self.store, store => store.push(value));
        self.size += 1;
    }

    /// Removes and returns the smallest value
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue holds no elements.
    pub fn extract_min(&mut self) -> Result<T, QueueError> {
        let value = dispatch!(&mut self.store, store => store.pop())?;
        self.size -= 1;
        Ok(value)
    }

    /// Returns the smallest value without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue holds no elements.
    pub fn peek(&self) -> Result<&T, QueueError> {
        dispatch!(&self.store, store => store.peek())
    }

    /// Combines two queues of the same kind into a new one, consuming both
    ///
    /// The result holds the multiset union of both queues. The merge itself is
    /// the store's own: concatenation, sorted merge, bottom-up heapify, or
    /// binomial carry propagation.
    ///
    /// # Errors
    /// Returns [`QueueError::KindMismatch`] if the queues are backed by different
    /// stores. Both operands have been moved in and are dropped in that case;
    /// compare [`kind`](PriorityQueue::kind) first to keep them.
    pub fn merge(one: Self, two: Self) -> Result<Self, QueueError> {
        let size = one.size + two.size;
        debug!(
            "merging {} of {} elements with {} of {} elements",
            one.kind(),
            one.size,
            two.kind(),
            two.size
        );

        let store = match (one.store, two.store) {
            (Store::Unsorted(a), Store::Unsorted(b)) => Store::Unsorted(a.merge(b)),
            (Store::Sorted(a), Store::Sorted(b)) => Store::Sorted(a.merge(b)),
            (Store::Binary(a), Store::Binary(b)) => Store::Binary(a.merge(b)),
            (Store::Binomial(a), Store::Binomial(b)) => Store::Binomial(a.merge(b)),
            (left, right) => {
                return Err(QueueError::KindMismatch {
                    left: left.kind(),
                    right: right.kind(),
                })
            }
        };

        Ok(Self { store, size })
    }

    /// Drains the queue into a vector in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.size);
        while let Ok(value) = self.extract_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks the store's invariants and that the size counter matches it
    ///
    /// # Errors
    /// Returns the first violated invariant found.
    pub fn validate(&self) -> Result<(), QueueError> {
        let stored = dispatch!(&self.store, store => {
            store.validate()?;
            store.len()
        });
        if stored != self.size {
            return Err(QueueError::SizeMismatch {
                expected: self.size,
                found: stored,
            });
        }
        Ok(())
    }
}

impl<T: Ord + Clone> PriorityQueue<T> {
    /// Non-destructive merge: both operands stay usable
    ///
    /// # Errors
    /// Returns [`QueueError::KindMismatch`] if the queues are backed by different stores.
    pub fn merge_cloned(one: &Self, two: &Self) -> Result<Self, QueueError> {
        if one.kind() != two.kind() {
            return Err(QueueError::KindMismatch {
                left: one.kind(),
                right: two.kind(),
            });
        }
        Self::merge(one.clone(), two.clone())
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}
