//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with:
//! - O(log n) insert and delete_min
//! - O(log n) merge
//!
//! # Algorithm Overview
//!
//! The forest keeps one slot per degree. Slot `d` is either empty or holds a
//! single binomial tree of degree `d`, so the occupied slots spell out the
//! binary representation of the element count.
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes, and its root's children are B₀, B₁, …, B_{k-1}
//!
//! **Key Operations**:
//! - **Merge**: ripple-carry addition over slots, linking equal-degree trees
//! - **Insert**: merge a one-node forest
//! - **Delete-min**: detach the tree with the smallest root; its children are
//!   already a forest (one tree each of degree 0..k-1), so merge them back
//!
//! # Ownership
//!
//! Every tree owns its children by value and every slot owns its tree. Linking
//! and merging move subtrees between owners; nothing is reference counted and
//! nothing is shared.

use crate::degree::{self, Degree};
use crate::traits::{MergeableHeap, QueueError};
use log::{debug, trace};
use std::mem;

/// A binomial tree: a root element plus children of degree 0, 1, …, d-1
#[derive(Debug, Clone)]
struct Tree<T> {
    root: T,
    /// `children[i]` has degree `i`
    children: Vec<Tree<T>>,
}

impl<T: Ord> Tree<T> {
    fn singleton(root: T) -> Self {
        Self {
            root,
            children: Vec::new(),
        }
    }

    fn degree(&self) -> Degree {
        degree::from_position(self.children.len())
    }

    /// Links two trees of equal degree d into one of degree d+1
    ///
    /// **Time Complexity**: O(1)
    ///
    /// The tree whose root is not smaller becomes the last child of the other,
    /// which keeps `children[i]` at degree `i` and the heap order intact.
    fn link(mut self, mut other: Self) -> Result<Self, QueueError> {
        degree::ensure_same_degree(self.degree(), other.degree())?;
        if other.root < self.root {
            mem::swap(&mut self, &mut other);
        }
        self.children.push(other);
        Ok(self)
    }

    /// Verifies shape and order of this subtree, returning its size
    fn validate(&self, expected: Degree) -> Result<usize, QueueError> {
        degree::ensure_same_degree(expected, self.degree())?;

        let mut size = 1;
        for (position, child) in self.children.iter().enumerate() {
            if child.root < self.root {
                return Err(QueueError::HeapOrderViolated);
            }
            size += child.validate(degree::from_position(position))?;
        }

        let expected_size = degree::tree_size(expected);
        if size != expected_size {
            return Err(QueueError::SizeMismatch {
                expected: expected_size,
                found: size,
            });
        }
        Ok(size)
    }
}

type Slots<T> = Vec<Option<Tree<T>>>;

/// Binomial Heap
///
/// # Example
///
/// ```rust
/// use rust_mergeable_heaps::binomial::BinomialHeap;
/// use rust_mergeable_heaps::MergeableHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.push("dog");
/// heap.push("cat");
/// heap.push("ant");
///
/// // 3 = 0b11: one tree of degree 0 and one of degree 1
/// assert_eq!(heap.degrees(), vec![0, 1]);
/// assert_eq!(heap.pop(), Ok("ant"));
/// assert_eq!(heap.pop(), Ok("cat"));
/// assert_eq!(heap.pop(), Ok("dog"));
/// ```
#[derive(Debug, Clone)]
pub struct BinomialHeap<T: Ord> {
    /// Trees indexed by degree. Each slot holds at most one tree; no trailing empty slots.
    slots: Slots<T>,
    /// Number of elements in the heap
    len: usize,
}

impl<T: Ord> MergeableHeap<T> for BinomialHeap<T> {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Inserts a new element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// A one-node tree is merged in as a degenerate forest. Like incrementing
    /// a binary counter, it ripples a carry through every occupied low slot.
    fn push(&mut self, value: T) {
        self.meld_or_abort(vec![Some(Tree::singleton(value))]);
        self.len += 1;
    }

    /// Returns the smallest root
    ///
    /// **Time Complexity**: O(log n) - at most log₂ n + 1 roots to scan
    fn peek(&self) -> Result<&T, QueueError> {
        let position = self.min_position().ok_or(QueueError::Empty)?;
        self.slots[position]
            .as_ref()
            .map(|tree| &tree.root)
            .ok_or(QueueError::Empty)
    }

    /// Removes and returns the minimum element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Scan the roots for the minimum, in slot p
    /// 2. Empty slot p
    /// 3. The root's children have degrees 0..p-1, one each: already a forest
    /// 4. Merge that forest back into the heap
    fn pop(&mut self) -> Result<T, QueueError> {
        let position = self.min_position().ok_or(QueueError::Empty)?;
        let Tree { root, children } = self.slots[position].take().ok_or(QueueError::Empty)?;

        self.meld_or_abort(children.into_iter().map(Some).collect());
        self.len -= 1;
        Ok(root)
    }

    /// Merges another heap into this one, consuming both
    ///
    /// **Time Complexity**: O(log n + log m)
    ///
    /// Trees are moved, never copied: see [`BinomialHeap::merged_copy`] for a
    /// variant that leaves its operands untouched.
    fn merge(mut self, other: Self) -> Self {
        debug!(
            "merging binomial heaps of {} and {} elements",
            self.len, other.len
        );
        self.meld_or_abort(other.slots);
        self.len += other.len;
        self
    }

    /// Checks every slot: degree d holds a tree of 2ᵈ heap-ordered elements
    /// whose children have degrees d-1, …, 0 (read from the last child), and
    /// the slot sizes add up to the cached length.
    fn validate(&self) -> Result<(), QueueError> {
        let mut total = 0;
        for (position, slot) in self.slots.iter().enumerate() {
            if let Some(tree) = slot {
                total += tree.validate(degree::from_position(position))?;
            }
        }
        if total != self.len {
            return Err(QueueError::SizeMismatch {
                expected: self.len,
                found: total,
            });
        }
        Ok(())
    }
}

impl<T: Ord> BinomialHeap<T> {
    /// Returns the degrees of the occupied slots in increasing order
    ///
    /// These are exactly the positions of the set bits of `len()`.
    pub fn degrees(&self) -> Vec<Degree> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(position, _)| degree::from_position(position))
            .collect()
    }

    /// Position of the slot whose root is smallest
    fn min_position(&self) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.as_ref().map(|tree| (position, &tree.root)))
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(position, _)| position)
    }

    /// Runs [`meld`](Self::meld), treating a degree mismatch as the fatal
    /// internal defect it is.
    fn meld_or_abort(&mut self, other: Slots<T>) {
        if let Err(err) = self.meld(other) {
            panic!("binomial forest invariant violated: {}", err);
        }
    }

    /// Merges a forest into this one by ripple-carry addition
    ///
    /// **Time Complexity**: O(max(len₁, len₂)) slot visits, O(1) per visit
    ///
    /// **Algorithm**: at each position, up to three trees of that position's
    /// degree arrive (one from each forest plus the carry), and they add like
    /// bits in a full adder:
    ///
    /// | inputs | slot        | carry out        |
    /// |--------|-------------|------------------|
    /// | 0      | empty       | none             |
    /// | 1      | that tree   | none             |
    /// | 2      | empty       | the two, linked  |
    /// | 3      | one of them | the other two, linked |
    ///
    /// A carry left over after the last position becomes a new top slot.
    ///
    /// **Invariant**: every tree is checked against the degree of the slot it
    /// arrives at, so the result holds at most one tree per degree.
    fn meld(&mut self, other: Slots<T>) -> Result<(), QueueError> {
        let width = self.slots.len().max(other.len());
        let mut mine = mem::take(&mut self.slots).into_iter();
        let mut theirs = other.into_iter();

        let mut result: Slots<T> = Vec::with_capacity(width + 1);
        let mut carry: Option<Tree<T>> = None;

        for position in 0..width {
            let expected = degree::from_position(position);
            let a = mine.next().flatten();
            let b = theirs.next().flatten();
            for tree in [&a, &b, &carry].into_iter().flatten() {
                degree::ensure_same_degree(expected, tree.degree())?;
            }

            let (slot, carry_out) = add_position(a, b, carry.take())?;
            result.push(slot);
            carry = carry_out;
        }

        if let Some(tree) = carry {
            degree::ensure_same_degree(degree::from_position(width), tree.degree())?;
            result.push(Some(tree));
        }

        while matches!(result.last(), Some(None)) {
            result.pop();
        }

        trace!("forest merge produced degrees up to {}", result.len());
        self.slots = result;
        Ok(())
    }
}

impl<T: Ord + Clone> BinomialHeap<T> {
    /// Non-destructive merge: deep-copies both forests, then merges the copies
    ///
    /// **Time Complexity**: O(n + m) for the copies, plus the O(log) merge
    pub fn merged_copy(&self, other: &Self) -> Self {
        self.clone().merge(other.clone())
    }
}

/// One column of the ripple-carry addition; returns (slot, carry out)
#[allow(clippy::type_complexity)]
fn add_position<T: Ord>(
    a: Option<Tree<T>>,
    b: Option<Tree<T>>,
    carry: Option<Tree<T>>,
) -> Result<(Option<Tree<T>>, Option<Tree<T>>), QueueError> {
    Ok(match (a, b, carry) {
        (None, None, None) => (None, None),
        (Some(tree), None, None) | (None, Some(tree), None) | (None, None, Some(tree)) => {
            (Some(tree), None)
        }
        (Some(x), Some(y), None) | (Some(x), None, Some(y)) | (None, Some(x), Some(y)) => {
            (None, Some(x.link(y)?))
        }
        (Some(x), Some(y), Some(stay)) => (Some(stay), Some(x.link(y)?)),
    })
}

impl<T: Ord> Default for BinomialHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinomialHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
