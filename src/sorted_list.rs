//! Sorted Linked List Heap implementation
//!
//! Elements live in a doubly linked chain kept in non-decreasing order, so the
//! head is always the minimum:
//! - O(n) insert (scan for the splice point)
//! - O(1) peek and delete_min
//! - O(n + m) merge, relinking the operand cells rather than copying them
//!
//! Cells are individually boxed and addressed through `NonNull` links. The list
//! owns every cell reachable from `head`; `Drop` walks the chain and frees them.

use crate::traits::{MergeableHeap, QueueError};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

type Link<T> = Option<NonNull<Cell<T>>>;

struct Cell<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

/// A min-priority queue backed by a sorted doubly linked list
///
/// # Example
///
/// ```rust
/// use rust_mergeable_heaps::MergeableHeap;
/// use rust_mergeable_heaps::sorted_list::SortedListHeap;
///
/// let mut heap = SortedListHeap::new();
/// heap.push(4);
/// heap.push(2);
/// heap.push(9);
///
/// assert_eq!(heap.get(1), Some(&4));
/// assert_eq!(heap.pop(), Ok(2));
/// assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![4, 9]);
/// ```
pub struct SortedListHeap<T: Ord> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Cell<T>>>,
}

impl<T: Ord> Drop for SortedListHeap<T> {
    fn drop(&mut self) {
        while let Some(cell) = self.detach_front() {
            // SAFETY: detached cells are no longer reachable from the list and
            // were allocated with Box in `push`.
            unsafe { drop(Box::from_raw(cell.as_ptr())) };
        }
    }
}

impl<T: Ord> MergeableHeap<T> for SortedListHeap<T> {
    fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Inserts a value in front of the first cell that is not less than it
    ///
    /// **Time Complexity**: O(n) worst-case, O(1) when the value belongs at
    /// either end of the chain.
    fn push(&mut self, value: T) {
        let cell = NonNull::from(Box::leak(Box::new(Cell {
            value,
            prev: None,
            next: None,
        })));

        let Some(tail) = self.tail else {
            self.attach_back(cell);
            return;
        };

        // SAFETY: every link reachable from head/tail points at a live cell owned
        // by this list, and `cell` was just allocated above.
        unsafe {
            if (*tail.as_ptr()).value <= (*cell.as_ptr()).value {
                self.attach_back(cell);
                return;
            }

            // The tail is strictly greater, so the scan stops before running off the end
            let mut current = self.head;
            while let Some(candidate) = current {
                if (*candidate.as_ptr()).value >= (*cell.as_ptr()).value {
                    self.insert_before(candidate, cell);
                    return;
                }
                current = (*candidate.as_ptr()).next;
            }
        }
        unreachable!("sorted chain has a tail greater than the value but no cell not less than it");
    }

    fn peek(&self) -> Result<&T, QueueError> {
        // SAFETY: head is a live cell owned by this list; the reference is tied to &self.
        self.head
            .map(|head| unsafe { &(*head.as_ptr()).value })
            .ok_or(QueueError::Empty)
    }

    /// Removes the head cell
    ///
    /// **Time Complexity**: O(1)
    fn pop(&mut self) -> Result<T, QueueError> {
        let cell = self.detach_front().ok_or(QueueError::Empty)?;
        // SAFETY: the cell was detached from the chain and came from Box::leak.
        let boxed = unsafe { Box::from_raw(cell.as_ptr()) };
        Ok(boxed.value)
    }

    /// Merges two sorted chains, merge-sort style
    ///
    /// **Time Complexity**: O(n + m)
    ///
    /// Cells are moved from the operands into the result one at a time; once one
    /// operand runs dry the rest of the other is spliced on in a single step.
    /// Both operands end up empty and are dropped without freeing anything.
    fn merge(mut self, mut other: Self) -> Self {
        let mut merged = Self::new();

        while let (Some(left), Some(right)) = (self.head, other.head) {
            // SAFETY: both heads are live cells owned by their lists.
            let take_left = unsafe { (*left.as_ptr()).value <= (*right.as_ptr()).value };
            let source = if take_left { &mut self } else { &mut other };
            if let Some(cell) = source.detach_front() {
                merged.attach_back(cell);
            }
        }

        merged.append_chain(&mut self);
        merged.append_chain(&mut other);
        merged
    }

    /// Walks the chain checking links, ordering, and the cached length
    fn validate(&self) -> Result<(), QueueError> {
        let mut count = 0;
        let mut previous: Link<T> = None;
        let mut current = self.head;

        // SAFETY: only cells reachable from head are visited.
        unsafe {
            while let Some(cell) = current {
                if (*cell.as_ptr()).prev != previous {
                    return Err(QueueError::HeapOrderViolated);
                }
                if let Some(prev) = previous {
                    if (*prev.as_ptr()).value > (*cell.as_ptr()).value {
                        return Err(QueueError::HeapOrderViolated);
                    }
                }
                count += 1;
                previous = current;
                current = (*cell.as_ptr()).next;
            }
        }

        if previous != self.tail {
            return Err(QueueError::HeapOrderViolated);
        }
        if count != self.len {
            return Err(QueueError::SizeMismatch {
                expected: self.len,
                found: count,
            });
        }
        Ok(())
    }
}

impl<T: Ord> SortedListHeap<T> {
    /// Returns the element at `index` in sorted position, if any
    ///
    /// **Time Complexity**: O(index)
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Removes and returns the element at `index` in sorted position, if any
    ///
    /// **Time Complexity**: O(index)
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let cell = self.cell_at(index)?;
        // SAFETY: `cell_at` only returns cells owned by this list.
        unsafe {
            self.unlink(cell);
            let boxed = Box::from_raw(cell.as_ptr());
            Some(boxed.value)
        }
    }

    /// Iterates over the elements in non-decreasing order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    fn cell_at(&self, index: usize) -> Link<T> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head;
        for _ in 0..index {
            // SAFETY: index < len, so every step lands on a live cell.
            current = current.and_then(|cell| unsafe { (*cell.as_ptr()).next });
        }
        current
    }

    /// Unlinks the head cell without freeing it
    fn detach_front(&mut self) -> Link<T> {
        let head = self.head?;
        // SAFETY: head is owned by this list.
        unsafe { self.unlink(head) };
        Some(head)
    }

    /// Links a free-standing cell after the current tail
    fn attach_back(&mut self, cell: NonNull<Cell<T>>) {
        // SAFETY: `cell` is not part of any chain; tail (if any) is owned by this list.
        unsafe {
            (*cell.as_ptr()).prev = self.tail;
            (*cell.as_ptr()).next = None;
            match self.tail {
                Some(tail) => (*tail.as_ptr()).next = Some(cell),
                None => self.head = Some(cell),
            }
        }
        self.tail = Some(cell);
        self.len += 1;
    }

    /// Moves every cell of `other` to the end of this chain in O(1)
    ///
    /// Only valid when the result stays sorted, i.e. `other`'s head is not less
    /// than this chain's tail (or one side is empty).
    fn append_chain(&mut self, other: &mut Self) {
        let Some(other_head) = other.head.take() else {
            return;
        };
        // SAFETY: other_head is owned by `other`, which gives up the whole chain here.
        unsafe {
            (*other_head.as_ptr()).prev = self.tail;
            match self.tail {
                Some(tail) => (*tail.as_ptr()).next = Some(other_head),
                None => self.head = Some(other_head),
            }
        }
        self.tail = other.tail.take();
        self.len += other.len;
        other.len = 0;
    }

    /// Splices a free-standing cell in front of `successor`
    ///
    /// # Safety
    /// `successor` must be owned by this list and `cell` must be unlinked.
    unsafe fn insert_before(&mut self, successor: NonNull<Cell<T>>, cell: NonNull<Cell<T>>) {
        let prev = (*successor.as_ptr()).prev;
        (*cell.as_ptr()).prev = prev;
        (*cell.as_ptr()).next = Some(successor);
        (*successor.as_ptr()).prev = Some(cell);
        match prev {
            Some(prev) => (*prev.as_ptr()).next = Some(cell),
            None => self.head = Some(cell),
        }
        self.len += 1;
    }

    /// Detaches `cell` from its neighbours and fixes up head/tail
    ///
    /// # Safety
    /// `cell` must be owned by this list.
    unsafe fn unlink(&mut self, cell: NonNull<Cell<T>>) {
        let prev = (*cell.as_ptr()).prev.take();
        let next = (*cell.as_ptr()).next.take();
        match prev {
            Some(prev) => (*prev.as_ptr()).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => (*next.as_ptr()).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }
}

impl<T: Ord> Default for SortedListHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for SortedListHeap<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for value in self.iter() {
            // Already sorted, so every push takes the O(1) tail path
            copy.push(value.clone());
        }
        copy
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for SortedListHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> Extend<T> for SortedListHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Borrowing iterator over a [`SortedListHeap`] in sorted order
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let cell = self.next?;
        self.remaining -= 1;
        // SAFETY: the list is borrowed for 'a, so its cells stay alive and unmodified.
        unsafe {
            self.next = (*cell.as_ptr()).next;
            Some(&(*cell.as_ptr()).value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Ord> IntoIterator for &'a SortedListHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents<T: Ord + Clone>(list: &SortedListHeap<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut list = SortedListHeap::new();
        for value in [5, 1, 4, 1, 9, 2, 6] {
            list.push(value);
            assert!(list.validate().is_ok());
        }
        assert_eq!(contents(&list), vec![1, 1, 2, 4, 5, 6, 9]);
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn test_pop_from_head() {
        let mut list = SortedListHeap::new();
        list.extend(["dog", "cat", "ant"]);
        assert_eq!(list.peek(), Ok(&"ant"));
        assert_eq!(list.pop(), Ok("ant"));
        assert_eq!(list.pop(), Ok("cat"));
        assert_eq!(list.pop(), Ok("dog"));
        assert_eq!(list.pop(), Err(QueueError::Empty));
        assert_eq!(list.peek(), Err(QueueError::Empty));
        assert!(list.validate().is_ok());
    }

    #[test]
    fn test_get_and_remove_by_index() {
        let mut list = SortedListHeap::new();
        list.extend([30, 10, 20, 40]);

        assert_eq!(list.get(0), Some(&10));
        assert_eq!(list.get(3), Some(&40));
        assert_eq!(list.get(4), None);

        assert_eq!(list.remove(1), Some(20));
        assert_eq!(list.remove(2), Some(40));
        assert_eq!(list.remove(5), None);
        assert_eq!(contents(&list), vec![10, 30]);
        assert!(list.validate().is_ok());

        assert_eq!(list.remove(0), Some(10));
        assert_eq!(list.remove(0), Some(30));
        assert!(list.is_empty());
        assert!(list.validate().is_ok());
    }

    #[test]
    fn test_merge_interleaves() {
        let mut a = SortedListHeap::new();
        a.extend([1, 3, 5]);
        let mut b = SortedListHeap::new();
        b.extend([2, 4]);

        let merged = a.merge(b);
        assert_eq!(merged.len(), 5);
        assert_eq!(contents(&merged), vec![1, 2, 3, 4, 5]);
        assert!(merged.validate().is_ok());
    }

    #[test]
    fn test_merge_with_empty_sides() {
        let mut a = SortedListHeap::new();
        a.extend([7, 3]);
        let merged = a.merge(SortedListHeap::new());
        assert_eq!(contents(&merged), vec![3, 7]);

        let merged = SortedListHeap::new().merge(merged);
        assert_eq!(contents(&merged), vec![3, 7]);
        assert!(merged.validate().is_ok());

        let empty: SortedListHeap<i32> = SortedListHeap::new().merge(SortedListHeap::new());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = SortedListHeap::new();
        original.extend([String::from("b"), String::from("a")]);
        let mut copy = original.clone();
        assert_eq!(copy.pop(), Ok(String::from("a")));
        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 1);
    }

    #[test]
    fn test_debug_lists_in_order() {
        let mut list = SortedListHeap::new();
        list.extend([3, 1, 2]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }

    #[test]
    fn test_drop_releases_owned_values() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let mut list = SortedListHeap::new();
            for i in 0..10 {
                list.push((i, Rc::clone(&tracker)));
            }
            assert_eq!(Rc::strong_count(&tracker), 11);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
