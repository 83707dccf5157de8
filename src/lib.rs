//! Mergeable Priority Queues for Rust
//!
//! This crate provides a family of interchangeable min-priority queues over any
//! `Ord` element type. They share one interface and each supports an explicit,
//! destructive **merge** that beats inserting one queue's elements into the other.
//!
//! # Features
//!
//! - **Unsorted Vector**: O(1) insert; O(n) extract-min; O(n + m) merge by concatenation
//! - **Sorted Linked List**: O(n) insert; O(1) extract-min; O(n + m) sorted merge
//! - **Binary Heap**: O(log n) insert and extract-min; O(n + m) merge by bottom-up heapify
//! - **Binomial Heap**: O(log n) insert, extract-min and merge via carry propagation
//!
//! Merge takes both operands by value, so a merged-away queue cannot be used again.
//!
//! # Example
//!
//! ```rust
//! use rust_mergeable_heaps::{PriorityQueue, QueueKind};
//!
//! let mut queue = PriorityQueue::new(QueueKind::BinomialHeap);
//! queue.enqueue("dog");
//! queue.enqueue("cat");
//! queue.enqueue("ant");
//!
//! assert_eq!(queue.extract_min(), Ok("ant"));
//! assert_eq!(queue.extract_min(), Ok("cat"));
//! assert_eq!(queue.extract_min(), Ok("dog"));
//! assert!(queue.is_empty());
//! ```

pub mod binary;
pub mod binomial;
pub mod degree;
pub mod pqueue;
pub mod sorted_list;
pub mod traits;
pub mod unsorted;

// Re-export the main types for convenience
pub use pqueue::{PriorityQueue, QueueKind};
pub use traits::{MergeableHeap, QueueError};
