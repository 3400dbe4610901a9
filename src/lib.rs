//! d-ary Priority Heaps for Rust
//!
//! This crate provides a generic d-ary (m-ary) heap: a priority queue stored as a
//! complete tree in a flat vector, generalized from the binary heap to any
//! branching factor of at least 2.
//!
//! # Features
//!
//! - **Any arity**: pick the branching factor at construction time. Larger arities make
//!   `push` cheaper (shallower tree) and `pop` more expensive (more children to scan).
//! - **Caller-supplied priority**: ordering is decided by a [`Priority`] relation, which
//!   may be [`MinFirst`], [`MaxFirst`], a key extractor, or any `Fn(&T, &T) -> bool`.
//! - **Deterministic ties**: during sift-down the lowest-indexed of equally preferred
//!   children is chosen, so the pop order for a given input is reproducible.
//! - **List partition**: a small singly-linked-list partition utility in [`partition`].
//!
//! # Time Complexity
//!
//! | Operation | Complexity         |
//! |-----------|--------------------|
//! | `push`    | O(log_m n)         |
//! | `pop`     | O(m log_m n)       |
//! | `top`     | O(1)               |
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::{DaryHeap, Heap, HeapError, MaxFirst};
//!
//! let mut heap = DaryHeap::with_priority(3, MaxFirst).unwrap();
//! for x in [5, 3, 8, 1, 9, 2] {
//!     heap.push(x);
//! }
//! assert_eq!(heap.top(), Ok(&9));
//! assert_eq!(heap.pop(), Ok(9));
//! assert_eq!(heap.len(), 5);
//!
//! let empty: DaryHeap<i32> = DaryHeap::new();
//! assert_eq!(empty.top(), Err(HeapError::Underflow));
//! ```

pub mod dary;
pub mod partition;
pub mod priority;
pub mod traits;

// Re-export the main types for convenience
pub use dary::DaryHeap;
pub use priority::{ByKey, MaxFirst, MinFirst, Priority};
pub use traits::{Heap, HeapError};
