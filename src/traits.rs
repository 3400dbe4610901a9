//! Common traits for heap data structures
//!
//! This module provides the [`Heap`] trait shared by the containers in this crate
//! and the [`HeapError`] type returned by its fallible operations.
//!
//! Unlike `std::collections::BinaryHeap`, whose `peek`/`pop` return `Option`, the
//! primary accessors here return `Result<_, HeapError>` so that reading from an
//! empty heap is reported as [`HeapError::Underflow`]. The `Option` flavours are
//! still available as provided methods.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `top` or `pop` was called on an empty heap
    Underflow,
    /// The heap was constructed with a branching factor below 2
    InvalidArity(usize),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => write!(f, "heap underflow: the heap is empty"),
            HeapError::InvalidArity(arity) => {
                write!(f, "invalid heap arity {}: must be at least 2", arity)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for priority heaps
///
/// The element itself carries its priority; which of two elements comes first is
/// decided by the heap's priority relation rather than by a separate key.
///
/// # Example
///
/// ```rust
/// use rust_dary_heap::{DaryHeap, Heap, HeapError};
///
/// let mut heap = DaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.top(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.peek(), Some(&2));
///
/// heap.pop().unwrap();
/// heap.pop().unwrap();
/// assert_eq!(heap.pop(), Err(HeapError::Underflow));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    fn push(&mut self, item: T);

    /// Returns the highest-priority element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    fn top(&self) -> Result<&T, HeapError>;

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty. The heap is not
    /// modified in that case.
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Like [`top`](Heap::top), but returns `None` on an empty heap
    fn peek(&self) -> Option<&T> {
        self.top().ok()
    }

    /// Like [`pop`](Heap::pop), but returns `None` on an empty heap
    fn try_pop(&mut self) -> Option<T> {
        self.pop().ok()
    }
}
