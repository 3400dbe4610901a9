//! d-ary Heap implementation
//!
//! A heap stored as a complete m-ary tree in a flat vector. The element at index
//! `i > 0` has its parent at `(i - 1) / m`, and its children occupy the indices
//! `i * m + 1 ..= i * m + m` (clamped to the current length).
//!
//! Ordering is decided by a [`Priority`] relation fixed at construction. The
//! heap property is: no element has priority over its parent.
//!
//! # Tie-breaking
//!
//! - `push` moves an element up only while it *strictly* outranks its parent, so
//!   an element tied with its parent stays below it.
//! - `pop` scans the children of the sifting node left to right and replaces the
//!   current best child only when a later child is strictly preferred. Among
//!   equally preferred children the lowest-indexed one is therefore chosen, and
//!   the node is swapped with it only if that child strictly outranks the node.
//!
//! This makes the pop order for a given input sequence deterministic.
//!
//! # Time Complexity
//!
//! | Operation | Complexity     |
//! |-----------|----------------|
//! | `push`    | O(log_m n)     |
//! | `pop`     | O(m log_m n)   |
//! | `top`     | O(1)           |
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::{DaryHeap, Heap};
//!
//! let mut heap = DaryHeap::with_arity(4).unwrap();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.top(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(3));
//! assert!(heap.pop().is_err());
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use tracing::trace;

use crate::priority::{MaxFirst, MinFirst, Priority};
use crate::traits::{Heap, HeapError};

/// The smallest branching factor a heap accepts
pub const MIN_ARITY: usize = 2;

/// Branching factor used by [`DaryHeap::new`] and [`Default`]
pub const DEFAULT_ARITY: usize = 2;

/// A d-ary heap ordered by a caller-supplied priority relation
///
/// The branching factor (arity) and the relation are fixed for the lifetime of
/// the heap. With the default [`MinFirst`] relation the smallest element is at
/// the top; use [`MaxFirst`], [`ByKey`](crate::ByKey) or a closure for other orders.
#[derive(Clone)]
pub struct DaryHeap<T, P = MinFirst> {
    /// Elements in tree order, index 0 is the root
    data: Vec<T>,
    arity: usize,
    priority: P,
}

impl<T: Ord> DaryHeap<T, MinFirst> {
    /// Creates an empty binary min-heap
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            arity: DEFAULT_ARITY,
            priority: MinFirst,
        }
    }

    /// Creates an empty min-heap with the given arity
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn with_arity(arity: usize) -> Result<Self, HeapError> {
        Self::with_priority(arity, MinFirst)
    }
}

impl<T: Ord> DaryHeap<T, MaxFirst> {
    /// Creates an empty max-heap with the given arity
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn max_heap(arity: usize) -> Result<Self, HeapError> {
        Self::with_priority(arity, MaxFirst)
    }
}

impl<T, P> DaryHeap<T, P> {
    /// Returns the branching factor of the heap
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the priority relation of the heap
    pub fn priority(&self) -> &P {
        &self.priority
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the elements in tree (storage) order
    ///
    /// Index 0 is the top of the heap. Only the root position is meaningful for
    /// priority; the rest of the order depends on the insertion history.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the parent index of `index`, or `None` for the root
    #[inline]
    pub fn parent(&self, index: usize) -> Option<usize> {
        if index == 0 {
            None
        } else {
            Some((index - 1) / self.arity)
        }
    }

    /// Returns the index of the first child of `index`
    ///
    /// The result may lie beyond the end of the heap.
    #[inline]
    pub fn first_child(&self, index: usize) -> usize {
        index.saturating_mul(self.arity).saturating_add(1)
    }

    /// Returns the range of indices of the existing children of `index`
    ///
    /// The range holds at most `arity` indices and is empty for a leaf.
    #[inline]
    pub fn children(&self, index: usize) -> Range<usize> {
        let len = self.data.len();
        let first = self.first_child(index);
        first.min(len)..first.saturating_add(self.arity).min(len)
    }
}

impl<T, P: Priority<T>> DaryHeap<T, P> {
    /// Creates an empty heap with the given arity and priority relation
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn with_priority(arity: usize, priority: P) -> Result<Self, HeapError> {
        Self::with_capacity_and_priority(arity, 0, priority)
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn with_capacity_and_priority(
        arity: usize,
        capacity: usize,
        priority: P,
    ) -> Result<Self, HeapError> {
        if arity < MIN_ARITY {
            return Err(HeapError::InvalidArity(arity));
        }
        trace!(arity, capacity, "creating d-ary heap");
        Ok(Self {
            data: Vec::with_capacity(capacity),
            arity,
            priority,
        })
    }

    /// Checks the heap property over the whole storage
    ///
    /// Returns false if any element has priority over its parent.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / self.arity;
            !self.priority.has_priority(&self.data[i], &self.data[parent])
        })
    }

    /// Returns an iterator that pops elements in priority order
    ///
    /// Elements not consumed by the iterator are removed when it is dropped.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, P> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap and returns its elements in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Move element at index up while it outranks its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / self.arity;
            if self
                .priority
                .has_priority(&self.data[index], &self.data[parent])
            {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while some child outranks it
    fn sift_down(&mut self, mut index: usize) {
        while let Some(best) = self.best_child(index) {
            if self
                .priority
                .has_priority(&self.data[best], &self.data[index])
            {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }

    /// The most preferred child of `index`, lowest index on ties
    fn best_child(&self, index: usize) -> Option<usize> {
        let mut children = self.children(index);
        let mut best = children.next()?;
        for child in children {
            if self
                .priority
                .has_priority(&self.data[child], &self.data[best])
            {
                best = child;
            }
        }
        Some(best)
    }
}

impl<T, P: Priority<T>> Heap<T> for DaryHeap<T, P> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    fn top(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Underflow)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }

        // The last element takes the root's place
        let top = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(top)
    }
}

impl<T, P: Priority<T> + Default> Default for DaryHeap<T, P> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            arity: DEFAULT_ARITY,
            priority: P::default(),
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for DaryHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DaryHeap")
            .field("arity", &self.arity)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T, P: Priority<T>> Extend<T> for DaryHeap<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for DaryHeap<T, MinFirst> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

/// Iterator returned by [`DaryHeap::drain_sorted`]
pub struct DrainSorted<'a, T, P: Priority<T>> {
    heap: &'a mut DaryHeap<T, P>,
}

impl<T, P: Priority<T>> Iterator for DrainSorted<'_, T, P> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.try_pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, P: Priority<T>> ExactSizeIterator for DrainSorted<'_, T, P> {}

impl<T, P: Priority<T>> FusedIterator for DrainSorted<'_, T, P> {}

impl<T, P: Priority<T>> Drop for DrainSorted<'_, T, P> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}
