//! Priority relations
//!
//! A heap never compares elements with `Ord` directly. Instead it asks a
//! [`Priority`] relation whether one element must appear above another. The
//! relation is a strict ordering: irreflexive, and transitive in practice.
//! Two elements where neither has priority over the other are *tied*.
//!
//! | Relation      | Meaning                          | Resulting heap |
//! |---------------|----------------------------------|----------------|
//! | [`MinFirst`]  | `a < b`                          | min-heap       |
//! | [`MaxFirst`]  | `a > b`                          | max-heap       |
//! | [`ByKey`]     | `key(a) < key(b)`                | min by key     |
//! | closure       | `f(a, b)`                        | anything       |
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::{ByKey, DaryHeap, Heap};
//!
//! // Closures work directly as relations
//! let mut longest = DaryHeap::with_priority(4, |a: &String, b: &String| a.len() > b.len()).unwrap();
//! longest.push("ab".to_string());
//! longest.push("abcd".to_string());
//! longest.push("a".to_string());
//! assert_eq!(longest.top().map(String::as_str), Ok("abcd"));
//!
//! // Or derive the ordering from a key
//! let mut by_cost = DaryHeap::with_priority(2, ByKey(|job: &(u32, &'static str)| job.0)).unwrap();
//! by_cost.push((7, "slow"));
//! by_cost.push((2, "fast"));
//! assert_eq!(by_cost.pop(), Ok((2, "fast")));
//! ```

/// A strict "has priority over" relation between two elements
///
/// `has_priority(a, b)` returns true when `a` must appear above `b` in the heap.
/// Implementations must not rely on being called in any particular order and
/// only ever receive shared references.
pub trait Priority<T> {
    /// Returns true if `a` has priority over `b`
    fn has_priority(&self, a: &T, b: &T) -> bool;
}

/// Natural ascending order: smaller elements come first (min-heap)
///
/// This is the default relation of [`DaryHeap`](crate::DaryHeap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> Priority<T> for MinFirst {
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Natural descending order: larger elements come first (max-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord> Priority<T> for MaxFirst {
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Ascending order of a key extracted from each element
///
/// Elements with equal keys are tied, regardless of the rest of their contents.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Priority<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}

impl<T, F> Priority<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
