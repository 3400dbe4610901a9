//! Singly-linked list partitioning
//!
//! [`partition`] splits a [`List`] around a pivot value by relinking its nodes
//! into two new lists: one with the elements greater than the pivot and one
//! with the elements less than or equal to it. No node is allocated or copied.
//!
//! Each node is prepended to its output list as the input is walked front to
//! back, so both outputs hold their elements in the *reverse* of the original
//! order. The input list is left empty.
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::partition::{partition, List};
//!
//! let mut list: List<i32> = (1..=5).collect();
//! let parts = partition(&mut list, &3);
//!
//! assert_eq!(parts.larger.to_vec(), vec![5, 4]);
//! assert_eq!(parts.smaller.to_vec(), vec![3, 2, 1]);
//! assert!(list.is_empty());
//! ```

use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    val: T,
    next: Link<T>,
}

/// An owned singly-linked list
///
/// Dropping a list releases its nodes iteratively, so arbitrarily long lists
/// can be dropped without exhausting the stack.
pub struct List<T> {
    head: Link<T>,
}

/// The two lists produced by [`partition`]
#[derive(Debug)]
pub struct Partition<T> {
    /// Elements less than or equal to the pivot, in reverse input order
    pub smaller: List<T>,
    /// Elements greater than the pivot, in reverse input order
    pub larger: List<T>,
}

/// Destructively partitions `list` around `pivot`
///
/// After the call `list` is empty and every node it held belongs to exactly one
/// of the returned lists.
pub fn partition<T: PartialOrd>(list: &mut List<T>, pivot: &T) -> Partition<T> {
    let mut smaller = List::new();
    let mut larger = List::new();

    let mut cursor = list.head.take();
    while let Some(mut node) = cursor {
        cursor = node.next.take();
        let target = if node.val > *pivot {
            &mut larger
        } else {
            &mut smaller
        };
        node.next = target.head.take();
        target.head = Some(node);
    }

    Partition { smaller, larger }
}

impl<T> List<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Returns true if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes, walking the whole list
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Inserts a value at the front of the list
    pub fn push_front(&mut self, val: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { val, next }));
    }

    /// Removes and returns the value at the front of the list
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            node.val
        })
    }

    /// Returns a reference to the value at the front of the list
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.val)
    }

    /// Iterates over the values front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Copies the values into a vector, front to back
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Builds a list that keeps the iteration order
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = List::new();
        for val in values.into_iter().rev() {
            list.push_front(val);
        }
        list
    }
}

/// Borrowing iterator over a [`List`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}
