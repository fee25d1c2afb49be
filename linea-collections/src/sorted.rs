//! Linked list that keeps its elements in ascending order.
//!
//! [`SortedList`] reuses the [`LinkedList`] node chain but has no positional
//! insert: [`insert`](SortedList::insert) finds the position by comparing
//! against the existing elements. Everything else comes from [`Sequence`].
//!
//! # Ordering
//!
//! For every adjacent pair `(a, b)`, `a <= b`. An element equal to some
//! existing elements is placed in front of the first of them.
//!
//! # Example
//!
//! ```
//! use linea_collections::{Sequence, SortedList};
//!
//! let mut list: SortedList<u32> = SortedList::new();
//! list.insert(5);
//! list.insert(1);
//! list.insert(3);
//!
//! assert_eq!(list.to_string(), "{1, 3, 5}");
//! assert_eq!(list.remove(0), Some(1));
//! assert_eq!(list.index_of(&5), Some(1));
//! ```

use core::cmp::Ordering;
use core::fmt;

use tracing::trace;

use crate::{Index, LinkedList, OrderedElement, Sequence};

/// A doubly-linked list whose elements are always sorted.
#[derive(Clone)]
pub struct SortedList<T, Idx: Index = u32> {
    chain: LinkedList<T, Idx>,
}

impl<T, Idx: Index> Default for SortedList<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: Index> SortedList<T, Idx> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            chain: LinkedList::new(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: LinkedList::with_capacity(capacity),
        }
    }

    /// Returns the smallest element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Returns the largest element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.chain.back()
    }
}

impl<T: Ord, Idx: Index> SortedList<T, Idx> {
    /// Inserts `element` at its sorted position.
    ///
    /// Walks from the head past every element strictly less than
    /// `element`, so O(n) in the worst case. Never fails.
    pub fn insert(&mut self, element: T) {
        let head = self.chain.head();

        if head.is_none() || element.cmp(&self.chain.node(head).data) != Ordering::Greater {
            let key = self.chain.alloc(element);
            self.chain.link_front(key);
            return;
        }

        // head < element, so the new node goes somewhere after it
        let mut current = head;
        loop {
            let next = self.chain.node(current).next;
            if next.is_none() || self.chain.node(next).data.cmp(&element) != Ordering::Less {
                break;
            }
            current = next;
        }

        let key = self.chain.alloc(element);
        self.chain.link_after(current, key);
    }
}

impl<T: OrderedElement, Idx: Index> Sequence<T> for SortedList<T, Idx> {
    #[inline]
    fn len(&self) -> usize {
        self.chain.size()
    }

    fn get(&self, position: usize) -> Option<&T> {
        self.chain.get_at(position)
    }

    fn remove(&mut self, position: usize) -> Option<T> {
        self.chain.remove_at(position)
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        self.chain.position_of(element)
    }

    fn clear(&mut self) {
        let dropped = self.chain.free_chain();
        trace!(dropped, "sorted list cleared");
    }
}

impl<T: fmt::Display, Idx: Index> fmt::Display for SortedList<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for SortedList<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedList")
            .field("elements", &self.chain)
            .finish()
    }
}
