//! Doubly-linked list with arena-held nodes.
//!
//! Nodes live in a [`slab::Slab`] owned by the list and refer to their
//! neighbors by arena index rather than by pointer. The list itself tracks
//! head, tail, and length.
//!
//! # Link Invariants
//!
//! - `head.prev` and `tail.next` are [`Index::NONE`]
//! - for every node `n`: `n.prev.next == n` and `n.next.prev == n`
//! - `len` equals the number of nodes reachable from `head`
//!
//! Positional operations walk from the head, so `insert`, `get` and
//! `remove` are O(position).
//!
//! # Example
//!
//! ```
//! use linea_collections::{LinkedList, List, Sequence};
//!
//! let mut list: LinkedList<u64> = LinkedList::new();
//!
//! list.insert(0, 1).unwrap();
//! list.insert(1, 3).unwrap();
//! list.insert(1, 2).unwrap();
//! assert_eq!(list.to_string(), "{1, 2, 3}");
//!
//! assert_eq!(list.remove(0), Some(1));
//! assert_eq!(list.front(), Some(&2));
//! assert_eq!(list.back(), Some(&3));
//! ```

use core::fmt;

use slab::Slab;
use tracing::trace;

use crate::sequence::write_braced;
use crate::{Element, Index, List, OutOfRange, Sequence};

/// A node in the linked list.
///
/// Wraps one element with its neighbor links. Callers only ever see `&T`;
/// the node layout is an implementation detail.
#[derive(Debug)]
pub(crate) struct ListNode<T, Idx: Index> {
    pub(crate) data: T,
    pub(crate) prev: Idx,
    pub(crate) next: Idx,
}

impl<T, Idx: Index> ListNode<T, Idx> {
    /// Creates an unlinked node.
    #[inline]
    fn new(data: T) -> Self {
        Self {
            data,
            prev: Idx::NONE,
            next: Idx::NONE,
        }
    }
}

/// A doubly-linked list owning its nodes.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `Idx`: Link type (default `u32`). Caps the number of nodes at
///   `Idx::NONE - 1`.
///
/// Cloning walks the chain front to back and builds a new, compact chain,
/// duplicating each element through its `Clone` impl.
pub struct LinkedList<T, Idx: Index = u32> {
    nodes: Slab<ListNode<T, Idx>>,
    head: Idx,
    tail: Idx,
    len: usize,
}

impl<T, Idx: Index> Default for LinkedList<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: Index> LinkedList<T, Idx> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: Idx::NONE,
            tail: Idx::NONE,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: Idx::NONE,
            tail: Idx::NONE,
            len: 0,
        }
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            Some(&self.node(self.head).data)
        }
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            None
        } else {
            Some(&self.node(self.tail).data)
        }
    }

    #[inline]
    pub(crate) fn head(&self) -> Idx {
        self.head
    }

    #[inline]
    pub(crate) fn node(&self, idx: Idx) -> &ListNode<T, Idx> {
        &self.nodes[idx.as_usize()]
    }

    #[inline]
    fn node_mut(&mut self, idx: Idx) -> &mut ListNode<T, Idx> {
        &mut self.nodes[idx.as_usize()]
    }

    // ========================================================================
    // Arena
    // ========================================================================

    /// Places `data` in a fresh, unlinked node.
    ///
    /// # Panics
    ///
    /// Panics if the arena outgrows the link type.
    pub(crate) fn alloc(&mut self, data: T) -> Idx {
        let entry = self.nodes.vacant_entry();
        let key = Idx::try_from_usize(entry.key())
            .expect("linked list exceeds index type capacity");
        entry.insert(ListNode::new(data));
        key
    }

    // ========================================================================
    // Link operations (relink only, no alloc/free)
    // ========================================================================

    /// Links an unlinked node at the front.
    pub(crate) fn link_front(&mut self, key: Idx) {
        let head = self.head;
        let node = self.node_mut(key);
        node.next = head;
        node.prev = Idx::NONE;

        if head.is_some() {
            self.node_mut(head).prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    /// Links an unlinked node directly after `after`.
    pub(crate) fn link_after(&mut self, after: Idx, key: Idx) {
        let next = self.node(after).next;
        let node = self.node_mut(key);
        node.prev = after;
        node.next = next;

        self.node_mut(after).next = key;

        if next.is_some() {
            self.node_mut(next).prev = key;
        } else {
            self.tail = key;
        }

        self.len += 1;
    }

    /// Unlinks a node, leaving it in the arena with cleared links.
    fn unlink(&mut self, key: Idx) {
        let node = self.node(key);
        let prev = node.prev;
        let next = node.next;

        if prev.is_some() {
            self.node_mut(prev).next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.node_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }

        let node = self.node_mut(key);
        node.prev = Idx::NONE;
        node.next = Idx::NONE;

        self.len -= 1;
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Walks from the head to the node at `position`.
    ///
    /// `position` must be `< len`.
    fn key_at(&self, position: usize) -> Idx {
        debug_assert!(position < self.len);
        let mut key = self.head;
        for _ in 0..position {
            key = self.node(key).next;
        }
        key
    }

    #[inline]
    pub(crate) fn iter(&self) -> Iter<'_, T, Idx> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.len
    }

    pub(crate) fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.len {
            return None;
        }

        let key = self.key_at(position);
        self.unlink(key);
        Some(self.nodes.remove(key.as_usize()).data)
    }

    pub(crate) fn get_at(&self, position: usize) -> Option<&T> {
        if position >= self.len {
            return None;
        }
        Some(&self.node(self.key_at(position)).data)
    }

    pub(crate) fn position_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == element)
    }

    /// Frees every node front to back and resets to empty. Returns the
    /// number of elements dropped.
    pub(crate) fn free_chain(&mut self) -> usize {
        let dropped = self.len;
        let mut key = self.head;
        while key.is_some() {
            let next = self.node(key).next;
            self.nodes.remove(key.as_usize());
            key = next;
        }

        self.head = Idx::NONE;
        self.tail = Idx::NONE;
        self.len = 0;
        dropped
    }

    /// Appends a clone of every element of `source`, front to back.
    fn extend_cloned(&mut self, source: &Self)
    where
        T: Clone,
    {
        for data in source.iter() {
            let key = self.alloc(data.clone());
            if self.tail.is_some() {
                self.link_after(self.tail, key);
            } else {
                self.link_front(key);
            }
        }
    }
}

impl<T: Element, Idx: Index> Sequence<T> for LinkedList<T, Idx> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, position: usize) -> Option<&T> {
        self.get_at(position)
    }

    fn remove(&mut self, position: usize) -> Option<T> {
        self.remove_at(position)
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        self.position_of(element)
    }

    fn clear(&mut self) {
        let dropped = self.free_chain();
        trace!(dropped, "linked list cleared");
    }
}

impl<T: Element, Idx: Index> List<T> for LinkedList<T, Idx> {
    fn insert(&mut self, position: usize, element: T) -> Result<(), OutOfRange<T>> {
        if position > self.len {
            trace!(position, len = self.len, "linked list insert rejected");
            return Err(OutOfRange::new(element, position, self.len));
        }

        let key = self.alloc(element);
        if position == 0 {
            // Also covers the empty list: link_front sets the tail
            self.link_front(key);
        } else {
            let after = self.key_at(position - 1);
            self.link_after(after, key);
        }
        Ok(())
    }
}

impl<T: Clone, Idx: Index> Clone for LinkedList<T, Idx> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        list.extend_cloned(self);
        list
    }

    fn clone_from(&mut self, source: &Self) {
        self.free_chain();
        self.extend_cloned(source);
    }
}

impl<T, Idx: Index> Drop for LinkedList<T, Idx> {
    fn drop(&mut self) {
        self.free_chain();
    }
}

impl<T: fmt::Display, Idx: Index> fmt::Display for LinkedList<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, self.iter())
    }
}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for LinkedList<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("len", &self.len)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("elements", &DebugChain(self))
            .finish()
    }
}

struct DebugChain<'a, T, Idx: Index>(&'a LinkedList<T, Idx>);

impl<T: fmt::Debug, Idx: Index> fmt::Debug for DebugChain<'_, T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Front-to-back walk over element references.
pub(crate) struct Iter<'a, T, Idx: Index> {
    list: &'a LinkedList<T, Idx>,
    current: Idx,
}

impl<'a, T, Idx: Index> Iterator for Iter<'a, T, Idx> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        let node = self.list.node(self.current);
        self.current = node.next;
        Some(&node.data)
    }
}


#[cfg(test)]
mod bench_linked_list {
    use super::*;
    use hdrhistogram::Histogram;
    use std::time::Instant;

    const ITERATIONS: usize = 10_000;

    fn print_histogram(name: &str, hist: &Histogram<u64>) {
        println!(
            "{:24} p50: {:6} ns | p99: {:6} ns | p999: {:7} ns | max: {:7}",
            name,
            hist.value_at_quantile(0.50),
            hist.value_at_quantile(0.99),
            hist.value_at_quantile(0.999),
            hist.max(),
        );
    }

    #[test]
    #[ignore]
    fn bench_insert_remove_front() {
        let mut list: LinkedList<u64> = LinkedList::with_capacity(1024);
        let mut hist = Histogram::<u64>::new(3).unwrap();

        for i in 0..512 {
            list.insert(0, i).unwrap();
        }

        for i in 0..ITERATIONS {
            let start = Instant::now();
            list.insert(0, i as u64).unwrap();
            let _ = list.remove(0);
            hist.record(start.elapsed().as_nanos() as u64).unwrap();
        }

        print_histogram("insert+remove front", &hist);
    }

    #[test]
    #[ignore]
    fn bench_get_middle() {
        let mut list: LinkedList<u64> = LinkedList::with_capacity(1024);
        let mut hist = Histogram::<u64>::new(3).unwrap();

        for i in 0..1024 {
            list.insert(i, i as u64).unwrap();
        }

        for _ in 0..ITERATIONS {
            let start = Instant::now();
            let _ = std::hint::black_box(list.get(512));
            hist.record(start.elapsed().as_nanos() as u64).unwrap();
        }

        print_histogram("get middle", &hist);
    }
}
