//! Contiguous list backed by a resizable slot store.
//!
//! [`GrowableArray`] keeps its elements in a boxed slice of slots. Slots
//! `0..len` are occupied, slots `len..capacity` are spare. When an insertion
//! finds no spare slot the store is reallocated according to the array's
//! [`GrowthPolicy`] and the live elements are moved across. The store never
//! shrinks; [`clear`](Sequence::clear) drops elements but keeps the slots.
//!
//! # Example
//!
//! ```
//! use linea_collections::{GrowableArray, List, Sequence};
//!
//! let mut array: GrowableArray<u64> = GrowableArray::with_capacity(2, 0.5);
//!
//! array.insert(0, 10).unwrap();
//! array.insert(1, 30).unwrap();
//! assert_eq!(array.capacity(), 2);
//!
//! // Full: grows to ceil(2 * 1.5) = 3
//! array.insert(1, 20).unwrap();
//! assert_eq!(array.capacity(), 3);
//! assert_eq!(array.to_string(), "{10, 20, 30}");
//!
//! assert_eq!(array.remove(0), Some(10));
//! assert_eq!(array.index_of(&30), Some(1));
//! ```

use core::fmt;

use tracing::{debug, trace};

use crate::sequence::write_braced;
use crate::{ConfigError, Element, GrowthPolicy, List, OutOfRange, Sequence};

/// A list stored in one contiguous, growable allocation.
///
/// Cloning produces an independent array with the same capacity and growth
/// factor, each element duplicated through its `Clone` impl.
#[derive(Clone)]
pub struct GrowableArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    policy: GrowthPolicy,
}

fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T> GrowableArray<T> {
    /// Creates an empty array with [`GrowthPolicy::default`].
    pub fn new() -> Self {
        let policy = GrowthPolicy::default();
        Self {
            slots: vacant_slots(policy.initial_capacity),
            len: 0,
            policy,
        }
    }

    /// Creates an empty array with `capacity` slots that grows by
    /// `growth_factor` whenever it fills up.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or `growth_factor` is not a positive finite
    /// number. Use [`from_policy`](Self::from_policy) to handle these cases.
    pub fn with_capacity(capacity: usize, growth_factor: f64) -> Self {
        match Self::from_policy(GrowthPolicy::new(capacity, growth_factor)) {
            Ok(array) => array,
            Err(err) => panic!("invalid growth policy: {err}"),
        }
    }

    /// Creates an empty array from a validated policy.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`GrowthPolicy::validate`].
    pub fn from_policy(policy: GrowthPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self {
            slots: vacant_slots(policy.initial_capacity),
            len: 0,
            policy,
        })
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the fractional increase applied on each resize.
    #[inline]
    pub fn growth_factor(&self) -> f64 {
        self.policy.growth_factor
    }

    /// Returns the policy this array was built with.
    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Moves the live elements into a larger store.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = self.policy.next_capacity(old_capacity);

        let mut slots = vacant_slots(new_capacity);
        for (dst, src) in slots.iter_mut().zip(&mut self.slots[..self.len]) {
            *dst = src.take();
        }
        self.slots = slots;

        debug!(
            old_capacity,
            new_capacity,
            len = self.len,
            "growable array relocated"
        );
    }

    fn live(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.len].iter().flatten()
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Sequence<T> for GrowableArray<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, position: usize) -> Option<&T> {
        if position >= self.len {
            return None;
        }
        self.slots[position].as_ref()
    }

    fn remove(&mut self, position: usize) -> Option<T> {
        if position >= self.len {
            return None;
        }

        let removed = self.slots[position].take();

        // Close the gap, front to back
        for i in position + 1..self.len {
            self.slots[i - 1] = self.slots[i].take();
        }

        self.len -= 1;
        removed
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        self.live().position(|candidate| candidate == element)
    }

    fn clear(&mut self) {
        trace!(dropped = self.len, "growable array cleared");
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }
}

impl<T: Element> List<T> for GrowableArray<T> {
    fn insert(&mut self, position: usize, element: T) -> Result<(), OutOfRange<T>> {
        if position > self.len {
            trace!(position, len = self.len, "growable array insert rejected");
            return Err(OutOfRange::new(element, position, self.len));
        }

        if self.len == self.capacity() {
            self.grow();
        }

        // Open a gap, back to front
        for i in (position..self.len).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }

        self.slots[position] = Some(element);
        self.len += 1;
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, self.live())
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("growth_factor", &self.policy.growth_factor)
            .field("elements", &DebugLive(self))
            .finish()
    }
}

struct DebugLive<'a, T>(&'a GrowableArray<T>);

impl<T: fmt::Debug> fmt::Debug for DebugLive<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.live()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect<T: Element>(array: &GrowableArray<T>) -> Vec<T> {
        (0..array.len()).filter_map(|i| array.get(i).cloned()).collect()
    }

    #[test]
    fn new_is_empty() {
        let array: GrowableArray<u64> = GrowableArray::new();
        assert!(array.is_empty());
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), GrowthPolicy::DEFAULT_CAPACITY);
        assert_eq!(array.get(0), None);
        assert_eq!(array.to_string(), "{}");
    }

    #[test]
    fn insert_at_end() {
        let mut array = GrowableArray::with_capacity(4, 0.5);
        array.insert(0, 1).unwrap();
        array.insert(1, 2).unwrap();
        array.insert(2, 3).unwrap();

        assert_eq!(array.len(), 3);
        assert_eq!(collect(&array), vec![1, 2, 3]);
    }

    #[test]
    fn insert_at_front_shifts() {
        let mut array = GrowableArray::with_capacity(4, 0.5);
        array.insert(0, 3).unwrap();
        array.insert(0, 2).unwrap();
        array.insert(0, 1).unwrap();

        assert_eq!(collect(&array), vec![1, 2, 3]);
    }

    #[test]
    fn insert_in_middle_shifts() {
        let mut array = GrowableArray::with_capacity(4, 0.5);
        array.insert(0, 1).unwrap();
        array.insert(1, 3).unwrap();
        array.insert(1, 2).unwrap();

        assert_eq!(collect(&array), vec![1, 2, 3]);
        assert_eq!(array.get(1), Some(&2));
    }

    #[test]
    fn insert_out_of_range_returns_element() {
        let mut array = GrowableArray::with_capacity(4, 0.5);
        array.insert(0, "a".to_string()).unwrap();

        let err = array.insert(2, "b".to_string()).unwrap_err();
        assert_eq!(err.position(), 2);
        assert_eq!(err.len(), 1);
        assert_eq!(err.into_inner(), "b");

        assert_eq!(array.len(), 1);
        assert_eq!(array.to_string(), "{a}");
    }

    #[test]
    fn growth_uses_ceiling() {
        let mut array = GrowableArray::with_capacity(2, 0.5);
        array.insert(0, 1).unwrap();
        array.insert(1, 2).unwrap();
        assert_eq!(array.capacity(), 2);

        array.insert(2, 3).unwrap();
        assert_eq!(array.capacity(), 3);
        assert_eq!(array.len(), 3);

        array.insert(3, 4).unwrap();
        // ceil(3 * 1.5) = 5
        assert_eq!(array.capacity(), 5);
        assert_eq!(collect(&array), vec![1, 2, 3, 4]);
    }

    #[test]
    fn growth_preserves_order_on_front_insert() {
        let mut array = GrowableArray::with_capacity(1, 1.0);
        for i in (0..10).rev() {
            array.insert(0, i).unwrap();
        }
        assert_eq!(collect(&array), (0..10).collect::<Vec<_>>());
        assert_eq!(array.capacity(), 16);
    }

    #[test]
    fn remove_shifts_front() {
        let mut array = GrowableArray::with_capacity(4, 0.5);
        for (i, v) in [1, 2, 3, 4].into_iter().enumerate() {
            array.insert(i, v).unwrap();
        }

        assert_eq!(array.remove(1), Some(2));
        assert_eq!(collect(&array), vec![1, 3, 4]);

        assert_eq!(array.remove(2), Some(4));
        assert_eq!(collect(&array), vec![1, 3]);

        assert_eq!(array.remove(0), Some(1));
        assert_eq!(collect(&array), vec![3]);
    }

    #[test]
    fn remove_out_of_range() {
        let mut array = GrowableArray::with_capacity(4, 0.5);
        for i in 0..3 {
            array.insert(i, i).unwrap();
        }

        assert_eq!(array.remove(10), None);
        assert_eq!(array.remove(3), None);
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn remove_from_empty() {
        let mut array: GrowableArray<u32> = GrowableArray::new();
        assert_eq!(array.remove(0), None);
    }

    #[test]
    fn index_of_first_match() {
        let mut array = GrowableArray::with_capacity(4, 0.5);
        for (i, v) in [7, 8, 7, 9].into_iter().enumerate() {
            array.insert(i, v).unwrap();
        }

        assert_eq!(array.index_of(&7), Some(0));
        assert_eq!(array.index_of(&9), Some(3));
        assert_eq!(array.index_of(&1), None);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut array = GrowableArray::with_capacity(2, 0.5);
        for i in 0..5 {
            array.insert(i, i).unwrap();
        }
        let capacity = array.capacity();

        array.clear();
        assert!(array.is_empty());
        assert_eq!(array.to_string(), "{}");
        assert_eq!(array.get(0), None);
        assert_eq!(array.capacity(), capacity);

        array.clear();
        assert!(array.is_empty());
    }

    #[test]
    fn clone_is_deep() {
        let mut array = GrowableArray::with_capacity(3, 0.5);
        array.insert(0, "x".to_string()).unwrap();
        array.insert(1, "y".to_string()).unwrap();

        let mut copy = array.clone();
        assert_eq!(copy.capacity(), 3);
        assert_eq!(copy.to_string(), "{x, y}");

        copy.remove(0);
        copy.insert(1, "z".to_string()).unwrap();

        assert_eq!(array.to_string(), "{x, y}");
        assert_eq!(copy.to_string(), "{y, z}");
    }

    #[test]
    fn clone_from_replaces_contents() {
        let mut source = GrowableArray::with_capacity(5, 1.0);
        source.insert(0, 1).unwrap();

        let mut target = GrowableArray::with_capacity(2, 0.5);
        target.insert(0, 9).unwrap();
        target.insert(1, 8).unwrap();

        target.clone_from(&source);
        assert_eq!(target.capacity(), 5);
        assert_eq!(target.growth_factor(), 1.0);
        assert_eq!(collect(&target), vec![1]);
    }

    #[test]
    fn from_policy_rejects_invalid() {
        assert_eq!(
            GrowableArray::<u8>::from_policy(GrowthPolicy::new(0, 0.0)).unwrap_err(),
            ConfigError::ZeroCapacity
        );
        assert!(GrowableArray::<u8>::from_policy(GrowthPolicy::new(3, 0.0)).is_err());
    }

    #[test]
    #[should_panic(expected = "invalid growth policy")]
    fn with_capacity_panics_on_zero_growth() {
        let _ = GrowableArray::<u8>::with_capacity(4, 0.0);
    }

    #[test]
    fn debug_shows_live_elements() {
        let mut array = GrowableArray::with_capacity(4, 0.5);
        array.insert(0, 1).unwrap();
        let debug = format!("{array:?}");
        assert!(debug.contains("elements: [1]"));
        assert!(debug.contains("capacity: 4"));
    }
}
