//! The list contract shared by every container in the crate.
//!
//! [`Sequence`] covers everything that does not choose where an element
//! goes: size, lookup, search, removal, clearing and rendering. [`List`]
//! adds positional insertion on top. [`SortedList`](crate::SortedList)
//! implements only [`Sequence`], since it decides positions itself.
//!
//! # Positions
//!
//! Positions are zero-based. `get`/`remove` accept `0..len()`, `insert`
//! accepts `0..=len()` where `len()` appends.
//!
//! # Rendering
//!
//! Every sequence implements `Display` as `{e0, e1, ..., en}`:
//!
//! ```
//! use linea_collections::{GrowableArray, List, Sequence};
//!
//! let mut array: GrowableArray<u32> = GrowableArray::new();
//! assert_eq!(array.to_string(), "{}");
//!
//! array.insert(0, 1).unwrap();
//! array.insert(1, 2).unwrap();
//! assert_eq!(array.to_string(), "{1, 2}");
//! ```

use core::fmt;

use crate::{Element, OutOfRange};

/// Read, search and remove operations over a position-indexed sequence.
pub trait Sequence<T: Element>: fmt::Display {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `position`.
    ///
    /// Returns `None` if `position >= len()`.
    fn get(&self, position: usize) -> Option<&T>;

    /// Removes and returns the element at `position`.
    ///
    /// Elements after `position` move one slot toward the front. Returns
    /// `None`, and drops nothing, if `position >= len()`.
    fn remove(&mut self, position: usize) -> Option<T>;

    /// Returns the position of the first element equal to `element`.
    fn index_of(&self, element: &T) -> Option<usize>;

    /// Drops every element, leaving the sequence empty.
    fn clear(&mut self);
}

/// A [`Sequence`] that accepts insertion at any position.
pub trait List<T: Element>: Sequence<T> {
    /// Inserts `element` so that it ends up at `position`.
    ///
    /// Elements at `position` and beyond move one slot toward the end.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] carrying `element` back if
    /// `position > len()`. The sequence is left unchanged.
    fn insert(&mut self, position: usize, element: T) -> Result<(), OutOfRange<T>>;
}

/// Writes `items` as `{a, b, c}`.
pub(crate) fn write_braced<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("{")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("}")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Braced<'a>(&'a [&'a str]);

    impl fmt::Display for Braced<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_braced(f, self.0.iter())
        }
    }

    #[test]
    fn braced_empty() {
        assert_eq!(Braced(&[]).to_string(), "{}");
    }

    #[test]
    fn braced_single() {
        assert_eq!(Braced(&["a"]).to_string(), "{a}");
    }

    #[test]
    fn braced_many() {
        assert_eq!(Braced(&["a", "b", "c"]).to_string(), "{a, b, c}");
    }
}
