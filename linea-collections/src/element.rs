//! Capabilities a value needs to live in a container.
//!
//! Containers only ever touch their elements through these traits: equality
//! for [`index_of`](crate::Sequence::index_of), rendering for `Display`,
//! cloning for deep copies, and (sorted list only) a total order.
//!
//! Both traits are blanket-implemented, so any type with the right standard
//! traits qualifies:
//!
//! ```
//! use linea_collections::{Element, OrderedElement};
//!
//! fn takes_element<T: Element>(_: &T) {}
//! fn takes_ordered<T: OrderedElement>(_: &T) {}
//!
//! takes_element(&3.5f64); // PartialEq + Display + Clone
//! takes_ordered(&String::from("key")); // ... + Ord
//! ```

use core::fmt::Display;

/// A value a [`List`](crate::List) can hold.
///
/// | Capability | Provided by |
/// |------------|-------------|
/// | equality   | [`PartialEq`] |
/// | rendering  | [`Display`] |
/// | deep copy  | [`Clone`] |
pub trait Element: PartialEq + Display + Clone {}

impl<T: PartialEq + Display + Clone> Element for T {}

/// An [`Element`] with a three-way comparison.
///
/// Required by [`SortedList`](crate::SortedList) only.
pub trait OrderedElement: Element + Ord {}

impl<T: Element + Ord> OrderedElement for T {}
