//! Interchangeable sequence containers behind one list contract.
//!
//! This crate provides two list implementations with the same positional
//! API, plus a sorted linked list:
//!
//! ```text
//! Sequence<T>           - len, get, remove, index_of, clear, Display
//!     │
//!     ├── List<T>       - insert at any position
//!     │     ├── GrowableArray<T>   contiguous slots, grows by a factor
//!     │     └── LinkedList<T>      arena-held doubly-linked nodes
//!     │
//!     └── SortedList<T>  - insert finds the position itself
//! ```
//!
//! # Ownership
//!
//! A container owns every element it holds. `insert` moves the element in,
//! `remove` moves it back out, `get` lends a reference tied to the
//! container. A rejected `insert` hands the element back inside
//! [`OutOfRange`], so nothing is ever lost or dropped on the error path.
//!
//! # Quick Start
//!
//! ```
//! use linea_collections::{GrowableArray, LinkedList, List, Sequence};
//!
//! fn fill<L: List<u32>>(list: &mut L) {
//!     for (position, value) in [30, 10, 20].into_iter().enumerate() {
//!         list.insert(position, value).unwrap();
//!     }
//! }
//!
//! let mut array = GrowableArray::with_capacity(2, 0.5);
//! let mut linked: LinkedList<u32> = LinkedList::new();
//! fill(&mut array);
//! fill(&mut linked);
//!
//! assert_eq!(array.to_string(), "{30, 10, 20}");
//! assert_eq!(linked.to_string(), array.to_string());
//! assert_eq!(array.capacity(), 3);
//! ```
//!
//! # Sorted Insertion
//!
//! ```
//! use linea_collections::{Sequence, SortedList};
//!
//! let mut list: SortedList<u32> = SortedList::new();
//! for key in [5, 1, 3] {
//!     list.insert(key);
//! }
//! assert_eq!(list.to_string(), "{1, 3, 5}");
//! ```
//!
//! # Element Capability
//!
//! Elements need equality, `Display` and `Clone` ([`Element`]). The sorted
//! list also needs `Ord` ([`OrderedElement`]). Both are blanket-implemented.
//!
//! # Logging
//!
//! Containers emit `tracing` events (array relocation at `debug`, clears
//! and rejected inserts at `trace`). No subscriber is installed.

#![warn(missing_docs)]

pub mod array;
pub mod config;
pub mod element;
pub mod error;
pub mod index;
pub mod linked;
pub mod sequence;
pub mod sorted;

pub use array::GrowableArray;
pub use config::GrowthPolicy;
pub use element::{Element, OrderedElement};
pub use error::{ConfigError, OutOfRange};
pub use index::Index;
pub use linked::LinkedList;
pub use sequence::{List, Sequence};
pub use sorted::SortedList;
