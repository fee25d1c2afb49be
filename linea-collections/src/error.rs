//! Error types for container operations.

/// Insertion position past the end of the sequence.
///
/// The rejected element travels back inside the error so the caller keeps
/// ownership of it. The container is untouched.
///
/// # Example
///
/// ```
/// use linea_collections::{LinkedList, List};
///
/// let mut list: LinkedList<String> = LinkedList::new();
/// let err = list.insert(3, "late".to_string()).unwrap_err();
///
/// assert_eq!(err.position(), 3);
/// assert_eq!(err.len(), 0);
/// assert_eq!(err.into_inner(), "late");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("position {position} is out of range for a sequence of length {len}")]
pub struct OutOfRange<T> {
    element: T,
    position: usize,
    len: usize,
}

impl<T> OutOfRange<T> {
    pub(crate) fn new(element: T, position: usize, len: usize) -> Self {
        Self {
            element,
            position,
            len,
        }
    }

    /// The position that was asked for.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the sequence at the time of the call.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the element that could not be inserted.
    pub fn into_inner(self) -> T {
        self.element
    }
}

/// Rejected [`GrowthPolicy`](crate::GrowthPolicy).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A zero-capacity store can never grow.
    #[error("initial capacity must be greater than zero")]
    ZeroCapacity,

    /// Growth factor is zero, negative, NaN or infinite.
    #[error("growth factor must be positive and finite, got {0}")]
    InvalidGrowthFactor(f64),
}
