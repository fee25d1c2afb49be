//! Node link indices with a reserved "no neighbor" value.
//!
//! Linked nodes store their `prev`/`next` neighbors as plain integers into
//! the node arena. The maximum value of the integer type stands in for
//! "absent", which keeps a node as small as the data plus two indices.

/// An arena index that reserves one value as the absent link.
///
/// # Example
///
/// ```
/// use linea_collections::Index;
///
/// let link: u32 = 7;
/// assert!(link.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::from_usize(7).as_usize(), 7);
/// assert_eq!(u16::try_from_usize(70_000), None);
/// ```
pub trait Index: Copy + Eq + core::fmt::Debug {
    /// The absent link. Never handed out as a slot in the arena.
    const NONE: Self;

    /// Returns `true` if this is the absent link.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this points at a node.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Converts to the arena slot number.
    fn as_usize(self) -> usize;

    /// Converts from an arena slot number without checking the range.
    ///
    /// The slot must be smaller than `NONE`. Prefer
    /// [`try_from_usize`](Self::try_from_usize) for slots handed out by an
    /// arena that may outgrow the type.
    fn from_usize(slot: usize) -> Self;

    /// Converts from an arena slot number.
    ///
    /// Returns `None` if `slot` would collide with `NONE` or not fit at all.
    #[inline]
    fn try_from_usize(slot: usize) -> Option<Self> {
        if slot < Self::NONE.as_usize() {
            Some(Self::from_usize(slot))
        } else {
            None
        }
    }
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(slot: usize) -> Self {
                    slot as Self
                }
            }
        )*
    };
}

impl_index_for_unsigned!(u16, u32, u64, usize);
