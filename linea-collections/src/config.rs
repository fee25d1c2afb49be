//! Sizing policy for [`GrowableArray`](crate::GrowableArray).

use crate::ConfigError;

/// Initial capacity and growth factor of a growable array.
///
/// When an insertion finds the store full, the new capacity is
/// `ceil(capacity * (1 + growth_factor))`.
///
/// # Example
///
/// ```
/// use linea_collections::GrowthPolicy;
///
/// let policy = GrowthPolicy::new(2, 0.5);
/// assert!(policy.validate().is_ok());
/// assert_eq!(policy.next_capacity(2), 3);
/// assert_eq!(policy.next_capacity(3), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    /// Slots allocated at construction.
    pub initial_capacity: usize,
    /// Fractional increase applied on each resize (`0.5` grows by half).
    pub growth_factor: f64,
}

impl GrowthPolicy {
    /// Default number of slots allocated up front.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Default fractional increase per resize.
    pub const DEFAULT_GROWTH_FACTOR: f64 = 0.5;

    /// Creates a policy. Call [`validate`](Self::validate) before use, or
    /// hand it to [`GrowableArray::from_policy`](crate::GrowableArray::from_policy).
    pub const fn new(initial_capacity: usize, growth_factor: f64) -> Self {
        Self {
            initial_capacity,
            growth_factor,
        }
    }

    /// Checks that the policy makes progress on every resize.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroCapacity`] if `initial_capacity` is 0
    /// - [`ConfigError::InvalidGrowthFactor`] if `growth_factor` is not a
    ///   positive finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.growth_factor.is_finite() || self.growth_factor <= 0.0 {
            return Err(ConfigError::InvalidGrowthFactor(self.growth_factor));
        }
        Ok(())
    }

    /// Capacity after one resize from `current`.
    ///
    /// Always at least `current + 1`, even when the factor is too small to
    /// move the product past `current`. Products within a few ulps of a
    /// whole number count as that number, so `100 * 1.1` is 110, not 111.
    #[inline]
    pub fn next_capacity(&self, current: usize) -> usize {
        let exact = current as f64 * (1.0 + self.growth_factor);
        let nearest = exact.round();
        let grown = if (exact - nearest).abs() <= exact * 4.0 * f64::EPSILON {
            nearest
        } else {
            exact.ceil()
        };
        (grown as usize).max(current + 1)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY, Self::DEFAULT_GROWTH_FACTOR)
    }
}
