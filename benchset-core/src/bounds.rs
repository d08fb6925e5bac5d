//! Inclusive generation range for sequence elements.

use std::fmt;

use crate::{element::Element, error::SequenceError};

/// An inclusive `[lower, upper]` range validated at construction.
///
/// A `Bounds` value always satisfies `lower <= upper`; an inverted range is
/// rejected by [`Bounds::new`] rather than silently corrected.
///
/// # Examples
/// ```
/// use benchset_core::Bounds;
///
/// let bounds = Bounds::new(0_i64, 10).expect("range is valid");
/// assert!(bounds.contains(10));
/// assert!(!bounds.contains(11));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds<T: Element> {
    lower: T,
    upper: T,
}

impl<T: Element> Bounds<T> {
    /// Creates a range from inclusive lower and upper limits.
    ///
    /// # Errors
    /// Returns [`SequenceError::InvalidBounds`] when `upper < lower`.
    pub fn new(lower: T, upper: T) -> Result<Self, SequenceError> {
        if upper < lower {
            return Err(SequenceError::InvalidBounds {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        Ok(Self { lower, upper })
    }

    /// Returns the inclusive lower limit.
    #[must_use]
    pub const fn lower(&self) -> T {
        self.lower
    }

    /// Returns the inclusive upper limit.
    #[must_use]
    pub const fn upper(&self) -> T {
        self.upper
    }

    /// Reports whether `value` falls within the range.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl<T: Element> Default for Bounds<T> {
    /// The element type's default range: `0` to `1000` clamped to the type
    /// maximum.
    fn default() -> Self {
        Self {
            lower: T::ZERO,
            upper: T::DEFAULT_UPPER,
        }
    }
}

impl<T: Element> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::Bounds;
    use crate::error::SequenceError;

    #[test]
    fn rejects_inverted_range() {
        let err = Bounds::new(10_i32, 5).expect_err("inverted range must fail");
        assert!(matches!(err, SequenceError::InvalidBounds { .. }));
    }

    #[test]
    fn accepts_degenerate_range() {
        let bounds = Bounds::new(5_i32, 5).expect("single-value range is valid");
        assert!(bounds.contains(5));
        assert!(!bounds.contains(4));
    }

    #[test]
    fn default_matches_element_contract() {
        let bounds = Bounds::<u8>::default();
        assert_eq!(bounds.lower(), 0);
        assert_eq!(bounds.upper(), 255);
    }

    #[test]
    fn display_shows_inclusive_limits() {
        let bounds = Bounds::new(-3_i64, 7).expect("range is valid");
        assert_eq!(bounds.to_string(), "[-3, 7]");
    }
}
