//! Ordering and range validators

use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::RangeBounds;

use crate::foundation::{Validate, ValidationError};

crate::rule! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq, Eq)]
    pub Min<T: PartialOrd + Debug> { minimum: T } for T;
    test(self, value) { value >= self.minimum }
    message(self, value) { format!("should be greater than or equal to {:?}.", self.minimum) }
    fn min(minimum: T);
}

crate::rule! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq)]
    pub Max<T: PartialOrd + Debug> { maximum: T } for T;
    test(self, value) { value <= self.maximum }
    message(self, value) { format!("should be less than or equal to {:?}.", self.maximum) }
    fn max(maximum: T);
}

// ============================================================================
// WITHIN
// ============================================================================

/// Validates that a value lies within a range.
///
/// Accepts any range shape (`2..4`, `2..=4`, `..10`): bounds are checked via
/// [`RangeBounds::contains`]. Two generics, so this one is written out
/// instead of going through `rule!`.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = within(2..4);
/// assert_eq!(validator.validate(3).unwrap(), 3);
///
/// let error = validator.validate(4).unwrap_err();
/// assert_eq!(error.to_string(), "4 should be in 2..4.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Within<T, R> {
    /// The accepted range.
    pub range: R,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, R> Within<T, R> {
    /// Creates a range validator.
    #[must_use]
    pub const fn new(range: R) -> Self {
        Self {
            range,
            _marker: PhantomData,
        }
    }
}

impl<T, R> Validate for Within<T, R>
where
    R: RangeBounds<T> + Debug,
    T: PartialOrd + Debug,
{
    type Input = T;
    type Output = T;

    fn validate(&self, input: T) -> Result<T, ValidationError> {
        if self.range.contains(&input) {
            Ok(input)
        } else {
            Err(ValidationError::value(
                &input,
                format!("should be in {:?}.", self.range),
            ))
        }
    }
}

/// Creates a range validator.
#[must_use]
pub const fn within<T, R>(range: R) -> Within<T, R> {
    Within::new(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_accepts_the_boundary() {
        let validator = min(2);
        assert_eq!(validator.validate(2).unwrap(), 2);
        assert_eq!(validator.validate(3).unwrap(), 3);
    }

    #[test]
    fn min_rejects_below() {
        let validator = min(2);
        let error = validator.validate(1).unwrap_err();
        assert_eq!(error.to_string(), "1 should be greater than or equal to 2.");
    }

    #[test]
    fn max_accepts_the_boundary() {
        let validator = max(2);
        assert_eq!(validator.validate(1).unwrap(), 1);
        assert_eq!(validator.validate(2).unwrap(), 2);
    }

    #[test]
    fn max_rejects_above() {
        let validator = max(2);
        let error = validator.validate(3).unwrap_err();
        assert_eq!(error.to_string(), "3 should be less than or equal to 2.");
    }

    #[test]
    fn within_checks_half_open_ranges() {
        let validator = within(2..4);
        assert_eq!(validator.validate(2).unwrap(), 2);
        assert_eq!(validator.validate(3).unwrap(), 3);
        assert_eq!(
            validator.validate(1).unwrap_err().to_string(),
            "1 should be in 2..4."
        );
        assert_eq!(
            validator.validate(4).unwrap_err().to_string(),
            "4 should be in 2..4."
        );
    }

    #[test]
    fn within_checks_inclusive_ranges() {
        let validator = within(2..=4);
        assert_eq!(validator.validate(4).unwrap(), 4);
        assert!(validator.validate(5).is_err());
    }

    #[test]
    fn min_works_for_floats() {
        let validator = min(0.0_f64);
        assert!(validator.validate(0.5).is_ok());
        assert!(validator.validate(-0.5).is_err());
    }
}
