//! Presence validators
//!
//! [`NotNil`] unwraps a present value and is the foundation most rule chains
//! start from: the rest of the catalog is defined on non-optional inputs and
//! relies on being composed after a presence check (or lifted with
//! [`optional`](crate::combinators::optional) for null-tolerant variants).

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Validates that a value is present, unwrapping it.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = not_nil::<i32>();
/// assert_eq!(validator.validate(Some(1)).unwrap(), 1);
///
/// let error = validator.validate(None).unwrap_err();
/// assert_eq!(error.to_string(), "None should not be nil.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotNil<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> NotNil<T> {
    /// Creates a presence validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for NotNil<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> Validate for NotNil<T> {
    type Input = Option<T>;
    type Output = T;

    fn validate(&self, input: Option<T>) -> Result<T, ValidationError> {
        input.ok_or_else(|| ValidationError::value(&None::<T>, "should not be nil."))
    }
}

/// Validates that a value is absent.
///
/// The output stays optional so `nil()` composes where an `Option` flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nil<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> Nil<T> {
    /// Creates an absence validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Nil<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> Validate for Nil<T> {
    type Input = Option<T>;
    type Output = Option<T>;

    fn validate(&self, input: Option<T>) -> Result<Option<T>, ValidationError> {
        match input {
            None => Ok(None),
            Some(value) => Err(ValidationError::value(&Some(value), "should be nil.")),
        }
    }
}

/// Creates a presence validator.
#[must_use]
pub const fn not_nil<T>() -> NotNil<T> {
    NotNil::new()
}

/// Creates an absence validator.
#[must_use]
pub const fn nil<T>() -> Nil<T> {
    Nil::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_nil_unwraps_present_values() {
        let validator = not_nil::<i32>();
        assert_eq!(validator.validate(Some(1)).unwrap(), 1);
    }

    #[test]
    fn not_nil_rejects_absent_values() {
        let validator = not_nil::<i32>();
        let error = validator.validate(None).unwrap_err();
        assert_eq!(error.to_string(), "None should not be nil.");
    }

    #[test]
    fn nil_accepts_absent_values() {
        let validator = nil::<i32>();
        assert_eq!(validator.validate(None).unwrap(), None);
    }

    #[test]
    fn nil_rejects_present_values() {
        let validator = nil::<i32>();
        let error = validator.validate(Some(3)).unwrap_err();
        assert_eq!(error.to_string(), "Some(3) should be nil.");
    }
}
