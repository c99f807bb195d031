//! NOT combinator - logical negation of validators
//!
//! This module provides the [`Not`] combinator which inverts the result
//! of a validator - it succeeds when the inner validator fails and vice
//! versa.

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// - If the inner validator fails, `Not` succeeds, returning the original
///   input unchanged.
/// - If the inner validator succeeds, `Not` fails with an `"is invalid."`
///   error carrying the original input as the offending value.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = equal(1).not();
/// assert_eq!(validator.validate(2).unwrap(), 2);
///
/// let error = validator.validate(1).unwrap_err();
/// assert_eq!(error.to_string(), "1 is invalid.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    /// The inner validator to invert.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
    V::Input: Clone + std::fmt::Debug,
{
    type Input = V::Input;
    type Output = V::Input;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, ValidationError> {
        match self.inner.validate(input.clone()) {
            Ok(_) => Err(ValidationError::value(&input, "is invalid.")),
            Err(_) => Ok(input),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V>
where
    V: Validate,
    V::Input: Clone + std::fmt::Debug,
{
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::equal;

    #[test]
    fn not_succeeds_with_input_when_inner_fails() {
        let validator = equal(1).not();
        assert_eq!(validator.validate(2).unwrap(), 2);
    }

    #[test]
    fn not_fails_when_inner_succeeds() {
        let validator = equal(1).not();
        let error = validator.validate(1).unwrap_err();
        assert_eq!(error.to_string(), "1 is invalid.");
    }

    #[test]
    fn double_negation_agrees_with_inner() {
        let validator = equal(1).not().not();
        assert!(validator.validate(1).is_ok());
        assert!(validator.validate(2).is_err());
    }

    #[test]
    fn not_free_function() {
        let validator = not(equal("a".to_string()));
        assert_eq!(validator.validate("b".to_string()).unwrap(), "b");
    }
}
