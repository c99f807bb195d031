//! CHAIN combinator - sequential composition of validators
//!
//! This module provides the [`Chain`] combinator which feeds the first
//! validator's output into the second validator. The second validator never
//! runs when the first fails.
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! let validator = not_nil().and_then(min_length(1));
//! assert_eq!(validator.validate(Some("foo".to_string())).unwrap(), "foo");
//! assert!(validator.validate(None).is_err());
//! assert!(validator.validate(Some(String::new())).is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Feeds the left validator's output into the right validator.
///
/// Fails with the left validator's error if it fails (short-circuit);
/// otherwise returns the right validator's result or error.
///
/// # Type Parameters
///
/// * `L` - The first validator
/// * `R` - The second validator; its input is `L`'s output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain<L, R> {
    /// The first validator to apply.
    pub(crate) left: L,
    /// The validator applied to the first one's output.
    pub(crate) right: R,
}

impl<L, R> Chain<L, R> {
    /// Creates a new `Chain` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Chain<L, R>
where
    L: Validate,
    R: Validate<Input = L::Output>,
{
    type Input = L::Input;
    type Output = R::Output;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, ValidationError> {
        self.right.validate(self.left.validate(input)?)
    }
}

/// Creates a `Chain` combinator from two validators.
///
/// # Examples
///
/// ```rust
/// use validus::combinators::chain;
/// use validus::validators::{not_nil, min};
/// use validus::foundation::Validate;
///
/// let validator = chain(not_nil::<i32>(), min(0));
/// assert_eq!(validator.validate(Some(3)).unwrap(), 3);
/// ```
pub fn chain<L, R>(left: L, right: R) -> Chain<L, R>
where
    L: Validate,
    R: Validate<Input = L::Output>,
{
    Chain::new(left, right)
}
