//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which combines two validators
//! with logical AND semantics - both validators must pass for the combined
//! validator to succeed.
//!
//! Unlike [`Chain`](crate::combinators::Chain), `And` runs both validators
//! against the *same* input and never short-circuits: when both fail, both
//! failures are collected into a compound error.

use crate::foundation::{CompoundMode, Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators run against the same input. Success returns the right
/// validator's output (by convention the right-hand type is the declared
/// output of the combinator). Exactly one failure propagates unwrapped;
/// a single error is never wrapped in a one-element compound. Two failures
/// aggregate into `Compound(And, [left, right])`.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = matches("foo").unwrap().and(matches("bar").unwrap());
///
/// assert!(validator.validate("foobar".to_string()).is_ok());
/// // Both branches are evaluated, so both causes are reported:
/// let error = validator.validate("qux".to_string()).unwrap_err();
/// assert_eq!(error.to_string(), "\"qux\" is invalid. \"qux\" is invalid.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
    L::Input: Clone,
{
    type Input = L::Input;
    type Output = R::Output;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, ValidationError> {
        // Deliberately no short-circuit: an early failure must not suppress
        // the other branch's report.
        let left = self.left.validate(input.clone());
        let right = self.right.validate(input);
        match (left, right) {
            (Ok(_), Ok(output)) => Ok(output),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
            (Err(left_error), Err(right_error)) => Err(ValidationError::Compound {
                mode: CompoundMode::And,
                errors: vec![left_error, right_error],
            }),
        }
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
    L::Input: Clone,
{
    And::new(left, right)
}
