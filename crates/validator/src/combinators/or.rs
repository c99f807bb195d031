//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Or`] combinator which combines two validators
//! with logical OR semantics - at least one validator must pass for the
//! combined validator to succeed.

use crate::foundation::{CompoundMode, Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// Tries the left validator first and short-circuits on its success. On
/// failure the right validator runs against the *same original input*, not
/// any partial result. If both fail, the error is
/// `Compound(Or, [left, right])`, which renders as the right validator's
/// failure: the last alternative gives the primary message, however many
/// alternatives are chained.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type; must accept the same input
///   and produce the same output as `L`
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = equal(5).or(equal(10));
///
/// assert_eq!(validator.validate(5).unwrap(), 5);
/// assert_eq!(validator.validate(10).unwrap(), 10);
///
/// let error = validator.validate(3).unwrap_err();
/// assert_eq!(error.to_string(), "3 should be equal to 10.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input, Output = L::Output>,
    L::Input: Clone,
{
    type Input = L::Input;
    type Output = L::Output;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, ValidationError> {
        match self.left.validate(input.clone()) {
            Ok(output) => Ok(output),
            Err(left_error) => match self.right.validate(input) {
                Ok(output) => Ok(output),
                Err(right_error) => Err(ValidationError::Compound {
                    mode: CompoundMode::Or,
                    errors: vec![left_error, right_error],
                }),
            },
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input, Output = L::Output>,
    L::Input: Clone,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use std::cell::Cell;

    struct OnlyValue {
        accept: i32,
        tag: &'static str,
    }

    impl Validate for OnlyValue {
        type Input = i32;
        type Output = &'static str;
        fn validate(&self, input: i32) -> Result<&'static str, ValidationError> {
            if input == self.accept {
                Ok(self.tag)
            } else {
                Err(ValidationError::value(&input, format!("fails {}.", self.tag)))
            }
        }
    }

    fn v1() -> OnlyValue {
        OnlyValue { accept: 1, tag: "v1" }
    }

    fn v2() -> OnlyValue {
        OnlyValue { accept: 2, tag: "v2" }
    }

    #[test]
    fn or_returns_left_output_on_left_success() {
        let validator = v1().or(v2());
        assert_eq!(validator.validate(1).unwrap(), "v1");
    }

    #[test]
    fn or_tries_right_on_original_input() {
        let validator = v1().or(v2());
        assert_eq!(validator.validate(2).unwrap(), "v2");
    }

    #[test]
    fn or_description_is_the_last_branch_failure() {
        let validator = v1().or(v2());
        let error = validator.validate(3).unwrap_err();
        assert_eq!(error.to_string(), "3 fails v2.");
        match error {
            ValidationError::Compound { mode, errors } => {
                assert_eq!(mode, CompoundMode::Or);
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected compound, got {other:?}"),
        }
    }

    #[test]
    fn or_chain_degrades_to_last_alternative() {
        let v3 = OnlyValue { accept: 3, tag: "v3" };
        let validator = v1().or(v2()).or(v3);
        let error = validator.validate(4).unwrap_err();
        assert_eq!(error.to_string(), "4 fails v3.");
    }

    #[test]
    fn or_short_circuits_on_left_success() {
        struct Spy<'a> {
            calls: &'a Cell<u32>,
        }

        impl Validate for Spy<'_> {
            type Input = i32;
            type Output = &'static str;
            fn validate(&self, _input: i32) -> Result<&'static str, ValidationError> {
                self.calls.set(self.calls.get() + 1);
                Ok("spy")
            }
        }

        let calls = Cell::new(0);
        let validator = v1().or(Spy { calls: &calls });
        assert_eq!(validator.validate(1).unwrap(), "v1");
        assert_eq!(calls.get(), 0);
    }
}
