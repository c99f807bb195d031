//! BOXED combinator - type erasure
//!
//! [`Boxed`] hides a validator's concrete type behind a boxed closure, so
//! validators with different shapes but the same input/output contract can
//! live in the same collection, struct field, or function signature.

use crate::foundation::{Validate, ValidationError};

/// A type-erased validator from `I` to `O`.
///
/// Built either from any existing validator or directly from a closure.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// // From an existing validator:
/// let validator: Boxed<Option<i32>, i32> = not_nil().and_then(min(0)).boxed();
/// assert_eq!(validator.validate(Some(3)).unwrap(), 3);
///
/// // From a closure:
/// let validator = Boxed::from_fn(|value: i32| {
///     if value == 10 {
///         Err(ValidationError::value(&value, "should not be 10."))
///     } else {
///         Ok(value)
///     }
/// });
/// assert_eq!(validator.validate(1).unwrap(), 1);
/// assert_eq!(validator.validate(10).unwrap_err().to_string(), "10 should not be 10.");
/// ```
pub struct Boxed<I, O> {
    run: Box<dyn Fn(I) -> Result<O, ValidationError>>,
}

impl<I, O> Boxed<I, O> {
    /// Erases the concrete type of `validator`.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validate<Input = I, Output = O> + 'static,
    {
        Self {
            run: Box::new(move |input| validator.validate(input)),
        }
    }

    /// Creates a validator whose `validate` forwards to `run`.
    pub fn from_fn<F>(run: F) -> Self
    where
        F: Fn(I) -> Result<O, ValidationError> + 'static,
    {
        Self { run: Box::new(run) }
    }
}

impl<I, O> Validate for Boxed<I, O> {
    type Input = I;
    type Output = O;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, ValidationError> {
        (self.run)(input)
    }
}

impl<I, O> std::fmt::Debug for Boxed<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Boxed").field("run", &"<function>").finish()
    }
}
