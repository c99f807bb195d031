//! Core traits for the validation system
//!
//! This module defines the fundamental trait that all validators implement,
//! and the extension trait that gives every validator its combinator API.

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator takes an input value and either returns a validated (possibly
/// transformed) output value, or fails with a
/// [`ValidationError`](crate::foundation::ValidationError). The output type
/// lets validators refine their input: unwrap an `Option`, trim a string,
/// decode a raw value into a richer representation.
///
/// Validators are value objects. Constructing one performs no validation;
/// only [`validate`](Self::validate) does, and each call depends solely on
/// the argument and the validator's own parameters.
///
/// # Examples
///
/// ```rust
/// use validus::foundation::{Validate, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = String;
///     type Output = String;
///
///     fn validate(&self, input: String) -> Result<String, ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(input)
///         } else {
///             Err(ValidationError::value(
///                 &input,
///                 format!("should contain at least {} characters.", self.min),
///             ))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input;

    /// The type produced on success.
    ///
    /// Identical to `Input` for plain checks; a refinement of it for
    /// transforming validators.
    type Output;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(output)` — the validated (possibly transformed) value
    /// * `Err(error)` — a structured description of the failure
    fn validate(
        &self,
        input: Self::Input,
    ) -> Result<Self::Output, crate::foundation::ValidationError>;

    /// Tests the input without inspecting the output.
    fn is_valid(&self, input: Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type, giving a fluent
/// API for composing validators.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = not_nil().and_then(trim()).and_then(min_length(1));
/// assert_eq!(validator.validate(Some(" foo ".to_string())).unwrap(), "foo");
/// assert!(validator.validate(None).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Chains another validator after this one.
    ///
    /// This validator's output feeds the next validator's input. Fails with
    /// this validator's error if it fails; the next validator is not
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::prelude::*;
    ///
    /// let validator = not_nil::<i32>().and_then(min(0));
    /// assert_eq!(validator.validate(Some(7)).unwrap(), 7);
    /// assert!(validator.validate(Some(-1)).is_err());
    /// assert!(validator.validate(None).is_err());
    /// ```
    fn and_then<V>(self, next: V) -> Chain<Self, V>
    where
        V: Validate<Input = Self::Output>,
    {
        Chain::new(self, next)
    }

    /// Combines two validators with logical AND.
    ///
    /// Both validators run against the same input; the second is evaluated
    /// even when the first fails, so every failure is collected. Success
    /// returns the right validator's output. A single failure propagates
    /// unwrapped; two failures aggregate into an `And` compound.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
        Self::Input: Clone,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// Tries this validator first and short-circuits on success. On failure
    /// the other validator runs against the same original input, not any
    /// partial result. When both fail, the compound error's description is
    /// the right validator's failure.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input, Output = Self::Output>,
        Self::Input: Clone,
    {
        Or::new(self, other)
    }

    /// Inverts this validator with logical NOT.
    ///
    /// Succeeds with the original input iff this validator fails; fails
    /// with an `"is invalid."` error carrying the input iff it succeeds.
    fn not(self) -> Not<Self>
    where
        Self::Input: Clone + std::fmt::Debug,
    {
        Not::new(self)
    }

    /// Applies an infallible transform to the success output.
    ///
    /// Failure behavior is untouched; errors pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::prelude::*;
    ///
    /// let validator = not_nil::<String>().map(|s| s.chars().count());
    /// assert_eq!(validator.validate(Some("foo".to_string())).unwrap(), 3);
    /// ```
    fn map<F, U>(self, transform: F) -> Map<Self, F, U>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, transform)
    }

    /// Lifts this validator over `Option`, passing `None` through untouched.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Erases this validator's concrete type.
    fn boxed(self) -> Boxed<Self::Input, Self::Output>
    where
        Self: 'static,
    {
        Boxed::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================
// Import the actual combinator implementations instead of duplicating them

pub use crate::combinators::and::And;
pub use crate::combinators::boxed::Boxed;
pub use crate::combinators::chain::Chain;
pub use crate::combinators::map::Map;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================
