//! Plan-based error aggregation
//!
//! A chain of `and`-composed rules stops reporting at the level of a single
//! validation, and a sequence of early-returning checks stops at the first
//! failure. [`ValidationPlan`] runs *independent* validation steps to
//! completion instead: every step executes, every failure is captured, and
//! the resolution is a single aggregated error. Because a failed step does
//! not prevent later steps from running, side effects such as writing a
//! trimmed value back into the model still happen.
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! let name: Option<String> = None;
//! let age: Option<i32> = Some(-1);
//!
//! let result = ValidationPlan::new()
//!     .add(|| not_nil().validate(name).map(drop))
//!     .add(|| not_nil().and_then(min(0)).validate(age).map(drop))
//!     .validate();
//!
//! let error = result.unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "None should not be nil. -1 should be greater than or equal to 0."
//! );
//! ```

use smallvec::SmallVec;

use crate::foundation::{CompoundMode, ValidationError};

/// A short-lived aggregator for independent validation steps.
///
/// Lifecycle: create, [`add`](Self::add) each step, resolve once with
/// [`validate`](Self::validate), drop. Steps run immediately, on the calling
/// thread, in the order they are added. A plan is not meant to be shared or
/// reused; it lives inside one model-validation call.
///
/// Steps only ever fail with [`ValidationError`]; the signature makes other
/// error types unrepresentable. A step that panics is a programming fault
/// and propagates; the plan does not catch it.
#[derive(Debug, Default)]
pub struct ValidationPlan {
    errors: SmallVec<[ValidationError; 4]>,
}

impl ValidationPlan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a validation step immediately, capturing its failure if any.
    ///
    /// Returns the plan for chaining. Later steps run regardless of earlier
    /// failures.
    #[must_use = "a plan reports nothing until validate() is called"]
    pub fn add(mut self, step: impl FnOnce() -> Result<(), ValidationError>) -> Self {
        if let Err(error) = step() {
            self.errors.push(error);
        }
        self
    }

    /// Resolves the plan.
    ///
    /// Zero captured errors mean success. A single error is rethrown as-is,
    /// never wrapped. Several errors aggregate into an `And` compound in
    /// append order.
    pub fn validate(self) -> Result<(), ValidationError> {
        match ValidationError::compound(CompoundMode::And, self.errors.into_vec()) {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }
}
