//! Constant validators
//!
//! [`Success`] accepts anything, [`Failure`] rejects anything. Mostly useful
//! as neutral elements when composing rule sets programmatically.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Accepts every input, returning it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Success<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> Success<T> {
    /// Creates an always-succeeding validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Success<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Validate for Success<T> {
    type Input = T;
    type Output = T;

    fn validate(&self, input: T) -> Result<T, ValidationError> {
        Ok(input)
    }
}

/// Rejects every input with an `"is invalid."` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> Failure<T> {
    /// Creates an always-failing validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Failure<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> Validate for Failure<T> {
    type Input = T;
    type Output = T;

    fn validate(&self, input: T) -> Result<T, ValidationError> {
        Err(ValidationError::value(&input, "is invalid."))
    }
}

/// Creates an always-succeeding validator.
#[must_use]
pub const fn success<T>() -> Success<T> {
    Success::new()
}

/// Creates an always-failing validator.
#[must_use]
pub const fn failure<T>() -> Failure<T> {
    Failure::new()
}
