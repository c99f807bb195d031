//! Collection validators

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Validates that a collection holds at least one element.
///
/// Works for any type whose reference is iterable (`Vec`, arrays, maps,
/// sets), checked without consuming the collection.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = not_empty_collection::<Vec<i32>>();
/// assert_eq!(validator.validate(vec![1, 2, 3]).unwrap(), vec![1, 2, 3]);
///
/// let error = validator.validate(vec![]).unwrap_err();
/// assert_eq!(error.to_string(), "[] should not be empty.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotEmptyCollection<C> {
    _marker: PhantomData<fn(C) -> C>,
}

impl<C> NotEmptyCollection<C> {
    /// Creates a non-empty-collection validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<C> Default for NotEmptyCollection<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Validate for NotEmptyCollection<C>
where
    C: fmt::Debug,
    for<'a> &'a C: IntoIterator,
{
    type Input = C;
    type Output = C;

    fn validate(&self, input: C) -> Result<C, ValidationError> {
        if (&input).into_iter().next().is_some() {
            Ok(input)
        } else {
            Err(ValidationError::value(&input, "should not be empty."))
        }
    }
}

/// Creates a non-empty-collection validator.
#[must_use]
pub const fn not_empty_collection<C>() -> NotEmptyCollection<C> {
    NotEmptyCollection::new()
}
