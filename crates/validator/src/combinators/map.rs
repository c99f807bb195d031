//! MAP combinator - transforms a validator's success output
//!
//! [`Map`] applies a plain, non-failing transform to the inner validator's
//! output, producing a validator with the same failure behavior and a new
//! success type. Errors pass through untouched.

use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Applies an infallible transform to a validator's success output.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
/// * `F` - The transform function type
/// * `U` - The transformed output type
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = not_nil::<String>().map(|s| s.chars().count());
/// assert_eq!(validator.validate(Some("foo".to_string())).unwrap(), 3);
/// assert!(validator.validate(None).is_err());
/// ```
pub struct Map<V, F, U> {
    inner: V,
    transform: F,
    _output: PhantomData<fn() -> U>,
}

impl<V, F, U> Map<V, F, U> {
    /// Creates a new `Map` combinator.
    pub fn new(inner: V, transform: F) -> Self {
        Self {
            inner,
            transform,
            _output: PhantomData,
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

// Clone impl - manual because PhantomData must not force U: Clone
impl<V, F, U> Clone for Map<V, F, U>
where
    V: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            transform: self.transform.clone(),
            _output: PhantomData,
        }
    }
}

impl<V, F, U> std::fmt::Debug for Map<V, F, U>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .field("transform", &"<function>")
            .finish()
    }
}

impl<V, F, U> Validate for Map<V, F, U>
where
    V: Validate,
    F: Fn(V::Output) -> U,
{
    type Input = V::Input;
    type Output = U;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, ValidationError> {
        self.inner.validate(input).map(&self.transform)
    }
}

/// Creates a `Map` combinator from a validator and a transform.
pub fn map<V, F, U>(validator: V, transform: F) -> Map<V, F, U>
where
    V: Validate,
    F: Fn(V::Output) -> U,
{
    Map::new(validator, transform)
}
