//! Raw-value decoding
//!
//! [`Decode`] maps a primitive value into a richer representation through
//! [`TryFrom`], failing when no mapping exists. This is the transforming
//! counterpart of a plain check: the chain continues with the decoded type.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Decodes a raw value into `U` via `U: TryFrom<T>`.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// enum Level {
///     Zero,
///     One,
/// }
///
/// impl TryFrom<i32> for Level {
///     type Error = ();
///     fn try_from(raw: i32) -> Result<Self, ()> {
///         match raw {
///             0 => Ok(Level::Zero),
///             1 => Ok(Level::One),
///             _ => Err(()),
///         }
///     }
/// }
///
/// let validator = decode::<i32, Level>();
/// assert_eq!(validator.validate(1).unwrap(), Level::One);
///
/// let error = validator.validate(5).unwrap_err();
/// assert_eq!(error.to_string(), "5 is not a valid Level.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decode<T, U> {
    _marker: PhantomData<fn(T) -> U>,
}

impl<T, U> Decode<T, U> {
    /// Creates a decoding validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T, U> Default for Decode<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> Validate for Decode<T, U>
where
    T: fmt::Debug,
    U: TryFrom<T>,
{
    type Input = T;
    type Output = U;

    fn validate(&self, input: T) -> Result<U, ValidationError> {
        // Repr captured up front: try_from consumes the value.
        let repr = format!("{input:?}");
        U::try_from(input).map_err(|_| ValidationError::Value {
            value: Some(repr),
            message: format!("is not a valid {}.", short_type_name::<U>()),
        })
    }
}

/// Creates a decoding validator.
#[must_use]
pub const fn decode<T, U>() -> Decode<T, U> {
    Decode::new()
}

fn short_type_name<U>() -> &'static str {
    let full = type_name::<U>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Digit {
        Zero,
        One,
        Two,
    }

    impl TryFrom<i32> for Digit {
        type Error = ();

        fn try_from(raw: i32) -> Result<Self, ()> {
            match raw {
                0 => Ok(Self::Zero),
                1 => Ok(Self::One),
                2 => Ok(Self::Two),
                _ => Err(()),
            }
        }
    }

    #[test]
    fn decode_maps_raw_values() {
        let validator = decode::<i32, Digit>();
        assert_eq!(validator.validate(1).unwrap(), Digit::One);
    }

    #[test]
    fn decode_reports_the_target_type_name() {
        let validator = decode::<i32, Digit>();
        let error = validator.validate(5).unwrap_err();
        assert_eq!(error.to_string(), "5 is not a valid Digit.");
    }

    #[test]
    fn decode_works_with_std_conversions() {
        let validator = decode::<i64, u8>();
        assert_eq!(validator.validate(200).unwrap(), 200_u8);
        let error = validator.validate(300).unwrap_err();
        assert_eq!(error.to_string(), "300 is not a valid u8.");
    }
}
