//! OPTIONAL combinator - null-tolerant lifting
//!
//! [`Optional`] lifts a validator over `Option`: a missing value passes
//! through untouched, a present value must satisfy the inner validator.
//! This is the explicit "nil or satisfies rule" form; rules themselves stay
//! defined on non-optional inputs.

use crate::foundation::{Validate, ValidationError};

/// Makes a validator tolerate missing values.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// // Age may be absent, but a present age must be >= 0.
/// let validator = min(0).optional();
/// assert_eq!(validator.validate(None).unwrap(), None);
/// assert_eq!(validator.validate(Some(7)).unwrap(), Some(7));
/// assert!(validator.validate(Some(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Optional<V>
where
    V: Validate,
{
    type Input = Option<V::Input>;
    type Output = Option<V::Output>;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, ValidationError> {
        match input {
            None => Ok(None),
            Some(value) => self.inner.validate(value).map(Some),
        }
    }
}

/// Creates an `Optional` combinator from a validator.
pub fn optional<V: Validate>(validator: V) -> Optional<V> {
    Optional::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{min, min_length, trim};

    #[test]
    fn optional_passes_none_through() {
        let validator = min(0).optional();
        assert_eq!(validator.validate(None).unwrap(), None);
    }

    #[test]
    fn optional_validates_present_values() {
        let validator = min(0).optional();
        assert_eq!(validator.validate(Some(7)).unwrap(), Some(7));
        let error = validator.validate(Some(-1)).unwrap_err();
        assert_eq!(error.to_string(), "-1 should be greater than or equal to 0.");
    }

    #[test]
    fn optional_lifts_transforms() {
        let validator = optional(trim().and_then(min_length(1)));
        assert_eq!(
            validator.validate(Some(" foo ".to_string())).unwrap(),
            Some("foo".to_string())
        );
        assert_eq!(validator.validate(None).unwrap(), None);
        assert!(validator.validate(Some("  ".to_string())).is_err());
    }
}
