//! Model-level validation and attribution
//!
//! Rules know nothing about the models they check. Attribution happens at
//! the call site: a model's `validate` runs a rule against one of its fields
//! and wraps any failure with the field's name and the model's own
//! description. The same rule can therefore serve under different property
//! names.

use std::fmt;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// VALIDABLE
// ============================================================================

/// Capability for model types that validate themselves.
///
/// Implementors define [`validate`](Self::validate), typically running one
/// validation per field (through a
/// [`ValidationPlan`](crate::plan::ValidationPlan) when all failures should
/// be gathered) and attributing each failure via
/// [`validate_property`](Self::validate_property) and
/// [`validate_model`](Self::validate_model).
///
/// `validate` takes `&mut self` because validations may repair fields:
/// [`validate_property`](Self::validate_property) returns the transformed
/// output precisely so callers can write it back.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// #[derive(Debug)]
/// struct Person {
///     name: Option<String>,
///     age: Option<i32>,
/// }
///
/// impl Validable for Person {
///     fn validate(&mut self) -> Result<(), ValidationError> {
///         let name = self.name.take();
///         let age = self.age;
///         ValidationPlan::new()
///             .add(|| {
///                 self.name = Some(self.validate_property(
///                     "name",
///                     name,
///                     &not_nil().and_then(trim()).and_then(min_length(1)),
///                 )?);
///                 Ok(())
///             })
///             .add(|| {
///                 self.validate_property("age", age, &min(0).optional())?;
///                 Ok(())
///             })
///             .validate()
///     }
/// }
/// ```
pub trait Validable: fmt::Debug {
    /// Validates the whole model, aggregating every failure into one error.
    fn validate(&mut self) -> Result<(), ValidationError>;

    /// Describes this model for error prefixes ("Invalid {description}: …").
    ///
    /// Defaults to the `Debug` rendering.
    fn description(&self) -> String {
        format!("{self:?}")
    }

    /// Validates one property's value, attributing any failure.
    ///
    /// Failures come back as `Owned(description, Property(name, error))`, so
    /// they render as `Invalid {model}: {name} {message}` and answer
    /// [`errors_for_property`](ValidationError::errors_for_property)
    /// queries. The successful output is returned for write-back.
    fn validate_property<V>(
        &self,
        name: &str,
        value: V::Input,
        validation: &V,
    ) -> Result<V::Output, ValidationError>
    where
        V: Validate,
    {
        validation
            .validate(value)
            .map_err(|error| error.named(name).owned(self.description()))
    }

    /// Validates a cross-field rule, attributing any failure to every
    /// property it concerns.
    ///
    /// The validation is nullary; bind captured field values with
    /// [`bound`]. Failures come back as
    /// `Owned(description, Global(message, properties, error))` and render
    /// as `Invalid {model}: {message}`.
    fn validate_model<V>(
        &self,
        properties: &[&str],
        message: &str,
        validation: &V,
    ) -> Result<(), ValidationError>
    where
        V: Validate<Input = ()>,
    {
        match validation.validate(()) {
            Ok(_) => Ok(()),
            Err(error) => Err(ValidationError::global(
                message,
                properties.iter().copied(),
                Some(error),
            )
            .owned(self.description())),
        }
    }
}

// ============================================================================
// BOUND
// ============================================================================

/// A validation with a captured input value.
///
/// Adapts `validation` over an already-known value into a nullary
/// validation, so alternatives over *different* fields compose with
/// [`or`](crate::foundation::ValidateExt::or), the shape cross-field rules
/// need.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let email: Option<String> = None;
/// let phone: Option<String> = Some("1 23".into());
///
/// // "email or phone must be present"
/// let rule = bound(email, not_nil()).or(bound(phone, not_nil()));
/// assert!(rule.validate(()).is_ok());
/// ```
pub struct Bound<V: Validate> {
    value: V::Input,
    inner: V,
}

impl<V: Validate> Bound<V> {
    /// Captures `value` for later validation by `inner`.
    pub fn new(value: V::Input, inner: V) -> Self {
        Self { value, inner }
    }
}

impl<V> Validate for Bound<V>
where
    V: Validate,
    V::Input: Clone,
{
    type Input = ();
    type Output = V::Output;

    fn validate(&self, (): ()) -> Result<V::Output, ValidationError> {
        self.inner.validate(self.value.clone())
    }
}

impl<V> fmt::Debug for Bound<V>
where
    V: Validate + fmt::Debug,
    V::Input: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bound")
            .field("value", &self.value)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Captures a value for later validation; see [`Bound`].
pub fn bound<V: Validate>(value: V::Input, validation: V) -> Bound<V> {
    Bound::new(value, validation)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{min, not_nil};

    #[derive(Debug)]
    struct Simple {
        name: Option<String>,
    }

    impl Validable for Simple {
        fn validate(&mut self) -> Result<(), ValidationError> {
            self.validate_property("name", self.name.clone(), &not_nil())?;
            Ok(())
        }

        fn description(&self) -> String {
            "Simple".to_string()
        }
    }

    #[test]
    fn valid_model_passes() {
        let mut model = Simple {
            name: Some("Arthur".to_string()),
        };
        assert!(model.validate().is_ok());
    }

    #[test]
    fn property_failure_is_named_and_owned() {
        let mut model = Simple { name: None };
        let error = model.validate().unwrap_err();
        assert_eq!(error.to_string(), "Invalid Simple: name should not be nil.");
        assert_eq!(error.errors_for_property("name"), vec![&error]);
    }

    #[test]
    fn default_description_uses_debug() {
        #[derive(Debug)]
        struct Point {
            x: i32,
        }

        impl Validable for Point {
            fn validate(&mut self) -> Result<(), ValidationError> {
                self.validate_property("x", Some(self.x), &not_nil())?;
                Ok(())
            }
        }

        let point = Point { x: 3 };
        assert_eq!(point.description(), "Point { x: 3 }");
    }

    #[test]
    fn validate_model_attributes_to_all_properties() {
        let model = Simple { name: None };
        let email: Option<String> = None;
        let phone: Option<String> = None;

        let error = model
            .validate_model(
                &["email", "phoneNumber"],
                "Please provide an email or a phone number.",
                &bound(email, not_nil()).or(bound(phone, not_nil())),
            )
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid Simple: Please provide an email or a phone number."
        );
        assert_eq!(error.errors_for_property("email"), vec![&error]);
        assert_eq!(error.errors_for_property("phoneNumber"), vec![&error]);
        assert_eq!(error.model_errors(), vec![&error]);
    }

    #[test]
    fn bound_validates_the_captured_value() {
        let rule = bound(Some(3), not_nil().and_then(min(0)));
        assert_eq!(rule.validate(()).unwrap(), 3);

        let rule = bound(Some(-1), not_nil().and_then(min(0)));
        assert!(rule.validate(()).is_err());
    }
}
