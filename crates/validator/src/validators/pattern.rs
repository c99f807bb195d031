//! Regular-expression validators
//!
//! The pattern compiles once, when the rule is constructed, and is reused
//! across every `validate` call.

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

/// Validates that a string matches a regular expression.
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// let validator = matches("foo").unwrap();
/// assert_eq!(validator.validate("xxxfooxxx".to_string()).unwrap(), "xxxfooxxx");
///
/// let error = validator.validate("bar".to_string()).unwrap_err();
/// assert_eq!(error.to_string(), "\"bar\" is invalid.");
/// ```
#[derive(Debug, Clone)]
pub struct Matches {
    /// The compiled pattern.
    pub pattern: Regex,
}

impl Matches {
    /// Creates a validator from an already-compiled regex.
    #[must_use]
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Compiles `pattern` and creates a validator from it.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Validate for Matches {
    type Input = String;
    type Output = String;

    fn validate(&self, input: String) -> Result<String, ValidationError> {
        if self.pattern.is_match(&input) {
            Ok(input)
        } else {
            Err(ValidationError::value(&input, "is invalid."))
        }
    }
}

/// Compiles `pattern` and creates a validator from it.
pub fn matches(pattern: &str) -> Result<Matches, regex::Error> {
    Matches::pattern(pattern)
}
