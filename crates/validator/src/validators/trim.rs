//! Whitespace normalization
//!
//! [`Trim`] always succeeds; it normalizes its input rather than checking
//! it. Chain it in front of content rules so surrounding whitespace never
//! causes a spurious failure, and write the output back to repair the model.

use crate::foundation::{Validate, ValidationError};

/// Trims a string, returning the trimmed copy.
///
/// Trims Unicode whitespace by default, or an explicit character set via
/// [`matching`](Self::matching).
///
/// # Examples
///
/// ```rust
/// use validus::prelude::*;
///
/// assert_eq!(trim().validate(" foo ".to_string()).unwrap(), "foo");
/// assert_eq!(
///     Trim::matching(vec!['<', '>']).validate("<foo>".to_string()).unwrap(),
///     "foo"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trim {
    /// Characters to strip; `None` means Unicode whitespace.
    chars: Option<Vec<char>>,
}

impl Trim {
    /// Creates a whitespace-trimming validator.
    #[must_use]
    pub const fn new() -> Self {
        Self { chars: None }
    }

    /// Creates a validator trimming exactly the given characters.
    #[must_use]
    pub fn matching(chars: Vec<char>) -> Self {
        Self { chars: Some(chars) }
    }
}

impl Validate for Trim {
    type Input = String;
    type Output = String;

    fn validate(&self, input: String) -> Result<String, ValidationError> {
        let trimmed = match &self.chars {
            None => input.trim(),
            Some(chars) => input.trim_matches(chars.as_slice()),
        };
        Ok(trimmed.to_string())
    }
}

/// Creates a whitespace-trimming validator.
#[must_use]
pub const fn trim() -> Trim {
    Trim::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_strips_surrounding_whitespace() {
        let validator = trim();
        assert_eq!(validator.validate(" foo ".to_string()).unwrap(), "foo");
    }

    #[test]
    fn trim_reduces_blank_input_to_empty() {
        let validator = trim();
        assert_eq!(validator.validate(" \t\n".to_string()).unwrap(), "");
    }

    #[test]
    fn trim_with_custom_character_set() {
        let validator = Trim::matching(vec!['<', '>']);
        assert_eq!(validator.validate("<foo>".to_string()).unwrap(), "foo");
        assert_eq!(validator.validate("><><".to_string()).unwrap(), "");
    }

    #[test]
    fn trim_never_fails() {
        let validator = trim();
        assert!(validator.validate(String::new()).is_ok());
    }
}
