//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), not bytes.
//!
//! The boundary cases get their own wording: a minimum of one reads
//! "should not be empty", a maximum of zero "should be empty". The message
//! stays a pure function of the rule's parameters.

use crate::foundation::ValidationError;

crate::rule! {
    /// Validates that a string is not empty.
    ///
    /// Equivalent to `min_length(1)` but more semantic.
    pub NotEmpty for String;
    test(value) { !value.is_empty() }
    message(value) { "should not be empty.".to_string() }
    fn not_empty();
}

crate::rule! {
    /// Validates that a string has at least a minimum number of characters.
    #[derive(Copy, PartialEq, Eq)]
    pub MinLength { min: usize } for String;
    test(self, value) { value.chars().count() >= self.min }
    message(self, value) {
        if self.min == 1 {
            "should not be empty.".to_string()
        } else {
            format!("should contain at least {} characters.", self.min)
        }
    }
    fn min_length(min: usize);
}

crate::rule! {
    /// Validates that a string has at most a maximum number of characters.
    #[derive(Copy, PartialEq, Eq)]
    pub MaxLength { max: usize } for String;
    test(self, value) { value.chars().count() <= self.max }
    message(self, value) {
        match self.max {
            0 => "should be empty.".to_string(),
            1 => "should contain at most 1 character.".to_string(),
            n => format!("should contain at most {n} characters."),
        }
    }
    fn max_length(max: usize);
}

crate::rule! {
    /// Validates that a string's character count lies within an inclusive
    /// range.
    ///
    /// The constructor rejects `min > max`.
    pub LengthRange { min: usize, max: usize } for String;
    test(self, value) { (self.min..=self.max).contains(&value.chars().count()) }
    message(self, value) {
        format!("should contain between {} and {} characters.", self.min, self.max)
    }
    new(min: usize, max: usize) -> ValidationError {
        if min > max {
            return Err(ValidationError::message("min must be less than or equal to max."));
        }
        Ok(Self { min, max })
    }
    fn length_range(min: usize, max: usize) -> ValidationError;
}
