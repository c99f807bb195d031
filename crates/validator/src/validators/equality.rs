//! Equality validators

use std::fmt::Debug;

crate::rule! {
    /// Validates that a value equals a target.
    #[derive(Copy, PartialEq, Eq)]
    pub Equal<T: PartialEq + Debug> { target: T } for T;
    test(self, value) { value == self.target }
    message(self, value) { format!("should be equal to {:?}.", self.target) }
    fn equal(target: T);
}

crate::rule! {
    /// Validates that a value differs from a target.
    #[derive(Copy, PartialEq, Eq)]
    pub NotEqual<T: PartialEq + Debug> { target: T } for T;
    test(self, value) { value != self.target }
    message(self, value) { format!("should not be equal to {:?}.", self.target) }
    fn not_equal(target: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn equal_accepts_the_target() {
        let validator = equal(1);
        assert_eq!(validator.validate(1).unwrap(), 1);
    }

    #[test]
    fn equal_rejects_other_values() {
        let validator = equal(1);
        let error = validator.validate(2).unwrap_err();
        assert_eq!(error.to_string(), "2 should be equal to 1.");
    }

    #[test]
    fn equal_renders_string_targets_with_quotes() {
        let validator = equal("foo".to_string());
        let error = validator.validate("bar".to_string()).unwrap_err();
        assert_eq!(error.to_string(), "\"bar\" should be equal to \"foo\".");
    }

    #[test]
    fn not_equal_rejects_the_target() {
        let validator = not_equal(1);
        assert_eq!(validator.validate(2).unwrap(), 2);
        let error = validator.validate(1).unwrap_err();
        assert_eq!(error.to_string(), "1 should not be equal to 1.");
    }
}
