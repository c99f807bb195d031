//! Membership validators

use std::fmt::Debug;

crate::rule! {
    /// Validates that a value is one of the allowed elements.
    pub ElementOf<T: PartialEq + Debug> { allowed: Vec<T> } for T;
    test(self, value) { self.allowed.contains(&value) }
    message(self, value) { format!("should be in {:?}.", self.allowed) }
    fn element_of(allowed: Vec<T>);
}

crate::rule! {
    /// Validates that a value is none of the forbidden elements.
    pub NotElementOf<T: PartialEq + Debug> { forbidden: Vec<T> } for T;
    test(self, value) { !self.forbidden.contains(&value) }
    message(self, value) { format!("should not be in {:?}.", self.forbidden) }
    fn not_element_of(forbidden: Vec<T>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn element_of_accepts_members() {
        let validator = element_of(vec![1, 2]);
        assert_eq!(validator.validate(1).unwrap(), 1);
        assert_eq!(validator.validate(2).unwrap(), 2);
    }

    #[test]
    fn element_of_rejects_non_members() {
        let validator = element_of(vec![1, 2]);
        let error = validator.validate(3).unwrap_err();
        assert_eq!(error.to_string(), "3 should be in [1, 2].");
    }

    #[test]
    fn not_element_of_rejects_members() {
        let validator = not_element_of(vec![1, 2]);
        assert_eq!(validator.validate(0).unwrap(), 0);
        let error = validator.validate(1).unwrap_err();
        assert_eq!(error.to_string(), "1 should not be in [1, 2].");
    }
}
