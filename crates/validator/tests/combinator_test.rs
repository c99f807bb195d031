//! Combinator semantics: short-circuiting, aggregation, and description
//! tie-breaks.

use pretty_assertions::assert_eq;
use validus::prelude::*;

fn odd_as_string() -> Boxed<i32, String> {
    Boxed::from_fn(|value: i32| {
        if value % 2 == 1 {
            Ok(value.to_string())
        } else {
            Err(ValidationError::value(&value, "should be odd."))
        }
    })
}

fn at_most_ten() -> Boxed<i32, String> {
    Boxed::from_fn(|value: i32| {
        if value <= 10 {
            Ok("v2".to_string())
        } else {
            Err(ValidationError::value(&value, "should be less than 10."))
        }
    })
}

// ============================================================================
// CHAIN
// ============================================================================

#[test]
fn chain_pipes_output_to_input() {
    let v = not_nil().and_then(min_length(1));
    assert_eq!(v.validate(Some("foo".to_string())).unwrap(), "foo");
}

#[test]
fn chain_short_circuits_on_the_first_error() {
    let v = not_nil().and_then(min_length(1));
    assert_eq!(
        v.validate(None).unwrap_err().to_string(),
        "None should not be nil."
    );
    assert_eq!(
        v.validate(Some(String::new())).unwrap_err().to_string(),
        "\"\" should not be empty."
    );
}

#[test]
fn chain_equals_sequential_application() {
    let a = trim();
    let b = min_length(2);
    let chained = trim().and_then(min_length(2));

    for input in [" foo ", "  ", "ab", " a "] {
        let sequential = a
            .validate(input.to_string())
            .and_then(|mid| b.validate(mid));
        let combined = chained.validate(input.to_string());
        assert_eq!(combined.is_ok(), sequential.is_ok());
        if let (Ok(lhs), Ok(rhs)) = (&combined, &sequential) {
            assert_eq!(lhs, rhs);
        }
    }
}

#[test]
fn chain_with_transform_via_map() {
    let v = not_nil::<String>().map(|s| s.chars().count());
    assert_eq!(v.validate(Some("foo".to_string())).unwrap(), 3);
    assert_eq!(
        v.validate(None).unwrap_err().to_string(),
        "None should not be nil."
    );
}

// ============================================================================
// OR
// ============================================================================

#[test]
fn or_returns_the_succeeding_branch_output() {
    let v1 = Boxed::from_fn(|i: i32| {
        if i == 1 {
            Ok("v1".to_string())
        } else {
            Err(ValidationError::value(&i, "fails v1."))
        }
    });
    let v2 = Boxed::from_fn(|i: i32| {
        if i == 2 {
            Ok("v2".to_string())
        } else {
            Err(ValidationError::value(&i, "fails v2."))
        }
    });
    let v = v1.or(v2);

    assert_eq!(v.validate(1).unwrap(), "v1");
    assert_eq!(v.validate(2).unwrap(), "v2");
    assert_eq!(v.validate(3).unwrap_err().to_string(), "3 fails v2.");
}

#[test]
fn or_failure_description_equals_right_branch_description() {
    let left = min(10);
    let right = max(-10);
    let both = min(10).or(max(-10));

    let left_err = left.validate(0).unwrap_err();
    let right_err = right.validate(0).unwrap_err();
    let combined_err = both.validate(0).unwrap_err();

    assert_ne!(left_err.to_string(), combined_err.to_string());
    assert_eq!(combined_err.to_string(), right_err.to_string());
}

#[test]
fn or_keeps_both_causes_in_the_compound() {
    let error = min(10).or(max(-10)).validate(0).unwrap_err();
    match &error {
        ValidationError::Compound { mode, errors } => {
            assert_eq!(*mode, CompoundMode::Or);
            assert_eq!(errors[0].to_string(), "0 should be greater than or equal to 10.");
            assert_eq!(errors[1].to_string(), "0 should be less than or equal to -10.");
        }
        other => panic!("expected compound, got {other:?}"),
    }
}

#[test]
fn nil_or_rule_is_the_null_tolerant_idiom() {
    let v = nil().or(min(0).optional());
    assert_eq!(v.validate(None).unwrap(), None);
    assert_eq!(v.validate(Some(3)).unwrap(), Some(3));
    assert_eq!(
        v.validate(Some(-1)).unwrap_err().to_string(),
        "-1 should be greater than or equal to 0."
    );
}

// ============================================================================
// AND
// ============================================================================

#[test]
fn and_returns_the_right_branch_output() {
    let v = odd_as_string().and(at_most_ten());
    assert_eq!(v.validate(5).unwrap(), "v2");
}

#[test]
fn and_single_failure_propagates_unwrapped() {
    let v = odd_as_string().and(at_most_ten());
    assert_eq!(v.validate(2).unwrap_err().to_string(), "2 should be odd.");
    assert_eq!(
        v.validate(11).unwrap_err().to_string(),
        "11 should be less than 10."
    );
}

#[test]
fn and_double_failure_reports_both_in_order() {
    let v = odd_as_string().and(at_most_ten());
    let error = v.validate(12).unwrap_err();
    assert_eq!(
        error.to_string(),
        "12 should be odd. 12 should be less than 10."
    );
}

#[test]
fn and_chain_of_three_flattens_in_render() {
    let v = min(10).and(max(-10)).and(equal(5));
    let error = v.validate(0).unwrap_err();
    assert_eq!(
        error.to_string(),
        "0 should be greater than or equal to 10. 0 should be less than or equal to -10. 0 should be equal to 5."
    );
}

#[test]
fn and_duplicate_messages_are_not_deduplicated() {
    let v = matches("foo").unwrap().and(matches("bar").unwrap());
    let error = v.validate("qux".to_string()).unwrap_err();
    assert_eq!(error.to_string(), "\"qux\" is invalid. \"qux\" is invalid.");
}

// ============================================================================
// NOT
// ============================================================================

#[test]
fn not_succeeds_with_the_original_input() {
    let v = equal(1).not();
    assert_eq!(v.validate(2).unwrap(), 2);
}

#[test]
fn not_fails_with_generic_message_carrying_the_value() {
    let v = equal(1).not();
    assert_eq!(v.validate(1).unwrap_err().to_string(), "1 is invalid.");
}

#[test]
fn not_over_optional_input() {
    let v = nil::<i32>().not();
    assert_eq!(v.validate(Some(1)).unwrap(), Some(1));
    assert_eq!(v.validate(None).unwrap_err().to_string(), "None is invalid.");
}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

#[test]
fn all_of_requires_every_rule() {
    let v = validus::all_of![min(0), max(100), not_equal(42)];
    assert_eq!(v.validate(7).unwrap(), 7);
    assert!(v.validate(42).is_err());
    assert!(v.validate(-1).is_err());
}

#[test]
fn any_of_requires_one_rule() {
    let v = validus::any_of![equal(3), equal(5), equal(7)];
    assert_eq!(v.validate(5).unwrap(), 5);
    let error = v.validate(4).unwrap_err();
    assert_eq!(error.to_string(), "4 should be equal to 7.");
}
