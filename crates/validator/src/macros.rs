//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`](crate::rule) — Create a complete pass-through validator
//!   (struct + `Validate` impl + factory fn)
//! - [`all_of!`](crate::all_of) — AND-chain multiple validators
//! - [`any_of!`](crate::any_of) — OR-chain multiple validators
//!
//! A rule generated by `rule!` returns its input unchanged on success and
//! fails with a `Value` error built from the rule's message function.
//! Transforming validators (unwrap, trim, decode) are written by hand.
//!
//! # Examples
//!
//! ```rust
//! use validus::rule;
//! use validus::foundation::Validate;
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub LowercaseOnly for String;
//!     test(value) { value.chars().all(char::is_lowercase) }
//!     message(value) { "should be lowercase.".to_string() }
//!     fn lowercase_only();
//! }
//!
//! // Struct with fields
//! rule! {
//!     pub MultipleOf { divisor: i64 } for i64;
//!     test(self, value) { value % self.divisor == 0 }
//!     message(self, value) { format!("should be a multiple of {}.", self.divisor) }
//!     fn multiple_of(divisor: i64);
//! }
//!
//! assert!(lowercase_only().validate("abc".to_string()).is_ok());
//! assert_eq!(
//!     multiple_of(3).validate(7).unwrap_err().to_string(),
//!     "7 should be a multiple of 3."
//! );
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete pass-through validator: struct definition, `Validate`
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`. The generated `validate` returns the input unchanged
/// when the `test` block holds and otherwise fails with a `Value` error
/// carrying the offending value and the `message` block's text.
///
/// The `test` and `message` blocks see the input by value under the name
/// given in their parentheses; the input type must be `Debug` so the
/// offending value can be captured into the error.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub NotEmpty for String;
///     test(value) { !value.is_empty() }
///     message(value) { "should not be empty.".to_string() }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     pub MinLength { min: usize } for String;
///     test(self, value) { value.chars().count() >= self.min }
///     message(self, value) { format!("should contain at least {} characters.", self.min) }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Generic rule** (single type parameter, simple-identifier bounds;
/// import paths like `Debug` first):
/// ```rust,ignore
/// rule! {
///     pub Equal<T: PartialEq + Debug> { target: T } for T;
///     test(self, value) { value == self.target }
///     message(self, value) { format!("should be equal to {:?}.", self.target) }
///     fn equal(target: T);
/// }
/// ```
///
/// **Fallible constructor** (rejects bad rule parameters):
/// ```rust,ignore
/// rule! {
///     pub LengthRange { min: usize, max: usize } for String;
///     test(self, value) { (self.min..=self.max).contains(&value.chars().count()) }
///     message(self, value) { format!("should contain between {} and {} characters.", self.min, self.max) }
///     new(min: usize, max: usize) -> ValidationError {
///         if min > max {
///             return Err(ValidationError::message("min must be less than or equal to max."));
///         }
///         Ok(Self { min, max })
///     }
///     fn length_range(min: usize, max: usize) -> ValidationError;
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        test($inp:ident) $test:block
        message($minp:ident) $msg:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name for $input;
            test($inp) $test
            message($minp) $msg
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule (no fields), no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        test($inp:ident) $test:block
        message($minp:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;
            type Output = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: $input) -> Result<$input, $crate::foundation::ValidationError> {
                if $test {
                    Ok($inp)
                } else {
                    let message = {
                        let $minp = &$inp;
                        $msg
                    };
                    Err($crate::foundation::ValidationError::value(&$inp, message))
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        test($self_:ident, $inp:ident) $test:block
        message($self2:ident, $minp:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            test($self_, $inp) $test
            message($self2, $minp) $msg
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        test($self_:ident, $inp:ident) $test:block
        message($self2:ident, $minp:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;
            type Output = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: $input) -> Result<$input, $crate::foundation::ValidationError> {
                if $test {
                    Ok($inp)
                } else {
                    let message = {
                        let $minp = &$inp;
                        $msg
                    };
                    Err($crate::foundation::ValidationError::value(&$inp, message))
                }
            }
        }
    };

    // ── Variant 3a: Generic struct + auto new + factory fn ───────────────
    //
    // Supports a single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        test($self_:ident, $inp:ident) $test:block
        message($self2:ident, $minp:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            test($self_, $inp) $test
            message($self2, $minp) $msg
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Generic struct + auto new, no factory ────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        test($self_:ident, $inp:ident) $test:block
        message($self2:ident, $minp:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;
            type Output = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: $input) -> Result<$input, $crate::foundation::ValidationError> {
                if $test {
                    Ok($inp)
                } else {
                    let message = {
                        let $minp = &$inp;
                        $msg
                    };
                    Err($crate::foundation::ValidationError::value(&$inp, message))
                }
            }
        }
    };

    // ── Variant 4: Struct with fields + fallible new + fallible factory ──
    //
    // For rules whose constructor can reject its parameters (returns
    // Result). The type after `->` is the error type.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        test($self_:ident, $inp:ident) $test:block
        message($self2:ident, $minp:ident) $msg:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;
            type Output = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: $input) -> ::std::result::Result<$input, $crate::foundation::ValidationError> {
                if $test {
                    Ok($inp)
                } else {
                    let message = {
                        let $minp = &$inp;
                        $msg
                    };
                    Err($crate::foundation::ValidationError::value(&$inp, message))
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// ALL_OF MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// Requires `ValidateExt` in scope.
///
/// ```rust
/// use validus::{all_of, prelude::*};
///
/// let validator = all_of![min(0), max(100), equal(42).not()];
/// assert!(validator.validate(7).is_ok());
/// assert!(validator.validate(42).is_err());
/// ```
#[macro_export]
macro_rules! all_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple validators using OR logic.
///
/// Requires `ValidateExt` in scope.
///
/// ```rust
/// use validus::{any_of, prelude::*};
///
/// let validator = any_of![equal(3), equal(5), equal(7)];
/// assert!(validator.validate(5).is_ok());
/// assert!(validator.validate(4).is_err());
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
