//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`CompoundMode`]
//!
//! # Architecture
//!
//! Validators are generic over their input *and* output types, providing
//! compile-time guarantees while letting a rule refine what it checks:
//!
//! ```rust
//! use validus::prelude::*;
//!
//! // Option<String> -> String: unwrap, trim, then check.
//! let validator = not_nil().and_then(trim()).and_then(min_length(1));
//! assert_eq!(validator.validate(Some(" ok ".into())).unwrap(), "ok");
//! ```
//!
//! Composition happens through [`ValidateExt`]; every combinator yields a new
//! validator with the same `validate` contract, and failures aggregate into a
//! single [`ValidationError`] tree that keeps every individual cause.

pub mod error;
pub mod traits;

pub use error::{CompoundMode, ValidationError};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
