//! # validus
//!
//! A composable value-validation library: a small algebra of typed rules,
//! operators to combine them, and a structured error model that can report
//! every failure and attribute each one to a model property.
//!
//! ## Quick Start
//!
//! ```rust
//! use validus::prelude::*;
//!
//! // Compose rules with .and_then() / .or() / .and() / .not()
//! let username = not_nil().and_then(trim()).and_then(min_length(3));
//! assert_eq!(username.validate(Some(" alice ".into())).unwrap(), "alice");
//! assert!(username.validate(None).is_err());
//! ```
//!
//! ## Gathering every failure
//!
//! A [`ValidationPlan`](plan::ValidationPlan) runs independent steps to
//! completion and merges their failures into one
//! [`ValidationError`](foundation::ValidationError):
//!
//! ```rust
//! use validus::prelude::*;
//!
//! let name: Option<String> = None;
//! let age: Option<i32> = Some(-1);
//!
//! let error = ValidationPlan::new()
//!     .add(|| not_nil().validate(name).map(drop))
//!     .add(|| not_nil().and_then(min(0)).validate(age).map(drop))
//!     .validate()
//!     .unwrap_err();
//!
//! assert_eq!(
//!     error.to_string(),
//!     "None should not be nil. -1 should be greater than or equal to 0."
//! );
//! ```
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for zero-boilerplate pass-through rules, or
//! implement [`Validate`](foundation::Validate) manually for transforming
//! validators.
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`NotNil`](validators::NotNil), [`Nil`](validators::Nil)
//! - **String**: [`NotEmpty`](validators::NotEmpty),
//!   [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength),
//!   [`Matches`](validators::Matches), [`Trim`](validators::Trim)
//! - **Ordering**: [`Min`](validators::Min), [`Max`](validators::Max),
//!   [`Within`](validators::Within)
//! - **Equality / membership**: [`Equal`](validators::Equal),
//!   [`ElementOf`](validators::ElementOf)
//! - **Decoding**: [`Decode`](validators::Decode)

// Deep combinator nesting (Chain<Chain<NotNil<_>, Trim>, MinLength>) produces
// complex types that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod model;
pub mod plan;
pub mod prelude;
pub mod validators;
