//! Combinators for composing validators
//!
//! Each operator wraps one or two validators and yields a new validator with
//! the same `validate` contract:
//!
//! - [`Chain`] — sequential composition; the left output feeds the right
//!   input, short-circuiting on the left error
//! - [`And`] — conjunction; both branches always run so every failure is
//!   collected
//! - [`Or`] — alternation on the same original input; the last alternative
//!   gives the primary failure message
//! - [`Not`] — negation; succeeds with the input iff the inner validator
//!   fails
//! - [`Map`] — infallible transform over the success output
//! - [`Optional`] — null-tolerant lifting over `Option`
//! - [`Boxed`] — type erasure behind a boxed closure
//!
//! The usual entry points are the [`ValidateExt`](crate::foundation::ValidateExt)
//! methods; the free functions here are equivalent.

pub mod and;
pub mod boxed;
pub mod chain;
pub mod map;
pub mod not;
pub mod optional;
pub mod or;

pub use and::{And, and};
pub use boxed::Boxed;
pub use chain::{Chain, chain};
pub use map::{Map, map};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};
