//! Built-in validators
//!
//! The leaf-rule catalog. Rules are value objects holding only their own
//! parameters; every error message is a deterministic function of those
//! parameters and the offending value.
//!
//! # Categories
//!
//! - **Constant**: [`Success`], [`Failure`]
//! - **Presence**: [`NotNil`], [`Nil`]
//! - **Equality**: [`Equal`], [`NotEqual`]
//! - **Membership**: [`ElementOf`], [`NotElementOf`]
//! - **Ordering**: [`Min`], [`Max`], [`Within`]
//! - **String**: [`NotEmpty`], [`MinLength`], [`MaxLength`], [`LengthRange`],
//!   [`Matches`], [`Trim`]
//! - **Collection**: [`NotEmptyCollection`]
//! - **Decoding**: [`Decode`]
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! // Unwrap, normalize, then check:
//! let name = not_nil().and_then(trim()).and_then(min_length(1));
//! assert_eq!(name.validate(Some(" Arthur ".into())).unwrap(), "Arthur");
//!
//! // Absent or in range:
//! let age = min(0).optional();
//! assert!(age.validate(None).is_ok());
//! ```

pub mod basic;
pub mod collection;
pub mod decode;
pub mod equality;
pub mod length;
pub mod membership;
pub mod nullable;
pub mod pattern;
pub mod range;
pub mod trim;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use basic::{Failure, Success, failure, success};
pub use collection::{NotEmptyCollection, not_empty_collection};
pub use decode::{Decode, decode};
pub use equality::{Equal, NotEqual, equal, not_equal};
pub use length::{
    LengthRange, MaxLength, MinLength, NotEmpty, length_range, max_length, min_length, not_empty,
};
pub use membership::{ElementOf, NotElementOf, element_of, not_element_of};
pub use nullable::{Nil, NotNil, nil, not_nil};
pub use pattern::{Matches, matches};
pub use range::{Max, Min, Within, max, min, within};
pub use trim::{Trim, trim};
