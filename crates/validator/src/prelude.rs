//! Prelude module for convenient imports.
//!
//! Provides a single `use validus::prelude::*;` import that brings in all
//! commonly needed traits, types, rules, and combinators.
//!
//! # Examples
//!
//! ```rust
//! use validus::prelude::*;
//!
//! let card = nil().or(length_range(10, 19).unwrap().optional());
//! assert!(card.validate(None).is_ok());
//! assert!(card.validate(Some("1234567890".into())).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    CompoundMode, Validate, ValidateExt, ValidationError, ValidationResult,
};

// ============================================================================
// VALIDATORS: The built-in rule catalog
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, Boxed, Chain, Map, Not, Optional, Or, and, chain, map, not, optional, or,
};

// ============================================================================
// AGGREGATION & ATTRIBUTION
// ============================================================================

pub use crate::model::{Bound, Validable, bound};
pub use crate::plan::ValidationPlan;
