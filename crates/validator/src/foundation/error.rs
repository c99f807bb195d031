//! Structured validation errors
//!
//! [`ValidationError`] is a recursive description of one or more validation
//! failures. Leaf failures carry the offending value and a message; wrapper
//! variants attribute failures to model properties, aggregate independent
//! failures, and record cross-field rules. Errors are immutable once
//! constructed: combinators and aggregators only ever wrap or merge them.

use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Aggregation mode of a [`ValidationError::Compound`].
///
/// The mode decides how the compound renders: `And` concatenates every
/// child's description in order, `Or` defers to the last alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CompoundMode {
    /// All children failed together; every message matters.
    And,
    /// All alternatives failed; the last one gives the primary message.
    Or,
}

/// A structured validation error.
///
/// The tree is built from five shapes:
///
/// - [`Value`](Self::Value) — a leaf failure on one offending value
/// - [`Property`](Self::Property) — a failure attributed to a named property
/// - [`Compound`](Self::Compound) — two or more aggregated failures
/// - [`Global`](Self::Global) — a whole-model / cross-field failure
/// - [`Owned`](Self::Owned) — a failure stamped with the owning model's
///   description
///
/// # Examples
///
/// ```rust
/// use validus::foundation::ValidationError;
///
/// let error = ValidationError::value(&-1, "should be greater than or equal to 0.");
/// assert_eq!(error.to_string(), "-1 should be greater than or equal to 0.");
///
/// let named = error.named("age");
/// assert_eq!(named.to_string(), "age should be greater than or equal to 0.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    /// Leaf failure: the offending value (captured as its `Debug` rendering,
    /// or `None` when there is no meaningful value) and a reason.
    Value {
        /// `Debug` rendering of the offending value, captured at
        /// construction time.
        value: Option<String>,
        /// Human-readable reason, e.g. `"should not be empty."`.
        message: String,
    },

    /// Failure attributed to a named model property.
    Property {
        /// The property name, e.g. `"age"`.
        name: String,
        /// The underlying failure.
        error: Box<ValidationError>,
    },

    /// Aggregation of two or more failures.
    ///
    /// Never constructed with fewer than two children; use
    /// [`compound`](Self::compound) to normalize arbitrary lists.
    Compound {
        /// How the children combine.
        mode: CompoundMode,
        /// The aggregated failures, in evaluation order.
        errors: Vec<ValidationError>,
    },

    /// Whole-model failure concerning one or more properties, e.g.
    /// "an email or a phone number is required".
    Global {
        /// Free-text description; this is what the error renders as.
        description: String,
        /// The property names the rule concerns.
        properties: Vec<String>,
        /// The underlying failure, when one exists.
        error: Option<Box<ValidationError>>,
    },

    /// Failure stamped with the description of the model that produced it.
    Owned {
        /// The owning model's description, captured at wrap time.
        owner: String,
        /// The underlying failure.
        error: Box<ValidationError>,
    },
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a leaf error for an offending value.
    ///
    /// The value's `Debug` rendering is captured immediately, so the error
    /// stays self-contained after the value is dropped or mutated.
    pub fn value<V>(value: &V, message: impl Into<String>) -> Self
    where
        V: fmt::Debug + ?Sized,
    {
        Self::Value {
            value: Some(format!("{value:?}")),
            message: message.into(),
        }
    }

    /// Creates a leaf error with no offending value.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Value {
            value: None,
            message: message.into(),
        }
    }

    /// Creates a whole-model error over the given property names.
    pub fn global<I, S>(
        description: impl Into<String>,
        properties: I,
        error: Option<ValidationError>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Global {
            description: description.into(),
            properties: properties.into_iter().map(Into::into).collect(),
            error: error.map(Box::new),
        }
    }

    /// Wraps this error with a property name.
    #[must_use = "wrapping returns a new error"]
    pub fn named(self, name: impl Into<String>) -> Self {
        Self::Property {
            name: name.into(),
            error: Box::new(self),
        }
    }

    /// Wraps this error with the owning model's description.
    #[must_use = "wrapping returns a new error"]
    pub fn owned(self, owner: impl Into<String>) -> Self {
        Self::Owned {
            owner: owner.into(),
            error: Box::new(self),
        }
    }

    /// Normalizes a list of errors into at most one.
    ///
    /// Zero errors mean success, so the result is `None`. A single error is
    /// returned as-is, never wrapped in a one-element compound. Two or more
    /// become a [`Compound`](Self::Compound) preserving order.
    #[must_use]
    pub fn compound(mode: CompoundMode, mut errors: Vec<ValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => Some(errors.remove(0)),
            _ => Some(Self::Compound { mode, errors }),
        }
    }
}

// ============================================================================
// QUERIES
// ============================================================================

impl ValidationError {
    /// Lists the errors attributable to the given property name.
    ///
    /// Compounds delegate to their children. A [`Property`](Self::Property)
    /// node matches on its own name, a [`Global`](Self::Global) node when its
    /// property set contains the name. An [`Owned`](Self::Owned) wrapper is
    /// returned whole when its inner error matches, so the result renders
    /// with the owner prefix intact.
    #[must_use]
    pub fn errors_for_property(&self, name: &str) -> Vec<&ValidationError> {
        match self {
            Self::Compound { errors, .. } => errors
                .iter()
                .flat_map(|error| error.errors_for_property(name))
                .collect(),
            Self::Property { name: own, .. } if own == name => vec![self],
            Self::Global { properties, .. } if properties.iter().any(|p| p == name) => {
                vec![self]
            }
            Self::Owned { error, .. } if error.concerns_property(name) => vec![self],
            _ => Vec::new(),
        }
    }

    /// Lists the whole-model (cross-field) errors in this tree.
    #[must_use]
    pub fn model_errors(&self) -> Vec<&ValidationError> {
        match self {
            Self::Compound { errors, .. } => {
                errors.iter().flat_map(ValidationError::model_errors).collect()
            }
            Self::Global { .. } => vec![self],
            Self::Owned { error, .. } if error.concerns_model() => vec![self],
            _ => Vec::new(),
        }
    }

    /// Lists the underlying failure causes, depth-first.
    ///
    /// Wrapper variants are descended through; the result contains only
    /// [`Value`](Self::Value) and [`Global`](Self::Global) nodes.
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        match self {
            Self::Value { .. } | Self::Global { .. } => vec![self],
            Self::Property { error, .. } | Self::Owned { error, .. } => error.flatten(),
            Self::Compound { errors, .. } => {
                errors.iter().flat_map(ValidationError::flatten).collect()
            }
        }
    }

    fn concerns_property(&self, name: &str) -> bool {
        match self {
            Self::Property { name: own, .. } => own == name,
            Self::Global { properties, .. } => properties.iter().any(|p| p == name),
            Self::Compound { errors, .. } => {
                errors.iter().any(|error| error.concerns_property(name))
            }
            Self::Owned { error, .. } => error.concerns_property(name),
            Self::Value { .. } => false,
        }
    }

    fn concerns_model(&self) -> bool {
        match self {
            Self::Global { .. } => true,
            Self::Compound { errors, .. } => errors.iter().any(ValidationError::concerns_model),
            Self::Owned { error, .. } => error.concerns_model(),
            Self::Property { .. } | Self::Value { .. } => false,
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl ValidationError {
    /// Renders the error as a deterministic, human-readable sentence.
    ///
    /// Same tree, same string; stable enough for literal assertions.
    #[must_use]
    pub fn description(&self) -> String {
        self.render(None)
    }

    /// Context threading: a [`Property`](Self::Property) wrapper replaces the
    /// rendered value of every leaf beneath it with the property name, so
    /// `Property("age", Value(-1, ...))` reads `age should be ...` rather
    /// than `-1 should be ...`.
    fn render(&self, context: Option<&str>) -> String {
        match self {
            Self::Value { value, message } => {
                let subject = context.or(value.as_deref()).unwrap_or("None");
                format!("{subject} {message}")
            }
            Self::Property { name, error } => error.render(Some(name)),
            Self::Compound { mode, errors } => match mode {
                // A compound always holds at least two children, so `last`
                // cannot come up empty here.
                CompoundMode::Or => errors
                    .last()
                    .map(|error| error.render(context))
                    .unwrap_or_default(),
                CompoundMode::And => {
                    let rendered: Vec<String> =
                        errors.iter().map(|error| error.render(context)).collect();
                    rendered.join(" ")
                }
            },
            Self::Global { description, .. } => description.clone(),
            Self::Owned { owner, error } => {
                format!("Invalid {owner}: {}", error.render(context))
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[cfg(feature = "serde")]
impl ValidationError {
    /// Converts the error tree to a JSON value.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        match self {
            Self::Value { value, message } => json!({
                "kind": "value",
                "value": value,
                "message": message,
            }),
            Self::Property { name, error } => json!({
                "kind": "property",
                "name": name,
                "error": error.to_json_value(),
            }),
            Self::Compound { mode, errors } => json!({
                "kind": "compound",
                "mode": match mode {
                    CompoundMode::And => "and",
                    CompoundMode::Or => "or",
                },
                "errors": errors.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
            }),
            Self::Global {
                description,
                properties,
                error,
            } => json!({
                "kind": "global",
                "description": description,
                "properties": properties,
                "error": error.as_ref().map(|e| e.to_json_value()),
            }),
            Self::Owned { owner, error } => json!({
                "kind": "owned",
                "owner": owner,
                "error": error.to_json_value(),
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
