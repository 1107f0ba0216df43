//! Error types for the Wayfarer core.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every condition here is a recoverable value: callers can fall back to a
//! default description instead of ending the session.

use std::fmt;

use thiserror::Error;

use crate::entity::{EntityId, EntityKind};
use crate::ids::PropertyId;

/// The main error type for Wayfarer operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an entity kind mismatch error from the entity actually found.
    #[must_use]
    pub fn entity_kind_mismatch(expected: EntityKind, actual: &EntityId) -> Self {
        Self::new(ErrorKind::EntityKindMismatch {
            expected,
            actual: actual.to_string(),
        })
    }

    /// Creates a circular dependency error for a computation key.
    #[must_use]
    pub fn circular_dependency(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::CircularDependency { key: key.into() })
    }

    /// Creates a computation depth exceeded error.
    #[must_use]
    pub fn depth_exceeded(limit: usize, key: impl Into<String>) -> Self {
        Self::new(ErrorKind::DepthExceeded {
            limit,
            key: key.into(),
        })
    }

    /// Creates a property type mismatch error.
    #[must_use]
    pub fn property_type_mismatch(expected: &'static str, actual: impl Into<String>) -> Self {
        Self::new(ErrorKind::PropertyTypeMismatch {
            expected,
            actual: actual.into(),
        })
    }

    /// Creates a property not found error.
    #[must_use]
    pub fn property_not_found(entity: EntityId, property: PropertyId) -> Self {
        Self::new(ErrorKind::PropertyNotFound { entity, property })
    }

    /// Creates an internal engine error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error reports a circular property dependency.
    #[must_use]
    pub fn is_circular_dependency(&self) -> bool {
        matches!(self.kind, ErrorKind::CircularDependency { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An entity payload was requested from an entity of another kind.
    #[error("EntityID expected to be {expected}, got: {actual}")]
    EntityKindMismatch {
        /// The kind the caller asked for.
        expected: EntityKind,
        /// Rendering of the variant actually found, e.g. `.player`.
        actual: String,
    },

    /// A computed property depends on itself, directly or transitively.
    #[error("circular dependency detected while computing {key}")]
    CircularDependency {
        /// The computation key that was already in progress.
        key: String,
    },

    /// Too many computed properties were nested inside one another.
    #[error("computation depth ({limit}) exceeded while computing {key}")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
        /// The computation key that would have exceeded it.
        key: String,
    },

    /// A property value was read as the wrong type.
    #[error("property type mismatch: expected {expected}, got {actual}")]
    PropertyTypeMismatch {
        /// The expected value type.
        expected: &'static str,
        /// Description of the value encountered.
        actual: String,
    },

    /// Neither a formula nor a stored value exists for the property.
    #[error("property {property} not found on {entity}")]
    PropertyNotFound {
        /// The entity that was queried.
        entity: EntityId,
        /// The property that was not found.
        property: PropertyId,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source of the failing operation, e.g. a verb or formula name.
    pub source: Option<String>,
    /// Stack of nested computations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  computing {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for Wayfarer operations.
pub type Result<T> = std::result::Result<T, Error>;
