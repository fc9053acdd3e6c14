//! Error types for Typeform.
//!
//! Two channels live here. [`ValidationError`] is the value a failed check
//! returns: a linked chain of frames from the outermost container down to the
//! primitive that rejected the value. [`Error`] is the crate-wide fault type
//! for malformed schemas and for fail-fast callers that turn a validation
//! failure into an `Err` with `?`.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One step of the path from a container to the offending sub-value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PathSegment {
    /// A record field name.
    Field(Arc<str>),
    /// A list index.
    Index(usize),
}

impl PathSegment {
    /// Returns the field name, if this segment names a field.
    #[must_use]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            Self::Index(_) => None,
        }
    }

    /// Returns the list index, if this segment is an index.
    #[must_use]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Field(_) => None,
            Self::Index(i) => Some(*i),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{name}"),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        Self::Field(name.into())
    }
}

impl From<Arc<str>> for PathSegment {
    fn from(name: Arc<str>) -> Self {
        Self::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A failed check.
///
/// `path` only ever holds the segment of the frame that produced this error.
/// Walk [`related`](Self::related) (or use [`full_path`](Self::full_path)) to
/// reconstruct where in a nested value the failure happened.
#[derive(Clone, Debug, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("{message}")]
pub struct ValidationError {
    /// Display form of the type that rejected the value.
    pub expected: String,
    /// Human-readable report, including every nested frame.
    pub message: String,
    /// Field name or index at which the nested failure occurred.
    pub path: Option<PathSegment>,
    /// The nested failure, if this frame wraps one.
    #[source]
    pub related: Option<Box<ValidationError>>,
}

impl ValidationError {
    /// Creates a leaf error: the value does not match `expected` at all.
    #[must_use]
    pub fn new(expected: impl Into<String>) -> Self {
        let expected = expected.into();
        Self {
            message: format!("Expect {expected}"),
            expected,
            path: None,
            related: None,
        }
    }

    /// Creates an error wrapping a failure found inside the value.
    ///
    /// The message states the expected type, then the nested report on a new
    /// line, prefixed by the path segment when there is one.
    #[must_use]
    pub fn nested(
        expected: impl Into<String>,
        path: Option<PathSegment>,
        related: ValidationError,
    ) -> Self {
        let expected = expected.into();
        let message = match &path {
            Some(segment) => format!("Expect {expected}\n{segment}: {}", related.message),
            None => format!("Expect {expected}\n{}", related.message),
        };
        Self {
            expected,
            message,
            path,
            related: Some(Box::new(related)),
        }
    }

    /// Returns this frame's path segment.
    #[must_use]
    pub fn path(&self) -> Option<&PathSegment> {
        self.path.as_ref()
    }

    /// Returns the nested failure, if any.
    #[must_use]
    pub fn related(&self) -> Option<&ValidationError> {
        self.related.as_deref()
    }

    /// Iterates the chain from this frame down to the innermost one.
    pub fn chain(&self) -> impl Iterator<Item = &ValidationError> {
        std::iter::successors(Some(self), |e| e.related())
    }

    /// Returns the innermost frame of the chain.
    #[must_use]
    pub fn root_cause(&self) -> &ValidationError {
        self.chain().last().unwrap_or(self)
    }

    /// Collects every frame's path segment, outermost first.
    ///
    /// Frames without a segment (such as option wrappers) contribute nothing.
    #[must_use]
    pub fn full_path(&self) -> Vec<PathSegment> {
        self.chain().filter_map(|e| e.path.clone()).collect()
    }

    /// Joins [`full_path`](Self::full_path) with dots, e.g. `"users.0.age"`.
    #[must_use]
    pub fn dotted_path(&self) -> String {
        self.full_path()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// The main error type for Typeform operations.
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

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates a duplicate field error.
    #[must_use]
    pub fn duplicate_field(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateField(name.into()))
    }

    /// Creates an inverted bounds error.
    #[must_use]
    pub fn invalid_bounds(kind: &'static str, start: i64, end: i64) -> Self {
        Self::new(ErrorKind::InvalidBounds { kind, start, end })
    }

    /// Returns the validation failure, if this error wraps one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match &self.kind {
            ErrorKind::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorKind::Validation(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value failed a fail-fast check.
    #[error("validation failed: {0}")]
    Validation(ValidationError),

    /// A pattern-constrained string was declared with an invalid pattern.
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// The pattern source as written.
        pattern: String,
        /// Why the pattern did not compile.
        message: String,
    },

    /// A record type declared the same field twice.
    #[error("duplicate field: {0}")]
    DuplicateField(String),

    /// A bounded type was declared with `start > end`.
    #[error("invalid bounds for {kind}: {start} > {end}")]
    InvalidBounds {
        /// The constructor that rejected the bounds.
        kind: &'static str,
        /// Lower bound as given.
        start: i64,
        /// Upper bound as given.
        end: i64,
    },

    /// A record operation was applied to a type that has no fields.
    #[error("not a record type: {0}")]
    NotRecordType(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where a schema fault occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the schema being defined, if known.
    pub source: Option<String>,
    /// Construction frames, outermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schema name.
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
                writeln!(f, "  at {frame}")?;
            }
        }
        Ok(())
    }
}
