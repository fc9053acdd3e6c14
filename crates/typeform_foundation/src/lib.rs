//! Values, persistent collections, and the validation error model for Typeform.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value type checked by type descriptors
//! - [`ValidationError`] - Path-aware, chained reports of failed checks
//! - [`Error`] - Schema faults and fail-fast failures with context
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod value;

pub use collections::{LtMap, LtVec};
pub use error::{Error, ErrorContext, ErrorKind, PathSegment, ValidationError};
pub use value::Value;

/// Result type alias using Typeform's Error type.
pub type Result<T> = std::result::Result<T, Error>;
