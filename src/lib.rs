//! Typeform - composable runtime type descriptors
//!
//! This crate re-exports all layers of the Typeform system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: typeform_schema     - Type descriptors, interning registry, check/parse
//! Layer 0: typeform_foundation - Values, collections, validation errors
//! ```

pub use typeform_foundation as foundation;
pub use typeform_schema as schema;

pub use typeform_foundation::{Error, PathSegment, Result, ValidationError, Value};
pub use typeform_schema::{Registry, RegistryConfig, Type, TypeKind};
