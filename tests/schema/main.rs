//! Integration tests for the schema layer
//!
//! Tests type construction and interning, structural checks, and coercion.

mod introspection;
mod parsing;
