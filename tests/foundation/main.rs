//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, ValidationError, Error, and persistent collections.

mod errors;
