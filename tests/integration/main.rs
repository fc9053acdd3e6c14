//! Cross-layer integration tests for Typeform
//!
//! Tests that exercise schemas end to end, from raw form input to reports.

mod properties;
mod reports;
