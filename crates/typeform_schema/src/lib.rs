//! Interned type descriptors, validation, and coercion for Typeform.
//!
//! This crate provides:
//! - [`Type`] - Handles to immutable, interned type descriptors
//! - [`Registry`] - The intern table and every type constructor
//! - [`RegistryConfig`] - Intern-table sizing and diagnostics
//! - Validation (`check`, `assert`) and coercion (`parse`, `parse_record`)
//!
//! # Example
//!
//! ```
//! use typeform_schema::Registry;
//! use typeform_foundation::{PathSegment, Value};
//!
//! let reg = Registry::new();
//! let signup = reg
//!     .model(
//!         "Signup",
//!         [
//!             ("name", reg.range_text(1, 50)?),
//!             ("age", reg.int32_range(0, 130)?),
//!         ],
//!     )?;
//!
//! let err = signup
//!     .check(&Value::record([("name", Value::from("")), ("age", Value::from(200))]))
//!     .expect("empty name is rejected");
//! assert_eq!(err.path, Some(PathSegment::from("name")));
//! # Ok::<(), typeform_foundation::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod check;
pub mod config;
pub mod descriptor;
mod key;
pub mod parse;
pub mod registry;

pub use config::RegistryConfig;
pub use descriptor::{Field, Pattern, Type, TypeKind};
pub use parse::parse_number;
pub use registry::Registry;
