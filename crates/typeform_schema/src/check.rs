//! Structural validation.
//!
//! `check` walks the value alongside the descriptor and stops at the first
//! mismatch, in field declaration order for structs and index order for
//! lists. A failure inside a container is wrapped in a frame naming the
//! field or index it came from; the frame's own `path` never holds more than
//! that one segment.

use tracing::trace;
use typeform_foundation::{PathSegment, ValidationError, Value};

use crate::descriptor::{Type, TypeKind};

impl Type {
    /// Validates `value`, returning the first mismatch found.
    ///
    /// Never fails for a value of the wrong shape; that is what the returned
    /// error describes.
    #[must_use]
    pub fn check(&self, value: &Value) -> Option<ValidationError> {
        let result = self.check_as(value, self);
        if let Some(err) = &result {
            trace!(
                expected = %err.expected,
                path = ?err.path,
                actual = value.kind_name(),
                "check failed"
            );
        }
        result
    }

    /// Validates `value`, turning a mismatch into an `Err`.
    ///
    /// # Errors
    ///
    /// Returns the error [`check`](Self::check) would have returned.
    pub fn assert(&self, value: &Value) -> Result<(), ValidationError> {
        self.check(value).map_or(Ok(()), Err)
    }

    /// Returns true if `value` satisfies this type.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        self.check_as(value, self).is_none()
    }

    /// Checks against this type's rules while reporting as `shown`.
    ///
    /// Aliases pass themselves down as `shown` so their errors carry the
    /// domain name instead of the structural one.
    fn check_as(&self, value: &Value, shown: &Type) -> Option<ValidationError> {
        let mismatch = || Some(ValidationError::new(shown.to_string()));

        match self.kind() {
            TypeKind::Any => None,
            TypeKind::Str => match value {
                Value::String(_) => None,
                _ => mismatch(),
            },
            TypeKind::Num => match value {
                Value::Number(n) if !n.is_nan() => None,
                _ => mismatch(),
            },
            TypeKind::Bool => match value {
                Value::Bool(_) => None,
                _ => mismatch(),
            },
            TypeKind::Int32 => {
                if is_int32(value) {
                    None
                } else {
                    mismatch()
                }
            }
            TypeKind::List(item) => {
                let Value::List(items) = value else {
                    return mismatch();
                };
                items.iter().enumerate().find_map(|(i, element)| {
                    item.check_as(element, item).map(|err| {
                        ValidationError::nested(shown.to_string(), Some(PathSegment::Index(i)), err)
                    })
                })
            }
            TypeKind::Struct(fields) => {
                if !matches!(value, Value::Record(_)) {
                    return mismatch();
                }
                fields.iter().find_map(|field| {
                    field
                        .ty
                        .check_as(value.get(&field.name), &field.ty)
                        .map(|err| {
                            ValidationError::nested(
                                shown.to_string(),
                                Some(PathSegment::Field(field.name.clone())),
                                err,
                            )
                        })
                })
            }
            TypeKind::Option(item) => {
                if value.is_nil() {
                    return None;
                }
                item.check_as(value, item)
                    .map(|err| ValidationError::nested(shown.to_string(), None, err))
            }
            TypeKind::Enum(values) => {
                if values.iter().any(|allowed| allowed.strict_eq(value)) {
                    None
                } else {
                    mismatch()
                }
            }
            TypeKind::Union(types) => {
                if types.iter().any(|ty| ty.accepts(value)) {
                    None
                } else {
                    mismatch()
                }
            }
            TypeKind::Int32Range { start, end } => {
                // The base check reports as plain Int32.
                let Some(n) = value.as_number().filter(|_| is_int32(value)) else {
                    return Some(ValidationError::new("Int32"));
                };
                if n < f64::from(*start) || f64::from(*end) < n {
                    mismatch()
                } else {
                    None
                }
            }
            TypeKind::RangeText {
                min_length,
                max_length,
            } => {
                let Some(text) = value.as_str() else {
                    return Some(ValidationError::new("Str"));
                };
                let len = text.chars().count();
                if len < *min_length || *max_length < len {
                    mismatch()
                } else {
                    None
                }
            }
            TypeKind::PatternStr(pattern) => {
                let Some(text) = value.as_str() else {
                    return Some(ValidationError::new("Str"));
                };
                if pattern.is_match(text) {
                    None
                } else {
                    mismatch()
                }
            }
            TypeKind::Alias { target, .. } => target.check_as(value, shown),
        }
    }
}

/// True for numbers that survive a round trip through `i32` unchanged.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn is_int32(value: &Value) -> bool {
    matches!(value, Value::Number(n) if f64::from(*n as i32) == *n)
}
