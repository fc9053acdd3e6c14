//! Integration tests for Error types
//!
//! Tests validation error chains, path reconstruction, and schema faults.

use typeform_foundation::{Error, ErrorContext, ErrorKind, PathSegment, ValidationError};

// =============================================================================
// ValidationError
// =============================================================================

#[test]
fn leaf_error_states_expected_type() {
    let err = ValidationError::new("Int32Range<0,130>");
    assert_eq!(err.to_string(), "Expect Int32Range<0,130>");
    assert_eq!(err.root_cause(), &err);
    assert!(err.full_path().is_empty());
    assert_eq!(err.dotted_path(), "");
}

#[test]
fn nested_error_keeps_single_segment() {
    let err = ValidationError::nested(
        "Outer",
        Some(PathSegment::from("inner")),
        ValidationError::nested(
            "Inner",
            Some(PathSegment::from("leaf")),
            ValidationError::new("Str"),
        ),
    );

    assert_eq!(err.path(), Some(&PathSegment::from("inner")));
    assert_eq!(err.related().and_then(ValidationError::path), Some(&PathSegment::from("leaf")));
    assert_eq!(err.dotted_path(), "inner.leaf");
}

#[test]
fn nested_message_concatenates_chain() {
    let err = ValidationError::nested(
        "List<Str>",
        Some(PathSegment::Index(3)),
        ValidationError::new("Str"),
    );
    assert_eq!(err.message, "Expect List<Str>\n3: Expect Str");
}

#[test]
fn option_frames_have_no_segment() {
    let err = ValidationError::nested(
        "Profile",
        Some(PathSegment::from("bio")),
        ValidationError::nested("Option<Str>", None, ValidationError::new("Str")),
    );
    assert_eq!(err.chain().count(), 3);
    assert_eq!(err.full_path(), vec![PathSegment::from("bio")]);
}

#[test]
fn path_segment_accessors() {
    assert_eq!(PathSegment::from("a").as_field(), Some("a"));
    assert_eq!(PathSegment::from("a").as_index(), None);
    assert_eq!(PathSegment::from(4usize).as_index(), Some(4));
    assert_eq!(PathSegment::Index(4).to_string(), "4");
}

// =============================================================================
// Error
// =============================================================================

#[test]
fn error_from_validation_failure() {
    let err = Error::from(ValidationError::new("Bool"));
    assert!(matches!(err.kind, ErrorKind::Validation(_)));
    assert!(err.as_validation().is_some());
}

#[test]
fn error_invalid_pattern() {
    let err = Error::invalid_pattern("(", "unclosed group");
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
    let msg = err.to_string();
    assert!(msg.contains("unclosed group"));
    assert!(err.as_validation().is_none());
}

#[test]
fn error_duplicate_field_with_context() {
    let err = Error::duplicate_field("email")
        .with_context(ErrorContext::new().with_source("Signup"));
    assert!(err.to_string().contains("email"));
    assert_eq!(
        err.context.and_then(|c| c.source),
        Some("Signup".to_string())
    );
}

#[test]
fn error_kind_internal() {
    let err = Error::new(ErrorKind::Internal("boom".into()));
    assert_eq!(err.to_string(), "internal error: boom");
}
