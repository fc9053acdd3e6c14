//! Error reporting across nested schemas.

use typeform::{Error, PathSegment, Registry, ValidationError, Value};
use typeform_foundation::ErrorKind;

fn team(reg: &Registry) -> typeform::Type {
    let member = reg
        .model(
            "Member",
            [
                ("handle", reg.pattern_str("[a-z][a-z0-9_]*").unwrap()),
                ("role", reg.enum_of(["owner", "admin", "viewer"])),
            ],
        )
        .unwrap();
    reg.model(
        "Team",
        [
            ("name", reg.range_text(1, 30).unwrap()),
            ("members", reg.list(member)),
        ],
    )
    .unwrap()
}

fn member(handle: &str, role: &str) -> Value {
    Value::record([("handle", handle), ("role", role)])
}

#[test]
fn nested_failure_path() {
    let reg = Registry::new();
    let value = Value::record([
        ("name", Value::from("core")),
        (
            "members",
            Value::list([member("ada", "owner"), member("bob", "guest")]),
        ),
    ]);

    let err = team(&reg).check(&value).unwrap();
    assert_eq!(
        err.full_path(),
        vec![
            PathSegment::from("members"),
            PathSegment::Index(1),
            PathSegment::from("role"),
        ]
    );
    let names: Vec<&str> = err.chain().map(|e| e.expected.as_str()).collect();
    assert_eq!(
        names,
        vec!["Team", "List<Member>", "Member", "Enum<owner|admin|viewer>"]
    );
}

#[test]
fn assert_converts_into_error() {
    fn load(reg: &Registry, value: &Value) -> typeform::Result<()> {
        team(reg).assert(value)?;
        Ok(())
    }

    let reg = Registry::new();
    let err: Error = load(&reg, &Value::from("not a team")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Validation(_)));
    assert_eq!(
        err.as_validation().map(ValidationError::dotted_path),
        Some(String::new())
    );
}

#[test]
fn report_is_a_std_error_chain() {
    use std::error::Error as _;

    let reg = Registry::new();
    let value = Value::record([
        ("name", Value::from("core")),
        ("members", Value::list([member("Bad Handle", "viewer")])),
    ]);

    let err = team(&reg).check(&value).unwrap();
    let mut depth = 1;
    let mut cur: &dyn std::error::Error = &err;
    while let Some(next) = cur.source() {
        depth += 1;
        cur = next;
    }
    assert_eq!(depth, 4);
    assert_eq!(cur.to_string(), "Expect PatternStr</[a-z][a-z0-9_]*/>");
}

#[test]
fn global_registry_end_to_end() {
    let reg = Registry::global();
    let tags = reg.list(reg.range_text(1, 8).unwrap());
    assert!(tags.accepts(&Value::list(["rust", "forms"])));
    assert_eq!(
        tags.check(&Value::list(["ok", "much-too-long"]))
            .unwrap()
            .dotted_path(),
        "1"
    );
}
