//! Integration tests for string coercion

use typeform_foundation::{ErrorKind, Value};
use typeform_schema::{Registry, parse_number};

#[test]
fn numeric_types_coerce_to_numbers() {
    let reg = Registry::new();
    assert_eq!(reg.num().parse("2.5"), Value::from(2.5));
    assert_eq!(reg.int32().parse(" 12 "), Value::from(12));
    assert_eq!(reg.int32().parse(""), Value::from(0));
    assert!(reg.num().parse("twelve").as_number().is_some_and(f64::is_nan));
}

#[test]
fn unparseable_number_is_rejected() {
    let num = Registry::new().num();
    let err = num.check(&num.parse("abc")).unwrap();
    assert_eq!(err.message, "Expect Num");
    assert!(num.accepts(&num.parse("-Infinity")));
}

#[test]
fn coercion_does_not_validate() {
    let age = Registry::new().int32_range(0, 130).unwrap();
    let value = age.parse("999");
    assert_eq!(value, Value::from(999));
    assert!(!age.accepts(&value));
}

#[test]
fn bool_and_text() {
    let reg = Registry::new();
    assert_eq!(reg.bool().parse("true"), Value::Bool(true));
    assert_eq!(reg.bool().parse("yes"), Value::Bool(false));
    assert_eq!(reg.str().parse("  x "), Value::from("  x "));
    assert_eq!(reg.option(reg.int32()).parse("5"), Value::from("5"));
}

#[test]
fn parse_number_host_rules() {
    assert_eq!(parse_number("0x10"), 16.0);
    assert_eq!(parse_number("-1e-2"), -0.01);
    assert!(parse_number("1,000").is_nan());
}

#[test]
fn parse_record_through_alias() {
    let reg = Registry::new();
    let signup = reg
        .model(
            "Signup",
            [
                ("name", reg.range_text(1, 50).unwrap()),
                ("age", reg.alias(reg.int32_range(0, 130).unwrap(), "Age")),
                ("plan", reg.enum_of(["free", "pro"])),
            ],
        )
        .unwrap();

    let value = signup
        .parse_record([("name", "Ada"), ("age", "36"), ("plan", "pro")])
        .unwrap();
    assert_eq!(value.get("age"), &Value::from(36));
    assert!(signup.accepts(&value));
}

#[test]
fn parse_record_rejects_non_struct() {
    let reg = Registry::new();
    let err = reg.list(reg.str()).parse_record([("a", "b")]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotRecordType(ref shown) if shown == "List<Str>"));
}
