//! Integration tests for descriptor introspection and rendering

use typeform_foundation::Value;
use typeform_schema::{Registry, TypeKind};

#[test]
fn display_names() {
    let reg = Registry::new();
    assert_eq!(reg.any().to_string(), "Any");
    assert_eq!(reg.list(reg.num()).to_string(), "List<Num>");
    assert_eq!(reg.option(reg.bool()).to_string(), "Option<Bool>");
    assert_eq!(reg.enum_of(["free", "pro"]).to_string(), "Enum<free|pro>");
    assert_eq!(
        reg.union([reg.str(), reg.int32()]).to_string(),
        "Union<Str|Int32>"
    );
    assert_eq!(reg.int32_range(0, 130).unwrap().to_string(), "Int32Range<0,130>");
    assert_eq!(reg.range_text(1, 50).unwrap().to_string(), "RangeText<1,50>");
    assert_eq!(reg.pattern_str("[a-z]+").unwrap().to_string(), "PatternStr</[a-z]+/>");
}

#[test]
fn struct_display_lists_fields_in_order() {
    let reg = Registry::new();
    let point = reg.struct_of([("x", reg.num()), ("y", reg.num())]).unwrap();
    assert_eq!(point.to_string(), "Struct{x:Num,\ny:Num}");
}

#[test]
fn nested_struct_display_is_indented() {
    let reg = Registry::new();
    let inner = reg.struct_of([("a", reg.str()), ("b", reg.str())]).unwrap();
    let outer = reg.struct_of([("inner", inner), ("n", reg.num())]).unwrap();
    assert_eq!(outer.to_string(), "Struct{inner:Struct{a:Str,\n  b:Str},\nn:Num}");
}

#[test]
fn alias_renders_as_its_name() {
    let reg = Registry::new();
    let user = reg.model("User", [("id", reg.int32())]).unwrap();
    assert_eq!(user.to_string(), "User");
    assert_eq!(user.name(), "User");
    assert!(user.is_alias());
    assert_eq!(reg.list(user).to_string(), "List<User>");
}

#[test]
fn introspection_sees_through_aliases() {
    let reg = Registry::new();
    let signup = reg
        .model(
            "Signup",
            [
                ("name", reg.range_text(1, 50).unwrap()),
                ("age", reg.int32_range(0, 130).unwrap()),
                ("plan", reg.enum_of(["free", "pro"])),
            ],
        )
        .unwrap();

    let names: Vec<&str> = signup
        .fields()
        .unwrap()
        .iter()
        .map(|f| &*f.name)
        .collect();
    assert_eq!(names, vec!["name", "age", "plan"]);

    let name = signup.field("name").unwrap();
    assert_eq!(name.min_length(), Some(1));
    assert_eq!(name.max_length(), Some(50));

    let age = signup.field("age").unwrap();
    assert_eq!((age.start(), age.end()), (Some(0), Some(130)));

    let plan = signup.field("plan").unwrap();
    assert_eq!(
        plan.enum_values(),
        Some(&[Value::from("free"), Value::from("pro")][..])
    );

    assert!(signup.field("missing").is_none());
    assert!(matches!(signup.resolve().kind(), TypeKind::Struct(_)));
}

#[test]
fn introspection_on_other_kinds() {
    let reg = Registry::new();
    let list = reg.list(reg.str());
    assert_eq!(list.item_type(), Some(&reg.str()));
    assert!(list.fields().is_none());

    let pat = reg.alias(reg.pattern_str("[0-9]{5}").unwrap(), "Zip");
    assert_eq!(pat.pattern(), Some("[0-9]{5}"));

    let union = reg.union([reg.str(), reg.num()]);
    assert_eq!(union.union_types().map(<[_]>::len), Some(2));
    assert!(reg.num().start().is_none());
}
