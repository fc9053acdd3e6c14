//! Canonical keys for structural type identity.
//!
//! Every constructor derives a key from its parameters before touching the
//! intern table. Keys are tag-prefixed and quote every user-supplied string,
//! so distinct types never collide and identical constructions always do.

use std::fmt::Write;

use typeform_foundation::Value;

use crate::descriptor::{Field, Type};

pub(crate) const ANY: &str = "Any";
pub(crate) const STR: &str = "Str";
pub(crate) const NUM: &str = "Num";
pub(crate) const BOOL: &str = "Bool";
pub(crate) const INT32: &str = "Int32";

pub(crate) fn list(item: &Type) -> String {
    format!("List<{}>", item.type_id())
}

pub(crate) fn option(item: &Type) -> String {
    format!("Option<{}>", item.type_id())
}

pub(crate) fn structure(fields: &[Field]) -> String {
    let mut key = String::from("Struct{");
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            key.push(',');
        }
        // Writing into a String cannot fail.
        let _ = write!(key, "{:?}:{}", field.name, field.ty.type_id());
    }
    key.push('}');
    key
}

pub(crate) fn enumeration(values: &[Value]) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|v| match v {
            // 0 and -0 are the same member.
            Value::Number(n) if *n == 0.0 => "0".to_owned(),
            _ => format!("{v:?}"),
        })
        .collect();
    format!("Enum<{}>", parts.join("|"))
}

pub(crate) fn union(types: &[Type]) -> String {
    let parts: Vec<&str> = types.iter().map(Type::type_id).collect();
    format!("Union<{}>", parts.join("|"))
}

pub(crate) fn int32_range(start: i32, end: i32) -> String {
    format!("Int32Range<{start},{end}>")
}

pub(crate) fn range_text(min_length: usize, max_length: usize) -> String {
    format!("RangeText<{min_length},{max_length}>")
}

pub(crate) fn pattern_str(source: &str) -> String {
    format!("PatternStr<{source:?}>")
}

pub(crate) fn alias(name: &str, target: &Type) -> String {
    format!("Alias<{name:?}={}>", target.type_id())
}
