//! String-to-value coercion.
//!
//! Raw input (typically from a text field) is coerced before it is checked.
//! Coercion never validates: a numeric type turns garbage into `NaN`, and the
//! following `check` is what rejects it.

use std::collections::HashMap;

use typeform_foundation::{Error, ErrorKind, Result, Value};

use crate::descriptor::{Type, TypeKind};

impl Type {
    /// Coerces a raw string to this type's value domain.
    ///
    /// Numeric types parse a number, `Bool` maps `"true"` to `true` and
    /// everything else to `false`, aliases delegate, and every other type
    /// keeps the string as is.
    #[must_use]
    pub fn parse(&self, raw: &str) -> Value {
        match self.kind() {
            TypeKind::Num | TypeKind::Int32 | TypeKind::Int32Range { .. } => {
                Value::Number(parse_number(raw))
            }
            TypeKind::Bool => Value::Bool(raw == "true"),
            TypeKind::Alias { target, .. } => target.parse(raw),
            _ => Value::from(raw),
        }
    }

    /// Builds a record from raw `(field, input)` pairs, coercing each input
    /// with its declared field's [`parse`](Self::parse).
    ///
    /// Declared fields without an input are left absent; inputs that match
    /// no declared field are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotRecordType`] if this type is not a struct (or
    /// an alias of one).
    pub fn parse_record<I, K, S>(&self, raw: I) -> Result<Value>
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: AsRef<str>,
    {
        let fields = self
            .fields()
            .ok_or_else(|| Error::new(ErrorKind::NotRecordType(self.to_string())))?;

        let inputs: HashMap<String, S> = raw
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_owned(), v))
            .collect();

        Ok(Value::Record(
            fields
                .iter()
                .filter_map(|field| {
                    let input = inputs.get(&*field.name)?;
                    Some((field.name.clone(), field.ty.parse(input.as_ref())))
                })
                .collect(),
        ))
    }
}

/// Converts a string to a number the way loosely typed hosts do.
///
/// Surrounding whitespace is ignored and an empty string is `0`. Decimal and
/// exponent forms, `0x`/`0o`/`0b` prefixed integers, and `Infinity` (with an
/// optional sign) are understood; anything else is `NaN`.
#[must_use]
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|p| s.strip_prefix(*p)) {
            return parse_radix(digits, radix);
        }
    }

    // Rust's float grammar also takes "inf", "infinity", and "nan".
    if s.bytes().any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) {
        return f64::NAN;
    }

    s.parse().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}
