//! Comparison semantics over dynamically-typed values.
//!
//! `Value` trees have no reference identity, so "loose" equality is defined
//! recursively: scalars coerce the way a dynamic test fixture expects
//! (`true == 1 == "1"`, `1 == 1.0`), while arrays and objects compare
//! element-wise with loose equality at the leaves. Strict deep equality is
//! `Value::eq`, which distinguishes number representations and never coerces.

use serde_json::Value;

/// Loose (coercive) equality.
///
/// Rules:
/// - `Null` equals only `Null`.
/// - Two strings compare exactly (no numeric coercion between strings).
/// - Booleans, numbers, and numeric strings compare by numeric value.
/// - Arrays and objects compare structurally, applying these rules at
///   every leaf. Object comparison requires the same key set.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(v, w)| loose_eq(v, w))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| loose_eq(v, w)))
        }
        _ => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Truthiness of a value.
///
/// `Null` is falsy; booleans are themselves; numbers are falsy when zero or
/// NaN; strings are falsy when empty; arrays and objects are always truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Numeric view of a scalar, if it has one.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
