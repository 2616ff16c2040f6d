//! Equality strategies
//!
//! Basic conditions match with loose equality, `in` conditions with strict
//! containment. The two must stay separate: `"5"` loosely equals `5` but is
//! never strictly contained in `[5]`.

use crate::context::Candidate;
use cartrule_core::Value;

/// Loose equality between a resolved candidate and a basic operand.
///
/// - same-typed scalars compare directly (`NaN` equals nothing)
/// - numbers and numeric strings compare as numbers
/// - booleans compare as `0`/`1`
/// - arrays and objects compared with scalars reduce to their string form
///   (`["a"]` equals `"a"`, `[5]` equals `5`)
/// - `null` equals only `null` or a missing slot
pub(crate) fn loose_eq(candidate: Candidate<'_>, operand: &Value) -> bool {
    match candidate {
        Some(value) => loose_eq_values(value, operand),
        None => operand.is_null(),
    }
}

fn loose_eq_values(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,

        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => left == right,
        (Value::Array(_), Value::Object(_)) | (Value::Object(_), Value::Array(_)) => false,

        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            string_to_number(s) == *n
        }
        (Value::Bool(b), other) | (other, Value::Bool(b)) => {
            loose_eq_values(&Value::Number(bool_to_number(*b)), other)
        }

        (Value::Array(_) | Value::Object(_), scalar) | (scalar, Value::Array(_) | Value::Object(_)) => {
            let composite = if matches!(left, Value::Array(_) | Value::Object(_)) { left } else { right };
            loose_eq_values(&Value::String(to_display_string(composite)), scalar)
        }
    }
}

/// Strict containment used by `in`: same type and same value.
///
/// `NaN` is contained in a set holding `NaN`.
pub(crate) fn strictly_contains(candidates: &[Candidate<'_>], needle: &Value) -> bool {
    candidates
        .iter()
        .flatten()
        .any(|candidate| strict_eq(candidate, needle))
}

/// Arrays and objects compare by contents: two parsed inputs never share
/// identity, so `[["c"]]` contains a candidate `["c"]`.
fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
        _ => left == right,
    }
}

fn bool_to_number(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Numeric reading of a string: blank is `0`, unparsable is `NaN`
fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let negative = trimmed.starts_with('-');
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    // Radix prefixes take no sign
    if let Some((digits, radix)) = radix_digits(trimmed) {
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
    }

    // f64::from_str also takes "inf" and "nan", which are not numbers here
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_digits(s: &str) -> Option<(&str, u32)> {
    let prefix = s.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((&s[2..], radix))
}

/// String form of a value when compared against a scalar
fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(to_display_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
