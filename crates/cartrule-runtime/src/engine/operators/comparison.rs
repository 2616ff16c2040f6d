//! Relational operator execution (gt/lt/gte/lte)

use cartrule_core::{ConditionKind, Value};
use std::cmp::Ordering;

/// Compare two values with native ordering.
///
/// Only number/number and string/string pairs are ordered; strings compare
/// lexically. Anything else, including NaN, is incomparable.
pub(crate) fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Execute a relational comparison of `left` against the bound `right`.
///
/// Incomparable pairs never satisfy any relation.
pub(crate) fn execute_compare(left: &Value, kind: ConditionKind, right: &Value) -> bool {
    let Some(ordering) = compare_values(left, right) else {
        tracing::debug!(
            "Incomparable values {} and {} for '{}', returning false",
            left.type_name(),
            right.type_name(),
            kind
        );
        return false;
    };

    match kind {
        ConditionKind::Gt => ordering == Ordering::Greater,
        ConditionKind::Lt => ordering == Ordering::Less,
        ConditionKind::Gte => ordering != Ordering::Less,
        ConditionKind::Lte => ordering != Ordering::Greater,
        _ => false,
    }
}
