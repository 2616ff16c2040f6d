//! Condition classifier
//!
//! Turns the loosely-shaped entries of a criteria tree into typed
//! conditions:
//! - `status: "active"` → basic equality
//! - `price: {gte: 100}` → relational
//! - `tags: {in: ["sale", "new"]}` → membership
//! - `qty: {or: {lt: 2, gt: 10}}` → combinator over nested conditions
//!
//! Shapes that match no kind are skipped, never rejected.

use super::types::{Condition, ConditionKind, ConditionSet};
use crate::types::{Criteria, Map, Value};

/// Classify the top-level entries of a criteria tree.
///
/// Nested and/or operands are left unclassified; the evaluator classifies
/// them with [`classify_operator`] when the combinator fires.
pub fn classify(criteria: &Criteria) -> ConditionSet<'_> {
    let mut set = ConditionSet::new();

    for (field, spec) in criteria.entries() {
        if spec.is_null() {
            log::trace!("Skipping null condition for field '{}'", field);
            continue;
        }

        let kinds = classify_spec(spec);
        if kinds.is_empty() {
            log::debug!("Unrecognized condition shape for field '{}', skipping", field);
        }

        for (kind, operand) in kinds {
            set.push(kind, Condition { field, operand });
        }
    }

    set
}

/// Classify a single condition spec into every kind it matches.
///
/// A spec can match several kinds at once, e.g. `{in: [..], and: {..}}`.
pub fn classify_spec(spec: &Value) -> Vec<(ConditionKind, &Value)> {
    match spec {
        Value::Object(map) => classify_object(map),
        other => vec![(ConditionKind::Basic, other)],
    }
}

/// Classify a single-key shape `{key: operand}`.
///
/// Used for the entries of an and/or operand. Returns `None` for unknown
/// keys and for operands failing their kind's shape check.
pub fn classify_operator(key: &str, operand: &Value) -> Option<ConditionKind> {
    let kind = ConditionKind::from_key(key)?;
    let accepted = match kind {
        // A falsy bound (0, false, "") counts as no bound at all
        ConditionKind::Gt | ConditionKind::Lt | ConditionKind::Gte | ConditionKind::Lte => {
            operand.is_truthy()
        }
        ConditionKind::In => is_membership_operand(operand),
        ConditionKind::And | ConditionKind::Or => is_combinator_operand(operand),
        ConditionKind::Basic => false,
    };
    accepted.then_some(kind)
}

fn classify_object(map: &Map) -> Vec<(ConditionKind, &Value)> {
    // Single-key objects: every rule reduces to the operator shape check
    if map.len() == 1 {
        return map
            .iter()
            .filter_map(|(key, operand)| {
                classify_operator(key, operand).map(|kind| (kind, operand))
            })
            .collect();
    }

    // Relational kinds demand exactly one key; in/and/or only their own
    let mut kinds = Vec::new();
    for kind in [ConditionKind::In, ConditionKind::And, ConditionKind::Or] {
        if let Some(operand) = map.get(kind.as_str()) {
            if classify_operator(kind.as_str(), operand).is_some() {
                kinds.push((kind, operand));
            }
        }
    }
    kinds
}

fn is_membership_operand(operand: &Value) -> bool {
    matches!(operand, Value::Array(_))
}

fn is_combinator_operand(operand: &Value) -> bool {
    operand.as_object().map_or(false, |nested| nested.len() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn criteria(json: serde_json::Value) -> Criteria {
        Criteria::try_from(json).unwrap()
    }

    fn kinds_of(spec: serde_json::Value) -> Vec<ConditionKind> {
        let spec = Value::from(spec);
        classify_spec(&spec).into_iter().map(|(kind, _)| kind).collect()
    }

    #[test]
    fn test_scalar_is_basic() {
        assert_eq!(kinds_of(json!("active")), vec![ConditionKind::Basic]);
        assert_eq!(kinds_of(json!(0)), vec![ConditionKind::Basic]);
        assert_eq!(kinds_of(json!(false)), vec![ConditionKind::Basic]);
    }

    #[test]
    fn test_array_spec_is_basic() {
        assert_eq!(kinds_of(json!(["a", "b"])), vec![ConditionKind::Basic]);
    }

    #[test]
    fn test_relational_kinds() {
        assert_eq!(kinds_of(json!({"gt": 5})), vec![ConditionKind::Gt]);
        assert_eq!(kinds_of(json!({"lt": 5})), vec![ConditionKind::Lt]);
        assert_eq!(kinds_of(json!({"gte": "a"})), vec![ConditionKind::Gte]);
        assert_eq!(kinds_of(json!({"lte": -1})), vec![ConditionKind::Lte]);
    }

    #[test]
    fn test_relational_falsy_bound_is_skipped() {
        assert!(kinds_of(json!({"gt": 0})).is_empty());
        assert!(kinds_of(json!({"lt": false})).is_empty());
        assert!(kinds_of(json!({"gte": ""})).is_empty());
        assert!(kinds_of(json!({"lte": null})).is_empty());
    }

    #[test]
    fn test_relational_requires_single_key() {
        assert!(kinds_of(json!({"gt": 1, "lt": 10})).is_empty());
    }

    #[test]
    fn test_in_requires_array() {
        assert_eq!(kinds_of(json!({"in": ["a"]})), vec![ConditionKind::In]);
        assert_eq!(kinds_of(json!({"in": []})), vec![ConditionKind::In]);
        assert!(kinds_of(json!({"in": "a"})).is_empty());
    }

    #[test]
    fn test_combinator_requires_two_entries() {
        assert_eq!(kinds_of(json!({"and": {"gt": 1, "lt": 9}})), vec![ConditionKind::And]);
        assert_eq!(kinds_of(json!({"or": {"gt": 1, "lt": 9}})), vec![ConditionKind::Or]);
        assert!(kinds_of(json!({"and": {"gt": 1}})).is_empty());
        assert!(kinds_of(json!({"or": ["gt", "lt"]})).is_empty());
    }

    #[test]
    fn test_multiple_kinds_from_one_entry() {
        let kinds = kinds_of(json!({
            "in": ["a", "b"],
            "or": {"gt": "a", "lt": "z"},
            "gt": 3
        }));
        assert_eq!(kinds, vec![ConditionKind::In, ConditionKind::Or]);
    }

    #[test]
    fn test_unknown_key_is_skipped() {
        assert!(kinds_of(json!({"foo": 1})).is_empty());
        assert!(kinds_of(json!({})).is_empty());
    }

    #[test]
    fn test_classify_groups_by_kind() {
        let criteria = criteria(json!({
            "price": {"gte": 100},
            "status": "active",
            "tags": {"in": ["sale"]},
            "qty": {"gt": 1},
            "weight": {"foo": 1},
            "coupon": null
        }));

        let set = classify(&criteria);
        assert_eq!(set.len(), 4);

        let basic = set.conditions(ConditionKind::Basic);
        assert_eq!(basic.len(), 1);
        assert_eq!(basic[0].field, "status");
        assert_eq!(basic[0].operand, &Value::String("active".to_string()));

        assert_eq!(set.conditions(ConditionKind::Gte)[0].field, "price");
        assert_eq!(set.conditions(ConditionKind::Gt)[0].field, "qty");
        assert_eq!(set.conditions(ConditionKind::In)[0].field, "tags");
    }

    #[test]
    fn test_classify_leaves_combinator_operand_unclassified() {
        let criteria = criteria(json!({
            "status": {"and": {"in": ["active"], "gt": "a"}}
        }));

        let set = classify(&criteria);
        assert_eq!(set.len(), 1);

        let and = set.conditions(ConditionKind::And);
        assert_eq!(and.len(), 1);
        assert_eq!(and[0].operand.as_object().map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_classify_operator() {
        assert_eq!(classify_operator("gt", &Value::Number(4.0)), Some(ConditionKind::Gt));
        assert_eq!(classify_operator("gt", &Value::Number(0.0)), None);
        assert_eq!(
            classify_operator("in", &Value::Array(vec![Value::Null])),
            Some(ConditionKind::In)
        );
        assert_eq!(classify_operator("basic", &Value::Number(1.0)), None);
        assert_eq!(classify_operator("eq", &Value::Number(1.0)), None);
    }

    #[test]
    fn test_classify_empty_criteria() {
        let empty = Criteria::new();
        let set = classify(&empty);
        assert!(set.is_empty());
    }
}
