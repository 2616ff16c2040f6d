//! Condition types produced by the classifier

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of condition kinds a criteria entry can classify into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    /// Implicit equality (`field: value`), loose comparison
    Basic,
    /// Greater than (`{gt: x}`)
    Gt,
    /// Less than (`{lt: x}`)
    Lt,
    /// Greater than or equal (`{gte: x}`)
    Gte,
    /// Less than or equal (`{lte: x}`)
    Lte,
    /// Membership (`{in: [..]}`), strict comparison
    In,
    /// All nested sub-conditions must pass (`{and: {..}}`)
    And,
    /// At least one nested sub-condition must pass (`{or: {..}}`)
    Or,
}

impl ConditionKind {
    /// Every kind, in evaluation order
    pub const ALL: [ConditionKind; 8] = [
        ConditionKind::Basic,
        ConditionKind::Gt,
        ConditionKind::Lt,
        ConditionKind::Gte,
        ConditionKind::Lte,
        ConditionKind::In,
        ConditionKind::And,
        ConditionKind::Or,
    ];

    /// Operator key as written in criteria. `Basic` has no key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionKind::Basic => "basic",
            ConditionKind::Gt => "gt",
            ConditionKind::Lt => "lt",
            ConditionKind::Gte => "gte",
            ConditionKind::Lte => "lte",
            ConditionKind::In => "in",
            ConditionKind::And => "and",
            ConditionKind::Or => "or",
        }
    }

    /// Look up the kind for an operator key inside a condition object.
    ///
    /// `"basic"` is not an operator key and yields `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "gt" => Some(ConditionKind::Gt),
            "lt" => Some(ConditionKind::Lt),
            "gte" => Some(ConditionKind::Gte),
            "lte" => Some(ConditionKind::Lte),
            "in" => Some(ConditionKind::In),
            "and" => Some(ConditionKind::And),
            "or" => Some(ConditionKind::Or),
            _ => None,
        }
    }

    /// Returns true for gt/lt/gte/lte
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            ConditionKind::Gt | ConditionKind::Lt | ConditionKind::Gte | ConditionKind::Lte
        )
    }

    /// Returns true for and/or
    pub fn is_combinator(&self) -> bool {
        matches!(self, ConditionKind::And | ConditionKind::Or)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified condition borrowed from the criteria tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition<'a> {
    /// Dotted field path (e.g. "items.qty")
    pub field: &'a str,
    /// Operand extracted for the condition's kind
    pub operand: &'a Value,
}

/// Classified conditions grouped by kind.
///
/// Backed by a fixed table indexed by `ConditionKind`; each group keeps the
/// order in which entries were classified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionSet<'a> {
    groups: [Vec<Condition<'a>>; 8],
}

impl<'a> ConditionSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ConditionKind, condition: Condition<'a>) {
        self.groups[kind.index()].push(condition);
    }

    /// Conditions of one kind
    pub fn conditions(&self, kind: ConditionKind) -> &[Condition<'a>] {
        &self.groups[kind.index()]
    }

    /// All conditions, grouped by kind in `ConditionKind::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (ConditionKind, &Condition<'a>)> + '_ {
        ConditionKind::ALL
            .into_iter()
            .flat_map(move |kind| self.conditions(kind).iter().map(move |c| (kind, c)))
    }

    /// Total number of classified conditions
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_key_roundtrip() {
        for kind in ConditionKind::ALL.iter().filter(|k| **k != ConditionKind::Basic) {
            assert_eq!(ConditionKind::from_key(kind.as_str()), Some(*kind));
        }
        assert_eq!(ConditionKind::from_key("basic"), None);
        assert_eq!(ConditionKind::from_key("eq"), None);
    }

    #[test]
    fn test_kind_categories() {
        assert!(ConditionKind::Gte.is_relational());
        assert!(!ConditionKind::In.is_relational());
        assert!(ConditionKind::Or.is_combinator());
        assert!(!ConditionKind::Basic.is_combinator());
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&ConditionKind::Gte).unwrap();
        assert_eq!(json, r#""gte""#);
    }

    #[test]
    fn test_condition_set_grouping() {
        let five = Value::Number(5.0);
        let active = Value::String("active".to_string());

        let mut set = ConditionSet::new();
        assert!(set.is_empty());

        set.push(ConditionKind::Gt, Condition { field: "qty", operand: &five });
        set.push(ConditionKind::Basic, Condition { field: "status", operand: &active });
        set.push(ConditionKind::Gt, Condition { field: "price", operand: &five });

        assert_eq!(set.len(), 3);
        assert_eq!(set.conditions(ConditionKind::Gt).len(), 2);
        assert_eq!(set.conditions(ConditionKind::Gt)[1].field, "price");
        assert!(set.conditions(ConditionKind::Or).is_empty());

        // Iteration follows kind order, then insertion order
        let order: Vec<(ConditionKind, &str)> = set.iter().map(|(k, c)| (k, c.field)).collect();
        assert_eq!(
            order,
            vec![
                (ConditionKind::Basic, "status"),
                (ConditionKind::Gt, "qty"),
                (ConditionKind::Gt, "price"),
            ]
        );
    }
}
