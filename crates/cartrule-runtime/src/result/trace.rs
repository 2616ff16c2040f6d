//! Condition-level evaluation traces

use cartrule_core::{ConditionKind, Value};
use serde::{Deserialize, Serialize};

/// Trace of a single condition evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionTrace {
    /// Field path the condition applies to
    pub field: String,

    /// Classified condition kind
    pub kind: ConditionKind,

    /// Operand the candidates were checked against
    pub operand: Value,

    /// Candidates resolved from the record. Only set on top-level
    /// conditions; nested and/or entries share their parent's candidates.
    /// Missing slots are recorded as `None`. Serialized, a missing slot and
    /// an explicit `null` both become `null`, so a deserialized report reads
    /// every such slot back as a missing one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Option<Value>>>,

    /// The evaluation result
    pub result: bool,

    /// Sub-condition traces for and/or
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<Vec<ConditionTrace>>,

    /// Why the condition failed without being evaluated, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ConditionTrace {
    /// Create a trace for a leaf condition
    pub fn new(field: &str, kind: ConditionKind, operand: &Value, result: bool) -> Self {
        Self {
            field: field.to_string(),
            kind,
            operand: operand.clone(),
            candidates: None,
            result,
            nested: None,
            note: None,
        }
    }

    /// Create a trace for an and/or group
    pub fn group(
        field: &str,
        kind: ConditionKind,
        operand: &Value,
        nested: Vec<ConditionTrace>,
        result: bool,
    ) -> Self {
        Self {
            nested: Some(nested),
            ..Self::new(field, kind, operand, result)
        }
    }

    pub fn with_candidates(mut self, candidates: Vec<Option<Value>>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
