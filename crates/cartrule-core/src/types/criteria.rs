//! Criteria tree: the top-level mapping from field paths to condition specs

use super::value::{Map, Value};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// A criteria tree.
///
/// Each entry maps a dotted field path (e.g. `"items.qty"`) to a condition
/// specification: either a plain value (implicit equality) or an operator
/// object such as `{"gte": 100}` or `{"or": {"lt": 5, "gt": 50}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria(Map);

impl Criteria {
    /// Create an empty criteria tree (always satisfied)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the condition spec for a field path
    pub fn with(mut self, field: impl Into<String>, spec: impl Into<Value>) -> Self {
        self.0.insert(field.into(), spec.into());
        self
    }

    /// Iterate over `(field path, condition spec)` entries
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map> for Criteria {
    fn from(map: Map) -> Self {
        Criteria(map)
    }
}

impl TryFrom<Value> for Criteria {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Criteria(map)),
            other => Err(CoreError::InvalidCriteria(format!(
                "expected an object at the top level, found {}",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<serde_json::Value> for Criteria {
    type Error = CoreError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Criteria::try_from(Value::from(value))
    }
}
