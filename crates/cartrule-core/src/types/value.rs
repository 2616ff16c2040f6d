//! Runtime value types for carts and criteria
//!
//! The `Value` enum represents every record and criteria node the engine
//! sees. It mirrors the JSON data model so already-parsed documents can be
//! handed to the engine without any schema.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping type used for `Value::Object`.
///
/// Keys iterate in sorted order, matching the default `serde_json::Map`.
pub type Map = BTreeMap<String, Value>;

/// Runtime value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 for simplicity, handles both int and float)
    Number(f64),
    /// String value
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Object (key-value map)
    Object(Map),
}

impl Value {
    /// Truthiness as used by criteria shapes and path traversal.
    ///
    /// `null`, `false`, `0`, `NaN` and the empty string are falsy. Arrays and
    /// objects are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Member access for a single path segment.
    ///
    /// Objects are looked up by key, arrays by a numeric index segment.
    /// Scalars have no members.
    pub fn member(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Short name of the variant, used in log and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // Every JSON number has an f64 approximation
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_of_scalars() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(Value::Number(-1.5).is_truthy());
        assert!(!Value::String(String::new()).is_truthy());
        assert!(Value::String("0".to_string()).is_truthy());
    }

    #[test]
    fn test_empty_containers_are_truthy() {
        assert!(Value::Array(vec![]).is_truthy());
        assert!(Value::Object(Map::new()).is_truthy());
    }

    #[test]
    fn test_member_access() {
        let value = Value::from(json!({"user": {"id": 7}, "items": ["a", "b"]}));

        let user = value.member("user").unwrap();
        assert_eq!(user.member("id"), Some(&Value::Number(7.0)));

        let items = value.member("items").unwrap();
        assert_eq!(items.member("1"), Some(&Value::String("b".to_string())));
        assert_eq!(items.member("2"), None);
        assert_eq!(items.member("len"), None);

        assert_eq!(Value::Number(1.0).member("x"), None);
    }

    #[test]
    fn test_from_serde_json() {
        let value = Value::from(json!({
            "count": 42,
            "ratio": 0.5,
            "active": true,
            "tags": ["x", null]
        }));

        let map = value.as_object().unwrap();
        assert_eq!(map.get("count"), Some(&Value::Number(42.0)));
        assert_eq!(map.get("ratio"), Some(&Value::Number(0.5)));
        assert_eq!(map.get("active"), Some(&Value::Bool(true)));
        assert_eq!(
            map.get("tags").and_then(Value::as_array),
            Some(&[Value::String("x".to_string()), Value::Null][..])
        );
    }

    #[test]
    fn test_value_serde_json() {
        let val = Value::Object({
            let mut map = Map::new();
            map.insert("count".to_string(), Value::Number(42.0));
            map.insert("active".to_string(), Value::Bool(true));
            map
        });

        let json = serde_json::to_string(&val).unwrap();
        assert!(json.contains("count"));
        assert!(json.contains("42"));

        let deserialized: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(val, deserialized);
    }

    #[test]
    fn test_object_keys_are_sorted() {
        let value = Value::from(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from("x").type_name(), "string");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
    }
}
