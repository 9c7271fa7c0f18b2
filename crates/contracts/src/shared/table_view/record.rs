use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of tabular data: an open field-name → value mapping.
///
/// Records are produced from typed entities by [`Record::from_entity`] and are
/// treated as read-only for the lifetime of one view session; a refetch
/// replaces the whole store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record(pub Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Convert any serializable entity into a record. Fails only if the
    /// entity does not serialize to a JSON object.
    pub fn from_entity<T: Serialize>(entity: &T) -> Result<Self, String> {
        match serde_json::to_value(entity) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(format!(
                "expected a JSON object, got {}",
                value_kind(&other)
            )),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Scalar value of a field as a string. Numbers and booleans are coerced
    /// to their textual form; `null`, arrays and nested objects count as
    /// absent.
    pub fn field_str(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Numeric value of a field, for sums and averages.
    pub fn field_num(&self, field: &str) -> Option<f64> {
        self.0.get(field)?.as_f64()
    }

    /// Display form of a field for table cells; missing values render as "-".
    pub fn display(&self, field: &str) -> String {
        self.field_str(field).unwrap_or_else(|| "-".to_string())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => Record(map),
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn from_entity_requires_an_object() {
        assert!(Record::from_entity(&42u32).is_err());
        let rec = Record::from_entity(&json!({"id": "x", "n": 5})).unwrap();
        assert_eq!(rec.field_str("n").as_deref(), Some("5"));
    }

    #[test]
    fn scalars_coerce_to_strings() {
        let rec = record(json!({"a": true, "b": 3.5, "c": "text"}));
        assert_eq!(rec.field_str("a").as_deref(), Some("true"));
        assert_eq!(rec.field_str("b").as_deref(), Some("3.5"));
        assert_eq!(rec.field_str("c").as_deref(), Some("text"));
    }

    #[test]
    fn null_and_nested_values_count_as_absent() {
        let rec = record(json!({"a": null, "b": {"x": 1}, "c": [1, 2]}));
        assert_eq!(rec.field_str("a"), None);
        assert_eq!(rec.field_str("b"), None);
        assert_eq!(rec.field_str("c"), None);
        assert_eq!(rec.display("a"), "-");
    }
}
