//! Free-form JSON object type.
//!
//! Schema documents, record data and connector specs are arbitrary JSON,
//! but the protocol requires each of them to be a key-value mapping.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// A JSON value was expected to be an object but was something else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a JSON object, found {found}")]
pub struct NotAnObject {
    /// The JSON kind that was found instead.
    pub found: &'static str,
}

/// A JSON object with arbitrary values.
///
/// This type guarantees that the top level is a mapping from string keys
/// to JSON values. Nothing is enforced about the values themselves, and
/// key order is preserved through a round trip.
///
/// # Example
///
/// ```
/// use monoid_core::JsonObject;
/// use serde_json::json;
///
/// let data = JsonObject::new(json!({"id": 1, "email": "a@example.com"})).unwrap();
/// assert_eq!(data.get("id"), Some(&json!(1)));
/// assert!(JsonObject::new(json!([1, 2])).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonObject(Map<String, Value>);

impl JsonObject {
    /// Create a `JsonObject` from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object.
    pub fn new(value: Value) -> Result<Self, NotAnObject> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(NotAnObject {
                found: kind_of(&other),
            }),
        }
    }

    /// Create an empty object.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get a field from the object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert a field, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Get a reference to the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume and return the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Consume and return the object as a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<Map<String, Value>> for JsonObject {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for JsonObject {
    type Error = NotAnObject;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JsonObject> for Value {
    fn from(object: JsonObject) -> Self {
        object.into_value()
    }
}

impl Serialize for JsonObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for JsonObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        JsonObject::new(value).map_err(serde::de::Error::custom)
    }
}
