//! Identifier query value type.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// The value a [`QueryIdentifier`](crate::QueryIdentifier) looks up.
///
/// On the wire this is either a JSON string or a JSON integer. Every other
/// JSON kind is rejected, including floats that happen to be whole numbers.
///
/// # Example
///
/// ```
/// use monoid_core::IdentifierQuery;
///
/// let q: IdentifierQuery = serde_json::from_str("42").unwrap();
/// assert_eq!(q, IdentifierQuery::Integer(42));
///
/// let q: IdentifierQuery = serde_json::from_str(r#""a@example.com""#).unwrap();
/// assert_eq!(q.as_str(), Some("a@example.com"));
///
/// assert!(serde_json::from_str::<IdentifierQuery>("1.5").is_err());
/// assert!(serde_json::from_str::<IdentifierQuery>("true").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IdentifierQuery {
    Text(String),
    Integer(i64),
}

impl IdentifierQuery {
    /// Returns the string value, if this is a text query.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            IdentifierQuery::Text(s) => Some(s),
            IdentifierQuery::Integer(_) => None,
        }
    }

    /// Returns the integer value, if this is an integer query.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IdentifierQuery::Text(_) => None,
            IdentifierQuery::Integer(n) => Some(*n),
        }
    }
}

impl fmt::Display for IdentifierQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierQuery::Text(s) => write!(f, "{}", s),
            IdentifierQuery::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for IdentifierQuery {
    fn from(s: String) -> Self {
        IdentifierQuery::Text(s)
    }
}

impl From<&str> for IdentifierQuery {
    fn from(s: &str) -> Self {
        IdentifierQuery::Text(s.to_string())
    }
}

impl From<i64> for IdentifierQuery {
    fn from(n: i64) -> Self {
        IdentifierQuery::Integer(n)
    }
}

impl Serialize for IdentifierQuery {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            IdentifierQuery::Text(s) => serializer.serialize_str(s),
            IdentifierQuery::Integer(n) => serializer.serialize_i64(*n),
        }
    }
}

impl<'de> Deserialize<'de> for IdentifierQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Numbers arrive as arbitrary-precision text, so go through `Value`
        // and accept only what fits in an i64.
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(IdentifierQuery::Text(s)),
            Value::Number(n) => n.as_i64().map(IdentifierQuery::Integer).ok_or_else(|| {
                de::Error::invalid_value(
                    de::Unexpected::Other(&format!("number {}", n)),
                    &"a string or a 64-bit signed integer",
                )
            }),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a string or an integer",
            )),
        }
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Array(_) => de::Unexpected::Seq,
        _ => de::Unexpected::Map,
    }
}
