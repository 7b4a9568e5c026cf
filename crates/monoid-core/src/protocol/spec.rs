//! Connector specification type.

use serde::{Deserialize, Serialize};

use crate::types::JsonObject;

/// Describes what configuration a silo connector accepts.
///
/// Both fields are optional; an empty spec is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiloSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Configuration schema for the connector, usually JSON Schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<JsonObject>,
}

impl SiloSpec {
    pub fn new(name: impl Into<String>, spec: JsonObject) -> Self {
        Self {
            name: Some(name.into()),
            spec: Some(spec),
        }
    }

    /// A spec that only carries the connector name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            spec: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_spec_is_valid() {
        let spec: SiloSpec = serde_json::from_value(json!({})).unwrap();
        assert_eq!(spec, SiloSpec::default());
        assert_eq!(serde_json::to_value(&spec).unwrap(), json!({}));
    }

    #[test]
    fn spec_must_be_object() {
        let result: Result<SiloSpec, _> = serde_json::from_value(json!({"spec": "postgres"}));
        assert!(result.is_err());
    }
}
