//! Schema descriptor types.

use serde::{Deserialize, Serialize};

use crate::types::JsonObject;

/// Describes the shape of one data source as a JSON Schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// The JSON Schema document. Its internal structure is not checked.
    pub json_schema: JsonObject,
}

impl Schema {
    pub fn new(name: impl Into<String>, json_schema: JsonObject) -> Self {
        Self {
            name: name.into(),
            group: None,
            json_schema,
        }
    }

    pub fn with_group(
        name: impl Into<String>,
        group: impl Into<String>,
        json_schema: JsonObject,
    ) -> Self {
        Self {
            name: name.into(),
            group: Some(group.into()),
            json_schema,
        }
    }
}

/// The schemas a connector discovered, in the order it reported them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemasMessage {
    pub schemas: Vec<Schema>,
}

impl SchemasMessage {
    pub fn new(schemas: Vec<Schema>) -> Self {
        Self { schemas }
    }

    /// Find a schema by name and group.
    pub fn find(&self, name: &str, group: Option<&str>) -> Option<&Schema> {
        self.schemas
            .iter()
            .find(|s| s.name == name && s.group.as_deref() == group)
    }
}
