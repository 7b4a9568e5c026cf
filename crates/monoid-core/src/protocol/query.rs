//! Query types.

use serde::{Deserialize, Serialize};

use crate::types::{IdentifierQuery, JsonObject};

/// Identifies which record(s) to look up in one source schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryIdentifier {
    pub schema_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_group: Option<String>,

    /// The field or column to match against.
    pub identifier: String,

    /// The value to match.
    pub identifier_query: IdentifierQuery,

    /// JSON Schema of the source, as reported by the connector.
    pub json_schema: JsonObject,
}

impl QueryIdentifier {
    pub fn new(
        schema_name: impl Into<String>,
        identifier: impl Into<String>,
        identifier_query: impl Into<IdentifierQuery>,
        json_schema: JsonObject,
    ) -> Self {
        Self {
            schema_name: schema_name.into(),
            schema_group: None,
            identifier: identifier.into(),
            identifier_query: identifier_query.into(),
            json_schema,
        }
    }

    /// Set the schema group.
    pub fn in_group(mut self, schema_group: impl Into<String>) -> Self {
        self.schema_group = Some(schema_group.into());
        self
    }
}

/// A batch of lookups sent to a connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<QueryIdentifier>>,
}

impl Query {
    pub fn new(identifiers: Vec<QueryIdentifier>) -> Self {
        Self {
            identifiers: Some(identifiers),
        }
    }

    /// Iterate over the identifiers; an absent list yields nothing.
    pub fn iter(&self) -> impl Iterator<Item = &QueryIdentifier> {
        self.identifiers.iter().flatten()
    }
}
