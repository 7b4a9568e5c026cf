//! Data record type.

use serde::{Deserialize, Serialize};

use crate::types::JsonObject;

/// One data row read from a silo, tagged with the schema it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Name of the originating schema.
    pub schema_name: String,

    /// Group of the originating schema, if the silo groups its schemas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_group: Option<String>,

    /// The row itself.
    pub data: JsonObject,
}

impl Record {
    /// Create an ungrouped record.
    pub fn new(schema_name: impl Into<String>, data: JsonObject) -> Self {
        Self {
            schema_name: schema_name.into(),
            schema_group: None,
            data,
        }
    }

    /// Create a record belonging to a schema group.
    pub fn with_group(
        schema_name: impl Into<String>,
        schema_group: impl Into<String>,
        data: JsonObject,
    ) -> Self {
        Self {
            schema_name: schema_name.into(),
            schema_group: Some(schema_group.into()),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_without_group() {
        let record: Record =
            serde_json::from_value(json!({"schema_name": "users", "data": {"id": 1}})).unwrap();
        assert_eq!(record.schema_name, "users");
        assert!(record.schema_group.is_none());
        assert_eq!(record.data.get("id").unwrap(), 1);
    }

    #[test]
    fn null_group_is_absent() {
        let record: Record = serde_json::from_value(
            json!({"schema_name": "users", "schema_group": null, "data": {}}),
        )
        .unwrap();
        assert!(record.schema_group.is_none());
    }

    #[test]
    fn missing_data_fails() {
        let result: Result<Record, _> = serde_json::from_value(json!({"schema_name": "users"}));
        assert!(result.unwrap_err().to_string().contains("missing field `data`"));
    }

    #[test]
    fn data_must_be_object() {
        let result: Result<Record, _> =
            serde_json::from_value(json!({"schema_name": "users", "data": [1, 2]}));
        assert!(result.is_err());
    }

    #[test]
    fn serialize_omits_absent_group() {
        let record = Record::new("users", JsonObject::empty());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"schema_name": "users", "data": {}})
        );

        let grouped = Record::with_group("users", "public", JsonObject::empty());
        assert_eq!(
            serde_json::to_value(&grouped).unwrap()["schema_group"],
            "public"
        );
    }
}
