//! monoid-core - Validated message types for the Monoid connector protocol.
//!
//! Silo connectors and the host exchange JSON documents describing schemas,
//! data records, connector specs and validation results. This crate
//! declares those shapes, validates them on deserialization, and reads and
//! writes the newline-delimited message streams connectors produce.
//!
//! # Example
//!
//! ```
//! use monoid_core::{Message, Protocol, Record, JsonObject};
//! use serde_json::json;
//!
//! let data = JsonObject::new(json!({"id": 1})).unwrap();
//! let protocol = Protocol::new(Record::new("users", data));
//!
//! let value = monoid_core::to_value(&protocol).unwrap();
//! assert_eq!(value["message"]["type"], "RECORD");
//!
//! let back: Protocol = monoid_core::from_value(value).unwrap();
//! assert!(matches!(back.message, Some(Message::Record(_))));
//! ```

pub mod error;
pub mod protocol;
pub mod shape;
pub mod stream;
pub mod types;

pub use error::{Error, ValidationError};
pub use protocol::{
    Message, MessageType, Protocol, Query, QueryIdentifier, RawMessage, Record, Schema,
    SchemasMessage, SiloSpec, Status, ValidateMessage,
};
pub use shape::{Document, ProtocolShape, Shape, from_str, from_value, parse, serialize, to_value};
pub use stream::{MessageReader, MessageWriter};
pub use types::{IdentifierQuery, JsonObject};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
