//! Shape validator.
//!
//! Turns untyped JSON into a validated protocol shape and back. The typed
//! entry points ([`from_value`], [`from_str`], [`to_value`]) work on any
//! [`ProtocolShape`]; [`parse`] and [`serialize`] pick the shape at runtime.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::{Error, ValidationError};
use crate::protocol::{
    Message, Protocol, Query, QueryIdentifier, Record, Schema, SchemasMessage, SiloSpec,
    ValidateMessage,
};
use crate::Result;

/// Names one of the protocol shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    QueryIdentifier,
    Record,
    Schema,
    SiloSpec,
    ValidateMessage,
    SchemasMessage,
    Message,
    Protocol,
    Query,
}

impl Shape {
    /// Every shape, leaf shapes first.
    pub const ALL: [Shape; 9] = [
        Shape::QueryIdentifier,
        Shape::Record,
        Shape::Schema,
        Shape::SiloSpec,
        Shape::ValidateMessage,
        Shape::SchemasMessage,
        Shape::Message,
        Shape::Protocol,
        Shape::Query,
    ];

    /// Kebab-case name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::QueryIdentifier => "query-identifier",
            Shape::Record => "record",
            Shape::Schema => "schema",
            Shape::SiloSpec => "silo-spec",
            Shape::ValidateMessage => "validate-message",
            Shape::SchemasMessage => "schemas-message",
            Shape::Message => "message",
            Shape::Protocol => "protocol",
            Shape::Query => "query",
        }
    }

    /// Name of the Rust type implementing this shape.
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::QueryIdentifier => "QueryIdentifier",
            Shape::Record => "Record",
            Shape::Schema => "Schema",
            Shape::SiloSpec => "SiloSpec",
            Shape::ValidateMessage => "ValidateMessage",
            Shape::SchemasMessage => "SchemasMessage",
            Shape::Message => "Message",
            Shape::Protocol => "Protocol",
            Shape::Query => "Query",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The string did not name a known shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape '{0}'")]
pub struct UnknownShape(pub String);

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name() == s || shape.type_name() == s)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

/// A type that is one of the protocol shapes.
pub trait ProtocolShape: Serialize + DeserializeOwned {
    const SHAPE: Shape;
}

macro_rules! protocol_shape {
    ($($ty:ident),* $(,)?) => {
        $(
            impl ProtocolShape for $ty {
                const SHAPE: Shape = Shape::$ty;
            }
        )*
    };
}

protocol_shape!(
    QueryIdentifier,
    Record,
    Schema,
    SiloSpec,
    ValidateMessage,
    SchemasMessage,
    Message,
    Protocol,
    Query,
);

/// A validated instance of any shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    QueryIdentifier(QueryIdentifier),
    Record(Record),
    Schema(Schema),
    SiloSpec(SiloSpec),
    ValidateMessage(ValidateMessage),
    SchemasMessage(SchemasMessage),
    Message(Message),
    Protocol(Protocol),
    Query(Query),
}

impl Document {
    /// The shape this document was validated against.
    pub fn shape(&self) -> Shape {
        match self {
            Document::QueryIdentifier(_) => Shape::QueryIdentifier,
            Document::Record(_) => Shape::Record,
            Document::Schema(_) => Shape::Schema,
            Document::SiloSpec(_) => Shape::SiloSpec,
            Document::ValidateMessage(_) => Shape::ValidateMessage,
            Document::SchemasMessage(_) => Shape::SchemasMessage,
            Document::Message(_) => Shape::Message,
            Document::Protocol(_) => Shape::Protocol,
            Document::Query(_) => Shape::Query,
        }
    }
}

/// Validate untyped JSON as the given shape.
///
/// # Errors
///
/// Returns [`Error::Validation`] if a required field is missing, a field
/// has the wrong type, or an enum literal is not recognised.
///
/// # Example
///
/// ```
/// use monoid_core::shape::{parse, Document, Shape};
/// use serde_json::json;
///
/// let doc = parse(Shape::Schema, json!({"name": "users", "json_schema": {"type": "object"}})).unwrap();
/// let Document::Schema(schema) = doc else { panic!("expected a schema") };
/// assert!(schema.group.is_none());
/// ```
pub fn parse(shape: Shape, input: Value) -> Result<Document> {
    let document = match shape {
        Shape::QueryIdentifier => Document::QueryIdentifier(from_value(input)?),
        Shape::Record => Document::Record(from_value(input)?),
        Shape::Schema => Document::Schema(from_value(input)?),
        Shape::SiloSpec => Document::SiloSpec(from_value(input)?),
        Shape::ValidateMessage => Document::ValidateMessage(from_value(input)?),
        Shape::SchemasMessage => Document::SchemasMessage(from_value(input)?),
        Shape::Message => Document::Message(from_value(input)?),
        Shape::Protocol => Document::Protocol(from_value(input)?),
        Shape::Query => Document::Query(from_value(input)?),
    };
    Ok(document)
}

/// Serialize a document back to JSON. Absent optional fields are omitted.
pub fn serialize(document: &Document) -> Result<Value> {
    Ok(serde_json::to_value(document)?)
}

/// Validate untyped JSON as a specific shape type.
pub fn from_value<T: ProtocolShape>(value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| Error::Validation(ValidationError::from_serde(T::SHAPE, &e)))
}

/// Parse JSON text as a specific shape type.
///
/// Text that is not JSON at all is reported as [`Error::Json`]; JSON that
/// does not fit the shape as [`Error::Validation`].
pub fn from_str<T: ProtocolShape>(text: &str) -> Result<T> {
    let value: Value = serde_json::from_str(text)?;
    from_value(value)
}

/// Serialize a shape to JSON.
pub fn to_value<T: ProtocolShape>(shape: &T) -> Result<Value> {
    Ok(serde_json::to_value(shape)?)
}
