//! Protocol message shapes.
//!
//! These are the records passed between a silo connector and the host.
//! Every type validates its fields on deserialization; optional fields
//! are omitted when serialized.

mod envelope;
mod message;
mod query;
mod record;
mod schema;
mod spec;
mod validate;

pub use envelope::Protocol;
pub use message::{Message, MessageType, RawMessage};
pub use query::{Query, QueryIdentifier};
pub use record::Record;
pub use schema::{Schema, SchemasMessage};
pub use spec::SiloSpec;
pub use validate::{Status, ValidateMessage};
