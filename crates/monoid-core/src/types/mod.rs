//! Value types shared by the protocol shapes.
//!
//! These types enforce protocol invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod identifier_query;
mod json_object;

pub use identifier_query::IdentifierQuery;
pub use json_object::{JsonObject, NotAnObject};
