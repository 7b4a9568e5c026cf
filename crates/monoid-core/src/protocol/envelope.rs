//! Top-level protocol envelope.

use serde::{Deserialize, Serialize};

use super::Message;

/// The document exchanged between a connector and the host.
///
/// Older connectors name the field `MonoidMessage`; that key is accepted
/// on input and never produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Protocol {
    #[serde(
        default,
        alias = "MonoidMessage",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<Message>,
}

impl Protocol {
    pub fn new(message: impl Into<Message>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// An envelope with no message.
    pub fn empty() -> Self {
        Self::default()
    }
}
