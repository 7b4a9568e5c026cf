//! Tagged protocol messages.
//!
//! On the wire a message is an object with a `type` discriminant and four
//! optional payload fields. [`RawMessage`] mirrors that layout exactly;
//! [`Message`] is the checked form, where the payload is a sum type and the
//! discriminant is derived from it.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::{Record, SchemasMessage, SiloSpec, ValidateMessage};
use crate::error::ValidationError;
use crate::shape::Shape;

/// Discriminant of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    Schema,
    Record,
    Spec,
    Validate,
}

impl MessageType {
    /// The wire literal for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Schema => "SCHEMA",
            MessageType::Record => "RECORD",
            MessageType::Spec => "SPEC",
            MessageType::Validate => "VALIDATE",
        }
    }

    /// The payload field that carries this type's content.
    pub fn payload_field(&self) -> &'static str {
        match self {
            MessageType::Schema => "schema_msg",
            MessageType::Record => "record",
            MessageType::Spec => "spec",
            MessageType::Validate => "validate_msg",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message exactly as laid out on the wire.
///
/// Nothing ties `kind` to the payload fields here; use
/// [`select_payload`](RawMessage::select_payload) to get a checked
/// [`Message`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(rename = "type")]
    pub kind: MessageType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_msg: Option<SchemasMessage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<SiloSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_msg: Option<ValidateMessage>,
}

impl RawMessage {
    /// Pick the payload named by `kind`.
    ///
    /// # Errors
    ///
    /// Fails if the selected payload is absent, or if any other payload
    /// field is present.
    pub fn select_payload(self) -> Result<Message, ValidationError> {
        let RawMessage {
            kind,
            record,
            schema_msg,
            spec,
            validate_msg,
        } = self;

        let present = [
            (MessageType::Record, record.is_some()),
            (MessageType::Schema, schema_msg.is_some()),
            (MessageType::Spec, spec.is_some()),
            (MessageType::Validate, validate_msg.is_some()),
        ];
        let stray: Vec<&str> = present
            .iter()
            .filter(|(t, is_present)| *is_present && *t != kind)
            .map(|(t, _)| t.payload_field())
            .collect();
        if !stray.is_empty() {
            return Err(ValidationError::new(
                Shape::Message,
                format!(
                    "{} message must not carry `{}`",
                    kind,
                    stray.join("`, `")
                ),
            ));
        }

        let message = match kind {
            MessageType::Schema => schema_msg.map(Message::Schema),
            MessageType::Record => record.map(Message::Record),
            MessageType::Spec => spec.map(Message::Spec),
            MessageType::Validate => validate_msg.map(Message::Validate),
        };

        message.ok_or_else(|| {
            ValidationError::new(
                Shape::Message,
                format!("{} message is missing `{}`", kind, kind.payload_field()),
            )
        })
    }
}

impl From<Message> for RawMessage {
    fn from(message: Message) -> Self {
        let mut raw = RawMessage {
            kind: message.message_type(),
            record: None,
            schema_msg: None,
            spec: None,
            validate_msg: None,
        };
        match message {
            Message::Schema(m) => raw.schema_msg = Some(m),
            Message::Record(r) => raw.record = Some(r),
            Message::Spec(s) => raw.spec = Some(s),
            Message::Validate(v) => raw.validate_msg = Some(v),
        }
        raw
    }
}

/// A protocol message carrying exactly one payload.
///
/// # Example
///
/// ```
/// use monoid_core::{Message, MessageType};
/// use serde_json::json;
///
/// let msg: Message = serde_json::from_value(json!({
///     "type": "RECORD",
///     "record": {"schema_name": "users", "data": {"id": 1}}
/// })).unwrap();
///
/// assert_eq!(msg.message_type(), MessageType::Record);
/// assert_eq!(msg.as_record().unwrap().schema_name, "users");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "RawMessage")]
pub enum Message {
    Schema(SchemasMessage),
    Record(Record),
    Spec(SiloSpec),
    Validate(ValidateMessage),
}

impl Message {
    /// The discriminant matching the active payload.
    pub fn message_type(&self) -> MessageType {
        match self {
            Message::Schema(_) => MessageType::Schema,
            Message::Record(_) => MessageType::Record,
            Message::Spec(_) => MessageType::Spec,
            Message::Validate(_) => MessageType::Validate,
        }
    }

    pub fn as_schemas(&self) -> Option<&SchemasMessage> {
        match self {
            Message::Schema(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Message::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_spec(&self) -> Option<&SiloSpec> {
        match self {
            Message::Spec(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_validate(&self) -> Option<&ValidateMessage> {
        match self {
            Message::Validate(v) => Some(v),
            _ => None,
        }
    }

    /// Consume the message, keeping it only if it carries a record.
    pub fn into_record(self) -> Option<Record> {
        match self {
            Message::Record(r) => Some(r),
            _ => None,
        }
    }
}

impl TryFrom<RawMessage> for Message {
    type Error = ValidationError;

    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        raw.select_payload()
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only the reason: callers attach the shape name themselves.
        RawMessage::deserialize(deserializer)?
            .select_payload()
            .map_err(|e| serde::de::Error::custom(e.reason))
    }
}

impl From<SchemasMessage> for Message {
    fn from(m: SchemasMessage) -> Self {
        Message::Schema(m)
    }
}

impl From<Record> for Message {
    fn from(r: Record) -> Self {
        Message::Record(r)
    }
}

impl From<SiloSpec> for Message {
    fn from(s: SiloSpec) -> Self {
        Message::Spec(s)
    }
}

impl From<ValidateMessage> for Message {
    fn from(v: ValidateMessage) -> Self {
        Message::Validate(v)
    }
}
