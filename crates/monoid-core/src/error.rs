//! Error types for the monoid protocol library.
//!
//! This module provides a unified error type with explicit variants for
//! shape validation, malformed JSON, and message stream failures.

use std::fmt;
use thiserror::Error;

use crate::shape::Shape;

/// The unified error type for monoid operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A document did not conform to its shape.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The input text is not JSON at all.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A line of a message stream failed validation.
    #[error("line {line}: {source}")]
    Stream {
        line: usize,
        #[source]
        source: ValidationError,
    },

    /// Reading or writing a message stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the validation error, if this error is caused by one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) | Error::Stream { source: err, .. } => Some(err),
            _ => None,
        }
    }
}

/// A document failed to validate against a shape.
///
/// Covers missing required fields, wrong field types, unknown enum
/// literals, and a message tag that disagrees with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The shape the document was validated against.
    pub shape: Shape,
    /// Why validation failed.
    pub reason: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(shape: Shape, reason: impl Into<String>) -> Self {
        Self {
            shape,
            reason: reason.into(),
        }
    }

    pub(crate) fn from_serde(shape: Shape, err: &serde_json::Error) -> Self {
        Self::new(shape, err.to_string())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.shape.type_name(), self.reason)
    }
}

impl std::error::Error for ValidationError {}
