//! codec::error
//!
//! Error taxonomy for converting payloads.

use serde_json::Value;
use thiserror::Error;

use crate::core::validate::ValidationError;

/// Errors from encoding or decoding a payload.
///
/// Construction failures surface as [`CodecError::Validation`] so a decode that
/// ends in a builder reports the same error a caller would get building the
/// model by hand.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unknown {enum_name} value '{value}'")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl CodecError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        CodecError::MalformedPayload(message.into())
    }

    /// A value of the wrong JSON shape for `type_name`.
    pub(crate) fn unexpected(type_name: &str, expected: &str, found: &Value) -> Self {
        CodecError::MalformedPayload(format!(
            "{type_name}: expected {expected}, found {}",
            json_kind(found)
        ))
    }

    /// Returns true if the failure is a missing required property.
    pub fn is_null_argument(&self) -> bool {
        matches!(
            self,
            CodecError::Validation(ValidationError::NullArgument { .. })
        )
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::MalformedPayload(err.to_string())
    }
}

/// Short name of a JSON value's shape, for diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
