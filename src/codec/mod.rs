//! codec
//!
//! Converters between JSON payloads and model types.
//!
//! # Architecture
//!
//! Each model implements [`JsonCodec`]: a `read_json` that walks a
//! `serde_json::Value` with an [`ObjectReader`], and a `to_json` that drives an
//! [`ObjectWriter`]. Tokenizing text is left to `serde_json`; everything the
//! REST contract cares about (case-insensitive names, unknown-property
//! tolerance, discriminator dispatch, validation, key order) lives in the
//! converters.
//!
//! # Entry Points
//!
//! - [`from_str`] / [`from_slice`] / [`from_value`] - decode with default limits
//! - [`to_value`] / [`to_string`] / [`to_string_pretty`] - encode
//! - [`Codec`] - decode and encode with configured limits and rendering
//!
//! # Example
//!
//! ```
//! use fabric_models::models::service::NodeTagsDescription;
//!
//! let tags: NodeTagsDescription = fabric_models::from_str(r#"{"count":2,"tags":["a","b"]}"#)?;
//! assert_eq!(tags.count(), 2);
//! assert_eq!(fabric_models::to_string(&tags), r#"{"Count":2,"Tags":["a","b"]}"#);
//! # Ok::<(), fabric_models::CodecError>(())
//! ```

mod enums;
pub mod error;
mod primitives;
pub mod reader;
mod serde_bridge;
pub mod writer;

pub use error::CodecError;
pub use reader::{find_property, read_discriminator, ObjectReader, ReadContext};
pub use writer::ObjectWriter;

pub(crate) use enums::wire_enum;
pub(crate) use serde_bridge::serde_via_codec;

use serde_json::Value;
use tracing::debug;

use crate::core::config::{
    Config, DEFAULT_MAX_PAYLOAD_BYTES, MAX_CONFIGURABLE_DEPTH, MIN_PAYLOAD_BYTES,
};

/// Converter between a model type and its JSON wire shape.
pub trait JsonCodec: Sized {
    /// Wire name of the type, used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Decode a value.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the value has the wrong shape or the decoded
    /// fields fail validation.
    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError>;

    /// Encode to a value.
    fn to_json(&self) -> Value;
}

/// Decode a model from JSON text.
pub fn from_str<T: JsonCodec>(text: &str) -> Result<T, CodecError> {
    Codec::default().decode(text)
}

/// Decode a model from JSON bytes.
pub fn from_slice<T: JsonCodec>(bytes: &[u8]) -> Result<T, CodecError> {
    Codec::default().decode_slice(bytes)
}

/// Decode a model from an already-parsed value.
pub fn from_value<T: JsonCodec>(value: &Value) -> Result<T, CodecError> {
    T::read_json(value, ReadContext::default())
}

/// Encode a model to a value.
pub fn to_value<T: JsonCodec>(model: &T) -> Value {
    model.to_json()
}

/// Encode a model to compact JSON text.
pub fn to_string<T: JsonCodec>(model: &T) -> String {
    model.to_json().to_string()
}

/// Encode a model to indented JSON text.
pub fn to_string_pretty<T: JsonCodec>(model: &T) -> String {
    format!("{:#}", model.to_json())
}

/// Decoder and encoder with explicit limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    pretty: bool,
    max_payload_bytes: usize,
    max_depth: usize,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec {
    /// Compact output, 4 MiB payload limit, 64 levels of nesting.
    pub fn new() -> Self {
        Self {
            pretty: false,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            max_depth: ReadContext::DEFAULT_MAX_DEPTH,
        }
    }

    /// Build a codec from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            pretty: config.pretty(),
            max_payload_bytes: config.max_payload_bytes(),
            max_depth: config.max_depth(),
        }
    }

    /// Render encoded JSON indented.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Reject payloads larger than `bytes`.
    ///
    /// Raised to 2 bytes if smaller, the same floor a config file enforces.
    pub fn max_payload_bytes(mut self, bytes: usize) -> Self {
        self.max_payload_bytes = bytes.max(MIN_PAYLOAD_BYTES);
        self
    }

    /// Reject payloads nesting deeper than `depth`.
    ///
    /// Clamped to `[1, 128]`, the range a config file accepts.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.clamp(1, MAX_CONFIGURABLE_DEPTH);
        self
    }

    /// Decode a model from JSON text.
    ///
    /// # Errors
    ///
    /// - `CodecError::MalformedPayload` for oversized or invalid JSON text
    /// - any error raised by `T`'s converter
    pub fn decode<T: JsonCodec>(&self, text: &str) -> Result<T, CodecError> {
        self.decode_slice(text.as_bytes())
    }

    /// Decode a model from JSON bytes.
    pub fn decode_slice<T: JsonCodec>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        if bytes.len() > self.max_payload_bytes {
            debug!(
                type_name = T::TYPE_NAME,
                len = bytes.len(),
                limit = self.max_payload_bytes,
                "rejecting oversized payload"
            );
            return Err(CodecError::malformed(format!(
                "payload of {} bytes exceeds the {} byte limit",
                bytes.len(),
                self.max_payload_bytes
            )));
        }

        let value: Value = serde_json::from_slice(bytes).map_err(|err| {
            debug!(type_name = T::TYPE_NAME, %err, "rejecting unparseable payload");
            CodecError::from(err)
        })?;

        T::read_json(&value, ReadContext::new(self.max_depth))
    }

    /// Encode a model to JSON text.
    pub fn encode<T: JsonCodec>(&self, model: &T) -> String {
        if self.pretty {
            to_string_pretty(model)
        } else {
            to_string(model)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::arm::{ApplicationArmMetadataUpdateDescription, ArmMetadata};
    use crate::models::service::NodeTagsDescription;

    mod entry_points {
        use super::*;

        #[test]
        fn invalid_text_is_malformed() {
            let result = from_str::<ArmMetadata>("{\"ArmResourceId\":");
            assert!(matches!(result, Err(CodecError::MalformedPayload(_))));
        }

        #[test]
        fn from_slice_matches_from_str() {
            let text = r#"{"ArmResourceId":"/subscriptions/x"}"#;
            assert_eq!(
                from_slice::<ArmMetadata>(text.as_bytes()),
                from_str::<ArmMetadata>(text)
            );
        }

        #[test]
        fn pretty_output_is_indented() {
            let tags = NodeTagsDescription::new(1, vec!["a".to_string()]);
            let pretty = to_string_pretty(&tags);
            assert!(pretty.contains("\n  \"Count\": 1"));
            assert_eq!(
                serde_json::from_str::<Value>(&pretty).unwrap(),
                to_value(&tags)
            );
        }
    }

    mod configured_codec {
        use super::*;

        #[test]
        fn oversized_payload_rejected() {
            let codec = Codec::new().max_payload_bytes(8);
            let err = codec
                .decode::<ArmMetadata>(r#"{"ArmResourceId":"abc"}"#)
                .unwrap_err();
            assert!(err.to_string().contains("exceeds the 8 byte limit"));
        }

        #[test]
        fn depth_limit_applies() {
            let codec = Codec::new().max_depth(1);
            let result = codec.decode::<ApplicationArmMetadataUpdateDescription>(
                r#"{"ArmMetadata":{"ArmResourceId":"/subscriptions/x"}}"#,
            );
            assert!(matches!(result, Err(CodecError::MalformedPayload(_))));
            assert!(Codec::new()
                .max_depth(2)
                .decode::<ApplicationArmMetadataUpdateDescription>(
                    r#"{"ArmMetadata":{"ArmResourceId":"/subscriptions/x"}}"#,
                )
                .is_ok());
        }

        #[test]
        fn limits_match_config_bounds() {
            assert_eq!(Codec::new().max_depth(0), Codec::new().max_depth(1));
            assert_eq!(
                Codec::new().max_depth(10_000),
                Codec::new().max_depth(MAX_CONFIGURABLE_DEPTH)
            );
            assert_eq!(
                Codec::new().max_payload_bytes(0),
                Codec::new().max_payload_bytes(MIN_PAYLOAD_BYTES)
            );

            let err = Codec::new()
                .max_payload_bytes(0)
                .decode::<ArmMetadata>("{ }")
                .unwrap_err();
            assert!(err.to_string().contains("exceeds the 2 byte limit"));
            assert!(Codec::new().max_payload_bytes(0).decode::<ArmMetadata>("{}").is_ok());
        }

        #[test]
        fn encode_honors_pretty() {
            let arm = ArmMetadata {
                arm_resource_id: Some("id".to_string()),
            };
            assert_eq!(Codec::new().encode(&arm), r#"{"ArmResourceId":"id"}"#);
            assert!(Codec::new().pretty(true).encode(&arm).contains('\n'));
        }

        #[test]
        fn from_config_uses_accessors() {
            let codec = Codec::from_config(&Config::default());
            assert_eq!(codec, Codec::new());
        }
    }
}
