//! codec::reader
//!
//! Sequential property cursor used by every deserializer.
//!
//! # Design
//!
//! The payload is tokenized once by `serde_json` into a [`Value`] tree with
//! `preserve_order`, so properties come back in source order. An
//! [`ObjectReader`] walks one object of that tree:
//!
//! 1. [`ObjectReader::next_property_name`] advances to the next property
//! 2. the converter matches the name case-insensitively against its fields
//! 3. it reads the value with [`ObjectReader::read_value`] /
//!    [`ObjectReader::read_list`], or calls [`ObjectReader::skip_value`]
//!
//! A JSON `null` reads as absent (`Ok(None)`), matching how the REST API
//! omits unset properties.
//!
//! # Example
//!
//! ```
//! use fabric_models::codec::{CodecError, ObjectReader, ReadContext};
//! use serde_json::json;
//!
//! let payload = json!({ "name": "CPU", "Extra": true });
//! let mut reader = ObjectReader::new(&payload, "Metric", ReadContext::default())?;
//! let mut name: Option<String> = None;
//!
//! while let Some(property) = reader.next_property_name() {
//!     if property.eq_ignore_ascii_case("Name") {
//!         name = reader.read_value()?;
//!     } else {
//!         reader.skip_value();
//!     }
//! }
//!
//! assert_eq!(name.as_deref(), Some("CPU"));
//! # Ok::<(), CodecError>(())
//! ```

use serde_json::{map, Value};
use tracing::trace;

use super::error::CodecError;
use super::JsonCodec;
use crate::core::config;
use crate::core::validate::ValidationError;

/// Nesting budget carried through a decode.
///
/// Every nested object, array, or value read through an [`ObjectReader`]
/// consumes one level. Exceeding `max_depth` is a `MalformedPayload`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadContext {
    depth: usize,
    max_depth: usize,
}

impl ReadContext {
    /// Default nesting budget.
    pub const DEFAULT_MAX_DEPTH: usize = config::DEFAULT_MAX_DEPTH;

    /// Create a context at the root with the given budget.
    pub fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter one level of nesting.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::MalformedPayload` if the budget is exhausted.
    pub fn descend(self) -> Result<Self, CodecError> {
        if self.depth >= self.max_depth {
            return Err(CodecError::malformed(format!(
                "payload nests deeper than {} levels",
                self.max_depth
            )));
        }
        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }
}

impl Default for ReadContext {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DEPTH)
    }
}

/// Cursor over the properties of one JSON object.
pub struct ObjectReader<'a> {
    type_name: &'static str,
    properties: map::Iter<'a>,
    current: Option<(&'a str, &'a Value)>,
    ctx: ReadContext,
}

impl<'a> ObjectReader<'a> {
    /// Position a reader before the first property of `value`.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::MalformedPayload` if `value` is not an object.
    pub fn new(
        value: &'a Value,
        type_name: &'static str,
        ctx: ReadContext,
    ) -> Result<Self, CodecError> {
        let object = value
            .as_object()
            .ok_or_else(|| CodecError::unexpected(type_name, "object", value))?;

        Ok(Self {
            type_name,
            properties: object.iter(),
            current: None,
            ctx,
        })
    }

    /// Wire name of the type being read.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Advance to the next property, returning its name as written in the payload.
    ///
    /// Returns `None` at the end of the object.
    pub fn next_property_name(&mut self) -> Option<&'a str> {
        self.current = self
            .properties
            .next()
            .map(|(name, value)| (name.as_str(), value));
        self.current.map(|(name, _)| name)
    }

    fn current_value(&self) -> Result<&'a Value, CodecError> {
        self.current.map(|(_, value)| value).ok_or_else(|| {
            CodecError::malformed(format!(
                "{}: value read before a property was selected",
                self.type_name
            ))
        })
    }

    /// Read the current property's value with `T`'s converter.
    ///
    /// # Errors
    ///
    /// Propagates the nested converter's error.
    pub fn read_value<T: JsonCodec>(&mut self) -> Result<Option<T>, CodecError> {
        let value = self.current_value()?;
        if value.is_null() {
            return Ok(None);
        }
        T::read_json(value, self.ctx.descend()?).map(Some)
    }

    /// Read the current property's value as an ordered sequence of `T`.
    ///
    /// `null` reads as `None`; `[]` reads as `Some(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::MalformedPayload` if the value is not an array,
    /// or propagates the element converter's error.
    pub fn read_list<T: JsonCodec>(&mut self) -> Result<Option<Vec<T>>, CodecError> {
        let value = self.current_value()?;
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => {
                let ctx = self.ctx.descend()?;
                items
                    .iter()
                    .map(|item| T::read_json(item, ctx))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Some)
            }
            other => Err(CodecError::unexpected(self.type_name, "array", other)),
        }
    }

    /// Skip the current property's value.
    pub fn skip_value(&mut self) {
        if let Some((property, _)) = self.current {
            trace!(
                type_name = self.type_name,
                property,
                "ignoring unknown property"
            );
        }
    }
}

impl std::fmt::Debug for ObjectReader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectReader")
            .field("type_name", &self.type_name)
            .field("property", &self.current.map(|(name, _)| name))
            .field("depth", &self.ctx.depth)
            .finish()
    }
}

/// Look up a property by case-insensitive name.
///
/// The last matching property wins, as it would in a sequential read.
pub fn find_property<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.as_object().and_then(|object| {
        object
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
            .last()
    })
}

/// Read the discriminator of a polymorphic family.
///
/// # Errors
///
/// - `CodecError::MalformedPayload` if `value` is not an object
/// - `ValidationError::NullArgument` if the discriminator is absent or `null`
/// - `CodecError::UnknownEnumValue` if the discriminator is not recognized
pub fn read_discriminator<K: JsonCodec>(
    value: &Value,
    type_name: &'static str,
    property: &'static str,
    ctx: ReadContext,
) -> Result<K, CodecError> {
    if !value.is_object() {
        return Err(CodecError::unexpected(type_name, "object", value));
    }

    match find_property(value, property) {
        None | Some(Value::Null) => Err(ValidationError::NullArgument {
            type_name,
            property,
        }
        .into()),
        Some(kind) => K::read_json(kind, ctx),
    }
}
