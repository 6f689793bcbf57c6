//! codec::writer
//!
//! Sequential object writer used by every serializer.
//!
//! Properties are emitted in call order; with `serde_json`'s `preserve_order`
//! the rendered JSON keeps that order, which is what pins each type's
//! canonical key layout.

use serde_json::{Map, Value};

use super::JsonCodec;

/// Builder for one JSON object.
#[derive(Debug, Default)]
pub struct ObjectWriter {
    properties: Map<String, Value>,
}

impl ObjectWriter {
    /// Start a new object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a property that is always present.
    pub fn write_property<T: JsonCodec>(&mut self, name: &str, value: &T) {
        self.properties.insert(name.to_string(), value.to_json());
    }

    /// Write a property that is always emitted, as `null` when absent.
    ///
    /// Used for enum-typed properties, which the wire contract always carries.
    pub fn write_nullable_property<T: JsonCodec>(&mut self, name: &str, value: Option<&T>) {
        let value = value.map_or(Value::Null, JsonCodec::to_json);
        self.properties.insert(name.to_string(), value);
    }

    /// Write a property only when present.
    pub fn write_optional_property<T: JsonCodec>(&mut self, name: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.write_property(name, value);
        }
    }

    /// Write a sequence property that is always present.
    pub fn write_list_property<T: JsonCodec>(&mut self, name: &str, items: &[T]) {
        let items = items.iter().map(JsonCodec::to_json).collect();
        self.properties.insert(name.to_string(), Value::Array(items));
    }

    /// Write a sequence property only when present. An empty sequence is written as `[]`.
    pub fn write_optional_list_property<T: JsonCodec>(&mut self, name: &str, items: Option<&[T]>) {
        if let Some(items) = items {
            self.write_list_property(name, items);
        }
    }

    /// Finish the object.
    pub fn finish(self) -> Value {
        Value::Object(self.properties)
    }
}
