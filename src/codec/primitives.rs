//! codec::primitives
//!
//! Converters for scalar wire values and the name newtypes.
//!
//! Integer and boolean readers accept the quoted forms the REST API
//! occasionally produces (`"5"`, `"true"`). Everything else must match the
//! expected JSON shape exactly.

use serde_json::Value;

use super::error::CodecError;
use super::reader::ReadContext;
use super::JsonCodec;
use crate::core::types::{ApplicationName, ServiceName};

impl JsonCodec for String {
    const TYPE_NAME: &'static str = "string";

    fn read_json(value: &Value, _ctx: ReadContext) -> Result<Self, CodecError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(CodecError::unexpected(Self::TYPE_NAME, "string", other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl JsonCodec for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn read_json(value: &Value, _ctx: ReadContext) -> Result<Self, CodecError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
            other => Err(CodecError::unexpected(Self::TYPE_NAME, "boolean", other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

/// Read an integer from a JSON number or a decimal string.
fn read_integer(value: &Value, type_name: &str) -> Result<i64, CodecError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| match value {
        Value::Number(n) => {
            CodecError::malformed(format!("{type_name}: {n} is not a 64-bit integer"))
        }
        Value::String(s) => CodecError::malformed(format!("{type_name}: '{s}' is not an integer")),
        other => CodecError::unexpected(type_name, "integer", other),
    })
}

impl JsonCodec for i64 {
    const TYPE_NAME: &'static str = "long";

    fn read_json(value: &Value, _ctx: ReadContext) -> Result<Self, CodecError> {
        read_integer(value, Self::TYPE_NAME)
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

impl JsonCodec for i32 {
    const TYPE_NAME: &'static str = "int";

    fn read_json(value: &Value, _ctx: ReadContext) -> Result<Self, CodecError> {
        let wide = read_integer(value, Self::TYPE_NAME)?;
        i32::try_from(wide).map_err(|_| {
            CodecError::malformed(format!("{}: {wide} does not fit in 32 bits", Self::TYPE_NAME))
        })
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

/// Byte sequences travel as arrays of integers in `[0, 255]`.
impl JsonCodec for Vec<u8> {
    const TYPE_NAME: &'static str = "byte[]";

    fn read_json(value: &Value, _ctx: ReadContext) -> Result<Self, CodecError> {
        let items = value
            .as_array()
            .ok_or_else(|| CodecError::unexpected(Self::TYPE_NAME, "array", value))?;

        items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|b| u8::try_from(b).ok())
                    .ok_or_else(|| {
                        CodecError::malformed(format!(
                            "{}: element {item} is not a byte",
                            Self::TYPE_NAME
                        ))
                    })
            })
            .collect()
    }

    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(|b| Value::from(*b)).collect())
    }
}

impl JsonCodec for ApplicationName {
    const TYPE_NAME: &'static str = "ApplicationName";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        String::read_json(value, ctx).map(ApplicationName::new)
    }

    fn to_json(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

impl JsonCodec for ServiceName {
    const TYPE_NAME: &'static str = "ServiceName";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        String::read_json(value, ctx).map(ServiceName::new)
    }

    fn to_json(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}
