//! codec::serde_bridge
//!
//! `serde` interop for top-level payload types.
//!
//! [`serde_via_codec!`] implements `Serialize` and `Deserialize` by routing
//! through the type's [`JsonCodec`](super::JsonCodec) converter, so a model
//! embedded in another serde document keeps its canonical key order,
//! case-insensitive reads, and validation.
//!
//! Deserialization buffers the value into a `serde_json::Value` first; the
//! converters work on that tree.

macro_rules! serde_via_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    ::serde::Serialize::serialize(
                        &$crate::codec::JsonCodec::to_json(self),
                        serializer,
                    )
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(
                        deserializer,
                    )?;
                    $crate::codec::from_value(&value).map_err(::serde::de::Error::custom)
                }
            }
        )+
    };
}

pub(crate) use serde_via_codec;
