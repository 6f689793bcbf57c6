//! codec::enums
//!
//! Wire enumerations.
//!
//! [`wire_enum!`] declares an enum whose variants map one-to-one onto exact,
//! case-sensitive wire strings, and generates its converter. Sentinels such as
//! `Invalid` or `None` are ordinary variants.
//!
//! ```ignore
//! wire_enum! {
//!     /// Cost of moving a replica.
//!     pub enum MoveCost {
//!         Zero,
//!         Low,
//!         Medium,
//!         High,
//!         VeryHigh,
//!     }
//! }
//! ```

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in wire-table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire string of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            /// Look up a variant by its exact wire string.
            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $(stringify!($variant) => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::codec::CodecError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_wire(s).ok_or_else(|| $crate::codec::CodecError::UnknownEnumValue {
                    enum_name: stringify!($name),
                    value: s.to_string(),
                })
            }
        }

        impl $crate::codec::JsonCodec for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn read_json(
                value: &::serde_json::Value,
                _ctx: $crate::codec::ReadContext,
            ) -> Result<Self, $crate::codec::CodecError> {
                match value {
                    ::serde_json::Value::String(s) => s.parse(),
                    other => Err($crate::codec::CodecError::unexpected(
                        stringify!($name),
                        "string",
                        other,
                    )),
                }
            }

            fn to_json(&self) -> ::serde_json::Value {
                ::serde_json::Value::String(self.as_str().to_string())
            }
        }
    };
}

pub(crate) use wire_enum;
