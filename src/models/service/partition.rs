//! models::service::partition
//!
//! Partitioning schemes, discriminated by `PartitionScheme`.

use serde_json::Value;

use super::enums::PartitionScheme;
use crate::codec::{
    read_discriminator, CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext,
};
use crate::core::validate::required;

/// How a service is partitioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionSchemeDescription {
    /// One partition.
    Singleton,
    /// Partitions over an evenly split `Int64` key range.
    UniformInt64Range(UniformInt64RangePartitionSchemeDescription),
    /// Partitions identified by name.
    Named(NamedPartitionSchemeDescription),
}

impl PartitionSchemeDescription {
    /// The `PartitionScheme` discriminator.
    pub fn kind(&self) -> PartitionScheme {
        match self {
            PartitionSchemeDescription::Singleton => PartitionScheme::Singleton,
            PartitionSchemeDescription::UniformInt64Range(_) => PartitionScheme::UniformInt64Range,
            PartitionSchemeDescription::Named(_) => PartitionScheme::Named,
        }
    }
}

impl JsonCodec for PartitionSchemeDescription {
    const TYPE_NAME: &'static str = "PartitionSchemeDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let kind: PartitionScheme =
            read_discriminator(value, Self::TYPE_NAME, "PartitionScheme", ctx)?;

        match kind {
            PartitionScheme::Singleton => Ok(PartitionSchemeDescription::Singleton),
            PartitionScheme::UniformInt64Range => {
                UniformInt64RangePartitionSchemeDescription::read_json(value, ctx)
                    .map(PartitionSchemeDescription::UniformInt64Range)
            }
            PartitionScheme::Named => {
                NamedPartitionSchemeDescription::read_json(value, ctx)
                    .map(PartitionSchemeDescription::Named)
            }
        }
    }

    fn to_json(&self) -> Value {
        match self {
            PartitionSchemeDescription::Singleton => {
                let mut writer = ObjectWriter::new();
                writer.write_property("PartitionScheme", &PartitionScheme::Singleton);
                writer.finish()
            }
            PartitionSchemeDescription::UniformInt64Range(range) => range.to_json(),
            PartitionSchemeDescription::Named(named) => named.to_json(),
        }
    }
}

/// Range partitioning over `[low_key, high_key]` split into `count` partitions.
///
/// Keys travel as strings so that the full `Int64` range survives JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformInt64RangePartitionSchemeDescription {
    count: i32,
    low_key: String,
    high_key: String,
}

impl UniformInt64RangePartitionSchemeDescription {
    /// Keys are decimal strings so the full 64-bit range fits.
    pub fn new(count: i32, low_key: String, high_key: String) -> Self {
        Self {
            count,
            low_key,
            high_key,
        }
    }

    /// Number of partitions.
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Inclusive lower bound of the key range.
    pub fn low_key(&self) -> &str {
        &self.low_key
    }

    /// Inclusive upper bound of the key range.
    pub fn high_key(&self) -> &str {
        &self.high_key
    }
}

impl JsonCodec for UniformInt64RangePartitionSchemeDescription {
    const TYPE_NAME: &'static str = "UniformInt64RangePartitionSchemeDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut count = None;
        let mut low_key = None;
        let mut high_key = None;

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("Count") {
                count = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("LowKey") {
                low_key = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HighKey") {
                high_key = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(Self::new(
            required(count, Self::TYPE_NAME, "Count")?,
            required(low_key, Self::TYPE_NAME, "LowKey")?,
            required(high_key, Self::TYPE_NAME, "HighKey")?,
        ))
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("PartitionScheme", &PartitionScheme::UniformInt64Range);
        writer.write_property("Count", &self.count);
        writer.write_property("LowKey", &self.low_key);
        writer.write_property("HighKey", &self.high_key);
        writer.finish()
    }
}

/// Named partitioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedPartitionSchemeDescription {
    count: i32,
    names: Vec<String>,
}

impl NamedPartitionSchemeDescription {
    /// Partitions named by `names`; `count` is written as given.
    pub fn new(count: i32, names: Vec<String>) -> Self {
        Self { count, names }
    }

    /// Number of named partitions.
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Partition names, in wire order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl JsonCodec for NamedPartitionSchemeDescription {
    const TYPE_NAME: &'static str = "NamedPartitionSchemeDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut count = None;
        let mut names = None;

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("Count") {
                count = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("Names") {
                names = reader.read_list()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(Self::new(
            required(count, Self::TYPE_NAME, "Count")?,
            required(names, Self::TYPE_NAME, "Names")?,
        ))
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("PartitionScheme", &PartitionScheme::Named);
        writer.write_property("Count", &self.count);
        writer.write_list_property("Names", &self.names);
        writer.finish()
    }
}
