//! models::service::tags
//!
//! Node tags a service requires for placement or to keep running.

use serde_json::Value;

use crate::codec::{serde_via_codec, CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext};
use crate::core::validate::required;

/// Set of node tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTagsDescription {
    count: i32,
    tags: Vec<String>,
}

impl NodeTagsDescription {
    /// `count` is written as given, even if it disagrees with `tags`.
    pub fn new(count: i32, tags: Vec<String>) -> Self {
        Self { count, tags }
    }

    /// Number of tags as declared on the wire.
    ///
    /// The API sends this alongside the list; it is not recomputed.
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Tag names.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl JsonCodec for NodeTagsDescription {
    const TYPE_NAME: &'static str = "NodeTagsDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut count = None;
        let mut tags = None;

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("Count") {
                count = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("Tags") {
                tags = reader.read_list()?;
            } else {
                reader.skip_value();
            }
        }

        let count = required(count, Self::TYPE_NAME, "Count")?;
        let tags = required(tags, Self::TYPE_NAME, "Tags")?;
        Ok(Self::new(count, tags))
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("Count", &self.count);
        writer.write_list_property("Tags", &self.tags);
        writer.finish()
    }
}

serde_via_codec!(NodeTagsDescription);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_str, to_string};

    #[test]
    fn count_is_required() {
        let err = from_str::<NodeTagsDescription>(r#"{"Tags":["a"]}"#).unwrap_err();
        assert!(err.is_null_argument());
        assert_eq!(err.to_string(), "NodeTagsDescription.Count is required");
    }

    #[test]
    fn null_tags_is_missing() {
        let err = from_str::<NodeTagsDescription>(r#"{"Count":0,"Tags":null}"#).unwrap_err();
        assert_eq!(err.to_string(), "NodeTagsDescription.Tags is required");
    }

    #[test]
    fn empty_tags_are_present() {
        let tags = from_str::<NodeTagsDescription>(r#"{"Count":0,"Tags":[]}"#).unwrap();
        assert!(tags.tags().is_empty());
        assert_eq!(to_string(&tags), r#"{"Count":0,"Tags":[]}"#);
    }

    #[test]
    fn count_is_not_recomputed() {
        let tags = from_str::<NodeTagsDescription>(r#"{"Count":5,"Tags":["x"]}"#).unwrap();
        assert_eq!(tags.count(), 5);
    }
}
