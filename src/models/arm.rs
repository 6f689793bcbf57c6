//! models::arm
//!
//! Azure Resource Manager metadata attached to applications.

use serde_json::Value;

use crate::codec::{serde_via_codec, CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext};
use crate::core::validate::required;

/// ARM identity of a cluster resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArmMetadata {
    /// Fully qualified ARM resource id
    pub arm_resource_id: Option<String>,
}

impl JsonCodec for ArmMetadata {
    const TYPE_NAME: &'static str = "ArmMetadata";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut arm_resource_id = None;

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("ArmResourceId") {
                arm_resource_id = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(Self { arm_resource_id })
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_optional_property("ArmResourceId", self.arm_resource_id.as_ref());
        writer.finish()
    }
}

/// Request body replacing an application's ARM metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationArmMetadataUpdateDescription {
    arm_metadata: ArmMetadata,
}

impl ApplicationArmMetadataUpdateDescription {
    /// An update that replaces the application's ARM metadata.
    pub fn new(arm_metadata: ArmMetadata) -> Self {
        Self { arm_metadata }
    }

    /// The metadata to apply.
    pub fn arm_metadata(&self) -> &ArmMetadata {
        &self.arm_metadata
    }
}

impl JsonCodec for ApplicationArmMetadataUpdateDescription {
    const TYPE_NAME: &'static str = "ApplicationArmMetadataUpdateDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut arm_metadata = None;

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("ArmMetadata") {
                arm_metadata = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        let arm_metadata = required(arm_metadata, Self::TYPE_NAME, "ArmMetadata")?;
        Ok(Self::new(arm_metadata))
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("ArmMetadata", &self.arm_metadata);
        writer.finish()
    }
}

serde_via_codec!(ArmMetadata, ApplicationArmMetadataUpdateDescription);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_str, to_string};

    #[test]
    fn empty_metadata_is_empty_object() {
        assert_eq!(to_string(&ArmMetadata::default()), "{}");
        assert_eq!(from_str::<ArmMetadata>("{}"), Ok(ArmMetadata::default()));
    }

    #[test]
    fn update_requires_metadata() {
        let err =
            from_str::<ApplicationArmMetadataUpdateDescription>(r#"{"Other":1}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ApplicationArmMetadataUpdateDescription.ArmMetadata is required"
        );
    }

    #[test]
    fn update_round_trips() {
        let update = ApplicationArmMetadataUpdateDescription::new(ArmMetadata {
            arm_resource_id: Some("/subscriptions/s/resourceGroups/g".to_string()),
        });
        let text = to_string(&update);
        assert_eq!(
            text,
            r#"{"ArmMetadata":{"ArmResourceId":"/subscriptions/s/resourceGroups/g"}}"#
        );
        assert_eq!(from_str::<ApplicationArmMetadataUpdateDescription>(&text), Ok(update));
    }

    #[test]
    fn property_names_ignore_case() {
        let update: ApplicationArmMetadataUpdateDescription =
            from_str(r#"{"armmetadata":{"ARMRESOURCEID":"id"}}"#).unwrap();
        assert_eq!(update.arm_metadata().arm_resource_id.as_deref(), Some("id"));
    }
}
