//! models::service::sensitivity

use serde_json::Value;

use crate::codec::{CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext};

/// How strongly the resource balancer avoids moving a service's replicas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceSensitivityDescription {
    pub primary_default_sensitivity: Option<i32>,
    pub secondary_default_sensitivity: Option<i32>,
    pub auxiliary_default_sensitivity: Option<i32>,
    pub is_maximum_sensitivity: Option<bool>,
}

impl JsonCodec for ServiceSensitivityDescription {
    const TYPE_NAME: &'static str = "ServiceSensitivityDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut description = Self::default();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("PrimaryDefaultSensitivity") {
                description.primary_default_sensitivity = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("SecondaryDefaultSensitivity") {
                description.secondary_default_sensitivity = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("AuxiliaryDefaultSensitivity") {
                description.auxiliary_default_sensitivity = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("IsMaximumSensitivity") {
                description.is_maximum_sensitivity = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(description)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_optional_property(
            "PrimaryDefaultSensitivity",
            self.primary_default_sensitivity.as_ref(),
        );
        writer.write_optional_property(
            "SecondaryDefaultSensitivity",
            self.secondary_default_sensitivity.as_ref(),
        );
        writer.write_optional_property(
            "AuxiliaryDefaultSensitivity",
            self.auxiliary_default_sensitivity.as_ref(),
        );
        writer.write_optional_property(
            "IsMaximumSensitivity",
            self.is_maximum_sensitivity.as_ref(),
        );
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_str, to_string};

    #[test]
    fn emits_declaration_order() {
        let description = ServiceSensitivityDescription {
            is_maximum_sensitivity: Some(true),
            primary_default_sensitivity: Some(0),
            ..Default::default()
        };
        assert_eq!(
            to_string(&description),
            r#"{"PrimaryDefaultSensitivity":0,"IsMaximumSensitivity":true}"#
        );
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let description: ServiceSensitivityDescription =
            from_str(r#"{"SecondaryDefaultSensitivity":"3"}"#).unwrap();
        assert_eq!(description.secondary_default_sensitivity, Some(3));
    }
}
