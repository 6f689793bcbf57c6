//! models::service::lifecycle
//!
//! Replica and instance behavior during upgrades.

use serde_json::Value;

use crate::codec::{CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext};

/// Lifecycle settings of stateful replicas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicaLifecycleDescription {
    /// Allow a singleton replica to move during upgrade
    pub is_singleton_replica_move_allowed_during_upgrade: Option<bool>,
    /// Move replicas back to their original nodes after upgrade
    pub restore_replica_location_after_upgrade: Option<bool>,
}

impl JsonCodec for ReplicaLifecycleDescription {
    const TYPE_NAME: &'static str = "ReplicaLifecycleDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut description = Self::default();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("IsSingletonReplicaMoveAllowedDuringUpgrade") {
                description.is_singleton_replica_move_allowed_during_upgrade = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("RestoreReplicaLocationAfterUpgrade") {
                description.restore_replica_location_after_upgrade = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(description)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_optional_property(
            "IsSingletonReplicaMoveAllowedDuringUpgrade",
            self.is_singleton_replica_move_allowed_during_upgrade.as_ref(),
        );
        writer.write_optional_property(
            "RestoreReplicaLocationAfterUpgrade",
            self.restore_replica_location_after_upgrade.as_ref(),
        );
        writer.finish()
    }
}

/// Lifecycle settings of stateless instances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceLifecycleDescription {
    /// Move instances back to their original nodes after upgrade
    pub restore_replica_location_after_upgrade: Option<bool>,
}

impl JsonCodec for InstanceLifecycleDescription {
    const TYPE_NAME: &'static str = "InstanceLifecycleDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut description = Self::default();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("RestoreReplicaLocationAfterUpgrade") {
                description.restore_replica_location_after_upgrade = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(description)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_optional_property(
            "RestoreReplicaLocationAfterUpgrade",
            self.restore_replica_location_after_upgrade.as_ref(),
        );
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_str, to_string};

    #[test]
    fn false_is_present() {
        let description: ReplicaLifecycleDescription =
            from_str(r#"{"IsSingletonReplicaMoveAllowedDuringUpgrade":false}"#).unwrap();
        assert_eq!(
            description.is_singleton_replica_move_allowed_during_upgrade,
            Some(false)
        );
        assert_eq!(
            to_string(&description),
            r#"{"IsSingletonReplicaMoveAllowedDuringUpgrade":false}"#
        );
    }

    #[test]
    fn instance_lifecycle_skips_replica_only_fields() {
        let description: InstanceLifecycleDescription = from_str(
            r#"{"IsSingletonReplicaMoveAllowedDuringUpgrade":true,"restorereplicalocationafterupgrade":"True"}"#,
        )
        .unwrap();
        assert_eq!(description.restore_replica_location_after_upgrade, Some(true));
    }
}
