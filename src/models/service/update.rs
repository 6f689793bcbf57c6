//! models::service::update
//!
//! Partial updates of an existing service, discriminated by `ServiceKind`.
//!
//! Every property of an update is optional: an absent property leaves the
//! service's current value untouched. Durations travel as strings here, unlike
//! in [`ServiceDescription`](super::ServiceDescription).

use serde_json::Value;

use super::correlation::ServiceCorrelationDescription;
use super::enums::{MoveCost, ServiceKind};
use super::lifecycle::{InstanceLifecycleDescription, ReplicaLifecycleDescription};
use super::load_metric::ServiceLoadMetricDescription;
use super::placement::ServicePlacementPolicyDescription;
use super::scaling::ScalingPolicyDescription;
use super::sensitivity::ServiceSensitivityDescription;
use super::tags::NodeTagsDescription;
use crate::codec::{
    read_discriminator, serde_via_codec, CodecError, JsonCodec, ObjectReader, ObjectWriter,
    ReadContext,
};
use crate::core::validate::{ensure_at_least, ValidationError};
use crate::models::setters;

/// An update to apply to a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceUpdateDescription {
    Stateful(StatefulServiceUpdateDescription),
    Stateless(StatelessServiceUpdateDescription),
}

impl ServiceUpdateDescription {
    /// The `ServiceKind` written for this variant.
    pub fn kind(&self) -> ServiceKind {
        match self {
            ServiceUpdateDescription::Stateful(_) => ServiceKind::Stateful,
            ServiceUpdateDescription::Stateless(_) => ServiceKind::Stateless,
        }
    }

    /// Properties both kinds may update.
    pub fn common(&self) -> &ServiceUpdateDescriptionBase {
        match self {
            ServiceUpdateDescription::Stateful(stateful) => stateful.common(),
            ServiceUpdateDescription::Stateless(stateless) => stateless.common(),
        }
    }
}

impl JsonCodec for ServiceUpdateDescription {
    const TYPE_NAME: &'static str = "ServiceUpdateDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let kind: ServiceKind = read_discriminator(value, Self::TYPE_NAME, "ServiceKind", ctx)?;
        match kind {
            ServiceKind::Stateful => StatefulServiceUpdateDescription::read_json(value, ctx)
                .map(ServiceUpdateDescription::Stateful),
            ServiceKind::Stateless => StatelessServiceUpdateDescription::read_json(value, ctx)
                .map(ServiceUpdateDescription::Stateless),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            ServiceUpdateDescription::Stateful(stateful) => stateful.to_json(),
            ServiceUpdateDescription::Stateless(stateless) => stateless.to_json(),
        }
    }
}

/// Properties any service update may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceUpdateDescriptionBase {
    /// Bit set naming which properties of the update are meaningful.
    pub flags: Option<String>,
    pub placement_constraints: Option<String>,
    pub correlation_scheme: Option<Vec<ServiceCorrelationDescription>>,
    pub load_metrics: Option<Vec<ServiceLoadMetricDescription>>,
    pub service_placement_policies: Option<Vec<ServicePlacementPolicyDescription>>,
    pub default_move_cost: Option<MoveCost>,
    pub scaling_policies: Option<Vec<ScalingPolicyDescription>>,
    pub service_dns_name: Option<String>,
    pub tags_for_placement: Option<NodeTagsDescription>,
    pub tags_for_running: Option<NodeTagsDescription>,
}

impl ServiceUpdateDescriptionBase {
    fn read_property(
        &mut self,
        property: &str,
        reader: &mut ObjectReader<'_>,
    ) -> Result<bool, CodecError> {
        if property.eq_ignore_ascii_case("Flags") {
            self.flags = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("PlacementConstraints") {
            self.placement_constraints = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("CorrelationScheme") {
            self.correlation_scheme = reader.read_list()?;
        } else if property.eq_ignore_ascii_case("LoadMetrics") {
            self.load_metrics = reader.read_list()?;
        } else if property.eq_ignore_ascii_case("ServicePlacementPolicies") {
            self.service_placement_policies = reader.read_list()?;
        } else if property.eq_ignore_ascii_case("DefaultMoveCost") {
            self.default_move_cost = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("ScalingPolicies") {
            self.scaling_policies = reader.read_list()?;
        } else if property.eq_ignore_ascii_case("ServiceDnsName") {
            self.service_dns_name = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("TagsForPlacement") {
            self.tags_for_placement = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("TagsForRunning") {
            self.tags_for_running = reader.read_value()?;
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// Discriminator and `DefaultMoveCost`, then the common optionals.
    fn write(&self, kind: ServiceKind, writer: &mut ObjectWriter) {
        writer.write_property("ServiceKind", &kind);
        writer.write_nullable_property("DefaultMoveCost", self.default_move_cost.as_ref());
        writer.write_optional_property("Flags", self.flags.as_ref());
        writer.write_optional_property("PlacementConstraints", self.placement_constraints.as_ref());
        writer.write_optional_list_property(
            "CorrelationScheme",
            self.correlation_scheme.as_deref(),
        );
        writer.write_optional_list_property("LoadMetrics", self.load_metrics.as_deref());
        writer.write_optional_list_property(
            "ServicePlacementPolicies",
            self.service_placement_policies.as_deref(),
        );
        writer.write_optional_list_property("ScalingPolicies", self.scaling_policies.as_deref());
        writer.write_optional_property("ServiceDnsName", self.service_dns_name.as_ref());
        writer.write_optional_property("TagsForPlacement", self.tags_for_placement.as_ref());
        writer.write_optional_property("TagsForRunning", self.tags_for_running.as_ref());
    }
}

// =============================================================================
// Stateful
// =============================================================================

/// Update of a stateful service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatefulServiceUpdateDescription {
    common: ServiceUpdateDescriptionBase,
    fields: StatefulUpdateFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct StatefulUpdateFields {
    target_replica_set_size: Option<i32>,
    min_replica_set_size: Option<i32>,
    replica_restart_wait_duration_seconds: Option<String>,
    quorum_loss_wait_duration_seconds: Option<String>,
    stand_by_replica_keep_duration_seconds: Option<String>,
    service_placement_time_limit_seconds: Option<String>,
    drop_source_replica_on_move: Option<bool>,
    replica_lifecycle_description: Option<ReplicaLifecycleDescription>,
    auxiliary_replica_count: Option<i32>,
    service_sensitivity_description: Option<ServiceSensitivityDescription>,
}

impl StatefulServiceUpdateDescription {
    /// Start from the common properties; every stateful field is optional.
    pub fn builder(
        common: ServiceUpdateDescriptionBase,
    ) -> StatefulServiceUpdateDescriptionBuilder {
        StatefulServiceUpdateDescriptionBuilder {
            common,
            fields: StatefulUpdateFields::default(),
        }
    }

    /// Properties both kinds may update.
    pub fn common(&self) -> &ServiceUpdateDescriptionBase {
        &self.common
    }

    /// New desired replica count per partition.
    pub fn target_replica_set_size(&self) -> Option<i32> {
        self.fields.target_replica_set_size
    }

    /// New minimum replica count.
    pub fn min_replica_set_size(&self) -> Option<i32> {
        self.fields.min_replica_set_size
    }

    /// Kept as the wire string.
    pub fn replica_restart_wait_duration_seconds(&self) -> Option<&str> {
        self.fields.replica_restart_wait_duration_seconds.as_deref()
    }

    /// Kept as the wire string.
    pub fn quorum_loss_wait_duration_seconds(&self) -> Option<&str> {
        self.fields.quorum_loss_wait_duration_seconds.as_deref()
    }

    /// Kept as the wire string.
    pub fn stand_by_replica_keep_duration_seconds(&self) -> Option<&str> {
        self.fields.stand_by_replica_keep_duration_seconds.as_deref()
    }

    /// Kept as the wire string.
    pub fn service_placement_time_limit_seconds(&self) -> Option<&str> {
        self.fields.service_placement_time_limit_seconds.as_deref()
    }

    /// Drop the source secondary before the new one finishes building.
    pub fn drop_source_replica_on_move(&self) -> Option<bool> {
        self.fields.drop_source_replica_on_move
    }

    /// New replica lifecycle settings.
    pub fn replica_lifecycle_description(&self) -> Option<&ReplicaLifecycleDescription> {
        self.fields.replica_lifecycle_description.as_ref()
    }

    /// New auxiliary replica count per partition.
    pub fn auxiliary_replica_count(&self) -> Option<i32> {
        self.fields.auxiliary_replica_count
    }

    /// New move sensitivity.
    pub fn service_sensitivity_description(&self) -> Option<&ServiceSensitivityDescription> {
        self.fields.service_sensitivity_description.as_ref()
    }
}

/// Builder for [`StatefulServiceUpdateDescription`].
#[derive(Debug, Clone)]
pub struct StatefulServiceUpdateDescriptionBuilder {
    common: ServiceUpdateDescriptionBase,
    fields: StatefulUpdateFields,
}

impl StatefulServiceUpdateDescriptionBuilder {
    setters! {
        in fields;
        target_replica_set_size: i32,
        min_replica_set_size: i32,
        replica_restart_wait_duration_seconds: String,
        quorum_loss_wait_duration_seconds: String,
        stand_by_replica_keep_duration_seconds: String,
        service_placement_time_limit_seconds: String,
        drop_source_replica_on_move: bool,
        replica_lifecycle_description: ReplicaLifecycleDescription,
        auxiliary_replica_count: i32,
        service_sensitivity_description: ServiceSensitivityDescription,
    }

    /// Build the update.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BelowMinimum` if a replica set size is below 1
    /// or `auxiliary_replica_count` is negative.
    pub fn build(self) -> Result<StatefulServiceUpdateDescription, ValidationError> {
        const TYPE_NAME: &str = StatefulServiceUpdateDescription::TYPE_NAME;
        let fields = self.fields;

        ensure_at_least(fields.target_replica_set_size, TYPE_NAME, "TargetReplicaSetSize", 1)?;
        ensure_at_least(fields.min_replica_set_size, TYPE_NAME, "MinReplicaSetSize", 1)?;
        ensure_at_least(fields.auxiliary_replica_count, TYPE_NAME, "AuxiliaryReplicaCount", 0)?;

        Ok(StatefulServiceUpdateDescription {
            common: self.common,
            fields,
        })
    }
}

impl JsonCodec for StatefulServiceUpdateDescription {
    const TYPE_NAME: &'static str = "StatefulServiceUpdateDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut common = ServiceUpdateDescriptionBase::default();
        let mut fields = StatefulUpdateFields::default();

        while let Some(property) = reader.next_property_name() {
            if common.read_property(property, &mut reader)? {
                continue;
            }
            if property.eq_ignore_ascii_case("TargetReplicaSetSize") {
                fields.target_replica_set_size = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("MinReplicaSetSize") {
                fields.min_replica_set_size = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("ReplicaRestartWaitDurationSeconds") {
                fields.replica_restart_wait_duration_seconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("QuorumLossWaitDurationSeconds") {
                fields.quorum_loss_wait_duration_seconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("StandByReplicaKeepDurationSeconds") {
                fields.stand_by_replica_keep_duration_seconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("ServicePlacementTimeLimitSeconds") {
                fields.service_placement_time_limit_seconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("DropSourceReplicaOnMove") {
                fields.drop_source_replica_on_move = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("ReplicaLifecycleDescription") {
                fields.replica_lifecycle_description = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("AuxiliaryReplicaCount") {
                fields.auxiliary_replica_count = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("ServiceSensitivityDescription") {
                fields.service_sensitivity_description = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        let builder = StatefulServiceUpdateDescriptionBuilder { common, fields };
        Ok(builder.build()?)
    }

    fn to_json(&self) -> Value {
        let fields = &self.fields;
        let mut writer = ObjectWriter::new();
        self.common.write(ServiceKind::Stateful, &mut writer);

        writer.write_optional_property(
            "TargetReplicaSetSize",
            fields.target_replica_set_size.as_ref(),
        );
        writer.write_optional_property("MinReplicaSetSize", fields.min_replica_set_size.as_ref());
        writer.write_optional_property(
            "ReplicaRestartWaitDurationSeconds",
            fields.replica_restart_wait_duration_seconds.as_ref(),
        );
        writer.write_optional_property(
            "QuorumLossWaitDurationSeconds",
            fields.quorum_loss_wait_duration_seconds.as_ref(),
        );
        writer.write_optional_property(
            "StandByReplicaKeepDurationSeconds",
            fields.stand_by_replica_keep_duration_seconds.as_ref(),
        );
        writer.write_optional_property(
            "ServicePlacementTimeLimitSeconds",
            fields.service_placement_time_limit_seconds.as_ref(),
        );
        writer.write_optional_property(
            "DropSourceReplicaOnMove",
            fields.drop_source_replica_on_move.as_ref(),
        );
        writer.write_optional_property(
            "ReplicaLifecycleDescription",
            fields.replica_lifecycle_description.as_ref(),
        );
        writer.write_optional_property(
            "AuxiliaryReplicaCount",
            fields.auxiliary_replica_count.as_ref(),
        );
        writer.write_optional_property(
            "ServiceSensitivityDescription",
            fields.service_sensitivity_description.as_ref(),
        );
        writer.finish()
    }
}

// =============================================================================
// Stateless
// =============================================================================

/// Update of a stateless service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatelessServiceUpdateDescription {
    common: ServiceUpdateDescriptionBase,
    fields: StatelessUpdateFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct StatelessUpdateFields {
    instance_count: Option<i32>,
    min_instance_count: Option<i32>,
    min_instance_percentage: Option<i32>,
    instance_close_delay_duration_seconds: Option<String>,
    instance_lifecycle_description: Option<InstanceLifecycleDescription>,
    instance_restart_wait_duration_seconds: Option<String>,
}

impl StatelessServiceUpdateDescription {
    /// Start from the common properties; every stateless field is optional.
    pub fn builder(
        common: ServiceUpdateDescriptionBase,
    ) -> StatelessServiceUpdateDescriptionBuilder {
        StatelessServiceUpdateDescriptionBuilder {
            common,
            fields: StatelessUpdateFields::default(),
        }
    }

    /// Properties both kinds may update.
    pub fn common(&self) -> &ServiceUpdateDescriptionBase {
        &self.common
    }

    /// New instance count; `-1` places one instance on every node.
    pub fn instance_count(&self) -> Option<i32> {
        self.fields.instance_count
    }

    /// New minimum instance count for upgrade safety checks.
    pub fn min_instance_count(&self) -> Option<i32> {
        self.fields.min_instance_count
    }

    /// New minimum instance share of `InstanceCount`.
    pub fn min_instance_percentage(&self) -> Option<i32> {
        self.fields.min_instance_percentage
    }

    /// Kept as the wire string.
    pub fn instance_close_delay_duration_seconds(&self) -> Option<&str> {
        self.fields.instance_close_delay_duration_seconds.as_deref()
    }

    /// New instance lifecycle settings.
    pub fn instance_lifecycle_description(&self) -> Option<&InstanceLifecycleDescription> {
        self.fields.instance_lifecycle_description.as_ref()
    }

    /// Kept as the wire string.
    pub fn instance_restart_wait_duration_seconds(&self) -> Option<&str> {
        self.fields.instance_restart_wait_duration_seconds.as_deref()
    }
}

/// Builder for [`StatelessServiceUpdateDescription`].
#[derive(Debug, Clone)]
pub struct StatelessServiceUpdateDescriptionBuilder {
    common: ServiceUpdateDescriptionBase,
    fields: StatelessUpdateFields,
}

impl StatelessServiceUpdateDescriptionBuilder {
    setters! {
        in fields;
        instance_count: i32,
        min_instance_count: i32,
        min_instance_percentage: i32,
        instance_close_delay_duration_seconds: String,
        instance_lifecycle_description: InstanceLifecycleDescription,
        instance_restart_wait_duration_seconds: String,
    }

    /// Build the update.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BelowMinimum` if `instance_count` is below -1.
    pub fn build(self) -> Result<StatelessServiceUpdateDescription, ValidationError> {
        ensure_at_least(
            self.fields.instance_count,
            StatelessServiceUpdateDescription::TYPE_NAME,
            "InstanceCount",
            -1,
        )?;

        Ok(StatelessServiceUpdateDescription {
            common: self.common,
            fields: self.fields,
        })
    }
}

impl JsonCodec for StatelessServiceUpdateDescription {
    const TYPE_NAME: &'static str = "StatelessServiceUpdateDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut common = ServiceUpdateDescriptionBase::default();
        let mut fields = StatelessUpdateFields::default();

        while let Some(property) = reader.next_property_name() {
            if common.read_property(property, &mut reader)? {
                continue;
            }
            if property.eq_ignore_ascii_case("InstanceCount") {
                fields.instance_count = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("MinInstanceCount") {
                fields.min_instance_count = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("MinInstancePercentage") {
                fields.min_instance_percentage = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("InstanceCloseDelayDurationSeconds") {
                fields.instance_close_delay_duration_seconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("InstanceLifecycleDescription") {
                fields.instance_lifecycle_description = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("InstanceRestartWaitDurationSeconds") {
                fields.instance_restart_wait_duration_seconds = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        let builder = StatelessServiceUpdateDescriptionBuilder { common, fields };
        Ok(builder.build()?)
    }

    fn to_json(&self) -> Value {
        let fields = &self.fields;
        let mut writer = ObjectWriter::new();
        self.common.write(ServiceKind::Stateless, &mut writer);

        writer.write_optional_property("InstanceCount", fields.instance_count.as_ref());
        writer.write_optional_property("MinInstanceCount", fields.min_instance_count.as_ref());
        writer.write_optional_property(
            "MinInstancePercentage",
            fields.min_instance_percentage.as_ref(),
        );
        writer.write_optional_property(
            "InstanceCloseDelayDurationSeconds",
            fields.instance_close_delay_duration_seconds.as_ref(),
        );
        writer.write_optional_property(
            "InstanceLifecycleDescription",
            fields.instance_lifecycle_description.as_ref(),
        );
        writer.write_optional_property(
            "InstanceRestartWaitDurationSeconds",
            fields.instance_restart_wait_duration_seconds.as_ref(),
        );
        writer.finish()
    }
}

serde_via_codec!(
    ServiceUpdateDescription,
    StatefulServiceUpdateDescription,
    StatelessServiceUpdateDescription
);
