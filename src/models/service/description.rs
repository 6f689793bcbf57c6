//! models::service::description
//!
//! Service descriptions, discriminated by `ServiceKind`.
//!
//! # Shape
//!
//! [`ServiceDescription`] is a closed sum over the stateful and stateless
//! variants. Both embed a [`ServiceDescriptionBase`] with the properties every
//! service carries. Only the family converter looks at `ServiceKind`; the
//! variant converters skip it, so a stateful payload read directly as
//! [`StatelessServiceDescription`] is read by stateless rules.
//!
//! # Example
//!
//! ```
//! use fabric_models::core::types::ServiceName;
//! use fabric_models::models::service::{
//!     PartitionSchemeDescription, ServiceDescription, ServiceDescriptionBase,
//!     StatefulServiceDescription,
//! };
//!
//! let base = ServiceDescriptionBase::builder()
//!     .service_name(ServiceName::new("fabric:/app/store"))
//!     .service_type_name("StoreType".to_string())
//!     .partition_description(PartitionSchemeDescription::Singleton)
//!     .build()?;
//!
//! let stateful = StatefulServiceDescription::builder(base)
//!     .target_replica_set_size(3)
//!     .min_replica_set_size(2)
//!     .has_persisted_state(true)
//!     .build()?;
//!
//! let text = fabric_models::to_string(&ServiceDescription::Stateful(stateful));
//! assert!(text.starts_with(r#"{"ServiceKind":"Stateful","ServiceName":"fabric:/app/store""#));
//! # Ok::<(), fabric_models::core::validate::ValidationError>(())
//! ```

use serde_json::Value;

use super::correlation::ServiceCorrelationDescription;
use super::enums::{MoveCost, ServiceKind, ServicePackageActivationMode};
use super::lifecycle::{InstanceLifecycleDescription, ReplicaLifecycleDescription};
use super::load_metric::ServiceLoadMetricDescription;
use super::partition::PartitionSchemeDescription;
use super::placement::ServicePlacementPolicyDescription;
use super::scaling::ScalingPolicyDescription;
use super::sensitivity::ServiceSensitivityDescription;
use super::tags::NodeTagsDescription;
use crate::codec::{
    read_discriminator, serde_via_codec, CodecError, JsonCodec, ObjectReader, ObjectWriter,
    ReadContext,
};
use crate::core::types::{ApplicationName, ServiceName};
use crate::core::validate::{ensure_at_least, ensure_duration_seconds, required, ValidationError};
use crate::models::setters;

// =============================================================================
// Family
// =============================================================================

/// A service to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceDescription {
    Stateful(StatefulServiceDescription),
    Stateless(StatelessServiceDescription),
}

impl ServiceDescription {
    /// The `ServiceKind` written for this variant.
    pub fn kind(&self) -> ServiceKind {
        match self {
            ServiceDescription::Stateful(_) => ServiceKind::Stateful,
            ServiceDescription::Stateless(_) => ServiceKind::Stateless,
        }
    }

    /// Properties shared by both kinds.
    pub fn base(&self) -> &ServiceDescriptionBase {
        match self {
            ServiceDescription::Stateful(stateful) => stateful.base(),
            ServiceDescription::Stateless(stateless) => stateless.base(),
        }
    }
}

impl JsonCodec for ServiceDescription {
    const TYPE_NAME: &'static str = "ServiceDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let kind: ServiceKind = read_discriminator(value, Self::TYPE_NAME, "ServiceKind", ctx)?;
        match kind {
            ServiceKind::Stateful => {
                StatefulServiceDescription::read_json(value, ctx).map(ServiceDescription::Stateful)
            }
            ServiceKind::Stateless => StatelessServiceDescription::read_json(value, ctx)
                .map(ServiceDescription::Stateless),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            ServiceDescription::Stateful(stateful) => stateful.to_json(),
            ServiceDescription::Stateless(stateless) => stateless.to_json(),
        }
    }
}

impl From<StatefulServiceDescription> for ServiceDescription {
    fn from(description: StatefulServiceDescription) -> Self {
        ServiceDescription::Stateful(description)
    }
}

impl From<StatelessServiceDescription> for ServiceDescription {
    fn from(description: StatelessServiceDescription) -> Self {
        ServiceDescription::Stateless(description)
    }
}

// =============================================================================
// Common properties
// =============================================================================

/// Properties common to every service description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptionBase {
    application_name: Option<ApplicationName>,
    service_name: ServiceName,
    service_type_name: String,
    initialization_data: Option<Vec<u8>>,
    partition_description: PartitionSchemeDescription,
    placement_constraints: Option<String>,
    correlation_scheme: Option<Vec<ServiceCorrelationDescription>>,
    service_load_metrics: Option<Vec<ServiceLoadMetricDescription>>,
    service_placement_policies: Option<Vec<ServicePlacementPolicyDescription>>,
    default_move_cost: Option<MoveCost>,
    is_default_move_cost_specified: Option<bool>,
    service_package_activation_mode: Option<ServicePackageActivationMode>,
    service_dns_name: Option<String>,
    scaling_policies: Option<Vec<ScalingPolicyDescription>>,
    tags_required_to_place: Option<NodeTagsDescription>,
    tags_required_to_run: Option<NodeTagsDescription>,
}

impl ServiceDescriptionBase {
    /// `ServiceName`, `ServiceTypeName` and `PartitionDescription` are required.
    pub fn builder() -> ServiceDescriptionBaseBuilder {
        ServiceDescriptionBaseBuilder::default()
    }

    /// Owning application, e.g. `fabric:/app`.
    pub fn application_name(&self) -> Option<&ApplicationName> {
        self.application_name.as_ref()
    }

    /// Full service name, e.g. `fabric:/app/store`.
    pub fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    /// Service type as registered in the application manifest.
    pub fn service_type_name(&self) -> &str {
        &self.service_type_name
    }

    /// Opaque bytes handed to the service on startup.
    pub fn initialization_data(&self) -> Option<&[u8]> {
        self.initialization_data.as_deref()
    }

    /// How the service is partitioned.
    pub fn partition_description(&self) -> &PartitionSchemeDescription {
        &self.partition_description
    }

    /// Placement expression over node properties, e.g. `NodeType == Front`.
    pub fn placement_constraints(&self) -> Option<&str> {
        self.placement_constraints.as_deref()
    }

    /// Services this one is placed relative to.
    pub fn correlation_scheme(&self) -> Option<&[ServiceCorrelationDescription]> {
        self.correlation_scheme.as_deref()
    }

    /// Metrics the resource balancer tracks for this service.
    pub fn service_load_metrics(&self) -> Option<&[ServiceLoadMetricDescription]> {
        self.service_load_metrics.as_deref()
    }

    /// Domain placement rules.
    pub fn service_placement_policies(&self) -> Option<&[ServicePlacementPolicyDescription]> {
        self.service_placement_policies.as_deref()
    }

    /// Cost the balancer assigns to moving a replica or instance.
    pub fn default_move_cost(&self) -> Option<MoveCost> {
        self.default_move_cost
    }

    /// Whether [`default_move_cost`](Self::default_move_cost) was set explicitly.
    pub fn is_default_move_cost_specified(&self) -> Option<bool> {
        self.is_default_move_cost_specified
    }

    /// Whether replicas share a service package process.
    pub fn service_package_activation_mode(&self) -> Option<ServicePackageActivationMode> {
        self.service_package_activation_mode
    }

    /// DNS name registered for the service.
    pub fn service_dns_name(&self) -> Option<&str> {
        self.service_dns_name.as_deref()
    }

    /// Auto-scaling rules.
    pub fn scaling_policies(&self) -> Option<&[ScalingPolicyDescription]> {
        self.scaling_policies.as_deref()
    }

    /// Node tags a node must carry to receive a new replica.
    pub fn tags_required_to_place(&self) -> Option<&NodeTagsDescription> {
        self.tags_required_to_place.as_ref()
    }

    /// Node tags a node must keep carrying for replicas to stay.
    pub fn tags_required_to_run(&self) -> Option<&NodeTagsDescription> {
        self.tags_required_to_run.as_ref()
    }

    /// Required properties, written right after the discriminator.
    fn write_leading(&self, writer: &mut ObjectWriter) {
        writer.write_property("ServiceName", &self.service_name);
        writer.write_property("ServiceTypeName", &self.service_type_name);
        writer.write_property("PartitionDescription", &self.partition_description);
    }

    /// Enum-typed properties, always written.
    fn write_enums(&self, writer: &mut ObjectWriter) {
        writer.write_nullable_property("DefaultMoveCost", self.default_move_cost.as_ref());
        writer.write_nullable_property(
            "ServicePackageActivationMode",
            self.service_package_activation_mode.as_ref(),
        );
    }

    fn write_optionals(&self, writer: &mut ObjectWriter) {
        writer.write_optional_property("ApplicationName", self.application_name.as_ref());
        writer.write_optional_property("InitializationData", self.initialization_data.as_ref());
        writer.write_optional_property("PlacementConstraints", self.placement_constraints.as_ref());
        writer.write_optional_list_property(
            "CorrelationScheme",
            self.correlation_scheme.as_deref(),
        );
        writer.write_optional_list_property(
            "ServiceLoadMetrics",
            self.service_load_metrics.as_deref(),
        );
        writer.write_optional_list_property(
            "ServicePlacementPolicies",
            self.service_placement_policies.as_deref(),
        );
        writer.write_optional_property(
            "IsDefaultMoveCostSpecified",
            self.is_default_move_cost_specified.as_ref(),
        );
        writer.write_optional_property("ServiceDnsName", self.service_dns_name.as_ref());
        writer.write_optional_list_property("ScalingPolicies", self.scaling_policies.as_deref());
        writer.write_optional_property("TagsRequiredToPlace", self.tags_required_to_place.as_ref());
        writer.write_optional_property("TagsRequiredToRun", self.tags_required_to_run.as_ref());
    }
}

/// Builder for [`ServiceDescriptionBase`].
#[derive(Debug, Clone, Default)]
pub struct ServiceDescriptionBaseBuilder {
    application_name: Option<ApplicationName>,
    service_name: Option<ServiceName>,
    service_type_name: Option<String>,
    initialization_data: Option<Vec<u8>>,
    partition_description: Option<PartitionSchemeDescription>,
    placement_constraints: Option<String>,
    correlation_scheme: Option<Vec<ServiceCorrelationDescription>>,
    service_load_metrics: Option<Vec<ServiceLoadMetricDescription>>,
    service_placement_policies: Option<Vec<ServicePlacementPolicyDescription>>,
    default_move_cost: Option<MoveCost>,
    is_default_move_cost_specified: Option<bool>,
    service_package_activation_mode: Option<ServicePackageActivationMode>,
    service_dns_name: Option<String>,
    scaling_policies: Option<Vec<ScalingPolicyDescription>>,
    tags_required_to_place: Option<NodeTagsDescription>,
    tags_required_to_run: Option<NodeTagsDescription>,
}

impl ServiceDescriptionBaseBuilder {
    setters! {
        application_name: ApplicationName,
        service_name: ServiceName,
        service_type_name: String,
        initialization_data: Vec<u8>,
        partition_description: PartitionSchemeDescription,
        placement_constraints: String,
        correlation_scheme: Vec<ServiceCorrelationDescription>,
        service_load_metrics: Vec<ServiceLoadMetricDescription>,
        service_placement_policies: Vec<ServicePlacementPolicyDescription>,
        default_move_cost: MoveCost,
        is_default_move_cost_specified: bool,
        service_package_activation_mode: ServicePackageActivationMode,
        service_dns_name: String,
        scaling_policies: Vec<ScalingPolicyDescription>,
        tags_required_to_place: NodeTagsDescription,
        tags_required_to_run: NodeTagsDescription,
    }

    /// Build the common properties.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NullArgument` if `service_name`,
    /// `service_type_name`, or `partition_description` is missing.
    pub fn build(self) -> Result<ServiceDescriptionBase, ValidationError> {
        const TYPE_NAME: &str = "ServiceDescription";

        let service_name = required(self.service_name, TYPE_NAME, "ServiceName")?;
        let service_type_name = required(self.service_type_name, TYPE_NAME, "ServiceTypeName")?;
        let partition_description =
            required(self.partition_description, TYPE_NAME, "PartitionDescription")?;

        Ok(ServiceDescriptionBase {
            application_name: self.application_name,
            service_name,
            service_type_name,
            initialization_data: self.initialization_data,
            partition_description,
            placement_constraints: self.placement_constraints,
            correlation_scheme: self.correlation_scheme,
            service_load_metrics: self.service_load_metrics,
            service_placement_policies: self.service_placement_policies,
            default_move_cost: self.default_move_cost,
            is_default_move_cost_specified: self.is_default_move_cost_specified,
            service_package_activation_mode: self.service_package_activation_mode,
            service_dns_name: self.service_dns_name,
            scaling_policies: self.scaling_policies,
            tags_required_to_place: self.tags_required_to_place,
            tags_required_to_run: self.tags_required_to_run,
        })
    }

    /// Read one common property. Returns false if `property` is not one of them.
    fn read_property(
        &mut self,
        property: &str,
        reader: &mut ObjectReader<'_>,
    ) -> Result<bool, CodecError> {
        if property.eq_ignore_ascii_case("ApplicationName") {
            self.application_name = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("ServiceName") {
            self.service_name = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("ServiceTypeName") {
            self.service_type_name = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("InitializationData") {
            self.initialization_data = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("PartitionDescription") {
            self.partition_description = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("PlacementConstraints") {
            self.placement_constraints = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("CorrelationScheme") {
            self.correlation_scheme = reader.read_list()?;
        } else if property.eq_ignore_ascii_case("ServiceLoadMetrics") {
            self.service_load_metrics = reader.read_list()?;
        } else if property.eq_ignore_ascii_case("ServicePlacementPolicies") {
            self.service_placement_policies = reader.read_list()?;
        } else if property.eq_ignore_ascii_case("DefaultMoveCost") {
            self.default_move_cost = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("IsDefaultMoveCostSpecified") {
            self.is_default_move_cost_specified = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("ServicePackageActivationMode") {
            self.service_package_activation_mode = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("ServiceDnsName") {
            self.service_dns_name = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("ScalingPolicies") {
            self.scaling_policies = reader.read_list()?;
        } else if property.eq_ignore_ascii_case("TagsRequiredToPlace") {
            self.tags_required_to_place = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("TagsRequiredToRun") {
            self.tags_required_to_run = reader.read_value()?;
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

// =============================================================================
// Stateful
// =============================================================================

/// A stateful service: replicated, with a primary and secondaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatefulServiceDescription {
    base: ServiceDescriptionBase,
    target_replica_set_size: i32,
    min_replica_set_size: i32,
    has_persisted_state: bool,
    fields: StatefulFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct StatefulFields {
    flags: Option<i32>,
    replica_restart_wait_duration_seconds: Option<i64>,
    quorum_loss_wait_duration_seconds: Option<i64>,
    stand_by_replica_keep_duration_seconds: Option<i64>,
    service_placement_time_limit_seconds: Option<i64>,
    drop_source_replica_on_move: Option<bool>,
    replica_lifecycle_description: Option<ReplicaLifecycleDescription>,
    auxiliary_replica_count: Option<i32>,
    service_sensitivity_description: Option<ServiceSensitivityDescription>,
}

impl StatefulFields {
    fn read_property(
        &mut self,
        property: &str,
        reader: &mut ObjectReader<'_>,
    ) -> Result<bool, CodecError> {
        if property.eq_ignore_ascii_case("Flags") {
            self.flags = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("ReplicaRestartWaitDurationSeconds") {
            self.replica_restart_wait_duration_seconds = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("QuorumLossWaitDurationSeconds") {
            self.quorum_loss_wait_duration_seconds = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("StandByReplicaKeepDurationSeconds") {
            self.stand_by_replica_keep_duration_seconds = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("ServicePlacementTimeLimitSeconds") {
            self.service_placement_time_limit_seconds = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("DropSourceReplicaOnMove") {
            self.drop_source_replica_on_move = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("ReplicaLifecycleDescription") {
            self.replica_lifecycle_description = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("AuxiliaryReplicaCount") {
            self.auxiliary_replica_count = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("ServiceSensitivityDescription") {
            self.service_sensitivity_description = reader.read_value()?;
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

impl StatefulServiceDescription {
    /// Start from the common properties.
    pub fn builder(base: ServiceDescriptionBase) -> StatefulServiceDescriptionBuilder {
        StatefulServiceDescriptionBuilder {
            base,
            target_replica_set_size: None,
            min_replica_set_size: None,
            has_persisted_state: None,
            fields: StatefulFields::default(),
        }
    }

    /// Common properties.
    pub fn base(&self) -> &ServiceDescriptionBase {
        &self.base
    }

    /// Desired replica count per partition.
    pub fn target_replica_set_size(&self) -> i32 {
        self.target_replica_set_size
    }

    /// Replica count below which writes are refused.
    pub fn min_replica_set_size(&self) -> i32 {
        self.min_replica_set_size
    }

    /// Whether replicas keep state on local disk.
    pub fn has_persisted_state(&self) -> bool {
        self.has_persisted_state
    }

    /// Bit set marking which optional durations were specified.
    pub fn flags(&self) -> Option<i32> {
        self.fields.flags
    }

    /// Wait after a replica goes down before a new one is created.
    pub fn replica_restart_wait_duration_seconds(&self) -> Option<i64> {
        self.fields.replica_restart_wait_duration_seconds
    }

    /// How long a partition may stay in quorum loss.
    pub fn quorum_loss_wait_duration_seconds(&self) -> Option<i64> {
        self.fields.quorum_loss_wait_duration_seconds
    }

    /// How long standby replicas are kept before removal.
    pub fn stand_by_replica_keep_duration_seconds(&self) -> Option<i64> {
        self.fields.stand_by_replica_keep_duration_seconds
    }

    /// How long a replica may stay in build before it is reported stuck.
    pub fn service_placement_time_limit_seconds(&self) -> Option<i64> {
        self.fields.service_placement_time_limit_seconds
    }

    /// Drop the source secondary before the new one finishes building.
    pub fn drop_source_replica_on_move(&self) -> Option<bool> {
        self.fields.drop_source_replica_on_move
    }

    /// Replica behavior across upgrades and restores.
    pub fn replica_lifecycle_description(&self) -> Option<&ReplicaLifecycleDescription> {
        self.fields.replica_lifecycle_description.as_ref()
    }

    /// Auxiliary replicas per partition.
    pub fn auxiliary_replica_count(&self) -> Option<i32> {
        self.fields.auxiliary_replica_count
    }

    /// Move sensitivity of primaries and secondaries.
    pub fn service_sensitivity_description(&self) -> Option<&ServiceSensitivityDescription> {
        self.fields.service_sensitivity_description.as_ref()
    }
}

/// Builder for [`StatefulServiceDescription`].
#[derive(Debug, Clone)]
pub struct StatefulServiceDescriptionBuilder {
    base: ServiceDescriptionBase,
    target_replica_set_size: Option<i32>,
    min_replica_set_size: Option<i32>,
    has_persisted_state: Option<bool>,
    fields: StatefulFields,
}

impl StatefulServiceDescriptionBuilder {
    setters! {
        /// Desired number of replicas per partition.
        target_replica_set_size: i32,
        /// Replicas required for write quorum.
        min_replica_set_size: i32,
        /// Whether replicas persist state to disk.
        has_persisted_state: bool,
    }

    setters! {
        in fields;
        flags: i32,
        replica_restart_wait_duration_seconds: i64,
        quorum_loss_wait_duration_seconds: i64,
        stand_by_replica_keep_duration_seconds: i64,
        service_placement_time_limit_seconds: i64,
        drop_source_replica_on_move: bool,
        replica_lifecycle_description: ReplicaLifecycleDescription,
        auxiliary_replica_count: i32,
        service_sensitivity_description: ServiceSensitivityDescription,
    }

    /// Build the description.
    ///
    /// # Errors
    ///
    /// - `NullArgument` if a replica set size or `has_persisted_state` is missing
    /// - `BelowMinimum` if a replica set size is below 1 or
    ///   `auxiliary_replica_count` is negative
    /// - `OutOfRange` if a duration does not fit in `[0, 4294967295]`
    pub fn build(self) -> Result<StatefulServiceDescription, ValidationError> {
        const TYPE_NAME: &str = StatefulServiceDescription::TYPE_NAME;
        let fields = self.fields;

        let target_replica_set_size =
            required(self.target_replica_set_size, TYPE_NAME, "TargetReplicaSetSize")?;
        let min_replica_set_size =
            required(self.min_replica_set_size, TYPE_NAME, "MinReplicaSetSize")?;
        let has_persisted_state =
            required(self.has_persisted_state, TYPE_NAME, "HasPersistedState")?;

        ensure_at_least(Some(target_replica_set_size), TYPE_NAME, "TargetReplicaSetSize", 1)?;
        ensure_at_least(Some(min_replica_set_size), TYPE_NAME, "MinReplicaSetSize", 1)?;
        ensure_duration_seconds(
            fields.replica_restart_wait_duration_seconds,
            TYPE_NAME,
            "ReplicaRestartWaitDurationSeconds",
        )?;
        ensure_duration_seconds(
            fields.quorum_loss_wait_duration_seconds,
            TYPE_NAME,
            "QuorumLossWaitDurationSeconds",
        )?;
        ensure_duration_seconds(
            fields.stand_by_replica_keep_duration_seconds,
            TYPE_NAME,
            "StandByReplicaKeepDurationSeconds",
        )?;
        ensure_duration_seconds(
            fields.service_placement_time_limit_seconds,
            TYPE_NAME,
            "ServicePlacementTimeLimitSeconds",
        )?;
        ensure_at_least(fields.auxiliary_replica_count, TYPE_NAME, "AuxiliaryReplicaCount", 0)?;

        Ok(StatefulServiceDescription {
            base: self.base,
            target_replica_set_size,
            min_replica_set_size,
            has_persisted_state,
            fields,
        })
    }
}

impl JsonCodec for StatefulServiceDescription {
    const TYPE_NAME: &'static str = "StatefulServiceDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut base = ServiceDescriptionBase::builder();
        let mut target_replica_set_size = None;
        let mut min_replica_set_size = None;
        let mut has_persisted_state = None;
        let mut fields = StatefulFields::default();

        while let Some(property) = reader.next_property_name() {
            if base.read_property(property, &mut reader)? {
                continue;
            }
            if property.eq_ignore_ascii_case("TargetReplicaSetSize") {
                target_replica_set_size = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("MinReplicaSetSize") {
                min_replica_set_size = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HasPersistedState") {
                has_persisted_state = reader.read_value()?;
            } else if !fields.read_property(property, &mut reader)? {
                reader.skip_value();
            }
        }

        let builder = StatefulServiceDescriptionBuilder {
            base: base.build()?,
            target_replica_set_size,
            min_replica_set_size,
            has_persisted_state,
            fields,
        };
        Ok(builder.build()?)
    }

    fn to_json(&self) -> Value {
        let fields = &self.fields;
        let mut writer = ObjectWriter::new();

        writer.write_property("ServiceKind", &ServiceKind::Stateful);
        self.base.write_leading(&mut writer);
        writer.write_property("TargetReplicaSetSize", &self.target_replica_set_size);
        writer.write_property("MinReplicaSetSize", &self.min_replica_set_size);
        writer.write_property("HasPersistedState", &self.has_persisted_state);
        self.base.write_enums(&mut writer);
        self.base.write_optionals(&mut writer);

        writer.write_optional_property("Flags", fields.flags.as_ref());
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

/// A stateless service: interchangeable instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatelessServiceDescription {
    base: ServiceDescriptionBase,
    instance_count: i32,
    fields: StatelessFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct StatelessFields {
    min_instance_count: Option<i32>,
    min_instance_percentage: Option<i32>,
    flags: Option<i32>,
    instance_close_delay_duration_seconds: Option<i64>,
    instance_lifecycle_description: Option<InstanceLifecycleDescription>,
    instance_restart_wait_duration_seconds: Option<i64>,
}

impl StatelessFields {
    fn read_property(
        &mut self,
        property: &str,
        reader: &mut ObjectReader<'_>,
    ) -> Result<bool, CodecError> {
        if property.eq_ignore_ascii_case("MinInstanceCount") {
            self.min_instance_count = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("MinInstancePercentage") {
            self.min_instance_percentage = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("Flags") {
            self.flags = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("InstanceCloseDelayDurationSeconds") {
            self.instance_close_delay_duration_seconds = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("InstanceLifecycleDescription") {
            self.instance_lifecycle_description = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("InstanceRestartWaitDurationSeconds") {
            self.instance_restart_wait_duration_seconds = reader.read_value()?;
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

impl StatelessServiceDescription {
    /// Start from the common properties.
    pub fn builder(base: ServiceDescriptionBase) -> StatelessServiceDescriptionBuilder {
        StatelessServiceDescriptionBuilder {
            base,
            instance_count: None,
            fields: StatelessFields::default(),
        }
    }

    /// Common properties.
    pub fn base(&self) -> &ServiceDescriptionBase {
        &self.base
    }

    /// Instances per partition; `-1` places one on every eligible node.
    pub fn instance_count(&self) -> i32 {
        self.instance_count
    }

    /// Lower bound for the safety checks run during upgrades.
    pub fn min_instance_count(&self) -> Option<i32> {
        self.fields.min_instance_count
    }

    /// Same as [`min_instance_count`](Self::min_instance_count), as a share of `InstanceCount`.
    pub fn min_instance_percentage(&self) -> Option<i32> {
        self.fields.min_instance_percentage
    }

    /// Bit set marking which optional durations were specified.
    pub fn flags(&self) -> Option<i32> {
        self.fields.flags
    }

    /// Grace period before an instance is closed during upgrade.
    pub fn instance_close_delay_duration_seconds(&self) -> Option<i64> {
        self.fields.instance_close_delay_duration_seconds
    }

    /// Instance behavior across upgrades.
    pub fn instance_lifecycle_description(&self) -> Option<&InstanceLifecycleDescription> {
        self.fields.instance_lifecycle_description.as_ref()
    }

    /// Wait before a failed instance is placed elsewhere.
    pub fn instance_restart_wait_duration_seconds(&self) -> Option<i64> {
        self.fields.instance_restart_wait_duration_seconds
    }
}

/// Builder for [`StatelessServiceDescription`].
#[derive(Debug, Clone)]
pub struct StatelessServiceDescriptionBuilder {
    base: ServiceDescriptionBase,
    instance_count: Option<i32>,
    fields: StatelessFields,
}

impl StatelessServiceDescriptionBuilder {
    setters! {
        /// Instances per partition; `-1` for one on every eligible node.
        instance_count: i32,
    }

    setters! {
        in fields;
        min_instance_count: i32,
        min_instance_percentage: i32,
        flags: i32,
        instance_close_delay_duration_seconds: i64,
        instance_lifecycle_description: InstanceLifecycleDescription,
        instance_restart_wait_duration_seconds: i64,
    }

    /// Build the description.
    ///
    /// # Errors
    ///
    /// - `NullArgument` if `instance_count` is missing
    /// - `BelowMinimum` if `instance_count` is below -1
    /// - `OutOfRange` if a duration does not fit in `[0, 4294967295]`
    pub fn build(self) -> Result<StatelessServiceDescription, ValidationError> {
        const TYPE_NAME: &str = StatelessServiceDescription::TYPE_NAME;
        let fields = self.fields;

        let instance_count = required(self.instance_count, TYPE_NAME, "InstanceCount")?;

        ensure_at_least(Some(instance_count), TYPE_NAME, "InstanceCount", -1)?;
        ensure_duration_seconds(
            fields.instance_close_delay_duration_seconds,
            TYPE_NAME,
            "InstanceCloseDelayDurationSeconds",
        )?;
        ensure_duration_seconds(
            fields.instance_restart_wait_duration_seconds,
            TYPE_NAME,
            "InstanceRestartWaitDurationSeconds",
        )?;

        Ok(StatelessServiceDescription {
            base: self.base,
            instance_count,
            fields,
        })
    }
}

impl JsonCodec for StatelessServiceDescription {
    const TYPE_NAME: &'static str = "StatelessServiceDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut base = ServiceDescriptionBase::builder();
        let mut instance_count = None;
        let mut fields = StatelessFields::default();

        while let Some(property) = reader.next_property_name() {
            if base.read_property(property, &mut reader)? {
                continue;
            }
            if property.eq_ignore_ascii_case("InstanceCount") {
                instance_count = reader.read_value()?;
            } else if !fields.read_property(property, &mut reader)? {
                reader.skip_value();
            }
        }

        let builder = StatelessServiceDescriptionBuilder {
            base: base.build()?,
            instance_count,
            fields,
        };
        Ok(builder.build()?)
    }

    fn to_json(&self) -> Value {
        let fields = &self.fields;
        let mut writer = ObjectWriter::new();

        writer.write_property("ServiceKind", &ServiceKind::Stateless);
        self.base.write_leading(&mut writer);
        writer.write_property("InstanceCount", &self.instance_count);
        self.base.write_enums(&mut writer);
        self.base.write_optionals(&mut writer);

        writer.write_optional_property("MinInstanceCount", fields.min_instance_count.as_ref());
        writer.write_optional_property(
            "MinInstancePercentage",
            fields.min_instance_percentage.as_ref(),
        );
        writer.write_optional_property("Flags", fields.flags.as_ref());
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
    ServiceDescription,
    StatefulServiceDescription,
    StatelessServiceDescription
);
