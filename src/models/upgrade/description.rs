//! models::upgrade::description
//!
//! Requests that start an application or cluster upgrade.
//!
//! Builders and `Default` start from the cluster's defaults (`Rolling`,
//! `UnmonitoredAuto`, sort order `Default`). Decoding starts from nothing, so
//! a payload that omits `UpgradeKind` fails the same way a builder cleared
//! with `upgrade_kind(None)` does.

use serde_json::Value;

use super::enums::{UpgradeKind, UpgradeMode, UpgradeSortOrder};
use super::monitoring::MonitoringPolicyDescription;
use crate::codec::{
    serde_via_codec, CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext,
};
use crate::core::types::ApplicationName;
use crate::core::validate::{ensure_duration_seconds, required, ValidationError};
use crate::models::setters;

/// One application parameter override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationParameter {
    key: String,
    value: String,
}

impl ApplicationParameter {
    /// A parameter override written as `{"Key":..,"Value":..}`.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parameter name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Parameter value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl JsonCodec for ApplicationParameter {
    const TYPE_NAME: &'static str = "ApplicationParameter";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut key: Option<String> = None;
        let mut parameter_value: Option<String> = None;

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("Key") {
                key = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("Value") {
                parameter_value = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(Self::new(
            required(key, Self::TYPE_NAME, "Key")?,
            required(parameter_value, Self::TYPE_NAME, "Value")?,
        ))
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("Key", &self.key);
        writer.write_property("Value", &self.value);
        writer.finish()
    }
}

// =============================================================================
// Application upgrade
// =============================================================================

/// Request to upgrade an application to another application type version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationUpgradeDescription {
    name: ApplicationName,
    target_application_type_version: String,
    upgrade_kind: UpgradeKind,
    rolling_upgrade_mode: Option<UpgradeMode>,
    sort_order: Option<UpgradeSortOrder>,
    parameters: Option<Vec<ApplicationParameter>>,
    upgrade_replica_set_check_timeout_in_seconds: Option<i64>,
    force_restart: Option<bool>,
    monitoring_policy: Option<MonitoringPolicyDescription>,
    instance_close_delay_duration_in_seconds: Option<i64>,
}

impl ApplicationUpgradeDescription {
    /// Defaults to a rolling, unmonitored-auto upgrade in default order.
    pub fn builder() -> ApplicationUpgradeDescriptionBuilder {
        ApplicationUpgradeDescriptionBuilder::default()
    }

    /// Application being upgraded.
    pub fn name(&self) -> &ApplicationName {
        &self.name
    }

    /// Application type version to upgrade to.
    pub fn target_application_type_version(&self) -> &str {
        &self.target_application_type_version
    }

    /// Always set; decoding fails without it.
    pub fn upgrade_kind(&self) -> UpgradeKind {
        self.upgrade_kind
    }

    /// `None` when decoded from a payload that omitted it.
    pub fn rolling_upgrade_mode(&self) -> Option<UpgradeMode> {
        self.rolling_upgrade_mode
    }

    /// Order in which upgrade domains are visited.
    pub fn sort_order(&self) -> Option<UpgradeSortOrder> {
        self.sort_order
    }

    /// Parameter overrides for the new version.
    pub fn parameters(&self) -> Option<&[ApplicationParameter]> {
        self.parameters.as_deref()
    }

    /// How long to wait for replica sets to become safe before an upgrade domain proceeds.
    pub fn upgrade_replica_set_check_timeout_in_seconds(&self) -> Option<i64> {
        self.upgrade_replica_set_check_timeout_in_seconds
    }

    /// Restart processes even when only config or data changed.
    pub fn force_restart(&self) -> Option<bool> {
        self.force_restart
    }

    /// Health checks for monitored upgrades.
    pub fn monitoring_policy(&self) -> Option<&MonitoringPolicyDescription> {
        self.monitoring_policy.as_ref()
    }

    /// Grace period before stateless instances are closed.
    pub fn instance_close_delay_duration_in_seconds(&self) -> Option<i64> {
        self.instance_close_delay_duration_in_seconds
    }
}

/// Builder for [`ApplicationUpgradeDescription`].
#[derive(Debug, Clone)]
pub struct ApplicationUpgradeDescriptionBuilder {
    name: Option<ApplicationName>,
    target_application_type_version: Option<String>,
    upgrade_kind: Option<UpgradeKind>,
    rolling_upgrade_mode: Option<UpgradeMode>,
    sort_order: Option<UpgradeSortOrder>,
    parameters: Option<Vec<ApplicationParameter>>,
    upgrade_replica_set_check_timeout_in_seconds: Option<i64>,
    force_restart: Option<bool>,
    monitoring_policy: Option<MonitoringPolicyDescription>,
    instance_close_delay_duration_in_seconds: Option<i64>,
}

impl Default for ApplicationUpgradeDescriptionBuilder {
    fn default() -> Self {
        Self {
            upgrade_kind: Some(UpgradeKind::Rolling),
            rolling_upgrade_mode: Some(UpgradeMode::UnmonitoredAuto),
            sort_order: Some(UpgradeSortOrder::Default),
            ..Self::empty()
        }
    }
}

impl ApplicationUpgradeDescriptionBuilder {
    fn empty() -> Self {
        Self {
            name: None,
            target_application_type_version: None,
            upgrade_kind: None,
            rolling_upgrade_mode: None,
            sort_order: None,
            parameters: None,
            upgrade_replica_set_check_timeout_in_seconds: None,
            force_restart: None,
            monitoring_policy: None,
            instance_close_delay_duration_in_seconds: None,
        }
    }

    setters! {
        name: ApplicationName,
        target_application_type_version: String,
        upgrade_kind: UpgradeKind,
        rolling_upgrade_mode: UpgradeMode,
        sort_order: UpgradeSortOrder,
        parameters: Vec<ApplicationParameter>,
        upgrade_replica_set_check_timeout_in_seconds: i64,
        force_restart: bool,
        monitoring_policy: MonitoringPolicyDescription,
        instance_close_delay_duration_in_seconds: i64,
    }

    /// Build the request.
    ///
    /// # Errors
    ///
    /// - `NullArgument` if `name`, `target_application_type_version`, or
    ///   `upgrade_kind` is missing
    /// - `OutOfRange` if a timeout does not fit in `[0, 4294967295]`
    pub fn build(self) -> Result<ApplicationUpgradeDescription, ValidationError> {
        const TYPE_NAME: &str = ApplicationUpgradeDescription::TYPE_NAME;

        let name = required(self.name, TYPE_NAME, "Name")?;
        let target_application_type_version = required(
            self.target_application_type_version,
            TYPE_NAME,
            "TargetApplicationTypeVersion",
        )?;
        let upgrade_kind = required(self.upgrade_kind, TYPE_NAME, "UpgradeKind")?;

        ensure_duration_seconds(
            self.upgrade_replica_set_check_timeout_in_seconds,
            TYPE_NAME,
            "UpgradeReplicaSetCheckTimeoutInSeconds",
        )?;
        ensure_duration_seconds(
            self.instance_close_delay_duration_in_seconds,
            TYPE_NAME,
            "InstanceCloseDelayDurationInSeconds",
        )?;

        Ok(ApplicationUpgradeDescription {
            name,
            target_application_type_version,
            upgrade_kind,
            rolling_upgrade_mode: self.rolling_upgrade_mode,
            sort_order: self.sort_order,
            parameters: self.parameters,
            upgrade_replica_set_check_timeout_in_seconds: self
                .upgrade_replica_set_check_timeout_in_seconds,
            force_restart: self.force_restart,
            monitoring_policy: self.monitoring_policy,
            instance_close_delay_duration_in_seconds: self.instance_close_delay_duration_in_seconds,
        })
    }
}

impl JsonCodec for ApplicationUpgradeDescription {
    const TYPE_NAME: &'static str = "ApplicationUpgradeDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut builder = ApplicationUpgradeDescriptionBuilder::empty();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("Name") {
                builder.name = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("TargetApplicationTypeVersion") {
                builder.target_application_type_version = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("Parameters") {
                builder.parameters = reader.read_list()?;
            } else if property.eq_ignore_ascii_case("UpgradeKind") {
                builder.upgrade_kind = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("RollingUpgradeMode") {
                builder.rolling_upgrade_mode = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeReplicaSetCheckTimeoutInSeconds") {
                builder.upgrade_replica_set_check_timeout_in_seconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("ForceRestart") {
                builder.force_restart = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("SortOrder") {
                builder.sort_order = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("MonitoringPolicy") {
                builder.monitoring_policy = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("InstanceCloseDelayDurationInSeconds") {
                builder.instance_close_delay_duration_in_seconds = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(builder.build()?)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("Name", &self.name);
        writer.write_property(
            "TargetApplicationTypeVersion",
            &self.target_application_type_version,
        );
        writer.write_property("UpgradeKind", &self.upgrade_kind);
        writer.write_nullable_property("RollingUpgradeMode", self.rolling_upgrade_mode.as_ref());
        writer.write_nullable_property("SortOrder", self.sort_order.as_ref());
        writer.write_optional_list_property("Parameters", self.parameters.as_deref());
        writer.write_optional_property(
            "UpgradeReplicaSetCheckTimeoutInSeconds",
            self.upgrade_replica_set_check_timeout_in_seconds.as_ref(),
        );
        writer.write_optional_property("ForceRestart", self.force_restart.as_ref());
        writer.write_optional_property("MonitoringPolicy", self.monitoring_policy.as_ref());
        writer.write_optional_property(
            "InstanceCloseDelayDurationInSeconds",
            self.instance_close_delay_duration_in_seconds.as_ref(),
        );
        writer.finish()
    }
}

// =============================================================================
// Cluster upgrade
// =============================================================================

/// Request to upgrade the cluster's code or configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterUpgradeDescriptionObject {
    pub config_version: Option<String>,
    pub code_version: Option<String>,
    pub upgrade_kind: Option<UpgradeKind>,
    pub rolling_upgrade_mode: Option<UpgradeMode>,
    pub upgrade_replica_set_check_timeout_in_seconds: Option<i64>,
    pub force_restart: Option<bool>,
    pub sort_order: Option<UpgradeSortOrder>,
    pub enable_delta_health_evaluation: Option<bool>,
    pub monitoring_policy: Option<MonitoringPolicyDescription>,
}

impl Default for ClusterUpgradeDescriptionObject {
    fn default() -> Self {
        Self {
            upgrade_kind: Some(UpgradeKind::Rolling),
            rolling_upgrade_mode: Some(UpgradeMode::UnmonitoredAuto),
            sort_order: Some(UpgradeSortOrder::Default),
            ..Self::empty()
        }
    }
}

impl ClusterUpgradeDescriptionObject {
    fn empty() -> Self {
        Self {
            config_version: None,
            code_version: None,
            upgrade_kind: None,
            rolling_upgrade_mode: None,
            upgrade_replica_set_check_timeout_in_seconds: None,
            force_restart: None,
            sort_order: None,
            enable_delta_health_evaluation: None,
            monitoring_policy: None,
        }
    }
}

impl JsonCodec for ClusterUpgradeDescriptionObject {
    const TYPE_NAME: &'static str = "ClusterUpgradeDescriptionObject";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut description = Self::empty();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("ConfigVersion") {
                description.config_version = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("CodeVersion") {
                description.code_version = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeKind") {
                description.upgrade_kind = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("RollingUpgradeMode") {
                description.rolling_upgrade_mode = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeReplicaSetCheckTimeoutInSeconds") {
                description.upgrade_replica_set_check_timeout_in_seconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("ForceRestart") {
                description.force_restart = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("SortOrder") {
                description.sort_order = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("EnableDeltaHealthEvaluation") {
                description.enable_delta_health_evaluation = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("MonitoringPolicy") {
                description.monitoring_policy = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(description)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_nullable_property("UpgradeKind", self.upgrade_kind.as_ref());
        writer.write_nullable_property("RollingUpgradeMode", self.rolling_upgrade_mode.as_ref());
        writer.write_nullable_property("SortOrder", self.sort_order.as_ref());
        writer.write_optional_property("ConfigVersion", self.config_version.as_ref());
        writer.write_optional_property("CodeVersion", self.code_version.as_ref());
        writer.write_optional_property(
            "UpgradeReplicaSetCheckTimeoutInSeconds",
            self.upgrade_replica_set_check_timeout_in_seconds.as_ref(),
        );
        writer.write_optional_property("ForceRestart", self.force_restart.as_ref());
        writer.write_optional_property(
            "EnableDeltaHealthEvaluation",
            self.enable_delta_health_evaluation.as_ref(),
        );
        writer.write_optional_property("MonitoringPolicy", self.monitoring_policy.as_ref());
        writer.finish()
    }
}

serde_via_codec!(ApplicationUpgradeDescription, ClusterUpgradeDescriptionObject);
