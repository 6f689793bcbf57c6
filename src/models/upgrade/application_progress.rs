//! models::upgrade::application_progress
//!
//! Progress report of an application upgrade.

use serde_json::Value;

use super::description::ApplicationUpgradeDescription;
use super::domain::{
    CurrentUpgradeDomainProgressInfo, CurrentUpgradeUnitsProgressInfo,
    FailureUpgradeDomainProgressInfo, UpgradeDomainInfo, UpgradeUnitInfo,
};
use super::enums::{FailureReason, MonitoredUpgradeHealthCheckPhase, UpgradeMode, UpgradeState};
use crate::codec::{
    serde_via_codec, CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext,
};
use crate::core::types::ApplicationName;
use crate::models::health::HealthEvaluationWrapper;

/// Progress of an application upgrade as reported by the cluster.
///
/// Durations and timestamps are passed through as the strings the cluster
/// reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationUpgradeProgressInfo {
    pub name: Option<ApplicationName>,
    pub type_name: Option<String>,
    pub target_application_type_version: Option<String>,
    pub upgrade_domains: Option<Vec<UpgradeDomainInfo>>,
    pub upgrade_units: Option<Vec<UpgradeUnitInfo>>,
    pub upgrade_state: Option<UpgradeState>,
    pub next_upgrade_domain: Option<String>,
    pub rolling_upgrade_mode: Option<UpgradeMode>,
    pub upgrade_description: Option<ApplicationUpgradeDescription>,
    pub upgrade_duration_in_milliseconds: Option<String>,
    pub upgrade_domain_duration_in_milliseconds: Option<String>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
    pub current_upgrade_domain_progress: Option<CurrentUpgradeDomainProgressInfo>,
    pub current_upgrade_units_progress: Option<CurrentUpgradeUnitsProgressInfo>,
    pub start_timestamp_utc: Option<String>,
    pub failure_timestamp_utc: Option<String>,
    pub failure_reason: Option<FailureReason>,
    pub upgrade_domain_progress_at_failure: Option<FailureUpgradeDomainProgressInfo>,
    /// Human-readable detail of the current state
    pub upgrade_status_details: Option<String>,
    pub is_node_by_node: Option<bool>,
    pub health_check_elapsed_time: Option<String>,
    pub health_check_phase: Option<MonitoredUpgradeHealthCheckPhase>,
    pub health_check_retry_flips: Option<i32>,
}

impl JsonCodec for ApplicationUpgradeProgressInfo {
    const TYPE_NAME: &'static str = "ApplicationUpgradeProgressInfo";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut info = Self::default();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("Name") {
                info.name = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("TypeName") {
                info.type_name = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("TargetApplicationTypeVersion") {
                info.target_application_type_version = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDomains") {
                info.upgrade_domains = reader.read_list()?;
            } else if property.eq_ignore_ascii_case("UpgradeUnits") {
                info.upgrade_units = reader.read_list()?;
            } else if property.eq_ignore_ascii_case("UpgradeState") {
                info.upgrade_state = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("NextUpgradeDomain") {
                info.next_upgrade_domain = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("RollingUpgradeMode") {
                info.rolling_upgrade_mode = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDescription") {
                info.upgrade_description = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDurationInMilliseconds") {
                info.upgrade_duration_in_milliseconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDomainDurationInMilliseconds") {
                info.upgrade_domain_duration_in_milliseconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UnhealthyEvaluations") {
                info.unhealthy_evaluations = reader.read_list()?;
            } else if property.eq_ignore_ascii_case("CurrentUpgradeDomainProgress") {
                info.current_upgrade_domain_progress = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("CurrentUpgradeUnitsProgress") {
                info.current_upgrade_units_progress = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("StartTimestampUtc") {
                info.start_timestamp_utc = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("FailureTimestampUtc") {
                info.failure_timestamp_utc = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("FailureReason") {
                info.failure_reason = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDomainProgressAtFailure") {
                info.upgrade_domain_progress_at_failure = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeStatusDetails") {
                info.upgrade_status_details = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("IsNodeByNode") {
                info.is_node_by_node = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HealthCheckElapsedTime") {
                info.health_check_elapsed_time = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HealthCheckPhase") {
                info.health_check_phase = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HealthCheckRetryFlips") {
                info.health_check_retry_flips = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(info)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_nullable_property("UpgradeState", self.upgrade_state.as_ref());
        writer.write_nullable_property("RollingUpgradeMode", self.rolling_upgrade_mode.as_ref());
        writer.write_nullable_property("FailureReason", self.failure_reason.as_ref());
        writer.write_nullable_property("HealthCheckPhase", self.health_check_phase.as_ref());

        writer.write_optional_property("Name", self.name.as_ref());
        writer.write_optional_property("TypeName", self.type_name.as_ref());
        writer.write_optional_property(
            "TargetApplicationTypeVersion",
            self.target_application_type_version.as_ref(),
        );
        writer.write_optional_list_property("UpgradeDomains", self.upgrade_domains.as_deref());
        writer.write_optional_list_property("UpgradeUnits", self.upgrade_units.as_deref());
        writer.write_optional_property("NextUpgradeDomain", self.next_upgrade_domain.as_ref());
        writer.write_optional_property("UpgradeDescription", self.upgrade_description.as_ref());
        writer.write_optional_property(
            "UpgradeDurationInMilliseconds",
            self.upgrade_duration_in_milliseconds.as_ref(),
        );
        writer.write_optional_property(
            "UpgradeDomainDurationInMilliseconds",
            self.upgrade_domain_duration_in_milliseconds.as_ref(),
        );
        writer.write_optional_list_property(
            "UnhealthyEvaluations",
            self.unhealthy_evaluations.as_deref(),
        );
        writer.write_optional_property(
            "CurrentUpgradeDomainProgress",
            self.current_upgrade_domain_progress.as_ref(),
        );
        writer.write_optional_property(
            "CurrentUpgradeUnitsProgress",
            self.current_upgrade_units_progress.as_ref(),
        );
        writer.write_optional_property("StartTimestampUtc", self.start_timestamp_utc.as_ref());
        writer.write_optional_property("FailureTimestampUtc", self.failure_timestamp_utc.as_ref());
        writer.write_optional_property(
            "UpgradeDomainProgressAtFailure",
            self.upgrade_domain_progress_at_failure.as_ref(),
        );
        writer.write_optional_property(
            "UpgradeStatusDetails",
            self.upgrade_status_details.as_ref(),
        );
        writer.write_optional_property("IsNodeByNode", self.is_node_by_node.as_ref());
        writer.write_optional_property(
            "HealthCheckElapsedTime",
            self.health_check_elapsed_time.as_ref(),
        );
        writer.write_optional_property(
            "HealthCheckRetryFlips",
            self.health_check_retry_flips.as_ref(),
        );
        writer.finish()
    }
}

serde_via_codec!(ApplicationUpgradeProgressInfo);
