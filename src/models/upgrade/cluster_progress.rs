//! models::upgrade::cluster_progress
//!
//! Progress report of a cluster upgrade.

use serde_json::Value;

use super::description::ClusterUpgradeDescriptionObject;
use super::domain::{
    CurrentUpgradeDomainProgressInfo, CurrentUpgradeUnitsProgressInfo,
    FailedUpgradeDomainProgressObject, UpgradeDomainInfo, UpgradeUnitInfo,
};
use super::enums::{FailureReason, MonitoredUpgradeHealthCheckPhase, UpgradeMode, UpgradeState};
use crate::codec::{
    serde_via_codec, CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext,
};
use crate::models::health::HealthEvaluationWrapper;

/// Progress of a cluster code or configuration upgrade.
///
/// `Default` starts from `UnmonitoredAuto`, node-by-node off, and health-check
/// phase `Invalid`. Decoding does not apply those defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterUpgradeProgressObject {
    pub code_version: Option<String>,
    pub config_version: Option<String>,
    pub upgrade_domains: Option<Vec<UpgradeDomainInfo>>,
    pub upgrade_units: Option<Vec<UpgradeUnitInfo>>,
    pub upgrade_state: Option<UpgradeState>,
    pub next_upgrade_domain: Option<String>,
    pub rolling_upgrade_mode: Option<UpgradeMode>,
    pub upgrade_description: Option<ClusterUpgradeDescriptionObject>,
    pub upgrade_duration_in_milliseconds: Option<String>,
    pub upgrade_domain_duration_in_milliseconds: Option<String>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
    pub current_upgrade_domain_progress: Option<CurrentUpgradeDomainProgressInfo>,
    pub current_upgrade_units_progress: Option<CurrentUpgradeUnitsProgressInfo>,
    pub start_timestamp_utc: Option<String>,
    pub failure_timestamp_utc: Option<String>,
    pub failure_reason: Option<FailureReason>,
    pub upgrade_domain_progress_at_failure: Option<FailedUpgradeDomainProgressObject>,
    pub is_node_by_node: Option<bool>,
    pub health_check_elapsed_time: Option<String>,
    pub health_check_phase: Option<MonitoredUpgradeHealthCheckPhase>,
    pub health_check_retry_flips: Option<i32>,
}

impl Default for ClusterUpgradeProgressObject {
    fn default() -> Self {
        Self {
            rolling_upgrade_mode: Some(UpgradeMode::UnmonitoredAuto),
            is_node_by_node: Some(false),
            health_check_phase: Some(MonitoredUpgradeHealthCheckPhase::Invalid),
            ..Self::empty()
        }
    }
}

impl ClusterUpgradeProgressObject {
    fn empty() -> Self {
        Self {
            code_version: None,
            config_version: None,
            upgrade_domains: None,
            upgrade_units: None,
            upgrade_state: None,
            next_upgrade_domain: None,
            rolling_upgrade_mode: None,
            upgrade_description: None,
            upgrade_duration_in_milliseconds: None,
            upgrade_domain_duration_in_milliseconds: None,
            unhealthy_evaluations: None,
            current_upgrade_domain_progress: None,
            current_upgrade_units_progress: None,
            start_timestamp_utc: None,
            failure_timestamp_utc: None,
            failure_reason: None,
            upgrade_domain_progress_at_failure: None,
            is_node_by_node: None,
            health_check_elapsed_time: None,
            health_check_phase: None,
            health_check_retry_flips: None,
        }
    }
}

impl JsonCodec for ClusterUpgradeProgressObject {
    const TYPE_NAME: &'static str = "ClusterUpgradeProgressObject";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut progress = Self::empty();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("CodeVersion") {
                progress.code_version = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("ConfigVersion") {
                progress.config_version = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDomains") {
                progress.upgrade_domains = reader.read_list()?;
            } else if property.eq_ignore_ascii_case("UpgradeUnits") {
                progress.upgrade_units = reader.read_list()?;
            } else if property.eq_ignore_ascii_case("UpgradeState") {
                progress.upgrade_state = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("NextUpgradeDomain") {
                progress.next_upgrade_domain = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("RollingUpgradeMode") {
                progress.rolling_upgrade_mode = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDescription") {
                progress.upgrade_description = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDurationInMilliseconds") {
                progress.upgrade_duration_in_milliseconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDomainDurationInMilliseconds") {
                progress.upgrade_domain_duration_in_milliseconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UnhealthyEvaluations") {
                progress.unhealthy_evaluations = reader.read_list()?;
            } else if property.eq_ignore_ascii_case("CurrentUpgradeDomainProgress") {
                progress.current_upgrade_domain_progress = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("CurrentUpgradeUnitsProgress") {
                progress.current_upgrade_units_progress = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("StartTimestampUtc") {
                progress.start_timestamp_utc = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("FailureTimestampUtc") {
                progress.failure_timestamp_utc = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("FailureReason") {
                progress.failure_reason = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDomainProgressAtFailure") {
                progress.upgrade_domain_progress_at_failure = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("IsNodeByNode") {
                progress.is_node_by_node = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HealthCheckElapsedTime") {
                progress.health_check_elapsed_time = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HealthCheckPhase") {
                progress.health_check_phase = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HealthCheckRetryFlips") {
                progress.health_check_retry_flips = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(progress)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_nullable_property("UpgradeState", self.upgrade_state.as_ref());
        writer.write_nullable_property("RollingUpgradeMode", self.rolling_upgrade_mode.as_ref());
        writer.write_nullable_property("FailureReason", self.failure_reason.as_ref());
        writer.write_nullable_property("HealthCheckPhase", self.health_check_phase.as_ref());

        writer.write_optional_property("CodeVersion", self.code_version.as_ref());
        writer.write_optional_property("ConfigVersion", self.config_version.as_ref());
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

serde_via_codec!(ClusterUpgradeProgressObject);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_str, to_string};

    #[test]
    fn default_values() {
        let progress = ClusterUpgradeProgressObject::default();
        assert_eq!(progress.rolling_upgrade_mode, Some(UpgradeMode::UnmonitoredAuto));
        assert_eq!(progress.is_node_by_node, Some(false));
        assert_eq!(
            progress.health_check_phase,
            Some(MonitoredUpgradeHealthCheckPhase::Invalid)
        );
        assert_eq!(
            to_string(&progress),
            concat!(
                r#"{"UpgradeState":null,"RollingUpgradeMode":"UnmonitoredAuto","#,
                r#""FailureReason":null,"HealthCheckPhase":"Invalid","IsNodeByNode":false}"#
            )
        );
    }

    #[test]
    fn decode_leaves_absent_properties_absent() {
        let progress: ClusterUpgradeProgressObject =
            from_str(r#"{"CodeVersion":"10.1.1234.9590"}"#).unwrap();
        assert_eq!(progress.rolling_upgrade_mode, None);
        assert_eq!(progress.is_node_by_node, None);
        assert_eq!(progress.health_check_phase, None);
    }

    #[test]
    fn failed_domain_and_units() {
        let progress: ClusterUpgradeProgressObject = from_str(
            r#"{
                "UpgradeState": "Failed",
                "FailureReason": "UpgradeDomainTimeout",
                "UpgradeUnits": [{ "Name": "u1", "State": "Failed" }],
                "UpgradeDomainProgressAtFailure": {
                    "DomainName": "UD3",
                    "NodeUpgradeProgressList": []
                },
                "UpgradeDescription": { "CodeVersion": "10.1", "ForceRestart": "true" }
            }"#,
        )
        .unwrap();
        assert_eq!(progress.failure_reason, Some(FailureReason::UpgradeDomainTimeout));
        let failure = progress.upgrade_domain_progress_at_failure.as_ref().unwrap();
        assert_eq!(failure.node_upgrade_progress_list, Some(vec![]));
        assert_eq!(
            progress.upgrade_description.as_ref().and_then(|d| d.force_restart),
            Some(true)
        );
        let back = from_str::<ClusterUpgradeProgressObject>(&to_string(&progress)).unwrap();
        assert_eq!(back, progress);
    }
}
