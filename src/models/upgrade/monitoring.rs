//! models::upgrade::monitoring
//!
//! Health-check timing of monitored upgrades.

use serde_json::Value;

use super::enums::FailureAction;
use crate::codec::{CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext};

/// Monitoring policy of a monitored upgrade.
///
/// Durations are ISO 8601 strings or millisecond counts as strings. The
/// `Default` value carries the cluster's documented defaults; a decoded policy
/// only carries what the payload contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoringPolicyDescription {
    pub failure_action: Option<FailureAction>,
    pub health_check_wait_duration_in_milliseconds: Option<String>,
    pub health_check_stable_duration_in_milliseconds: Option<String>,
    pub health_check_retry_timeout_in_milliseconds: Option<String>,
    pub upgrade_timeout_in_milliseconds: Option<String>,
    pub upgrade_domain_timeout_in_milliseconds: Option<String>,
}

/// Longest representable timeout.
pub const INFINITE_TIMEOUT: &str = "P10675199DT02H48M05.4775807S";

impl Default for MonitoringPolicyDescription {
    fn default() -> Self {
        Self {
            failure_action: None,
            health_check_wait_duration_in_milliseconds: Some("0".to_string()),
            health_check_stable_duration_in_milliseconds: Some("PT0H2M0S".to_string()),
            health_check_retry_timeout_in_milliseconds: Some("PT0H10M0S".to_string()),
            upgrade_timeout_in_milliseconds: Some(INFINITE_TIMEOUT.to_string()),
            upgrade_domain_timeout_in_milliseconds: Some(INFINITE_TIMEOUT.to_string()),
        }
    }
}

impl MonitoringPolicyDescription {
    fn empty() -> Self {
        Self {
            failure_action: None,
            health_check_wait_duration_in_milliseconds: None,
            health_check_stable_duration_in_milliseconds: None,
            health_check_retry_timeout_in_milliseconds: None,
            upgrade_timeout_in_milliseconds: None,
            upgrade_domain_timeout_in_milliseconds: None,
        }
    }
}

impl JsonCodec for MonitoringPolicyDescription {
    const TYPE_NAME: &'static str = "MonitoringPolicyDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut policy = Self::empty();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("FailureAction") {
                policy.failure_action = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HealthCheckWaitDurationInMilliseconds") {
                policy.health_check_wait_duration_in_milliseconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HealthCheckStableDurationInMilliseconds") {
                policy.health_check_stable_duration_in_milliseconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HealthCheckRetryTimeoutInMilliseconds") {
                policy.health_check_retry_timeout_in_milliseconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeTimeoutInMilliseconds") {
                policy.upgrade_timeout_in_milliseconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDomainTimeoutInMilliseconds") {
                policy.upgrade_domain_timeout_in_milliseconds = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(policy)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_nullable_property("FailureAction", self.failure_action.as_ref());
        writer.write_optional_property(
            "HealthCheckWaitDurationInMilliseconds",
            self.health_check_wait_duration_in_milliseconds.as_ref(),
        );
        writer.write_optional_property(
            "HealthCheckStableDurationInMilliseconds",
            self.health_check_stable_duration_in_milliseconds.as_ref(),
        );
        writer.write_optional_property(
            "HealthCheckRetryTimeoutInMilliseconds",
            self.health_check_retry_timeout_in_milliseconds.as_ref(),
        );
        writer.write_optional_property(
            "UpgradeTimeoutInMilliseconds",
            self.upgrade_timeout_in_milliseconds.as_ref(),
        );
        writer.write_optional_property(
            "UpgradeDomainTimeoutInMilliseconds",
            self.upgrade_domain_timeout_in_milliseconds.as_ref(),
        );
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_str, to_string};

    #[test]
    fn default_carries_documented_timeouts() {
        let policy = MonitoringPolicyDescription::default();
        assert_eq!(policy.failure_action, None);
        assert_eq!(
            policy.health_check_stable_duration_in_milliseconds.as_deref(),
            Some("PT0H2M0S")
        );
        assert_eq!(
            policy.upgrade_domain_timeout_in_milliseconds.as_deref(),
            Some(INFINITE_TIMEOUT)
        );
    }

    #[test]
    fn decode_does_not_apply_defaults() {
        let policy: MonitoringPolicyDescription =
            from_str(r#"{"FailureAction":"Rollback"}"#).unwrap();
        assert_eq!(policy.failure_action, Some(FailureAction::Rollback));
        assert_eq!(policy.health_check_wait_duration_in_milliseconds, None);
        assert_eq!(to_string(&policy), r#"{"FailureAction":"Rollback"}"#);
    }

    #[test]
    fn absent_failure_action_is_null() {
        let policy = MonitoringPolicyDescription {
            upgrade_timeout_in_milliseconds: None,
            upgrade_domain_timeout_in_milliseconds: None,
            ..Default::default()
        };
        assert_eq!(
            to_string(&policy),
            concat!(
                r#"{"FailureAction":null,"HealthCheckWaitDurationInMilliseconds":"0","#,
                r#""HealthCheckStableDurationInMilliseconds":"PT0H2M0S","#,
                r#""HealthCheckRetryTimeoutInMilliseconds":"PT0H10M0S"}"#
            )
        );
    }
}
