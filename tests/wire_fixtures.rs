//! Wire fixtures.
//!
//! Payload shapes as the cluster sends and expects them. Snapshots pin the
//! exact key order of encoded output, which the REST gateway does not care
//! about but diff-based tooling and recorded fixtures do.

use fabric_models::core::types::{ApplicationName, ServiceName};
use fabric_models::core::validate::ValidationError;
use fabric_models::models::health::{
    HealthEvaluation, HealthEvaluationKind, HealthState, NodeHealthEvaluation,
    NodesHealthEvaluation,
};
use fabric_models::models::service::{
    PartitionSchemeDescription, ServiceDescription, ServiceDescriptionBase, ServiceKind,
    StatelessServiceDescription, UniformInt64RangePartitionSchemeDescription,
};
use fabric_models::models::upgrade::{
    ApplicationUpgradeDescription, MonitoringPolicyDescription, UpgradeKind, UpgradeMode,
};
use fabric_models::{from_str, to_string, CodecError};

fn web_base() -> ServiceDescriptionBase {
    ServiceDescriptionBase::builder()
        .service_name(ServiceName::new("fabric:/shop/web"))
        .service_type_name("WebType".to_string())
        .partition_description(PartitionSchemeDescription::Singleton)
        .build()
        .unwrap()
}

// =============================================================================
// Key Order
// =============================================================================

#[test]
fn stateless_service_key_order() {
    let service: ServiceDescription = StatelessServiceDescription::builder(web_base())
        .instance_count(-1)
        .build()
        .unwrap()
        .into();

    insta::assert_snapshot!(
        to_string(&service),
        @r#"{"ServiceKind":"Stateless","ServiceName":"fabric:/shop/web","ServiceTypeName":"WebType","PartitionDescription":{"PartitionScheme":"Singleton"},"InstanceCount":-1,"DefaultMoveCost":null,"ServicePackageActivationMode":null}"#
    );
}

#[test]
fn ranged_partition_key_order() {
    let partition = PartitionSchemeDescription::UniformInt64Range(
        UniformInt64RangePartitionSchemeDescription::new(
            4,
            "-9223372036854775808".to_string(),
            "9223372036854775807".to_string(),
        ),
    );

    insta::assert_snapshot!(
        to_string(&partition),
        @r#"{"PartitionScheme":"UniformInt64Range","Count":4,"LowKey":"-9223372036854775808","HighKey":"9223372036854775807"}"#
    );
}

#[test]
fn application_upgrade_builder_defaults() {
    let upgrade = ApplicationUpgradeDescription::builder()
        .name(ApplicationName::new("fabric:/shop"))
        .target_application_type_version("2.0.0".to_string())
        .build()
        .unwrap();

    insta::assert_snapshot!(
        to_string(&upgrade),
        @r#"{"Name":"fabric:/shop","TargetApplicationTypeVersion":"2.0.0","UpgradeKind":"Rolling","RollingUpgradeMode":"UnmonitoredAuto","SortOrder":"Default"}"#
    );
}

#[test]
fn monitoring_policy_defaults() {
    insta::assert_snapshot!(
        to_string(&MonitoringPolicyDescription::default()),
        @r#"{"FailureAction":null,"HealthCheckWaitDurationInMilliseconds":"0","HealthCheckStableDurationInMilliseconds":"PT0H2M0S","HealthCheckRetryTimeoutInMilliseconds":"PT0H10M0S","UpgradeTimeoutInMilliseconds":"P10675199DT02H48M05.4775807S","UpgradeDomainTimeoutInMilliseconds":"P10675199DT02H48M05.4775807S"}"#
    );
}

#[test]
fn nested_health_evaluation_key_order() {
    let node = HealthEvaluation {
        aggregated_health_state: Some(HealthState::Error),
        description: Some("node down".to_string()),
        details: NodeHealthEvaluation {
            node_name: Some("_Node_0".to_string()),
            unhealthy_evaluations: None,
        }
        .into(),
    };
    let nodes = HealthEvaluation {
        aggregated_health_state: Some(HealthState::Error),
        description: None,
        details: NodesHealthEvaluation {
            max_percent_unhealthy_nodes: Some(0),
            total_count: Some(5),
            unhealthy_evaluations: Some(vec![node.into()]),
        }
        .into(),
    };

    insta::assert_snapshot!(
        to_string(&nodes),
        @r#"{"Kind":"Nodes","AggregatedHealthState":"Error","MaxPercentUnhealthyNodes":0,"TotalCount":5,"UnhealthyEvaluations":[{"HealthEvaluation":{"Kind":"Node","AggregatedHealthState":"Error","Description":"node down","NodeName":"_Node_0"}}]}"#
    );
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn service_kind_selects_variant() {
    let stateful: ServiceDescription = from_str(
        r#"{
            "serviceKind": "Stateful",
            "ServiceName": "fabric:/shop/cart",
            "ServiceTypeName": "CartType",
            "PartitionDescription": {
                "PartitionScheme": "Named",
                "Count": 2,
                "Names": ["east", "west"]
            },
            "TargetReplicaSetSize": 3,
            "MinReplicaSetSize": 2,
            "HasPersistedState": true
        }"#,
    )
    .unwrap();

    assert_eq!(stateful.kind(), ServiceKind::Stateful);
    match stateful {
        ServiceDescription::Stateful(ref service) => {
            assert_eq!(service.target_replica_set_size(), 3);
            assert!(service.has_persisted_state());
        }
        ServiceDescription::Stateless(_) => panic!("decoded the wrong variant"),
    }
}

#[test]
fn discriminator_may_follow_other_properties() {
    let service: ServiceDescription = from_str(
        r#"{
            "ServiceName": "fabric:/shop/web",
            "ServiceTypeName": "WebType",
            "PartitionDescription": { "PartitionScheme": "Singleton" },
            "InstanceCount": 2,
            "ServiceKind": "Stateless"
        }"#,
    )
    .unwrap();
    assert_eq!(service.kind(), ServiceKind::Stateless);
}

#[test]
fn missing_discriminator_is_null_argument() {
    let err = from_str::<ServiceDescription>(
        r#"{"ServiceName":"fabric:/a/b","ServiceTypeName":"T"}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CodecError::Validation(ValidationError::NullArgument {
            property: "ServiceKind",
            ..
        })
    ));
}

#[test]
fn unknown_discriminator_names_the_value() {
    let err = from_str::<HealthEvaluation>(r#"{"Kind":"Partitions"}"#).unwrap_err();
    assert!(matches!(err, CodecError::UnknownEnumValue { .. }));
    assert!(err.to_string().contains("'Partitions'"));
}

#[test]
fn discriminator_values_are_case_sensitive() {
    let err = from_str::<HealthEvaluation>(r#"{"Kind":"node"}"#).unwrap_err();
    assert!(matches!(
        err,
        CodecError::UnknownEnumValue {
            enum_name: "HealthEvaluationKind",
            ..
        }
    ));
    let ok: HealthEvaluation = from_str(r#"{"Kind":"Node"}"#).unwrap();
    assert_eq!(ok.kind(), HealthEvaluationKind::Node);
}

// =============================================================================
// Absent, Null, and Empty
// =============================================================================

#[test]
fn empty_list_survives_round_trip() {
    let text = r#"{"ServiceKind":"Stateless","ServiceName":"fabric:/shop/web","ServiceTypeName":"WebType","PartitionDescription":{"PartitionScheme":"Singleton"},"InstanceCount":1,"ServiceLoadMetrics":[]}"#;
    let service: ServiceDescription = from_str(text).unwrap();
    assert_eq!(service.base().service_load_metrics().map(|m| m.len()), Some(0));
    assert!(to_string(&service).contains(r#""ServiceLoadMetrics":[]"#));
}

#[test]
fn null_list_is_absent() {
    let text = r#"{"ServiceKind":"Stateless","ServiceName":"fabric:/shop/web","ServiceTypeName":"WebType","PartitionDescription":{"PartitionScheme":"Singleton"},"InstanceCount":1,"ServiceLoadMetrics":null}"#;
    let service: ServiceDescription = from_str(text).unwrap();
    assert_eq!(service.base().service_load_metrics(), None);
    assert!(!to_string(&service).contains("ServiceLoadMetrics"));
}

#[test]
fn decoded_upgrade_keeps_absent_mode_absent() {
    let upgrade: ApplicationUpgradeDescription = from_str(
        r#"{"Name":"fabric:/shop","TargetApplicationTypeVersion":"2.0.0","UpgradeKind":"Rolling"}"#,
    )
    .unwrap();
    assert_eq!(upgrade.upgrade_kind(), UpgradeKind::Rolling);
    assert_eq!(upgrade.rolling_upgrade_mode(), None);
    assert!(to_string(&upgrade).contains(r#""RollingUpgradeMode":null"#));

    let monitored = ApplicationUpgradeDescription::builder()
        .name(ApplicationName::new("fabric:/shop"))
        .target_application_type_version("2.0.0".to_string())
        .rolling_upgrade_mode(UpgradeMode::Monitored)
        .build()
        .unwrap();
    assert_eq!(monitored.rolling_upgrade_mode(), Some(UpgradeMode::Monitored));
}

// =============================================================================
// Serde Interop
// =============================================================================

#[test]
fn serde_json_uses_the_same_wire_shape() {
    let service: ServiceDescription = StatelessServiceDescription::builder(web_base())
        .instance_count(3)
        .build()
        .unwrap()
        .into();

    assert_eq!(serde_json::to_string(&service).unwrap(), to_string(&service));

    let back: ServiceDescription = serde_json::from_str(&to_string(&service)).unwrap();
    assert_eq!(back, service);
}
