//! Property-based tests for the JSON converters.
//!
//! These verify the contract every converter shares:
//! - Decoding the encoding of a valid model yields the same model
//! - Property names match regardless of case
//! - Unknown properties are skipped
//! - Duration bounds hold at the edges of `[0, 4294967295]`
//! - Absent and empty lists stay distinct
//! - Recursive health trees decode to the tree that was written

use fabric_models::core::types::{ApplicationName, ServiceName};
use fabric_models::core::validate::{ValidationError, MAX_DURATION_SECONDS};
use fabric_models::models::health::{
    ApplicationHealthEvaluation, ApplicationsHealthEvaluation, EventHealthEvaluation,
    HealthEvaluation, HealthEvaluationDetails, HealthEvaluationWrapper, HealthEvent, HealthState,
    NodeHealthEvaluation, NodesHealthEvaluation, ServiceHealthEvaluation,
    SystemApplicationHealthEvaluation, UpgradeDomainNodesHealthEvaluation,
};
use fabric_models::models::service::{
    AddRemoveIncrementalNamedPartitionScalingMechanism, AveragePartitionLoadScalingTrigger,
    AverageServiceLoadScalingTrigger, InstanceLifecycleDescription, MoveCost,
    NamedPartitionSchemeDescription, NodeTagsDescription, PartitionInstanceCountScaleMechanism,
    PartitionSchemeDescription, ReplicaLifecycleDescription, ScalingMechanismDescription,
    ScalingPolicyDescription, ScalingTriggerDescription, ServiceCorrelationDescription,
    ServiceCorrelationScheme, ServiceDescription, ServiceDescriptionBase,
    ServiceLoadMetricDescription, ServiceLoadMetricWeight, ServicePackageActivationMode,
    ServicePlacementPolicyDescription, ServiceSensitivityDescription, ServiceUpdateDescription,
    ServiceUpdateDescriptionBase, StatefulServiceDescription, StatefulServiceUpdateDescription,
    StatelessServiceDescription, StatelessServiceUpdateDescription,
    UniformInt64RangePartitionSchemeDescription,
};
use fabric_models::{from_str, from_value, to_string, to_value, CodecError};
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Strategy for tag and metric names.
fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,15}"
}

fn tags() -> impl Strategy<Value = NodeTagsDescription> {
    (any::<i32>(), prop::collection::vec(name(), 0..6))
        .prop_map(|(count, tags)| NodeTagsDescription::new(count, tags))
}

fn weight() -> impl Strategy<Value = ServiceLoadMetricWeight> {
    prop::sample::select(ServiceLoadMetricWeight::ALL.to_vec())
}

fn load_metric() -> impl Strategy<Value = ServiceLoadMetricDescription> {
    (
        name(),
        prop::option::of(weight()),
        prop::option::of(any::<i32>()),
        prop::option::of(any::<i32>()),
        prop::option::of(any::<i32>()),
    )
        .prop_map(|(name, weight, primary, secondary, default_load)| {
            ServiceLoadMetricDescription::builder()
                .name(name)
                .weight(weight)
                .primary_default_load(primary)
                .secondary_default_load(secondary)
                .default_load(default_load)
                .build()
                .unwrap()
        })
}

fn stateless() -> impl Strategy<Value = StatelessServiceDescription> {
    (
        name(),
        -1i32..1000,
        prop::option::of(0i64..=MAX_DURATION_SECONDS),
        prop::option::of(load_metric()),
    )
        .prop_map(|(service, instances, close_delay, metric)| {
            let base = ServiceDescriptionBase::builder()
                .service_name(ServiceName::new(format!("fabric:/app/{service}")))
                .service_type_name(format!("{service}Type"))
                .partition_description(PartitionSchemeDescription::Singleton)
                .service_load_metrics(metric.map(|m| vec![m]))
                .build()
                .unwrap();
            StatelessServiceDescription::builder(base)
                .instance_count(instances)
                .instance_close_delay_duration_seconds(close_delay)
                .build()
                .unwrap()
        })
}

/// `None`, an empty list, or a short list.
fn optional_list<S: Strategy>(element: S) -> impl Strategy<Value = Option<Vec<S::Value>>> {
    prop::option::of(prop::collection::vec(element, 0..3))
}

fn duration() -> impl Strategy<Value = i64> {
    0i64..=MAX_DURATION_SECONDS
}

fn partition() -> impl Strategy<Value = PartitionSchemeDescription> {
    prop_oneof![
        Just(PartitionSchemeDescription::Singleton),
        (1i32..32, any::<i64>(), any::<i64>()).prop_map(|(count, a, b)| {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            PartitionSchemeDescription::UniformInt64Range(
                UniformInt64RangePartitionSchemeDescription::new(
                    count,
                    low.to_string(),
                    high.to_string(),
                ),
            )
        }),
        prop::collection::vec(name(), 1..4).prop_map(|names| {
            let count = names.len() as i32;
            PartitionSchemeDescription::Named(NamedPartitionSchemeDescription::new(count, names))
        }),
    ]
}

fn correlation() -> impl Strategy<Value = ServiceCorrelationDescription> {
    (prop::sample::select(ServiceCorrelationScheme::ALL.to_vec()), name()).prop_map(
        |(scheme, service)| {
            let service_name = ServiceName::new(format!("fabric:/{service}"));
            ServiceCorrelationDescription::new(scheme, service_name)
        },
    )
}

fn placement_policy() -> impl Strategy<Value = ServicePlacementPolicyDescription> {
    use ServicePlacementPolicyDescription as P;
    let domain = || prop::option::of(name().prop_map(|n| format!("fd:/{n}")));
    prop_oneof![
        domain().prop_map(|domain_name| P::InvalidDomain { domain_name }),
        domain().prop_map(|domain_name| P::RequireDomain { domain_name }),
        domain().prop_map(|domain_name| P::PreferPrimaryDomain { domain_name }),
        domain().prop_map(|domain_name| P::RequireDomainDistribution { domain_name }),
        Just(P::NonPartiallyPlaceService),
        domain().prop_map(|domain_name| P::AllowMultipleStatelessInstancesOnNode { domain_name }),
    ]
}

/// Load thresholds as the decimal strings the wire carries.
fn threshold() -> impl Strategy<Value = String> {
    (0u16..1000, 0u8..10).prop_map(|(whole, tenth)| format!("{whole}.{tenth}"))
}

fn scaling_trigger() -> impl Strategy<Value = ScalingTriggerDescription> {
    prop_oneof![
        (name(), threshold(), threshold(), duration()).prop_map(|(metric, low, high, interval)| {
            ScalingTriggerDescription::AveragePartitionLoad(
                AveragePartitionLoadScalingTrigger::new(metric, low, high, interval).unwrap(),
            )
        }),
        (name(), threshold(), threshold(), duration(), any::<bool>()).prop_map(
            |(metric, low, high, interval, primary_only)| {
                ScalingTriggerDescription::AverageServiceLoad(
                    AverageServiceLoadScalingTrigger::new(metric, low, high, interval, primary_only)
                        .unwrap(),
                )
            }
        ),
    ]
}

fn scaling_mechanism() -> impl Strategy<Value = ScalingMechanismDescription> {
    prop_oneof![
        (0i32..10, -1i32..100, 1i32..5).prop_map(|(min, max, step)| {
            ScalingMechanismDescription::PartitionInstanceCount(
                PartitionInstanceCountScaleMechanism::new(min, max, step),
            )
        }),
        (1i32..10, 1i32..100, 1i32..5).prop_map(|(min, max, step)| {
            ScalingMechanismDescription::AddRemoveIncrementalNamedPartition(
                AddRemoveIncrementalNamedPartitionScalingMechanism::new(min, max, step),
            )
        }),
    ]
}

fn scaling_policy() -> impl Strategy<Value = ScalingPolicyDescription> {
    (scaling_trigger(), scaling_mechanism())
        .prop_map(|(trigger, mechanism)| ScalingPolicyDescription::new(trigger, mechanism))
}

fn replica_lifecycle() -> impl Strategy<Value = ReplicaLifecycleDescription> {
    (prop::option::of(any::<bool>()), prop::option::of(any::<bool>())).prop_map(
        |(singleton_move, restore)| ReplicaLifecycleDescription {
            is_singleton_replica_move_allowed_during_upgrade: singleton_move,
            restore_replica_location_after_upgrade: restore,
        },
    )
}

fn instance_lifecycle() -> impl Strategy<Value = InstanceLifecycleDescription> {
    prop::option::of(any::<bool>()).prop_map(|restore| InstanceLifecycleDescription {
        restore_replica_location_after_upgrade: restore,
    })
}

fn sensitivity() -> impl Strategy<Value = ServiceSensitivityDescription> {
    (
        prop::option::of(0i32..=10),
        prop::option::of(0i32..=10),
        prop::option::of(0i32..=10),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(primary, secondary, auxiliary, maximum)| ServiceSensitivityDescription {
            primary_default_sensitivity: primary,
            secondary_default_sensitivity: secondary,
            auxiliary_default_sensitivity: auxiliary,
            is_maximum_sensitivity: maximum,
        })
}

/// Every optional property of the common service description.
fn service_base() -> impl Strategy<Value = ServiceDescriptionBase> {
    let naming = (
        name(),
        prop::option::of(name()),
        prop::option::of(prop::collection::vec(any::<u8>(), 0..8)),
        partition(),
        prop::option::of(name()),
    );
    let lists = (
        optional_list(correlation()),
        optional_list(load_metric()),
        optional_list(placement_policy()),
        optional_list(scaling_policy()),
    );
    let rest = (
        prop::option::of(prop::sample::select(MoveCost::ALL.to_vec())),
        prop::option::of(any::<bool>()),
        prop::option::of(prop::sample::select(ServicePackageActivationMode::ALL.to_vec())),
        prop::option::of(name()),
        prop::option::of(tags()),
        prop::option::of(tags()),
    );

    (naming, lists, rest).prop_map(
        |(
            (service, application, init, partition, constraint),
            (correlations, metrics, policies, scaling),
            (move_cost, move_cost_specified, activation, dns, place, run),
        )| {
            ServiceDescriptionBase::builder()
                .service_name(ServiceName::new(format!("fabric:/app/{service}")))
                .service_type_name(format!("{service}Type"))
                .application_name(application.map(|a| ApplicationName::new(format!("fabric:/{a}"))))
                .initialization_data(init)
                .partition_description(partition)
                .placement_constraints(constraint.map(|c| format!("NodeType == {c}")))
                .correlation_scheme(correlations)
                .service_load_metrics(metrics)
                .service_placement_policies(policies)
                .scaling_policies(scaling)
                .default_move_cost(move_cost)
                .is_default_move_cost_specified(move_cost_specified)
                .service_package_activation_mode(activation)
                .service_dns_name(dns.map(|d| format!("{d}.svc")))
                .tags_required_to_place(place)
                .tags_required_to_run(run)
                .build()
                .unwrap()
        },
    )
}

fn stateful() -> impl Strategy<Value = StatefulServiceDescription> {
    let required = (service_base(), 1i32..10, 1i32..10, any::<bool>());
    let durations = (
        prop::option::of(duration()),
        prop::option::of(duration()),
        prop::option::of(duration()),
        prop::option::of(duration()),
    );
    let rest = (
        prop::option::of(any::<i32>()),
        prop::option::of(any::<bool>()),
        prop::option::of(replica_lifecycle()),
        prop::option::of(0i32..5),
        prop::option::of(sensitivity()),
    );

    (required, durations, rest).prop_map(
        |(
            (base, target, min, persisted),
            (restart_wait, quorum_loss_wait, stand_by_keep, placement_limit),
            (flags, drop_source, lifecycle, auxiliary, sensitivity),
        )| {
            StatefulServiceDescription::builder(base)
                .target_replica_set_size(target)
                .min_replica_set_size(min)
                .has_persisted_state(persisted)
                .flags(flags)
                .replica_restart_wait_duration_seconds(restart_wait)
                .quorum_loss_wait_duration_seconds(quorum_loss_wait)
                .stand_by_replica_keep_duration_seconds(stand_by_keep)
                .service_placement_time_limit_seconds(placement_limit)
                .drop_source_replica_on_move(drop_source)
                .replica_lifecycle_description(lifecycle)
                .auxiliary_replica_count(auxiliary)
                .service_sensitivity_description(sensitivity)
                .build()
                .unwrap()
        },
    )
}

/// Durations of update descriptions are wire strings.
fn duration_text() -> impl Strategy<Value = String> {
    duration().prop_map(|seconds| seconds.to_string())
}

fn update_common() -> impl Strategy<Value = ServiceUpdateDescriptionBase> {
    let first = (
        prop::option::of((0u32..64).prop_map(|f| f.to_string())),
        prop::option::of(name()),
        optional_list(correlation()),
        optional_list(load_metric()),
        optional_list(placement_policy()),
    );
    let second = (
        prop::option::of(prop::sample::select(MoveCost::ALL.to_vec())),
        optional_list(scaling_policy()),
        prop::option::of(name()),
        prop::option::of(tags()),
        prop::option::of(tags()),
    );

    (first, second).prop_map(
        |(
            (flags, constraint, correlations, metrics, policies),
            (move_cost, scaling, dns, placement, running),
        )| ServiceUpdateDescriptionBase {
            flags,
            placement_constraints: constraint,
            correlation_scheme: correlations,
            load_metrics: metrics,
            service_placement_policies: policies,
            default_move_cost: move_cost,
            scaling_policies: scaling,
            service_dns_name: dns,
            tags_for_placement: placement,
            tags_for_running: running,
        },
    )
}

fn stateful_update() -> impl Strategy<Value = StatefulServiceUpdateDescription> {
    let sizes = (
        update_common(),
        prop::option::of(1i32..10),
        prop::option::of(1i32..10),
        prop::option::of(0i32..5),
    );
    let durations = (
        prop::option::of(duration_text()),
        prop::option::of(duration_text()),
        prop::option::of(duration_text()),
        prop::option::of(duration_text()),
    );
    let rest = (
        prop::option::of(any::<bool>()),
        prop::option::of(replica_lifecycle()),
        prop::option::of(sensitivity()),
    );

    (sizes, durations, rest).prop_map(
        |(
            (common, target, min, auxiliary),
            (restart_wait, quorum_loss_wait, stand_by_keep, placement_limit),
            (drop_source, lifecycle, sensitivity),
        )| {
            StatefulServiceUpdateDescription::builder(common)
                .target_replica_set_size(target)
                .min_replica_set_size(min)
                .auxiliary_replica_count(auxiliary)
                .replica_restart_wait_duration_seconds(restart_wait)
                .quorum_loss_wait_duration_seconds(quorum_loss_wait)
                .stand_by_replica_keep_duration_seconds(stand_by_keep)
                .service_placement_time_limit_seconds(placement_limit)
                .drop_source_replica_on_move(drop_source)
                .replica_lifecycle_description(lifecycle)
                .service_sensitivity_description(sensitivity)
                .build()
                .unwrap()
        },
    )
}

fn stateless_update() -> impl Strategy<Value = StatelessServiceUpdateDescription> {
    (
        update_common(),
        prop::option::of(-1i32..100),
        prop::option::of(0i32..10),
        prop::option::of(0i32..=100),
        prop::option::of(duration_text()),
        prop::option::of(instance_lifecycle()),
        prop::option::of(duration_text()),
    )
        .prop_map(
            |(common, instances, min_instances, min_percentage, close_delay, lifecycle, restart)| {
                StatelessServiceUpdateDescription::builder(common)
                    .instance_count(instances)
                    .min_instance_count(min_instances)
                    .min_instance_percentage(min_percentage)
                    .instance_close_delay_duration_seconds(close_delay)
                    .instance_lifecycle_description(lifecycle)
                    .instance_restart_wait_duration_seconds(restart)
                    .build()
                    .unwrap()
            },
        )
}

fn service_update() -> impl Strategy<Value = ServiceUpdateDescription> {
    prop_oneof![
        stateful_update().prop_map(ServiceUpdateDescription::Stateful),
        stateless_update().prop_map(ServiceUpdateDescription::Stateless),
    ]
}

fn health_state() -> impl Strategy<Value = HealthState> {
    prop::sample::select(HealthState::ALL.to_vec())
}

fn health_event() -> impl Strategy<Value = HealthEvent> {
    (
        name(),
        name(),
        health_state(),
        prop::option::of(name()),
        prop::option::of((0u32..100_000).prop_map(|ms| ms.to_string())),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(source, property, state, description, ttl, expired)| {
            HealthEvent::builder()
                .source_id(source)
                .property(property)
                .health_state(state)
                .description(description)
                .time_to_live_in_milli_seconds(ttl)
                .is_expired(expired)
                .build()
                .unwrap()
        })
}

/// Health evaluation trees up to four levels deep.
///
/// Leaves are event evaluations; inner nodes pick one of the kinds that
/// carry `UnhealthyEvaluations`.
fn health_tree() -> impl Strategy<Value = HealthEvaluation> {
    let leaf = (
        prop::option::of(health_state()),
        prop::option::of(name()),
        prop::option::of(any::<bool>()),
        prop::option::of(health_event()),
    )
        .prop_map(|(state, description, warning_as_error, event)| HealthEvaluation {
            aggregated_health_state: state,
            description,
            details: EventHealthEvaluation {
                consider_warning_as_error: warning_as_error,
                unhealthy_event: event,
            }
            .into(),
        });

    leaf.prop_recursive(3, 24, 3, |inner| {
        let children = optional_list(inner.prop_map(HealthEvaluationWrapper::from));
        (
            prop::option::of(health_state()),
            children,
            name(),
            prop::option::of(0i32..=100),
            prop::option::of(0i64..50),
            0usize..7,
        )
            .prop_map(|(state, children, entity, percent, total, kind)| {
                let details: HealthEvaluationDetails = match kind {
                    0 => NodeHealthEvaluation {
                        node_name: Some(entity),
                        unhealthy_evaluations: children,
                    }
                    .into(),
                    1 => NodesHealthEvaluation {
                        max_percent_unhealthy_nodes: percent,
                        total_count: total,
                        unhealthy_evaluations: children,
                    }
                    .into(),
                    2 => ApplicationHealthEvaluation {
                        application_name: Some(ApplicationName::new(format!("fabric:/{entity}"))),
                        unhealthy_evaluations: children,
                    }
                    .into(),
                    3 => ApplicationsHealthEvaluation {
                        max_percent_unhealthy_applications: percent,
                        total_count: total,
                        unhealthy_evaluations: children,
                    }
                    .into(),
                    4 => SystemApplicationHealthEvaluation {
                        unhealthy_evaluations: children,
                    }
                    .into(),
                    5 => ServiceHealthEvaluation {
                        service_name: Some(ServiceName::new(format!("fabric:/app/{entity}"))),
                        unhealthy_evaluations: children,
                    }
                    .into(),
                    _ => UpgradeDomainNodesHealthEvaluation {
                        upgrade_domain_name: Some(entity),
                        max_percent_unhealthy_nodes: percent,
                        total_count: total,
                        unhealthy_evaluations: children,
                    }
                    .into(),
                };
                HealthEvaluation {
                    aggregated_health_state: state,
                    description: None,
                    details,
                }
            })
    })
}

/// Levels of `UnhealthyEvaluations` below `evaluation`.
fn tree_height(evaluation: &HealthEvaluation) -> usize {
    evaluation
        .details
        .unhealthy_evaluations()
        .unwrap_or_default()
        .iter()
        .filter_map(|child| child.health_evaluation.as_ref())
        .map(|child| 1 + tree_height(child))
        .max()
        .unwrap_or(0)
}

/// Rewrite every key of `value` with a case pattern drawn from `flips`.
fn recase(value: &Value, flips: &[bool]) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, child) in map {
                let key: String = key
                    .chars()
                    .enumerate()
                    .map(|(i, c)| {
                        if flips.get(i % flips.len().max(1)).copied().unwrap_or(false) {
                            c.to_ascii_lowercase()
                        } else {
                            c.to_ascii_uppercase()
                        }
                    })
                    .collect();
                out.insert(key, recase(child, flips));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(|i| recase(i, flips)).collect()),
        other => other.clone(),
    }
}

proptest! {
    /// Node tags survive an encode/decode cycle.
    #[test]
    fn tags_round_trip(original in tags()) {
        let decoded: NodeTagsDescription = from_str(&to_string(&original)).unwrap();
        prop_assert_eq!(decoded, original);
    }

    /// Load metrics survive an encode/decode cycle with any optional subset.
    #[test]
    fn load_metric_round_trip(original in load_metric()) {
        let decoded: ServiceLoadMetricDescription = from_str(&to_string(&original)).unwrap();
        prop_assert_eq!(decoded, original);
    }

    /// Stateless descriptions survive an encode/decode cycle.
    #[test]
    fn stateless_round_trip(original in stateless()) {
        let decoded: StatelessServiceDescription = from_str(&to_string(&original)).unwrap();
        prop_assert_eq!(decoded, original);
    }

    /// Stateful descriptions survive an encode/decode cycle, alone and
    /// through the family converter.
    #[test]
    fn stateful_round_trip(original in stateful()) {
        let text = to_string(&original);
        let decoded: StatefulServiceDescription = from_str(&text).unwrap();
        prop_assert_eq!(&decoded, &original);

        let family: ServiceDescription = from_str(&text).unwrap();
        prop_assert_eq!(family, ServiceDescription::Stateful(original));
    }

    /// Absent lists are omitted; empty lists are written as `[]`.
    #[test]
    fn absent_and_empty_lists_stay_distinct(original in stateful()) {
        let text = to_string(&original);
        let base = original.base();
        for (key, len) in [
            ("CorrelationScheme", base.correlation_scheme().map(<[_]>::len)),
            ("ScalingPolicies", base.scaling_policies().map(<[_]>::len)),
            ("ServicePlacementPolicies", base.service_placement_policies().map(<[_]>::len)),
        ] {
            let quoted = format!(r#""{key}""#);
            match len {
                None => prop_assert!(!text.contains(&quoted), "{} written: {}", key, text),
                Some(0) => prop_assert!(text.contains(&format!("{quoted}:[]")), "{}", text),
                Some(_) => prop_assert!(text.contains(&quoted)),
            }
        }
    }

    /// Update descriptions of either kind survive an encode/decode cycle.
    #[test]
    fn service_update_round_trip(original in service_update()) {
        let decoded: ServiceUpdateDescription = from_str(&to_string(&original)).unwrap();
        prop_assert_eq!(decoded, original);
    }

    /// Update property names match whatever their case.
    #[test]
    fn update_names_are_case_insensitive(
        original in service_update(),
        flips in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let recased = recase(&to_value(&original), &flips);
        let decoded: ServiceUpdateDescription = from_value(&recased).unwrap();
        prop_assert_eq!(decoded, original);
    }

    /// Health trees decode to the tree that was written.
    #[test]
    fn health_tree_round_trip(original in health_tree()) {
        prop_assert!(tree_height(&original) <= 3);
        let decoded: HealthEvaluation = from_str(&to_string(&original)).unwrap();
        prop_assert_eq!(tree_height(&decoded), tree_height(&original));
        prop_assert_eq!(decoded, original);
    }

    /// Health trees keep their shape through the wrapper envelope.
    #[test]
    fn wrapped_health_tree_round_trip(original in health_tree()) {
        let wrapper = HealthEvaluationWrapper::from(original);
        let decoded: HealthEvaluationWrapper = from_str(&to_string(&wrapper)).unwrap();
        prop_assert_eq!(decoded, wrapper);
    }

    /// Property names match whatever their case.
    #[test]
    fn property_names_are_case_insensitive(
        original in stateless(),
        flips in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let recased = recase(&to_value(&original), &flips);
        let decoded: StatelessServiceDescription = from_value(&recased).unwrap();
        prop_assert_eq!(decoded, original);
    }

    /// Extra properties at the top level are ignored.
    #[test]
    fn unknown_properties_are_skipped(
        original in load_metric(),
        extra in "[A-Z][a-z]{3,10}Extra",
        payload in prop_oneof![
            Just(Value::Null),
            any::<i64>().prop_map(Value::from),
            name().prop_map(Value::from),
            Just(serde_json::json!({"Nested": [1, {"Deeper": true}]})),
        ],
    ) {
        let mut value = to_value(&original);
        value.as_object_mut().unwrap().insert(extra, payload);
        let decoded: ServiceLoadMetricDescription = from_value(&value).unwrap();
        prop_assert_eq!(decoded, original);
    }

    /// Any duration in the unsigned 32-bit range is accepted.
    #[test]
    fn durations_in_range_accepted(seconds in 0i64..=MAX_DURATION_SECONDS) {
        let text = format!(
            r#"{{"ServiceName":"fabric:/a/b","ServiceTypeName":"T",
                "PartitionDescription":{{"PartitionScheme":"Singleton"}},
                "InstanceCount":1,"InstanceRestartWaitDurationSeconds":{seconds}}}"#
        );
        let decoded: StatelessServiceDescription = from_str(&text).unwrap();
        prop_assert_eq!(decoded.instance_restart_wait_duration_seconds(), Some(seconds));
    }

    /// Durations outside the unsigned 32-bit range are rejected.
    #[test]
    fn durations_out_of_range_rejected(
        seconds in prop_oneof![i64::MIN..0i64, (MAX_DURATION_SECONDS + 1)..i64::MAX],
    ) {
        let text = format!(
            r#"{{"ServiceName":"fabric:/a/b","ServiceTypeName":"T",
                "PartitionDescription":{{"PartitionScheme":"Singleton"}},
                "InstanceCount":1,"InstanceCloseDelayDurationSeconds":{seconds}}}"#
        );
        let err = from_str::<StatelessServiceDescription>(&text).unwrap_err();
        let is_out_of_range = matches!(
            &err,
            CodecError::Validation(ValidationError::OutOfRange { .. })
        );
        prop_assert!(is_out_of_range, "unexpected error: {}", err);
    }
}
