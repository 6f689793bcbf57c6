//! models::service::enums
//!
//! Wire enumerations used by service descriptions.

use crate::codec::wire_enum;

wire_enum! {
    /// Cost of moving a replica or instance.
    pub enum MoveCost {
        Zero,
        Low,
        Medium,
        High,
        VeryHigh,
    }
}

wire_enum! {
    /// How service packages are shared between services on a node.
    pub enum ServicePackageActivationMode {
        SharedProcess,
        ExclusiveProcess,
    }
}

wire_enum! {
    /// Relative weight of a load metric.
    pub enum ServiceLoadMetricWeight {
        Zero,
        Low,
        Medium,
        High,
    }
}

wire_enum! {
    /// Relationship between a service and the service it is correlated with.
    pub enum ServiceCorrelationScheme {
        Invalid,
        Affinity,
        AlignedAffinity,
        NonAlignedAffinity,
    }
}

wire_enum! {
    /// Discriminator of service descriptions.
    pub enum ServiceKind {
        Stateless,
        Stateful,
    }
}

wire_enum! {
    /// Discriminator of partition schemes.
    pub enum PartitionScheme {
        Singleton,
        UniformInt64Range,
        Named,
    }
}

wire_enum! {
    /// Discriminator of placement policies.
    pub enum ServicePlacementPolicyType {
        InvalidDomain,
        RequireDomain,
        PreferPrimaryDomain,
        RequireDomainDistribution,
        NonPartiallyPlaceService,
        AllowMultipleStatelessInstancesOnNode,
    }
}

wire_enum! {
    /// Discriminator of scaling triggers.
    pub enum ScalingTriggerKind {
        AveragePartitionLoad,
        AverageServiceLoad,
    }
}

wire_enum! {
    /// Discriminator of scaling mechanisms.
    pub enum ScalingMechanismKind {
        PartitionInstanceCount,
        AddRemoveIncrementalNamedPartition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CodecError, JsonCodec, ReadContext};
    use serde_json::json;

    #[test]
    fn wire_strings_are_variant_names() {
        assert_eq!(MoveCost::VeryHigh.as_str(), "VeryHigh");
        assert_eq!(
            ServicePlacementPolicyType::AllowMultipleStatelessInstancesOnNode.to_string(),
            "AllowMultipleStatelessInstancesOnNode"
        );
        assert_eq!(
            "UniformInt64Range".parse::<PartitionScheme>(),
            Ok(PartitionScheme::UniformInt64Range)
        );
    }

    #[test]
    fn enum_values_are_case_sensitive() {
        let err = ServiceKind::read_json(&json!("stateful"), ReadContext::default()).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownEnumValue {
                enum_name: "ServiceKind",
                value: "stateful".to_string(),
            }
        );
    }

    #[test]
    fn tables_are_complete() {
        assert_eq!(MoveCost::ALL.len(), 5);
        assert_eq!(ServiceCorrelationScheme::ALL.len(), 4);
        assert_eq!(ServicePlacementPolicyType::ALL.len(), 6);
        assert_eq!(ScalingMechanismKind::ALL.len(), 2);
    }
}
