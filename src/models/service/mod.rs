//! models::service
//!
//! Service descriptions and the parts they are composed of.
//!
//! # Families
//!
//! | Family | Discriminator | Variants |
//! |---|---|---|
//! | [`ServiceDescription`] | `ServiceKind` | Stateful, Stateless |
//! | [`ServiceUpdateDescription`] | `ServiceKind` | Stateful, Stateless |
//! | [`PartitionSchemeDescription`] | `PartitionScheme` | Singleton, UniformInt64Range, Named |
//! | [`ServicePlacementPolicyDescription`] | `Type` | one per [`ServicePlacementPolicyType`] |
//! | [`ScalingTriggerDescription`] | `Kind` | AveragePartitionLoad, AverageServiceLoad |
//! | [`ScalingMechanismDescription`] | `Kind` | PartitionInstanceCount, AddRemoveIncrementalNamedPartition |

mod correlation;
mod description;
mod enums;
mod lifecycle;
mod load_metric;
mod partition;
mod placement;
mod scaling;
mod sensitivity;
mod tags;
mod update;

pub use correlation::ServiceCorrelationDescription;
pub use description::{
    ServiceDescription, ServiceDescriptionBase, ServiceDescriptionBaseBuilder,
    StatefulServiceDescription, StatefulServiceDescriptionBuilder, StatelessServiceDescription,
    StatelessServiceDescriptionBuilder,
};
pub use enums::{
    MoveCost, PartitionScheme, ScalingMechanismKind, ScalingTriggerKind, ServiceCorrelationScheme,
    ServiceKind, ServiceLoadMetricWeight, ServicePackageActivationMode,
    ServicePlacementPolicyType,
};
pub use lifecycle::{InstanceLifecycleDescription, ReplicaLifecycleDescription};
pub use load_metric::{ServiceLoadMetricDescription, ServiceLoadMetricDescriptionBuilder};
pub use partition::{
    NamedPartitionSchemeDescription, PartitionSchemeDescription,
    UniformInt64RangePartitionSchemeDescription,
};
pub use placement::ServicePlacementPolicyDescription;
pub use scaling::{
    AddRemoveIncrementalNamedPartitionScalingMechanism, AveragePartitionLoadScalingTrigger,
    AverageServiceLoadScalingTrigger, PartitionInstanceCountScaleMechanism,
    ScalingMechanismDescription, ScalingPolicyDescription, ScalingTriggerDescription,
};
pub use sensitivity::ServiceSensitivityDescription;
pub use tags::NodeTagsDescription;
pub use update::{
    ServiceUpdateDescription, ServiceUpdateDescriptionBase, StatefulServiceUpdateDescription,
    StatefulServiceUpdateDescriptionBuilder, StatelessServiceUpdateDescription,
    StatelessServiceUpdateDescriptionBuilder,
};
