//! models::upgrade
//!
//! Application and cluster upgrades: the requests that start them and the
//! progress reports the cluster returns.

mod application_progress;
mod cluster_progress;
mod description;
mod domain;
mod enums;
mod monitoring;

pub use application_progress::ApplicationUpgradeProgressInfo;
pub use cluster_progress::ClusterUpgradeProgressObject;
pub use description::{
    ApplicationParameter, ApplicationUpgradeDescription, ApplicationUpgradeDescriptionBuilder,
    ClusterUpgradeDescriptionObject,
};
pub use domain::{
    CurrentUpgradeDomainProgressInfo, CurrentUpgradeUnitsProgressInfo, DomainUpgradeProgress,
    FailedUpgradeDomainProgressObject, FailureUpgradeDomainProgressInfo, NodeUpgradeProgressInfo,
    UpgradeDomainInfo, UpgradeUnitInfo,
};
pub use enums::{
    FailureAction, FailureReason, MonitoredUpgradeHealthCheckPhase, NodeUpgradePhase,
    UpgradeDomainState, UpgradeKind, UpgradeMode, UpgradeSortOrder, UpgradeState,
    UpgradeUnitState,
};
pub use monitoring::{MonitoringPolicyDescription, INFINITE_TIMEOUT};
