//! models::upgrade::enums
//!
//! Wire enumerations used by upgrade descriptions and progress reports.

use crate::codec::wire_enum;

wire_enum! {
    /// Overall state of an upgrade.
    pub enum UpgradeState {
        Invalid,
        RollingBackInProgress,
        RollingBackCompleted,
        RollingForwardPending,
        RollingForwardInProgress,
        RollingForwardCompleted,
        Failed,
    }
}

wire_enum! {
    /// How upgrade domains are walked.
    pub enum UpgradeMode {
        Invalid,
        UnmonitoredAuto,
        UnmonitoredManual,
        Monitored,
        UnmonitoredDeferred,
    }
}

wire_enum! {
    /// Only rolling upgrades exist on the wire.
    pub enum UpgradeKind {
        Invalid,
        Rolling,
    }
}

wire_enum! {
    /// Order in which upgrade domains are visited.
    pub enum UpgradeSortOrder {
        Invalid,
        Default,
        Numeric,
        Lexicographical,
        ReverseNumeric,
        ReverseLexicographical,
    }
}

wire_enum! {
    /// What a monitored upgrade does when a health check fails.
    pub enum FailureAction {
        Invalid,
        Rollback,
        Manual,
    }
}

wire_enum! {
    /// Why an upgrade stopped.
    pub enum FailureReason {
        None,
        Interrupted,
        HealthCheck,
        UpgradeDomainTimeout,
        OverallUpgradeTimeout,
    }
}

wire_enum! {
    /// Health-check stage of a monitored upgrade domain.
    pub enum MonitoredUpgradeHealthCheckPhase {
        Invalid,
        WaitDuration,
        StableDuration,
        Retry,
    }
}

wire_enum! {
    /// State of one upgrade domain.
    pub enum UpgradeDomainState {
        Invalid,
        Pending,
        InProgress,
        Completed,
    }
}

wire_enum! {
    /// State of one upgrade unit.
    pub enum UpgradeUnitState {
        Invalid,
        Pending,
        InProgress,
        Completed,
        Failed,
    }
}

wire_enum! {
    /// Stage of a single node within an upgrade domain.
    pub enum NodeUpgradePhase {
        Invalid,
        PreUpgradeSafetyCheck,
        Upgrading,
        PostUpgradeSafetyCheck,
    }
}
