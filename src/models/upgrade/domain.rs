//! models::upgrade::domain
//!
//! Per-domain and per-node progress of an upgrade.

use serde_json::Value;

use super::enums::{NodeUpgradePhase, UpgradeDomainState, UpgradeUnitState};
use crate::codec::{CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext};

/// State of one upgrade domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradeDomainInfo {
    pub name: Option<String>,
    pub state: Option<UpgradeDomainState>,
}

impl JsonCodec for UpgradeDomainInfo {
    const TYPE_NAME: &'static str = "UpgradeDomainInfo";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut info = Self::default();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("Name") {
                info.name = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("State") {
                info.state = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(info)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_nullable_property("State", self.state.as_ref());
        writer.write_optional_property("Name", self.name.as_ref());
        writer.finish()
    }
}

/// State of one upgrade unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradeUnitInfo {
    pub name: Option<String>,
    pub state: Option<UpgradeUnitState>,
}

impl JsonCodec for UpgradeUnitInfo {
    const TYPE_NAME: &'static str = "UpgradeUnitInfo";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut info = Self::default();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("Name") {
                info.name = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("State") {
                info.state = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(info)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_nullable_property("State", self.state.as_ref());
        writer.write_optional_property("Name", self.name.as_ref());
        writer.finish()
    }
}

/// Progress of one node within the domain being upgraded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeUpgradeProgressInfo {
    pub node_name: Option<String>,
    pub upgrade_phase: Option<NodeUpgradePhase>,
    /// Time spent upgrading the node, as an ISO 8601 duration
    pub upgrade_duration: Option<String>,
}

impl JsonCodec for NodeUpgradeProgressInfo {
    const TYPE_NAME: &'static str = "NodeUpgradeProgressInfo";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut info = Self::default();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("NodeName") {
                info.node_name = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradePhase") {
                info.upgrade_phase = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("UpgradeDuration") {
                info.upgrade_duration = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(info)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_nullable_property("UpgradePhase", self.upgrade_phase.as_ref());
        writer.write_optional_property("NodeName", self.node_name.as_ref());
        writer.write_optional_property("UpgradeDuration", self.upgrade_duration.as_ref());
        writer.finish()
    }
}

/// Nodes of one upgrade domain (or set of upgrade units) and their progress.
///
/// The REST API reports current, failing, and failed domain progress with
/// this one shape under different names; the aliases below keep those names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainUpgradeProgress {
    pub domain_name: Option<String>,
    pub node_upgrade_progress_list: Option<Vec<NodeUpgradeProgressInfo>>,
}

/// Progress of the domain being upgraded now.
pub type CurrentUpgradeDomainProgressInfo = DomainUpgradeProgress;
/// Progress of the units being upgraded now.
pub type CurrentUpgradeUnitsProgressInfo = DomainUpgradeProgress;
/// Progress of the domain that failed, on an application upgrade.
pub type FailureUpgradeDomainProgressInfo = DomainUpgradeProgress;
/// Progress of the domain that failed, on a cluster upgrade.
pub type FailedUpgradeDomainProgressObject = DomainUpgradeProgress;

impl JsonCodec for DomainUpgradeProgress {
    const TYPE_NAME: &'static str = "DomainUpgradeProgress";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut progress = Self::default();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("DomainName") {
                progress.domain_name = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("NodeUpgradeProgressList") {
                progress.node_upgrade_progress_list = reader.read_list()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(progress)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_optional_property("DomainName", self.domain_name.as_ref());
        writer.write_optional_list_property(
            "NodeUpgradeProgressList",
            self.node_upgrade_progress_list.as_deref(),
        );
        writer.finish()
    }
}
