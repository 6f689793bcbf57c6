//! models::health
//!
//! Health evaluations and the events behind them.
//!
//! # Shape
//!
//! A [`HealthEvaluation`] is a tree: the common `AggregatedHealthState` and
//! `Description`, plus [`HealthEvaluationDetails`] selected by `Kind`. Most
//! kinds carry the child evaluations that made them unhealthy, each wrapped in
//! a [`HealthEvaluationWrapper`]. Children are owned; the tree is as deep as
//! the payload, bounded by the decode depth budget.

use serde_json::Value;

use crate::codec::{
    read_discriminator, serde_via_codec, wire_enum, CodecError, JsonCodec, ObjectReader,
    ObjectWriter, ReadContext,
};
use crate::core::types::{ApplicationName, ServiceName};
use crate::core::validate::{required, ValidationError};
use crate::models::setters;

wire_enum! {
    /// Aggregated or reported health of an entity.
    pub enum HealthState {
        Invalid,
        Ok,
        Warning,
        Error,
        Unknown,
    }
}

wire_enum! {
    /// Discriminator of health evaluations.
    pub enum HealthEvaluationKind {
        Event,
        Node,
        Nodes,
        Application,
        Applications,
        SystemApplication,
        Service,
        UpgradeDomainNodes,
    }
}

// =============================================================================
// Health event
// =============================================================================

/// A health report as stored by the health store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthEvent {
    source_id: String,
    property: String,
    health_state: HealthState,
    time_to_live_in_milli_seconds: Option<String>,
    description: Option<String>,
    sequence_number: Option<String>,
    remove_when_expired: Option<bool>,
    health_report_id: Option<String>,
    source_utc_timestamp: Option<String>,
    last_modified_utc_timestamp: Option<String>,
    is_expired: Option<bool>,
}

impl HealthEvent {
    /// Start a builder; `SourceId`, `Property` and `HealthState` are required.
    pub fn builder() -> HealthEventBuilder {
        HealthEventBuilder::default()
    }

    /// Watchdog or component that reported the event.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Health property the event reports on, e.g. `Disk`.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Reported state.
    pub fn health_state(&self) -> HealthState {
        self.health_state
    }

    /// How long the report stays valid, as an ISO 8601 duration or millisecond count.
    pub fn time_to_live_in_milli_seconds(&self) -> Option<&str> {
        self.time_to_live_in_milli_seconds.as_deref()
    }

    /// Free-text details supplied by the reporter.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Reporter-assigned sequence number, kept as the wire string.
    pub fn sequence_number(&self) -> Option<&str> {
        self.sequence_number.as_deref()
    }

    /// Whether the cluster drops the report once its TTL passes.
    pub fn remove_when_expired(&self) -> Option<bool> {
        self.remove_when_expired
    }

    /// Identifier of the health report this event came from.
    pub fn health_report_id(&self) -> Option<&str> {
        self.health_report_id.as_deref()
    }

    /// When the reporter generated the event.
    pub fn source_utc_timestamp(&self) -> Option<&str> {
        self.source_utc_timestamp.as_deref()
    }

    /// When the health store last updated the event.
    pub fn last_modified_utc_timestamp(&self) -> Option<&str> {
        self.last_modified_utc_timestamp.as_deref()
    }

    /// Whether the TTL has passed.
    pub fn is_expired(&self) -> Option<bool> {
        self.is_expired
    }
}

/// Builder for [`HealthEvent`].
#[derive(Debug, Clone, Default)]
pub struct HealthEventBuilder {
    source_id: Option<String>,
    property: Option<String>,
    health_state: Option<HealthState>,
    time_to_live_in_milli_seconds: Option<String>,
    description: Option<String>,
    sequence_number: Option<String>,
    remove_when_expired: Option<bool>,
    health_report_id: Option<String>,
    source_utc_timestamp: Option<String>,
    last_modified_utc_timestamp: Option<String>,
    is_expired: Option<bool>,
}

impl HealthEventBuilder {
    setters! {
        source_id: String,
        property: String,
        health_state: HealthState,
        time_to_live_in_milli_seconds: String,
        description: String,
        sequence_number: String,
        remove_when_expired: bool,
        health_report_id: String,
        source_utc_timestamp: String,
        last_modified_utc_timestamp: String,
        is_expired: bool,
    }

    /// Build the event.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NullArgument` if `source_id`, `property`, or
    /// `health_state` is missing.
    pub fn build(self) -> Result<HealthEvent, ValidationError> {
        const TYPE_NAME: &str = HealthEvent::TYPE_NAME;

        Ok(HealthEvent {
            source_id: required(self.source_id, TYPE_NAME, "SourceId")?,
            property: required(self.property, TYPE_NAME, "Property")?,
            health_state: required(self.health_state, TYPE_NAME, "HealthState")?,
            time_to_live_in_milli_seconds: self.time_to_live_in_milli_seconds,
            description: self.description,
            sequence_number: self.sequence_number,
            remove_when_expired: self.remove_when_expired,
            health_report_id: self.health_report_id,
            source_utc_timestamp: self.source_utc_timestamp,
            last_modified_utc_timestamp: self.last_modified_utc_timestamp,
            is_expired: self.is_expired,
        })
    }
}

impl JsonCodec for HealthEvent {
    const TYPE_NAME: &'static str = "HealthEvent";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut builder = HealthEvent::builder();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("SourceId") {
                builder.source_id = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("Property") {
                builder.property = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HealthState") {
                builder.health_state = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("TimeToLiveInMilliSeconds") {
                builder.time_to_live_in_milli_seconds = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("Description") {
                builder.description = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("SequenceNumber") {
                builder.sequence_number = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("RemoveWhenExpired") {
                builder.remove_when_expired = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("HealthReportId") {
                builder.health_report_id = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("SourceUtcTimestamp") {
                builder.source_utc_timestamp = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("LastModifiedUtcTimestamp") {
                builder.last_modified_utc_timestamp = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("IsExpired") {
                builder.is_expired = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(builder.build()?)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("SourceId", &self.source_id);
        writer.write_property("Property", &self.property);
        writer.write_property("HealthState", &self.health_state);
        writer.write_optional_property(
            "TimeToLiveInMilliSeconds",
            self.time_to_live_in_milli_seconds.as_ref(),
        );
        writer.write_optional_property("Description", self.description.as_ref());
        writer.write_optional_property("SequenceNumber", self.sequence_number.as_ref());
        writer.write_optional_property("RemoveWhenExpired", self.remove_when_expired.as_ref());
        writer.write_optional_property("HealthReportId", self.health_report_id.as_ref());
        writer.write_optional_property("SourceUtcTimestamp", self.source_utc_timestamp.as_ref());
        writer.write_optional_property(
            "LastModifiedUtcTimestamp",
            self.last_modified_utc_timestamp.as_ref(),
        );
        writer.write_optional_property("IsExpired", self.is_expired.as_ref());
        writer.finish()
    }
}

// =============================================================================
// Evaluations
// =============================================================================

/// Envelope around one health evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthEvaluationWrapper {
    pub health_evaluation: Option<HealthEvaluation>,
}

impl JsonCodec for HealthEvaluationWrapper {
    const TYPE_NAME: &'static str = "HealthEvaluationWrapper";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut wrapper = Self::default();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("HealthEvaluation") {
                wrapper.health_evaluation = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(wrapper)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_optional_property("HealthEvaluation", self.health_evaluation.as_ref());
        writer.finish()
    }
}

impl From<HealthEvaluation> for HealthEvaluationWrapper {
    fn from(evaluation: HealthEvaluation) -> Self {
        Self {
            health_evaluation: Some(evaluation),
        }
    }
}

/// Why an entity was evaluated to its health state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthEvaluation {
    pub aggregated_health_state: Option<HealthState>,
    pub description: Option<String>,
    pub details: HealthEvaluationDetails,
}

impl HealthEvaluation {
    /// An evaluation with no state or description.
    pub fn new(details: impl Into<HealthEvaluationDetails>) -> Self {
        Self {
            aggregated_health_state: None,
            description: None,
            details: details.into(),
        }
    }

    /// The `Kind` discriminator of the details.
    pub fn kind(&self) -> HealthEvaluationKind {
        self.details.kind()
    }

    /// Child evaluations, if this kind carries any.
    pub fn unhealthy_evaluations(&self) -> Option<&[HealthEvaluationWrapper]> {
        self.details.unhealthy_evaluations()
    }
}

impl JsonCodec for HealthEvaluation {
    const TYPE_NAME: &'static str = "HealthEvaluation";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let kind: HealthEvaluationKind = read_discriminator(value, Self::TYPE_NAME, "Kind", ctx)?;

        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut evaluation = HealthEvaluation::new(HealthEvaluationDetails::empty(kind));

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("AggregatedHealthState") {
                evaluation.aggregated_health_state = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("Description") {
                evaluation.description = reader.read_value()?;
            } else if !evaluation.details.read_property(property, &mut reader)? {
                reader.skip_value();
            }
        }

        Ok(evaluation)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("Kind", &self.kind());
        writer.write_nullable_property(
            "AggregatedHealthState",
            self.aggregated_health_state.as_ref(),
        );
        writer.write_optional_property("Description", self.description.as_ref());
        self.details.write(&mut writer);
        writer.finish()
    }
}

/// Kind-specific part of a [`HealthEvaluation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthEvaluationDetails {
    Event(EventHealthEvaluation),
    Node(NodeHealthEvaluation),
    Nodes(NodesHealthEvaluation),
    Application(ApplicationHealthEvaluation),
    Applications(ApplicationsHealthEvaluation),
    SystemApplication(SystemApplicationHealthEvaluation),
    Service(ServiceHealthEvaluation),
    UpgradeDomainNodes(UpgradeDomainNodesHealthEvaluation),
}

impl HealthEvaluationDetails {
    fn empty(kind: HealthEvaluationKind) -> Self {
        use HealthEvaluationDetails as D;
        match kind {
            HealthEvaluationKind::Event => D::Event(Default::default()),
            HealthEvaluationKind::Node => D::Node(Default::default()),
            HealthEvaluationKind::Nodes => D::Nodes(Default::default()),
            HealthEvaluationKind::Application => D::Application(Default::default()),
            HealthEvaluationKind::Applications => D::Applications(Default::default()),
            HealthEvaluationKind::SystemApplication => D::SystemApplication(Default::default()),
            HealthEvaluationKind::Service => D::Service(Default::default()),
            HealthEvaluationKind::UpgradeDomainNodes => D::UpgradeDomainNodes(Default::default()),
        }
    }

    /// The `Kind` this variant is written with.
    pub fn kind(&self) -> HealthEvaluationKind {
        use HealthEvaluationDetails as D;
        match self {
            D::Event(_) => HealthEvaluationKind::Event,
            D::Node(_) => HealthEvaluationKind::Node,
            D::Nodes(_) => HealthEvaluationKind::Nodes,
            D::Application(_) => HealthEvaluationKind::Application,
            D::Applications(_) => HealthEvaluationKind::Applications,
            D::SystemApplication(_) => HealthEvaluationKind::SystemApplication,
            D::Service(_) => HealthEvaluationKind::Service,
            D::UpgradeDomainNodes(_) => HealthEvaluationKind::UpgradeDomainNodes,
        }
    }

    /// Child evaluations; always `None` for `Event`.
    pub fn unhealthy_evaluations(&self) -> Option<&[HealthEvaluationWrapper]> {
        use HealthEvaluationDetails as D;
        match self {
            D::Event(_) => None,
            D::Node(node) => node.unhealthy_evaluations.as_deref(),
            D::Nodes(nodes) => nodes.unhealthy_evaluations.as_deref(),
            D::Application(application) => application.unhealthy_evaluations.as_deref(),
            D::Applications(applications) => applications.unhealthy_evaluations.as_deref(),
            D::SystemApplication(system) => system.unhealthy_evaluations.as_deref(),
            D::Service(service) => service.unhealthy_evaluations.as_deref(),
            D::UpgradeDomainNodes(domain) => domain.unhealthy_evaluations.as_deref(),
        }
    }

    fn read_property(
        &mut self,
        property: &str,
        reader: &mut ObjectReader<'_>,
    ) -> Result<bool, CodecError> {
        use HealthEvaluationDetails as D;
        let unhealthy = property.eq_ignore_ascii_case("UnhealthyEvaluations");

        match self {
            D::Event(event) => {
                if property.eq_ignore_ascii_case("ConsiderWarningAsError") {
                    event.consider_warning_as_error = reader.read_value()?;
                } else if property.eq_ignore_ascii_case("UnhealthyEvent") {
                    event.unhealthy_event = reader.read_value()?;
                } else {
                    return Ok(false);
                }
            }
            D::Node(node) => {
                if property.eq_ignore_ascii_case("NodeName") {
                    node.node_name = reader.read_value()?;
                } else if unhealthy {
                    node.unhealthy_evaluations = reader.read_list()?;
                } else {
                    return Ok(false);
                }
            }
            D::Nodes(nodes) => {
                if property.eq_ignore_ascii_case("MaxPercentUnhealthyNodes") {
                    nodes.max_percent_unhealthy_nodes = reader.read_value()?;
                } else if property.eq_ignore_ascii_case("TotalCount") {
                    nodes.total_count = reader.read_value()?;
                } else if unhealthy {
                    nodes.unhealthy_evaluations = reader.read_list()?;
                } else {
                    return Ok(false);
                }
            }
            D::Application(application) => {
                if property.eq_ignore_ascii_case("ApplicationName") {
                    application.application_name = reader.read_value()?;
                } else if unhealthy {
                    application.unhealthy_evaluations = reader.read_list()?;
                } else {
                    return Ok(false);
                }
            }
            D::Applications(applications) => {
                if property.eq_ignore_ascii_case("MaxPercentUnhealthyApplications") {
                    applications.max_percent_unhealthy_applications = reader.read_value()?;
                } else if property.eq_ignore_ascii_case("TotalCount") {
                    applications.total_count = reader.read_value()?;
                } else if unhealthy {
                    applications.unhealthy_evaluations = reader.read_list()?;
                } else {
                    return Ok(false);
                }
            }
            D::SystemApplication(system) => {
                if unhealthy {
                    system.unhealthy_evaluations = reader.read_list()?;
                } else {
                    return Ok(false);
                }
            }
            D::Service(service) => {
                if property.eq_ignore_ascii_case("ServiceName") {
                    service.service_name = reader.read_value()?;
                } else if unhealthy {
                    service.unhealthy_evaluations = reader.read_list()?;
                } else {
                    return Ok(false);
                }
            }
            D::UpgradeDomainNodes(domain) => {
                if property.eq_ignore_ascii_case("UpgradeDomainName") {
                    domain.upgrade_domain_name = reader.read_value()?;
                } else if property.eq_ignore_ascii_case("MaxPercentUnhealthyNodes") {
                    domain.max_percent_unhealthy_nodes = reader.read_value()?;
                } else if property.eq_ignore_ascii_case("TotalCount") {
                    domain.total_count = reader.read_value()?;
                } else if unhealthy {
                    domain.unhealthy_evaluations = reader.read_list()?;
                } else {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn write(&self, writer: &mut ObjectWriter) {
        use HealthEvaluationDetails as D;
        let children = self.unhealthy_evaluations();

        match self {
            D::Event(event) => {
                writer.write_optional_property(
                    "ConsiderWarningAsError",
                    event.consider_warning_as_error.as_ref(),
                );
                writer.write_optional_property("UnhealthyEvent", event.unhealthy_event.as_ref());
            }
            D::Node(node) => {
                writer.write_optional_property("NodeName", node.node_name.as_ref());
            }
            D::Nodes(nodes) => {
                writer.write_optional_property(
                    "MaxPercentUnhealthyNodes",
                    nodes.max_percent_unhealthy_nodes.as_ref(),
                );
                writer.write_optional_property("TotalCount", nodes.total_count.as_ref());
            }
            D::Application(application) => {
                writer.write_optional_property(
                    "ApplicationName",
                    application.application_name.as_ref(),
                );
            }
            D::Applications(applications) => {
                writer.write_optional_property(
                    "MaxPercentUnhealthyApplications",
                    applications.max_percent_unhealthy_applications.as_ref(),
                );
                writer.write_optional_property("TotalCount", applications.total_count.as_ref());
            }
            D::SystemApplication(_) => {}
            D::Service(service) => {
                writer.write_optional_property("ServiceName", service.service_name.as_ref());
            }
            D::UpgradeDomainNodes(domain) => {
                writer.write_optional_property(
                    "UpgradeDomainName",
                    domain.upgrade_domain_name.as_ref(),
                );
                writer.write_optional_property(
                    "MaxPercentUnhealthyNodes",
                    domain.max_percent_unhealthy_nodes.as_ref(),
                );
                writer.write_optional_property("TotalCount", domain.total_count.as_ref());
            }
        }
        writer.write_optional_list_property("UnhealthyEvaluations", children);
    }
}

/// An unhealthy health event caused the evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventHealthEvaluation {
    pub consider_warning_as_error: Option<bool>,
    pub unhealthy_event: Option<HealthEvent>,
}

/// A single node is unhealthy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeHealthEvaluation {
    pub node_name: Option<String>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
}

/// Too many unhealthy nodes in the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodesHealthEvaluation {
    pub max_percent_unhealthy_nodes: Option<i32>,
    pub total_count: Option<i64>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
}

/// A single application is unhealthy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationHealthEvaluation {
    pub application_name: Option<ApplicationName>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
}

/// Too many unhealthy applications in the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationsHealthEvaluation {
    pub max_percent_unhealthy_applications: Option<i32>,
    pub total_count: Option<i64>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
}

/// The `fabric:/System` application is unhealthy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemApplicationHealthEvaluation {
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
}

/// A single service is unhealthy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceHealthEvaluation {
    pub service_name: Option<ServiceName>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
}

/// Too many unhealthy nodes in one upgrade domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradeDomainNodesHealthEvaluation {
    pub upgrade_domain_name: Option<String>,
    pub max_percent_unhealthy_nodes: Option<i32>,
    pub total_count: Option<i64>,
    pub unhealthy_evaluations: Option<Vec<HealthEvaluationWrapper>>,
}

macro_rules! details_from {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for HealthEvaluationDetails {
                fn from(details: $ty) -> Self {
                    HealthEvaluationDetails::$variant(details)
                }
            }
        )+
    };
}

details_from!(
    Event(EventHealthEvaluation),
    Node(NodeHealthEvaluation),
    Nodes(NodesHealthEvaluation),
    Application(ApplicationHealthEvaluation),
    Applications(ApplicationsHealthEvaluation),
    SystemApplication(SystemApplicationHealthEvaluation),
    Service(ServiceHealthEvaluation),
    UpgradeDomainNodes(UpgradeDomainNodesHealthEvaluation),
);

serde_via_codec!(HealthEvent, HealthEvaluation, HealthEvaluationWrapper);
