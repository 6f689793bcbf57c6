//! models::service::scaling
//!
//! Auto-scaling policies: a trigger (discriminated by `Kind`) paired with a
//! mechanism (also discriminated by `Kind`).
//!
//! Load thresholds travel as strings because the API carries them as
//! doubles formatted by the server.

use serde_json::Value;

use super::enums::{ScalingMechanismKind, ScalingTriggerKind};
use crate::codec::{
    read_discriminator, CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext,
};
use crate::core::validate::{ensure_duration_seconds, required, ValidationError};

/// A scaling policy of a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingPolicyDescription {
    scaling_trigger: ScalingTriggerDescription,
    scaling_mechanism: ScalingMechanismDescription,
}

impl ScalingPolicyDescription {
    /// Pair a trigger with the mechanism it fires.
    pub fn new(
        scaling_trigger: ScalingTriggerDescription,
        scaling_mechanism: ScalingMechanismDescription,
    ) -> Self {
        Self {
            scaling_trigger,
            scaling_mechanism,
        }
    }

    /// When to scale.
    pub fn scaling_trigger(&self) -> &ScalingTriggerDescription {
        &self.scaling_trigger
    }

    /// How to scale.
    pub fn scaling_mechanism(&self) -> &ScalingMechanismDescription {
        &self.scaling_mechanism
    }
}

impl JsonCodec for ScalingPolicyDescription {
    const TYPE_NAME: &'static str = "ScalingPolicyDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut scaling_trigger = None;
        let mut scaling_mechanism = None;

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("ScalingTrigger") {
                scaling_trigger = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("ScalingMechanism") {
                scaling_mechanism = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(Self::new(
            required(scaling_trigger, Self::TYPE_NAME, "ScalingTrigger")?,
            required(scaling_mechanism, Self::TYPE_NAME, "ScalingMechanism")?,
        ))
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("ScalingTrigger", &self.scaling_trigger);
        writer.write_property("ScalingMechanism", &self.scaling_mechanism);
        writer.finish()
    }
}

// =============================================================================
// Triggers
// =============================================================================

/// What causes a scaling operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingTriggerDescription {
    AveragePartitionLoad(AveragePartitionLoadScalingTrigger),
    AverageServiceLoad(AverageServiceLoadScalingTrigger),
}

impl ScalingTriggerDescription {
    /// The `Kind` discriminator.
    pub fn kind(&self) -> ScalingTriggerKind {
        match self {
            ScalingTriggerDescription::AveragePartitionLoad(_) => {
                ScalingTriggerKind::AveragePartitionLoad
            }
            ScalingTriggerDescription::AverageServiceLoad(_) => {
                ScalingTriggerKind::AverageServiceLoad
            }
        }
    }
}

impl JsonCodec for ScalingTriggerDescription {
    const TYPE_NAME: &'static str = "ScalingTriggerDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let kind: ScalingTriggerKind = read_discriminator(value, Self::TYPE_NAME, "Kind", ctx)?;
        match kind {
            ScalingTriggerKind::AveragePartitionLoad => {
                AveragePartitionLoadScalingTrigger::read_json(value, ctx)
                    .map(ScalingTriggerDescription::AveragePartitionLoad)
            }
            ScalingTriggerKind::AverageServiceLoad => {
                AverageServiceLoadScalingTrigger::read_json(value, ctx)
                    .map(ScalingTriggerDescription::AverageServiceLoad)
            }
        }
    }

    fn to_json(&self) -> Value {
        match self {
            ScalingTriggerDescription::AveragePartitionLoad(trigger) => trigger.to_json(),
            ScalingTriggerDescription::AverageServiceLoad(trigger) => trigger.to_json(),
        }
    }
}

/// Thresholds shared by the average-load triggers.
#[derive(Debug, Clone, Default)]
struct LoadThresholdFields {
    metric_name: Option<String>,
    lower_load_threshold: Option<String>,
    upper_load_threshold: Option<String>,
    scale_interval_in_seconds: Option<i64>,
}

impl LoadThresholdFields {
    /// Read one threshold property. Returns false if `property` is not one of them.
    fn read_property(
        &mut self,
        property: &str,
        reader: &mut ObjectReader<'_>,
    ) -> Result<bool, CodecError> {
        if property.eq_ignore_ascii_case("MetricName") {
            self.metric_name = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("LowerLoadThreshold") {
            self.lower_load_threshold = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("UpperLoadThreshold") {
            self.upper_load_threshold = reader.read_value()?;
        } else if property.eq_ignore_ascii_case("ScaleIntervalInSeconds") {
            self.scale_interval_in_seconds = reader.read_value()?;
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    fn into_thresholds(self, type_name: &'static str) -> Result<LoadThresholds, ValidationError> {
        let metric_name = required(self.metric_name, type_name, "MetricName")?;
        let lower_load_threshold =
            required(self.lower_load_threshold, type_name, "LowerLoadThreshold")?;
        let upper_load_threshold =
            required(self.upper_load_threshold, type_name, "UpperLoadThreshold")?;
        let scale_interval_in_seconds =
            required(self.scale_interval_in_seconds, type_name, "ScaleIntervalInSeconds")?;
        LoadThresholds::new(
            type_name,
            metric_name,
            lower_load_threshold,
            upper_load_threshold,
            scale_interval_in_seconds,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LoadThresholds {
    metric_name: String,
    lower_load_threshold: String,
    upper_load_threshold: String,
    scale_interval_in_seconds: i64,
}

impl LoadThresholds {
    fn new(
        type_name: &'static str,
        metric_name: String,
        lower_load_threshold: String,
        upper_load_threshold: String,
        scale_interval_in_seconds: i64,
    ) -> Result<Self, ValidationError> {
        ensure_duration_seconds(
            Some(scale_interval_in_seconds),
            type_name,
            "ScaleIntervalInSeconds",
        )?;
        Ok(Self {
            metric_name,
            lower_load_threshold,
            upper_load_threshold,
            scale_interval_in_seconds,
        })
    }

    fn write(&self, writer: &mut ObjectWriter) {
        writer.write_property("MetricName", &self.metric_name);
        writer.write_property("LowerLoadThreshold", &self.lower_load_threshold);
        writer.write_property("UpperLoadThreshold", &self.upper_load_threshold);
        writer.write_property("ScaleIntervalInSeconds", &self.scale_interval_in_seconds);
    }
}

/// Scale when the average load of a partition crosses a threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AveragePartitionLoadScalingTrigger {
    thresholds: LoadThresholds,
}

impl AveragePartitionLoadScalingTrigger {
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `scale_interval_in_seconds`
    /// does not fit in `[0, 4294967295]`.
    pub fn new(
        metric_name: String,
        lower_load_threshold: String,
        upper_load_threshold: String,
        scale_interval_in_seconds: i64,
    ) -> Result<Self, ValidationError> {
        LoadThresholds::new(
            Self::TYPE_NAME,
            metric_name,
            lower_load_threshold,
            upper_load_threshold,
            scale_interval_in_seconds,
        )
        .map(|thresholds| Self { thresholds })
    }

    /// Metric whose partition average drives scaling.
    pub fn metric_name(&self) -> &str {
        &self.thresholds.metric_name
    }

    /// Scale in below this load, kept as the wire decimal string.
    pub fn lower_load_threshold(&self) -> &str {
        &self.thresholds.lower_load_threshold
    }

    /// Scale out above this load.
    pub fn upper_load_threshold(&self) -> &str {
        &self.thresholds.upper_load_threshold
    }

    /// How often the trigger is evaluated.
    pub fn scale_interval_in_seconds(&self) -> i64 {
        self.thresholds.scale_interval_in_seconds
    }
}

impl JsonCodec for AveragePartitionLoadScalingTrigger {
    const TYPE_NAME: &'static str = "AveragePartitionLoadScalingTrigger";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut fields = LoadThresholdFields::default();

        while let Some(property) = reader.next_property_name() {
            if !fields.read_property(property, &mut reader)? {
                reader.skip_value();
            }
        }

        let thresholds = fields.into_thresholds(Self::TYPE_NAME)?;
        Ok(Self { thresholds })
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("Kind", &ScalingTriggerKind::AveragePartitionLoad);
        self.thresholds.write(&mut writer);
        writer.finish()
    }
}

/// Scale when the average load of the whole service crosses a threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AverageServiceLoadScalingTrigger {
    thresholds: LoadThresholds,
    use_only_primary_load: bool,
}

impl AverageServiceLoadScalingTrigger {
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `scale_interval_in_seconds`
    /// does not fit in `[0, 4294967295]`.
    pub fn new(
        metric_name: String,
        lower_load_threshold: String,
        upper_load_threshold: String,
        scale_interval_in_seconds: i64,
        use_only_primary_load: bool,
    ) -> Result<Self, ValidationError> {
        let thresholds = LoadThresholds::new(
            Self::TYPE_NAME,
            metric_name,
            lower_load_threshold,
            upper_load_threshold,
            scale_interval_in_seconds,
        )?;
        Ok(Self {
            thresholds,
            use_only_primary_load,
        })
    }

    /// Metric whose service-wide average drives scaling.
    pub fn metric_name(&self) -> &str {
        &self.thresholds.metric_name
    }

    /// Scale in below this average.
    pub fn lower_load_threshold(&self) -> &str {
        &self.thresholds.lower_load_threshold
    }

    /// Scale out above this average.
    pub fn upper_load_threshold(&self) -> &str {
        &self.thresholds.upper_load_threshold
    }

    /// Evaluation period.
    pub fn scale_interval_in_seconds(&self) -> i64 {
        self.thresholds.scale_interval_in_seconds
    }

    /// Only primary replica load counts toward the average (stateful services).
    pub fn use_only_primary_load(&self) -> bool {
        self.use_only_primary_load
    }
}

impl JsonCodec for AverageServiceLoadScalingTrigger {
    const TYPE_NAME: &'static str = "AverageServiceLoadScalingTrigger";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut fields = LoadThresholdFields::default();
        let mut use_only_primary_load = None;

        while let Some(property) = reader.next_property_name() {
            if fields.read_property(property, &mut reader)? {
                continue;
            }
            if property.eq_ignore_ascii_case("UseOnlyPrimaryLoad") {
                use_only_primary_load = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        let thresholds = fields.into_thresholds(Self::TYPE_NAME)?;
        let use_only_primary_load =
            required(use_only_primary_load, Self::TYPE_NAME, "UseOnlyPrimaryLoad")?;
        Ok(Self {
            thresholds,
            use_only_primary_load,
        })
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("Kind", &ScalingTriggerKind::AverageServiceLoad);
        self.thresholds.write(&mut writer);
        writer.write_property("UseOnlyPrimaryLoad", &self.use_only_primary_load);
        writer.finish()
    }
}

// =============================================================================
// Mechanisms
// =============================================================================

/// How a scaling operation changes the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingMechanismDescription {
    PartitionInstanceCount(PartitionInstanceCountScaleMechanism),
    AddRemoveIncrementalNamedPartition(AddRemoveIncrementalNamedPartitionScalingMechanism),
}

impl ScalingMechanismDescription {
    /// The `Kind` discriminator.
    pub fn kind(&self) -> ScalingMechanismKind {
        match self {
            ScalingMechanismDescription::PartitionInstanceCount(_) => {
                ScalingMechanismKind::PartitionInstanceCount
            }
            ScalingMechanismDescription::AddRemoveIncrementalNamedPartition(_) => {
                ScalingMechanismKind::AddRemoveIncrementalNamedPartition
            }
        }
    }
}

impl JsonCodec for ScalingMechanismDescription {
    const TYPE_NAME: &'static str = "ScalingMechanismDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let kind: ScalingMechanismKind = read_discriminator(value, Self::TYPE_NAME, "Kind", ctx)?;
        match kind {
            ScalingMechanismKind::PartitionInstanceCount => {
                PartitionInstanceCountScaleMechanism::read_json(value, ctx)
                    .map(ScalingMechanismDescription::PartitionInstanceCount)
            }
            ScalingMechanismKind::AddRemoveIncrementalNamedPartition => {
                AddRemoveIncrementalNamedPartitionScalingMechanism::read_json(value, ctx)
                    .map(ScalingMechanismDescription::AddRemoveIncrementalNamedPartition)
            }
        }
    }

    fn to_json(&self) -> Value {
        match self {
            ScalingMechanismDescription::PartitionInstanceCount(mechanism) => mechanism.to_json(),
            ScalingMechanismDescription::AddRemoveIncrementalNamedPartition(mechanism) => {
                mechanism.to_json()
            }
        }
    }
}

/// Scale by changing the instance count of each partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionInstanceCountScaleMechanism {
    min_instance_count: i32,
    max_instance_count: i32,
    scale_increment: i32,
}

impl PartitionInstanceCountScaleMechanism {
    /// `max_instance_count` of `-1` means no upper limit.
    pub fn new(min_instance_count: i32, max_instance_count: i32, scale_increment: i32) -> Self {
        Self {
            min_instance_count,
            max_instance_count,
            scale_increment,
        }
    }

    /// Fewest instances the partition may shrink to.
    pub fn min_instance_count(&self) -> i32 {
        self.min_instance_count
    }

    /// `-1` for no upper limit.
    pub fn max_instance_count(&self) -> i32 {
        self.max_instance_count
    }

    /// Instances added or removed per step.
    pub fn scale_increment(&self) -> i32 {
        self.scale_increment
    }
}

impl JsonCodec for PartitionInstanceCountScaleMechanism {
    const TYPE_NAME: &'static str = "PartitionInstanceCountScaleMechanism";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut min_instance_count = None;
        let mut max_instance_count = None;
        let mut scale_increment = None;

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("MinInstanceCount") {
                min_instance_count = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("MaxInstanceCount") {
                max_instance_count = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("ScaleIncrement") {
                scale_increment = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(Self::new(
            required(min_instance_count, Self::TYPE_NAME, "MinInstanceCount")?,
            required(max_instance_count, Self::TYPE_NAME, "MaxInstanceCount")?,
            required(scale_increment, Self::TYPE_NAME, "ScaleIncrement")?,
        ))
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("Kind", &ScalingMechanismKind::PartitionInstanceCount);
        writer.write_property("MinInstanceCount", &self.min_instance_count);
        writer.write_property("MaxInstanceCount", &self.max_instance_count);
        writer.write_property("ScaleIncrement", &self.scale_increment);
        writer.finish()
    }
}

/// Scale by adding or removing named partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRemoveIncrementalNamedPartitionScalingMechanism {
    min_partition_count: i32,
    max_partition_count: i32,
    scale_increment: i32,
}

impl AddRemoveIncrementalNamedPartitionScalingMechanism {
    /// Scale between `min_partition_count` and `max_partition_count` partitions.
    pub fn new(min_partition_count: i32, max_partition_count: i32, scale_increment: i32) -> Self {
        Self {
            min_partition_count,
            max_partition_count,
            scale_increment,
        }
    }

    /// Fewest partitions the service may shrink to.
    pub fn min_partition_count(&self) -> i32 {
        self.min_partition_count
    }

    /// Most partitions the service may grow to.
    pub fn max_partition_count(&self) -> i32 {
        self.max_partition_count
    }

    /// Partitions added or removed per step.
    pub fn scale_increment(&self) -> i32 {
        self.scale_increment
    }
}

impl JsonCodec for AddRemoveIncrementalNamedPartitionScalingMechanism {
    const TYPE_NAME: &'static str = "AddRemoveIncrementalNamedPartitionScalingMechanism";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut min_partition_count = None;
        let mut max_partition_count = None;
        let mut scale_increment = None;

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("MinPartitionCount") {
                min_partition_count = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("MaxPartitionCount") {
                max_partition_count = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("ScaleIncrement") {
                scale_increment = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(Self::new(
            required(min_partition_count, Self::TYPE_NAME, "MinPartitionCount")?,
            required(max_partition_count, Self::TYPE_NAME, "MaxPartitionCount")?,
            required(scale_increment, Self::TYPE_NAME, "ScaleIncrement")?,
        ))
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("Kind", &ScalingMechanismKind::AddRemoveIncrementalNamedPartition);
        writer.write_property("MinPartitionCount", &self.min_partition_count);
        writer.write_property("MaxPartitionCount", &self.max_partition_count);
        writer.write_property("ScaleIncrement", &self.scale_increment);
        writer.finish()
    }
}
