//! models::service::load_metric
//!
//! Load metrics a service reports to the resource balancer.

use serde_json::Value;

use super::enums::ServiceLoadMetricWeight;
use crate::codec::{CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext};
use crate::core::validate::{required, ValidationError};
use crate::models::setters;

/// One load metric of a service.
///
/// # Example
///
/// ```
/// use fabric_models::models::service::{ServiceLoadMetricDescription, ServiceLoadMetricWeight};
///
/// let metric = ServiceLoadMetricDescription::builder()
///     .name("MemoryInMb".to_string())
///     .weight(ServiceLoadMetricWeight::High)
///     .primary_default_load(512)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     fabric_models::to_string(&metric),
///     r#"{"Name":"MemoryInMb","Weight":"High","PrimaryDefaultLoad":512}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLoadMetricDescription {
    name: String,
    weight: Option<ServiceLoadMetricWeight>,
    primary_default_load: Option<i32>,
    secondary_default_load: Option<i32>,
    auxiliary_default_load: Option<i32>,
    maximum_load: Option<i32>,
    default_load: Option<i32>,
}

impl ServiceLoadMetricDescription {
    /// `Name` is required.
    pub fn builder() -> ServiceLoadMetricDescriptionBuilder {
        ServiceLoadMetricDescriptionBuilder::default()
    }

    /// Metric name, e.g. `MemoryInMb`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative weight against the other metrics of the service.
    pub fn weight(&self) -> Option<ServiceLoadMetricWeight> {
        self.weight
    }

    /// Default load while the replica is primary (stateful only).
    pub fn primary_default_load(&self) -> Option<i32> {
        self.primary_default_load
    }

    /// Default load while the replica is secondary (stateful only).
    pub fn secondary_default_load(&self) -> Option<i32> {
        self.secondary_default_load
    }

    /// Default load of auxiliary replicas (stateful only).
    pub fn auxiliary_default_load(&self) -> Option<i32> {
        self.auxiliary_default_load
    }

    /// Upper bound on the reported load.
    pub fn maximum_load(&self) -> Option<i32> {
        self.maximum_load
    }

    /// Default load of stateless instances.
    pub fn default_load(&self) -> Option<i32> {
        self.default_load
    }
}

/// Builder for [`ServiceLoadMetricDescription`].
#[derive(Debug, Clone, Default)]
pub struct ServiceLoadMetricDescriptionBuilder {
    name: Option<String>,
    weight: Option<ServiceLoadMetricWeight>,
    primary_default_load: Option<i32>,
    secondary_default_load: Option<i32>,
    auxiliary_default_load: Option<i32>,
    maximum_load: Option<i32>,
    default_load: Option<i32>,
}

impl ServiceLoadMetricDescriptionBuilder {
    setters! {
        name: String,
        weight: ServiceLoadMetricWeight,
        primary_default_load: i32,
        secondary_default_load: i32,
        auxiliary_default_load: i32,
        maximum_load: i32,
        default_load: i32,
    }

    /// Build the metric.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NullArgument` if `name` is missing.
    pub fn build(self) -> Result<ServiceLoadMetricDescription, ValidationError> {
        let name = required(self.name, ServiceLoadMetricDescription::TYPE_NAME, "Name")?;
        Ok(ServiceLoadMetricDescription {
            name,
            weight: self.weight,
            primary_default_load: self.primary_default_load,
            secondary_default_load: self.secondary_default_load,
            auxiliary_default_load: self.auxiliary_default_load,
            maximum_load: self.maximum_load,
            default_load: self.default_load,
        })
    }
}

impl JsonCodec for ServiceLoadMetricDescription {
    const TYPE_NAME: &'static str = "ServiceLoadMetricDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut builder = Self::builder();

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("Name") {
                builder.name = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("Weight") {
                builder.weight = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("PrimaryDefaultLoad") {
                builder.primary_default_load = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("SecondaryDefaultLoad") {
                builder.secondary_default_load = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("AuxiliaryDefaultLoad") {
                builder.auxiliary_default_load = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("MaximumLoad") {
                builder.maximum_load = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("DefaultLoad") {
                builder.default_load = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(builder.build()?)
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("Name", &self.name);
        writer.write_nullable_property("Weight", self.weight.as_ref());
        writer.write_optional_property("PrimaryDefaultLoad", self.primary_default_load.as_ref());
        writer.write_optional_property(
            "SecondaryDefaultLoad",
            self.secondary_default_load.as_ref(),
        );
        writer.write_optional_property(
            "AuxiliaryDefaultLoad",
            self.auxiliary_default_load.as_ref(),
        );
        writer.write_optional_property("MaximumLoad", self.maximum_load.as_ref());
        writer.write_optional_property("DefaultLoad", self.default_load.as_ref());
        writer.finish()
    }
}
