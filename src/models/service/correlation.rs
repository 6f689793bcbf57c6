//! models::service::correlation

use serde_json::Value;

use super::enums::ServiceCorrelationScheme;
use crate::codec::{CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext};
use crate::core::types::ServiceName;
use crate::core::validate::required;

/// Correlation of a service with another service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCorrelationDescription {
    scheme: ServiceCorrelationScheme,
    service_name: ServiceName,
}

impl ServiceCorrelationDescription {
    /// Correlate with `service_name` under `scheme`.
    pub fn new(scheme: ServiceCorrelationScheme, service_name: ServiceName) -> Self {
        Self {
            scheme,
            service_name,
        }
    }

    /// How this service relates to the other one.
    pub fn scheme(&self) -> ServiceCorrelationScheme {
        self.scheme
    }

    /// The service this one is correlated with.
    pub fn service_name(&self) -> &ServiceName {
        &self.service_name
    }
}

impl JsonCodec for ServiceCorrelationDescription {
    const TYPE_NAME: &'static str = "ServiceCorrelationDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut scheme = None;
        let mut service_name = None;

        while let Some(property) = reader.next_property_name() {
            if property.eq_ignore_ascii_case("Scheme") {
                scheme = reader.read_value()?;
            } else if property.eq_ignore_ascii_case("ServiceName") {
                service_name = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        let scheme = required(scheme, Self::TYPE_NAME, "Scheme")?;
        let service_name = required(service_name, Self::TYPE_NAME, "ServiceName")?;
        Ok(Self::new(scheme, service_name))
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("Scheme", &self.scheme);
        writer.write_property("ServiceName", &self.service_name);
        writer.finish()
    }
}
