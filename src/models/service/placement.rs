//! models::service::placement
//!
//! Placement policies, discriminated by `Type`.
//!
//! Every policy except `NonPartiallyPlaceService` names the fault or upgrade
//! domain it applies to.

use serde_json::Value;

use super::enums::ServicePlacementPolicyType;
use crate::codec::{
    read_discriminator, CodecError, JsonCodec, ObjectReader, ObjectWriter, ReadContext,
};

/// A placement policy of a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServicePlacementPolicyDescription {
    InvalidDomain { domain_name: Option<String> },
    RequireDomain { domain_name: Option<String> },
    PreferPrimaryDomain { domain_name: Option<String> },
    RequireDomainDistribution { domain_name: Option<String> },
    NonPartiallyPlaceService,
    AllowMultipleStatelessInstancesOnNode { domain_name: Option<String> },
}

impl ServicePlacementPolicyDescription {
    /// The `Type` discriminator.
    pub fn kind(&self) -> ServicePlacementPolicyType {
        use ServicePlacementPolicyDescription as P;
        match self {
            P::InvalidDomain { .. } => ServicePlacementPolicyType::InvalidDomain,
            P::RequireDomain { .. } => ServicePlacementPolicyType::RequireDomain,
            P::PreferPrimaryDomain { .. } => ServicePlacementPolicyType::PreferPrimaryDomain,
            P::RequireDomainDistribution { .. } => {
                ServicePlacementPolicyType::RequireDomainDistribution
            }
            P::NonPartiallyPlaceService => ServicePlacementPolicyType::NonPartiallyPlaceService,
            P::AllowMultipleStatelessInstancesOnNode { .. } => {
                ServicePlacementPolicyType::AllowMultipleStatelessInstancesOnNode
            }
        }
    }

    /// Domain the policy applies to, if the policy carries one.
    pub fn domain_name(&self) -> Option<&str> {
        self.domain().map(String::as_str)
    }

    fn domain(&self) -> Option<&String> {
        use ServicePlacementPolicyDescription as P;
        match self {
            P::InvalidDomain { domain_name }
            | P::RequireDomain { domain_name }
            | P::PreferPrimaryDomain { domain_name }
            | P::RequireDomainDistribution { domain_name }
            | P::AllowMultipleStatelessInstancesOnNode { domain_name } => domain_name.as_ref(),
            P::NonPartiallyPlaceService => None,
        }
    }
}

impl JsonCodec for ServicePlacementPolicyDescription {
    const TYPE_NAME: &'static str = "ServicePlacementPolicyDescription";

    fn read_json(value: &Value, ctx: ReadContext) -> Result<Self, CodecError> {
        use ServicePlacementPolicyDescription as P;

        let kind: ServicePlacementPolicyType =
            read_discriminator(value, Self::TYPE_NAME, "Type", ctx)?;

        let mut reader = ObjectReader::new(value, Self::TYPE_NAME, ctx)?;
        let mut domain_name = None;
        let carries_domain = kind != ServicePlacementPolicyType::NonPartiallyPlaceService;

        while let Some(property) = reader.next_property_name() {
            if carries_domain && property.eq_ignore_ascii_case("DomainName") {
                domain_name = reader.read_value()?;
            } else {
                reader.skip_value();
            }
        }

        Ok(match kind {
            ServicePlacementPolicyType::InvalidDomain => P::InvalidDomain { domain_name },
            ServicePlacementPolicyType::RequireDomain => P::RequireDomain { domain_name },
            ServicePlacementPolicyType::PreferPrimaryDomain => {
                P::PreferPrimaryDomain { domain_name }
            }
            ServicePlacementPolicyType::RequireDomainDistribution => {
                P::RequireDomainDistribution { domain_name }
            }
            ServicePlacementPolicyType::NonPartiallyPlaceService => P::NonPartiallyPlaceService,
            ServicePlacementPolicyType::AllowMultipleStatelessInstancesOnNode => {
                P::AllowMultipleStatelessInstancesOnNode { domain_name }
            }
        })
    }

    fn to_json(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.write_property("Type", &self.kind());
        writer.write_optional_property("DomainName", self.domain());
        writer.finish()
    }
}
