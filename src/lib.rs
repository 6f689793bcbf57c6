//! fabric-models - Typed JSON models for the Service Fabric REST API
//!
//! This crate provides the data-transfer objects of the Service Fabric
//! cluster-management REST API together with converters that read and write
//! their JSON wire shape: case-insensitive property names, tolerance of
//! unknown properties, discriminator dispatch for polymorphic families, and
//! construction-time validation.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`core`] - Validation primitives, name newtypes, and configuration
//! - [`codec`] - The `JsonCodec` trait, the property reader and writer, and
//!   the decode/encode entry points
//! - [`models`] - One module per API area, each type paired with its converter
//!
//! # Example
//!
//! ```
//! use fabric_models::models::service::{ServiceDescription, ServiceKind};
//!
//! let payload = r#"{
//!     "ServiceKind": "Stateless",
//!     "serviceName": "fabric:/shop/web",
//!     "ServiceTypeName": "WebType",
//!     "PartitionDescription": { "PartitionScheme": "Singleton" },
//!     "InstanceCount": -1,
//!     "SomethingNewer": true
//! }"#;
//!
//! let service: ServiceDescription = fabric_models::from_str(payload)?;
//! assert_eq!(service.kind(), ServiceKind::Stateless);
//!
//! let text = fabric_models::to_string(&service);
//! assert!(text.starts_with(r#"{"ServiceKind":"Stateless","ServiceName":"fabric:/shop/web""#));
//! # Ok::<(), fabric_models::CodecError>(())
//! ```
//!
//! # Correctness Invariants
//!
//! 1. A model instance exists only if every required property is present and
//!    every bounded property is in range
//! 2. Decoding the encoding of a valid instance yields an equal instance
//! 3. An absent list and an empty list stay distinct through a round trip

pub mod codec;
pub mod core;
pub mod models;

pub use codec::{
    from_slice, from_str, from_value, to_string, to_string_pretty, to_value, Codec, CodecError,
    JsonCodec,
};
