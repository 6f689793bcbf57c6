//! models
//!
//! Data-transfer objects of the cluster-management REST API.
//!
//! # Modules
//!
//! - [`service`] - Service descriptions, update descriptions, and their parts
//! - [`upgrade`] - Application and cluster upgrade descriptions and progress
//! - [`health`] - Health evaluations and events
//! - [`arm`] - ARM metadata
//!
//! # Shapes
//!
//! Types whose wire contract carries required properties or numeric bounds
//! keep their fields private and are built through a validating builder or
//! constructor. Types whose properties are all optional are plain structs with
//! public fields.

pub mod arm;
pub mod health;
pub mod service;
pub mod upgrade;

/// Builder setters over `Option` fields of the same name.
///
/// Each setter accepts either a value or an `Option`; passing `None` clears a
/// field the builder defaulted. The `in` form writes through an inner struct.
macro_rules! setters {
    (in $inner:ident; $($(#[$meta:meta])* $field:ident: $ty:ty),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $field(mut self, value: impl Into<Option<$ty>>) -> Self {
                self.$inner.$field = value.into();
                self
            }
        )+
    };
    ($($(#[$meta:meta])* $field:ident: $ty:ty),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $field(mut self, value: impl Into<Option<$ty>>) -> Self {
                self.$field = value.into();
                self
            }
        )+
    };
}

pub(crate) use setters;
