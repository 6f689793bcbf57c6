//! core
//!
//! Shared building blocks for the model layer.
//!
//! # Modules
//!
//! - [`types`] - Strong types: ApplicationName, ServiceName
//! - [`validate`] - Construction-time checks and `ValidationError`
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - A model that exists is a model that passed validation
//! - Schemas are strict and self-describing

pub mod config;
pub mod types;
pub mod validate;
