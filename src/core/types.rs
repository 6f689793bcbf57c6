//! core::types
//!
//! Strong types for Service Fabric names.
//!
//! # Types
//!
//! - [`ApplicationName`] - Application URI (`fabric:/App`)
//! - [`ServiceName`] - Service URI (`fabric:/App/Service`)
//!
//! The cluster owns name validity, so these wrap any string the API returns.
//! They exist to keep application and service names from being swapped at a
//! call site.
//!
//! # Examples
//!
//! ```
//! use fabric_models::core::types::{ApplicationName, ServiceName};
//!
//! let app = ApplicationName::new("fabric:/VotingApp");
//! let svc = ServiceName::new("fabric:/VotingApp/VotingWeb");
//!
//! assert!(app.is_fabric_uri());
//! assert_eq!(svc.as_str(), "fabric:/VotingApp/VotingWeb");
//! ```

use std::fmt;

/// Scheme prefix of every Service Fabric name.
pub const FABRIC_SCHEME: &str = "fabric:/";

/// A Service Fabric application name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicationName(String);

impl ApplicationName {
    /// Wrap an application name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name carries the `fabric:/` scheme.
    pub fn is_fabric_uri(&self) -> bool {
        self.0.starts_with(FABRIC_SCHEME)
    }
}

impl fmt::Display for ApplicationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ApplicationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ApplicationName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ApplicationName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A Service Fabric service name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceName(String);

impl ServiceName {
    /// Wrap a service name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name carries the `fabric:/` scheme.
    pub fn is_fabric_uri(&self) -> bool {
        self.0.starts_with(FABRIC_SCHEME)
    }

    /// The application segment of a `fabric:/App/Service` name, if any.
    pub fn application(&self) -> Option<ApplicationName> {
        let path = self.0.strip_prefix(FABRIC_SCHEME)?;
        let (app, _) = path.split_once('/')?;
        (!app.is_empty()).then(|| ApplicationName::new(format!("{FABRIC_SCHEME}{app}")))
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServiceName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ServiceName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
