//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Values are validated after parsing so a file that parses but carries a
//! nonsensical limit (a zero depth budget, say) is rejected at load time.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Deepest nesting budget a configuration may request.
pub const MAX_CONFIGURABLE_DEPTH: usize = 128;

/// Smallest payload limit a configuration may request (`{}`).
pub const MIN_PAYLOAD_BYTES: usize = 2;

/// Codec configuration file.
///
/// # Example
///
/// ```toml
/// [output]
/// pretty = false
///
/// [limits]
/// max_payload_bytes = 4194304
/// max_depth = 64
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Output rendering
    pub output: Option<OutputConfig>,

    /// Decode limits
    pub limits: Option<LimitsConfig>,
}

impl CodecConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(limits) = &self.limits {
            limits.validate()?;
        }
        Ok(())
    }
}

/// Output rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Render encoded JSON indented
    pub pretty: Option<bool>,
}

/// Decode limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    /// Largest accepted payload, in bytes
    pub max_payload_bytes: Option<usize>,

    /// Maximum nesting of objects and arrays
    pub max_depth: Option<usize>,
}

impl LimitsConfig {
    /// Validate the limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(depth) = self.max_depth {
            if !(1..=MAX_CONFIGURABLE_DEPTH).contains(&depth) {
                return Err(ConfigError::InvalidValue(format!(
                    "limits.max_depth = {depth} must be between 1 and {MAX_CONFIGURABLE_DEPTH}"
                )));
            }
        }

        if let Some(bytes) = self.max_payload_bytes {
            if bytes < MIN_PAYLOAD_BYTES {
                return Err(ConfigError::InvalidValue(format!(
                    "limits.max_payload_bytes = {bytes} must be at least {MIN_PAYLOAD_BYTES}"
                )));
            }
        }

        Ok(())
    }
}
