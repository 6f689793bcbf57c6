//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$FABRIC_MODELS_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/fabric-models/config.toml`
//! 3. `~/.fabric-models/config.toml`
//!
//! No file means defaults.
//!
//! # Example
//!
//! ```no_run
//! use fabric_models::core::config::Config;
//! use fabric_models::Codec;
//!
//! let config = Config::load().unwrap();
//! let codec = Codec::from_config(&config);
//! println!("max depth: {}", config.max_depth());
//! # let _ = codec;
//! ```

pub mod schema;

pub use schema::{
    CodecConfig, LimitsConfig, OutputConfig, MAX_CONFIGURABLE_DEPTH, MIN_PAYLOAD_BYTES,
};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FABRIC_MODELS_CONFIG";

/// Default for [`Config::max_payload_bytes`] (4 MiB).
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 4 * 1024 * 1024;

/// Default for [`Config::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
///
/// Accessors apply defaults for anything the file leaves out.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub codec: CodecConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. A missing file is not an error.
    pub fn load() -> Result<Config, ConfigError> {
        let env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
        let home = dirs::home_dir();

        match resolve_path(env, xdg, home) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let codec: CodecConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        codec.validate()?;

        debug!(path = %path.display(), "loaded codec config");

        Ok(Config {
            codec,
            path: Some(path.to_path_buf()),
        })
    }

    /// Whether encoded JSON is rendered indented.
    ///
    /// Defaults to `false` if not configured.
    pub fn pretty(&self) -> bool {
        self.codec
            .output
            .as_ref()
            .and_then(|o| o.pretty)
            .unwrap_or(false)
    }

    /// Largest accepted payload in bytes.
    ///
    /// Defaults to 4 MiB if not configured.
    pub fn max_payload_bytes(&self) -> usize {
        self.codec
            .limits
            .as_ref()
            .and_then(|l| l.max_payload_bytes)
            .unwrap_or(DEFAULT_MAX_PAYLOAD_BYTES)
    }

    /// Maximum nesting depth read.
    ///
    /// Defaults to 64 if not configured.
    pub fn max_depth(&self) -> usize {
        self.codec
            .limits
            .as_ref()
            .and_then(|l| l.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Pick the config file to load from the candidate locations.
///
/// An explicit `env` path wins even when the file does not exist, so a
/// mistyped `$FABRIC_MODELS_CONFIG` surfaces as a read error instead of
/// silently falling back.
pub fn resolve_path(
    env: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = env {
        return Some(path);
    }

    let xdg = xdg_config_home.map(|dir| dir.join("fabric-models/config.toml"));
    let dotdir = home.map(|dir| dir.join(".fabric-models/config.toml"));

    [xdg, dotdir].into_iter().flatten().find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    mod loading {
        use super::*;

        #[test]
        fn defaults_without_file() {
            let config = Config::default();
            assert!(!config.pretty());
            assert_eq!(config.max_payload_bytes(), 4_194_304);
            assert_eq!(config.max_depth(), 64);
            assert!(config.loaded_from().is_none());
        }

        #[test]
        fn load_from_file() {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("config.toml");
            fs::write(
                &path,
                r#"
                [output]
                pretty = true

                [limits]
                max_depth = 8
                "#,
            )
            .unwrap();

            let config = Config::load_from(&path).unwrap();
            assert!(config.pretty());
            assert_eq!(config.max_depth(), 8);
            assert_eq!(config.max_payload_bytes(), DEFAULT_MAX_PAYLOAD_BYTES);
            assert_eq!(config.loaded_from(), Some(path.as_path()));
        }

        #[test]
        fn missing_file_is_read_error() {
            let temp = TempDir::new().unwrap();
            let result = Config::load_from(&temp.path().join("absent.toml"));
            assert!(matches!(result, Err(ConfigError::ReadError { .. })));
        }

        #[test]
        fn invalid_toml_is_parse_error() {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("config.toml");
            fs::write(&path, "[limits\nmax_depth = 3").unwrap();

            let result = Config::load_from(&path);
            assert!(matches!(result, Err(ConfigError::ParseError { .. })));
        }

        #[test]
        fn unknown_fields_rejected() {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("config.toml");
            fs::write(&path, "strict = true").unwrap();

            assert!(Config::load_from(&path).is_err());
        }

        #[test]
        fn out_of_range_limit_rejected() {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("config.toml");
            fs::write(&path, "[limits]\nmax_depth = 500").unwrap();

            assert!(matches!(
                Config::load_from(&path),
                Err(ConfigError::InvalidValue(_))
            ));
        }
    }

    mod resolve {
        use super::*;

        #[test]
        fn env_wins_even_if_missing() {
            let temp = TempDir::new().unwrap();
            let explicit = temp.path().join("nowhere.toml");
            let resolved = resolve_path(Some(explicit.clone()), None, None);
            assert_eq!(resolved, Some(explicit));
        }

        #[test]
        fn xdg_before_home() {
            let xdg = TempDir::new().unwrap();
            let home = TempDir::new().unwrap();
            for root in [xdg.path().join("fabric-models"), home.path().join(".fabric-models")] {
                fs::create_dir_all(&root).unwrap();
                fs::write(root.join("config.toml"), "").unwrap();
            }

            let resolved = resolve_path(
                None,
                Some(xdg.path().to_path_buf()),
                Some(home.path().to_path_buf()),
            );
            assert_eq!(
                resolved,
                Some(xdg.path().join("fabric-models/config.toml"))
            );
        }

        #[test]
        fn falls_back_to_home() {
            let xdg = TempDir::new().unwrap();
            let home = TempDir::new().unwrap();
            let dotdir = home.path().join(".fabric-models");
            fs::create_dir_all(&dotdir).unwrap();
            fs::write(dotdir.join("config.toml"), "").unwrap();

            let resolved = resolve_path(
                None,
                Some(xdg.path().to_path_buf()),
                Some(home.path().to_path_buf()),
            );
            assert_eq!(resolved, Some(dotdir.join("config.toml")));
        }

        #[test]
        fn nothing_found() {
            let home = TempDir::new().unwrap();
            assert_eq!(resolve_path(None, None, Some(home.path().to_path_buf())), None);
        }
    }
}
