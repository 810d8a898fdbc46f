//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Configuration is loaded from an
//! optional TOML file, then the database path may be overridden by the
//! `ROLLBOOK_DATABASE` environment variable or the `--database` flag.
//!
//! # Example
//!
//! ```no_run
//! use rollbook::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("rollbook.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

use super::database::{DatabaseConfig, DATABASE_ENV};
use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "rollbook.toml";

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Database location.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// # Errors
    /// Returns an error for any failure other than the file not existing.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::ReadFile(e).into()),
        }
    }

    /// Apply the database override chain: explicit value first, then
    /// `ROLLBOOK_DATABASE`, then whatever the file said.
    ///
    /// # Errors
    /// Returns an error if the resulting path is blank.
    pub fn with_database_override(mut self, explicit: Option<String>) -> Result<Self> {
        if let Some(path) = explicit.or_else(|| std::env::var(DATABASE_ENV).ok()) {
            self.database.path = path;
        }
        self.database.validate()?;
        Ok(self)
    }

    /// Initialize tracing with the configured logging settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn validate(&self) -> Result<()> {
        self.database.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
