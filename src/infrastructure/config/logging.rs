//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so the menu on stdout stays readable. `RUST_LOG`
    /// takes precedence over the configured level. Calling this more than
    /// once keeps the first subscriber.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }

    /// Adjust the level from `-v`/`--quiet` flags.
    ///
    /// Each `-v` steps one level louder than `debug`/`trace`; `--quiet`
    /// limits output to errors and wins over `-v`.
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8, quiet: bool) -> Self {
        if quiet {
            self.level = "error".into();
        } else {
            match verbose {
                0 => {}
                1 => self.level = "debug".into(),
                _ => self.level = "trace".into(),
            }
        }
        self
    }

    /// Check level and format values.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for an unparseable level or an
    /// unknown format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if EnvFilter::try_new(&self.level).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("'{}' is not a valid filter directive", self.level),
            });
        }
        if !matches!(self.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("'{}' is not one of pretty, json", self.format),
            });
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}
