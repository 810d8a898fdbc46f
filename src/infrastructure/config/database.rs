//! Database location configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable that overrides the configured database path.
pub const DATABASE_ENV: &str = "ROLLBOOK_DATABASE";

/// Where the student table lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite file, or `:memory:`.
    ///
    /// Defaults to "college.db" in the current directory.
    pub path: String,
}

impl DatabaseConfig {
    /// # Errors
    /// Returns [`ConfigError::MissingField`] when the path is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.path",
            });
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "college.db".into(),
        }
    }
}
