//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::info;

use crate::adapter::outbound::sqlite::SqliteStudentStore;
use crate::application::RecordManager;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Record manager backed by the configured SQLite database.
pub type SqliteRecordManager = RecordManager<SqliteStudentStore>;

/// Open the configured database and make sure the student table exists.
///
/// # Errors
/// Returns an error if the database cannot be opened or holds an
/// incompatible `student` table.
pub fn open_record_manager(config: &Config) -> Result<SqliteRecordManager> {
    let store = SqliteStudentStore::open(&config.database.path)?;
    let manager = RecordManager::open(store)?;
    info!(database = %config.database.path, "Database ready");
    Ok(manager)
}
