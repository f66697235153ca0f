pub mod catalog_repo;
pub mod event_repo;
pub mod migrations;

use crate::domain::error::DomainError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Connection shared by every SQLite adapter, so `:memory:` databases see
/// one schema.
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Open (or create) the database at `path` and bring its schema up to date.
pub fn open(path: &str) -> Result<SharedConnection, DomainError> {
    let conn = Connection::open(path)
        .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
    if path != ":memory:" {
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
    }
    migrations::run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

pub(crate) fn lock(
    conn: &SharedConnection,
) -> Result<std::sync::MutexGuard<'_, Connection>, DomainError> {
    conn.lock().map_err(|e| DomainError::Database(e.to_string()))
}
