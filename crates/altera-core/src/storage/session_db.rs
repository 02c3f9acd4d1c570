//! SQLite-backed session store.
//!
//! The browser host keeps timer sessions in tab-scoped session storage. The
//! CLI host has no tab, so sessions live in a small key-value table at
//! `~/.config/altera/altera.db` instead; successive CLI invocations then
//! restore sessions the same way a page reload does. The one-hour validity
//! window in the timer layer bounds how long an abandoned row stays
//! meaningful.

use rusqlite::{params, Connection};

use super::{data_dir, SessionStore};
use crate::error::StorageError;

/// SQLite database holding timer session entries.
pub struct SessionDb {
    conn: Connection,
}

impl SessionDb {
    /// Open the database at `~/.config/altera/altera.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("altera.db");
        let conn = Connection::open(&path).map_err(|source| StorageError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS session_kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl SessionStore for SessionDb {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM session_kv WHERE key = ?1")
            .map_err(StorageError::from)?;
        let mut rows = stmt.query(params![key]).map_err(StorageError::from)?;
        match rows.next().map_err(StorageError::from)? {
            Some(row) => Ok(Some(row.get(0).map_err(StorageError::from)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn
            .execute(
                "INSERT INTO session_kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(StorageError::from)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM session_kv WHERE key = ?1", params![key])
            .map_err(StorageError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_roundtrip() {
        let db = SessionDb::open_memory().unwrap();
        assert!(db.get("timer_state_c1_0").unwrap().is_none());
        db.set("timer_state_c1_0", "{}").unwrap();
        assert_eq!(db.get("timer_state_c1_0").unwrap().unwrap(), "{}");
        db.set("timer_state_c1_0", "{\"elapsedTime\":5}").unwrap();
        assert_eq!(
            db.get("timer_state_c1_0").unwrap().unwrap(),
            "{\"elapsedTime\":5}"
        );
        db.remove("timer_state_c1_0").unwrap();
        assert!(db.get("timer_state_c1_0").unwrap().is_none());
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let db = SessionDb::open_memory().unwrap();
        db.remove("session_start_c1_0").unwrap();
    }
}
