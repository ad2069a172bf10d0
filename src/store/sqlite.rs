//! SQLite-backed key-value store.
//!
//! Values live in a single `kv` table. Connections come from an r2d2 pool;
//! `set_many` runs inside one transaction so multi-field updates land together.

use super::KeyValueStore;
use crate::errors::{StoreError, StoreResult};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension};
use std::path::Path;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

const CREATE_KV_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const UPSERT_VALUE: &str = r#"
INSERT INTO kv (key, value, updated_at)
VALUES (?1, ?2, CURRENT_TIMESTAMP)
ON CONFLICT(key) DO UPDATE SET
    value = excluded.value,
    updated_at = CURRENT_TIMESTAMP
"#;

/// Store keeping every key in one SQLite table.
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
    /// Opens or creates the database file and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the pool
    /// cannot be built, or schema creation fails.
    pub fn open(db_path: &Path) -> StoreResult<Self> {
        debug!("Opening database at: {:?}", db_path);
        if let Some(parent) = db_path.parent() {
            super::file::ensure_data_directory_exists(parent)?;
        }
        Self::from_manager(SqliteConnectionManager::file(db_path), 4)
    }

    /// Opens a private in-memory database.
    ///
    /// The pool is capped at one connection because every new in-memory
    /// connection would otherwise see its own empty database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_manager(SqliteConnectionManager::memory(), 1)
    }

    fn from_manager(manager: SqliteConnectionManager, max_size: u32) -> StoreResult<Self> {
        let pool = Pool::builder().max_size(max_size).build(manager)?;
        let store = SqliteStore { pool };
        store.initialize_schema()?;
        info!("Database opened successfully");
        Ok(store)
    }

    /// Creates the `kv` table if it does not exist. Safe to call repeatedly.
    pub fn initialize_schema(&self) -> StoreResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(CREATE_KV_TABLE)?;
        Ok(())
    }

    /// Gets a connection from the pool.
    pub fn get_conn(&self) -> StoreResult<PooledConnection> {
        self.pool.get().map_err(StoreError::Pool)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let conn = self.get_conn()?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let conn = self.get_conn()?;
        conn.execute(UPSERT_VALUE, params![key, value])?;
        debug!("Upserted key {}", key);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> StoreResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;
        for (key, value) in entries {
            tx.execute(UPSERT_VALUE, params![key, value])?;
        }
        tx.commit()?;
        debug!("Upserted {} keys in one transaction", entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_set_remove_in_memory() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("score").unwrap(), None);

        store.set("score", "10").unwrap();
        store.set("score", "15").unwrap();
        assert_eq!(store.get("score").unwrap().as_deref(), Some("15"));

        store.remove("score").unwrap();
        assert_eq!(store.get("score").unwrap(), None);
    }

    #[test]
    fn test_set_many_is_visible_together() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .set_many(&[("streak", "3".to_string()), ("score", "25".to_string())])
            .unwrap();
        assert_eq!(store.get("streak").unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("score").unwrap().as_deref(), Some("25"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("garden.db");
        {
            let mut store = SqliteStore::open(&db_path).unwrap();
            store.set("journalEntries", "[]").unwrap();
        }
        let store = SqliteStore::open(&db_path).unwrap();
        assert_eq!(store.get("journalEntries").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_initialize_schema_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.initialize_schema().unwrap();
        store.initialize_schema().unwrap();
    }
}
