//! Durable key-value storage for garden state.
//!
//! Every persisted field lives under its own string key with a JSON-encoded
//! string value. The engine only needs load-at-init and save-on-change, so the
//! [`KeyValueStore`] trait is deliberately small.
//!
//! # Module Structure
//!
//! - `memory`: in-process `HashMap` store, used by tests and as the fallback
//!   when no durable store can be opened
//! - `file`: one JSON file per key inside a locked data directory
//! - `sqlite`: a single `kv` table behind an r2d2 connection pool

pub mod file;
pub mod memory;
pub mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::config::{Config, StoreBackend};
use crate::errors::StoreResult;
use tracing::{error, info};

/// String-keyed, string-valued durable storage.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;

    /// Stores several values.
    ///
    /// The default writes each pair in order and stops at the first failure.
    /// Backends with transactions override this so that either every pair is
    /// written or none is.
    fn set_many(&mut self, entries: &[(&str, String)]) -> StoreResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> StoreResult<()> {
        (**self).set_many(entries)
    }
}

/// Opens the store selected by the configuration.
///
/// # Errors
///
/// Returns the backend's error if the data directory cannot be prepared, the
/// lock is held by another process, or the database cannot be opened.
pub fn open_configured(config: &Config) -> StoreResult<Box<dyn KeyValueStore>> {
    match config.store_backend {
        StoreBackend::Json => Ok(Box::new(FileStore::open(&config.data_dir)?)),
        StoreBackend::Sqlite => {
            let store = SqliteStore::open(&config.sqlite_path())?;
            Ok(Box::new(store))
        }
    }
}

/// Opens the configured store, degrading to an unpersisted [`MemoryStore`]
/// when that fails.
///
/// The failure is logged; the session still works, it just will not survive
/// a restart.
pub fn open_or_fallback(config: &Config) -> Box<dyn KeyValueStore> {
    match open_configured(config) {
        Ok(store) => {
            info!(backend = %config.store_backend, "Opened garden store");
            store
        }
        Err(e) => {
            error!(error = %e, "Failed to open garden store; continuing without persistence");
            Box::new(MemoryStore::new())
        }
    }
}
