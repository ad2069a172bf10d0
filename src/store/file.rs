//! File-backed key-value store.
//!
//! Each key is stored as `<key>.json` inside the data directory. Writes go to a
//! temporary file in the same directory which is then renamed over the target,
//! so a crash mid-write leaves either the old value or the new one. The
//! directory is guarded by an exclusive lock on `.lock` for as long as the
//! store is open.

use super::KeyValueStore;
use crate::constants::{STORE_FILE_EXTENSION, STORE_LOCK_FILE};
use crate::errors::{LockError, StoreError, StoreResult};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Store writing one JSON file per key.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    lock_file: File,
}

impl FileStore {
    /// Opens (creating if needed) the store rooted at `dir` and takes the
    /// directory lock.
    ///
    /// # Errors
    ///
    /// - `StoreError::Io` if the directory cannot be created
    /// - `StoreError::Lock(LockError::StoreBusy)` if another handle holds the lock
    /// - `StoreError::Lock(LockError::AcquisitionFailed)` for other locking failures
    pub fn open(dir: &Path) -> StoreResult<Self> {
        ensure_data_directory_exists(dir)?;

        let lock_path = dir.join(STORE_LOCK_FILE);
        let lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: lock_path.clone(),
                source,
            })?;

        if let Err(e) = lock_file.try_lock_exclusive() {
            let contended = e.kind() == io::ErrorKind::WouldBlock
                || e.raw_os_error() == fs2::lock_contended_error().raw_os_error();
            return Err(if contended {
                LockError::StoreBusy { path: lock_path }
            } else {
                LockError::AcquisitionFailed {
                    path: lock_path,
                    source: e,
                }
            }
            .into());
        }

        debug!("Acquired store lock in {:?}", dir);
        Ok(FileStore {
            dir: dir.to_path_buf(),
            lock_file,
        })
    }

    /// Directory holding the value files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Unavailable(format!(
                "Key '{}' cannot be used as a file name",
                key
            )));
        }
        Ok(self.dir.join(format!("{}{}", key, STORE_FILE_EXTENSION)))
    }

    /// Writes `value` to a synced temp file next to the target for `key`.
    fn stage(&self, key: &str, value: &str) -> StoreResult<(NamedTempFile, PathBuf)> {
        let path = self.path_for(key)?;

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            let permissions = fs::Permissions::from_mode(crate::constants::DEFAULT_FILE_PERMISSIONS);
            fs::set_permissions(temp.path(), permissions)?;
        }

        Ok((temp, path))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let (temp, path) = self.stage(key, value)?;
        temp.persist(&path).map_err(|e| StoreError::Io(e.error))?;
        debug!("Wrote {} bytes for key {}", value.len(), key);
        Ok(())
    }

    /// Writes every value to a temporary file before renaming any of them, so
    /// a bad key or a failed write leaves all targets untouched.
    fn set_many(&mut self, entries: &[(&str, String)]) -> StoreResult<()> {
        let staged = entries
            .iter()
            .map(|(key, value)| self.stage(key, value))
            .collect::<StoreResult<Vec<_>>>()?;

        for (temp, path) in staged {
            temp.persist(&path).map_err(|e| StoreError::Io(e.error))?;
        }
        debug!("Wrote {} keys", entries.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for FileStore {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.lock_file) {
            debug!("Failed to release store lock: {}", e);
        }
    }
}

/// Ensures the data directory exists, creating it with owner-only permissions.
///
/// # Errors
///
/// Returns `StoreError::Unavailable` for relative paths and `StoreError::Io`
/// if the directory cannot be created.
pub fn ensure_data_directory_exists(dir: &Path) -> StoreResult<()> {
    if !dir.is_absolute() {
        return Err(StoreError::Unavailable(format!(
            "Data directory path must be absolute: {}",
            dir.display()
        )));
    }

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            StoreError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            let permissions = fs::Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(dir, permissions)?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_and_overwrite() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileStore::open(temp_dir.path()).unwrap();

        assert_eq!(store.get("score").unwrap(), None);
        store.set("score", "42").unwrap();
        store.set("score", "43").unwrap();
        assert_eq!(store.get("score").unwrap().as_deref(), Some("43"));
        assert!(temp_dir.path().join("score.json").exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = tempdir().unwrap();
        {
            let mut store = FileStore::open(temp_dir.path()).unwrap();
            store.set("moodHistory", "[]").unwrap();
        }
        let store = FileStore::open(temp_dir.path()).unwrap();
        assert_eq!(store.get("moodHistory").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_second_open_is_busy() {
        let temp_dir = tempdir().unwrap();
        let _first = FileStore::open(temp_dir.path()).unwrap();

        match FileStore::open(temp_dir.path()) {
            Err(StoreError::Lock(LockError::StoreBusy { path })) => {
                assert!(path.ends_with(".lock"));
            }
            other => panic!("Expected StoreBusy, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileStore::open(temp_dir.path()).unwrap();
        store.remove("streak").unwrap();
        store.set("streak", "2").unwrap();
        store.remove("streak").unwrap();
        assert_eq!(store.get("streak").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileStore::open(temp_dir.path()).unwrap();
        assert!(matches!(
            store.set("../escape", "1"),
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_set_many_writes_nothing_when_one_key_is_bad() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileStore::open(temp_dir.path()).unwrap();
        store.set("score", "10").unwrap();

        let entries = [("score", "35".to_string()), ("bad/key", "1".to_string())];
        assert!(store.set_many(&entries).is_err());
        assert_eq!(store.get("score").unwrap().as_deref(), Some("10"));

        let entries = [("score", "35".to_string()), ("streak", "3".to_string())];
        store.set_many(&entries).unwrap();
        assert_eq!(store.get("score").unwrap().as_deref(), Some("35"));
        assert_eq!(store.get("streak").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_creates_nested_directory() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let _store = FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_relative_directory_rejected() {
        let result = ensure_data_directory_exists(Path::new("relative/dir"));
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_value_files_are_owner_only() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileStore::open(temp_dir.path()).unwrap();
        store.set("score", "1").unwrap();
        let mode = fs::metadata(temp_dir.path().join("score.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
