//! File-backed store: one JSON document per key

use super::traits::{KeyValueStore, StorageError};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Stores each slot as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory for the application
    pub fn default_dir() -> Result<PathBuf, StorageError> {
        ProjectDirs::from("io", "enroll", "enroll-tui")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StorageError::NoDataDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn io_error(key: &str, source: io::Error) -> StorageError {
        if source.kind() == io::ErrorKind::StorageFull {
            return StorageError::QuotaExceeded;
        }
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(key, e))?;

        // Write beside the target then rename so a reader never sees half a slot
        let target = self.slot_path(key);
        let staging = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&staging, value).map_err(|e| Self::io_error(key, e))?;
        fs::rename(&staging, &target).map_err(|e| Self::io_error(key, e))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn test_set_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        store.set("slot", r#"{"a":"1"}"#).unwrap();
        store.set("slot", r#"{"a":"2"}"#).unwrap();

        assert_eq!(store.get("slot").unwrap().as_deref(), Some(r#"{"a":"2"}"#));
        assert!(store.dir().join("slot.json").exists());
        assert!(!store.dir().join("slot.json.tmp").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("slot", "x").unwrap();

        store.remove("slot").unwrap();
        store.remove("slot").unwrap();
        assert!(store.get("slot").unwrap().is_none());
    }

    #[test]
    fn test_default_dir_does_not_panic() {
        let _dir = FileStore::default_dir();
    }
}
