//! Trait abstraction for the key-value store to enable mocking in tests

use thiserror::Error;

/// Failures raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("stored value for `{key}` is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not serialize value for `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no data directory is available")]
    NoDataDir,
    #[error("storage quota exceeded")]
    QuotaExceeded,
}

/// Flat string-keyed storage slots, in the manner of a browser's local storage
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read a slot; `Ok(None)` when the slot does not exist
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot; deleting a missing slot is not an error
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
