//! Draft and registration slots on top of a [`KeyValueStore`]
//!
//! Every failure here is logged and swallowed: persistence is
//! best-effort and must never interrupt editing.

use super::traits::{KeyValueStore, StorageError};
use crate::state::{FormData, RegistrationRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Slot holding the in-progress form values
pub const DRAFT_KEY: &str = "studentRegistrationData";
/// Slot holding the most recently submitted registration
pub const REGISTRATION_KEY: &str = "lastRegistration";

/// Typed access to the two singleton slots
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Overwrite the draft. Returns whether the write landed.
    pub fn save_draft(&mut self, data: &FormData) -> bool {
        match self.write(DRAFT_KEY, data) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error saving form data: {e}");
                false
            }
        }
    }

    /// Read the draft; absent, unreadable and malformed drafts all yield `None`
    pub fn load_draft(&self) -> Option<FormData> {
        self.read_logged(DRAFT_KEY, "saved data")
    }

    pub fn clear_draft(&mut self) {
        if let Err(e) = self.store.remove(DRAFT_KEY) {
            tracing::error!("Error clearing saved data: {e}");
        }
    }

    #[allow(dead_code)]
    pub fn has_draft(&self) -> bool {
        matches!(self.store.get(DRAFT_KEY), Ok(Some(_)))
    }

    /// Overwrite the stored registration. Returns whether the write landed.
    pub fn save_registration(&mut self, record: &RegistrationRecord) -> bool {
        match self.write(REGISTRATION_KEY, record) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error storing registration: {e}");
                false
            }
        }
    }

    pub fn load_registration(&self) -> Option<RegistrationRecord> {
        self.read_logged(REGISTRATION_KEY, "registration data")
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &json)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                key: key.to_string(),
                source,
            })
    }

    fn read_logged<T: DeserializeOwned>(&self, key: &str, what: &str) -> Option<T> {
        match self.read(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Error loading {what}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, MockKeyValueStore};

    fn sample_data() -> FormData {
        FormData::from([
            ("firstName".to_string(), "Ada".to_string()),
            ("email".to_string(), "ada@example.com".to_string()),
        ])
    }

    mod draft {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_round_trip() {
            let mut persistence = Persistence::new(MemoryStore::new());
            assert!(persistence.save_draft(&sample_data()));
            assert_eq!(persistence.load_draft(), Some(sample_data()));
        }

        #[test]
        fn test_clear_removes_slot() {
            let mut persistence = Persistence::new(MemoryStore::new());
            persistence.save_draft(&sample_data());
            assert!(persistence.has_draft());

            persistence.clear_draft();
            assert!(!persistence.has_draft());
            assert_eq!(persistence.store().get(DRAFT_KEY).unwrap(), None);
        }

        #[test]
        fn test_malformed_draft_is_ignored() {
            let mut store = MemoryStore::new();
            store.set(DRAFT_KEY, "{not json").unwrap();
            let persistence = Persistence::new(store);
            assert!(persistence.load_draft().is_none());
        }

        #[test]
        fn test_write_failure_is_swallowed() {
            let mut store = MockKeyValueStore::new();
            store
                .expect_set()
                .returning(|_, _| Err(StorageError::QuotaExceeded));
            let mut persistence = Persistence::new(store);
            assert!(!persistence.save_draft(&sample_data()));
        }

        #[test]
        fn test_read_failure_yields_none() {
            let mut store = MockKeyValueStore::new();
            store.expect_get().returning(|key| {
                Err(StorageError::Io {
                    key: key.to_string(),
                    source: std::io::Error::other("disk gone"),
                })
            });
            let persistence = Persistence::new(store);
            assert!(persistence.load_draft().is_none());
            assert!(!persistence.has_draft());
        }
    }

    mod registration {
        use super::*;
        use pretty_assertions::assert_eq;

        fn record(id: &str) -> RegistrationRecord {
            RegistrationRecord {
                id: id.to_string(),
                date: "October 16, 2026 at 02:05 PM".to_string(),
                data: sample_data(),
            }
        }

        #[test]
        fn test_overwrites_previous_record() {
            let mut persistence = Persistence::new(MemoryStore::new());
            persistence.save_registration(&record("STU20260001"));
            persistence.save_registration(&record("STU20260002"));

            let loaded = persistence.load_registration().unwrap();
            assert_eq!(loaded, record("STU20260002"));
        }

        #[test]
        fn test_slots_are_independent() {
            let mut persistence = Persistence::new(MemoryStore::new());
            persistence.save_registration(&record("STU20260001"));
            persistence.clear_draft();
            assert!(persistence.load_registration().is_some());
            assert!(persistence.load_draft().is_none());
        }
    }
}
