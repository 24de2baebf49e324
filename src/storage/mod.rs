//! Local key-value storage for the draft and the last registration

mod file_store;
mod memory;
mod persistence;
mod traits;

pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use persistence::Persistence;
pub use traits::KeyValueStore;

#[cfg(test)]
pub use persistence::DRAFT_KEY;
#[cfg(test)]
pub use traits::{MockKeyValueStore, StorageError};
