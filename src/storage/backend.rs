//! Trait abstraction for the persistence slot to enable mocking in tests

use crate::error::StorageError;

/// A synchronous key-value slot holding the serialized question sequence
///
/// Each backend owns a single fixed slot; the store never addresses more than
/// one. `get` is called once at store construction, `set` after every
/// mutation.
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend {
    /// Read the full slot contents, `None` if nothing was ever stored
    fn get(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot with the given payload
    fn set(&mut self, payload: &str) -> Result<(), StorageError>;
}
