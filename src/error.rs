//! Storage error types

use thiserror::Error;

/// Failures a storage backend can report
///
/// None of these ever reach the store's callers: [`crate::QuestionStore`]
/// absorbs them and keeps serving in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend does not exist in the current environment
    #[error("storage backend unavailable in this environment")]
    Unavailable,

    /// Reading or writing the slot failed
    #[error("storage access failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored payload is not valid question data
    #[error("stored payload is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
