//! formcore - question state core for a mini form builder
//!
//! Holds an ordered list of form question definitions, applies mutations
//! from a UI layer, and mirrors every change into a local key-value
//! persistence slot. Persistence failures degrade to in-memory operation
//! and are never surfaced to callers.

mod error;
mod question;
pub mod storage;
mod store;

pub use error::StorageError;
pub use question::{Question, QuestionType, DEFAULT_LABEL};
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use store::QuestionStore;
