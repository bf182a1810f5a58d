//! Persistence backends for the question store

mod backend;
mod file;
mod memory;

pub use backend::StorageBackend;
pub use file::FileBackend;
pub use memory::MemoryBackend;

#[cfg(test)]
pub use backend::MockStorageBackend;
