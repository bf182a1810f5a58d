//! In-memory storage slot

use crate::error::StorageError;
use crate::storage::StorageBackend;

/// Holds the payload in memory; state lives only as long as the backend
///
/// Useful for tests and for embedding the store where no durable storage
/// exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-populated slot, as if a prior session had saved
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
        }
    }

    /// Current slot contents, for assertions
    pub fn payload(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.clone())
    }

    fn set(&mut self, payload: &str) -> Result<(), StorageError> {
        self.slot = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_slot_reads_none() {
        let backend = MemoryBackend::new();
        assert!(backend.get().unwrap().is_none());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut backend = MemoryBackend::new();
        backend.set("payload").unwrap();
        assert_eq!(backend.get().unwrap(), Some("payload".to_string()));
        assert_eq!(backend.payload(), Some("payload"));
    }

    #[test]
    fn test_with_payload_seeds_slot() {
        let backend = MemoryBackend::with_payload("[]");
        assert_eq!(backend.get().unwrap(), Some("[]".to_string()));
    }
}
