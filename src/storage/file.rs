//! File-backed storage slot under the platform data directory

use crate::error::StorageError;
use crate::storage::StorageBackend;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// File name of the persistence slot inside the data directory
const QUESTIONS_FILE: &str = "questions.json";

/// Stores the question payload as a single JSON file
///
/// When no platform data directory can be resolved the backend reports
/// [`StorageError::Unavailable`] and the store degrades to in-memory
/// operation.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: Option<PathBuf>,
}

impl FileBackend {
    pub fn new() -> Self {
        let path = ProjectDirs::from("dev", "formcore", "formcore")
            .map(|dirs| dirs.data_dir().join(QUESTIONS_FILE));
        Self { path }
    }

    /// Use an explicit slot path instead of the platform data directory
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for FileBackend {
    fn get(&self) -> Result<Option<String>, StorageError> {
        let path = self.path.as_ref().ok_or(StorageError::Unavailable)?;

        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(content))
    }

    fn set(&mut self, payload: &str) -> Result<(), StorageError> {
        let path = self.path.as_ref().ok_or(StorageError::Unavailable)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, payload)?;
        Ok(())
    }
}
