//! In-memory repository.
//!
//! Holds the last saved blob in a mutex. Useful for tests and for embedding
//! the vault where persistence is handled elsewhere.

use std::sync::Mutex;

use super::Repository;
use crate::error::{RepositoryError, Result};

#[derive(Debug, Default)]
pub struct MemoryRepository {
    blob: Mutex<Vec<u8>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing blob, as if it had been saved earlier.
    pub fn with_blob(data: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Mutex::new(data.into()),
        }
    }

    /// Copy of the current blob.
    pub fn snapshot(&self) -> Vec<u8> {
        self.blob.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

impl Repository for MemoryRepository {
    fn load(&self) -> Result<Vec<u8>> {
        let blob = self
            .blob
            .lock()
            .map_err(|_| RepositoryError::Backend("memory repository poisoned".to_string()))?;
        Ok(blob.clone())
    }

    fn save(&self, data: &[u8]) -> Result<()> {
        let mut blob = self
            .blob
            .lock()
            .map_err(|_| RepositoryError::Backend("memory repository poisoned".to_string()))?;
        *blob = data.to_vec();
        Ok(())
    }
}
