//! Password box persistence.
//!
//! The vault hands the whole serialized collection to a [`Repository`] and
//! reads it back as one opaque blob. Backends never see record structure.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Repository` trait
//! 2. Add the implementation in a new file (e.g., `s3.rs`, `sqlite.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Cloud { /* ... */ }
//!
//! impl Repository for Cloud {
//!     fn load(&self) -> Result<Vec<u8>> {
//!         // Fetch the blob, or an empty Vec if nothing was saved yet
//!     }
//!     fn save(&self, data: &[u8]) -> Result<()> {
//!         // Replace the stored blob
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::error::Result;

mod fs;
mod memory;

pub use fs::FileRepository;
pub use memory::MemoryRepository;

/// Blob storage for the password box.
pub trait Repository: Send + Sync {
    /// Load the last saved blob.
    ///
    /// An empty vector means nothing has been saved yet; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backend cannot be read.
    fn load(&self) -> Result<Vec<u8>>;

    /// Replace the stored blob with `data`.
    ///
    /// Either the whole blob is replaced or the call fails and the previous
    /// blob is kept.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backend cannot be written.
    fn save(&self, data: &[u8]) -> Result<()>;
}

impl<R: Repository + ?Sized> Repository for Arc<R> {
    fn load(&self) -> Result<Vec<u8>> {
        (**self).load()
    }

    fn save(&self, data: &[u8]) -> Result<()> {
        (**self).save(data)
    }
}

impl<R: Repository + ?Sized> Repository for Box<R> {
    fn load(&self) -> Result<Vec<u8>> {
        (**self).load()
    }

    fn save(&self, data: &[u8]) -> Result<()> {
        (**self).save(data)
    }
}
