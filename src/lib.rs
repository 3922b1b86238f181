//! pwbox - a local password box sealed with one master password.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── records       # add / update / rm / list / find / clear
//! │   ├── session       # settings, repository and master password
//! │   ├── table         # tabular output
//! │   └── output        # status lines
//! └── core/             # Core library components
//!     ├── config        # ~/.pwbox/config.toml
//!     ├── cipher/       # Record codec (AES-CFB, MD5-derived key)
//!     ├── domain/       # Record, Draft, Table
//!     ├── id            # Record id allocation
//!     ├── query         # Sorting and matching
//!     ├── store/        # Repository trait and backends
//!     │   ├── fs        # Single JSON file
//!     │   └── memory    # In-memory blob
//!     └── vault         # The password box
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pwbox::{Draft, MemoryRepository, Vault};
//!
//! let vault = Vault::new(MemoryRepository::new());
//! vault.initialize("correct horse")?;
//! let (id, _) = vault.add(Draft::new("mail", "alice@example.com", "hunter22"))?;
//! vault.remove(&[&id[..6]], false)?;
//! # Ok::<(), pwbox::error::Error>(())
//! ```
//!
//! # Security
//!
//! The record key is a single unsalted MD5 of the master password and the
//! cipher mode carries no integrity check. Both are kept for compatibility
//! with existing boxes.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{Draft, Record, Row, Table};
pub use crate::core::store::{FileRepository, MemoryRepository, Repository};
pub use crate::core::vault::Vault;
