//! Error types.
//!
//! One crate-wide [`Error`] wraps a small enum per concern so callers can
//! match on the failure they care about and `?` works across module seams.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::RecordId;

/// Crate-wide error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Store lifecycle and lookup failures.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("master password too short: at least {min} characters required")]
    MasterPasswordTooShort { min: usize },

    #[error("master password not set: initialize the box first")]
    EmptyMasterPassword,

    #[error("password not found: {0}")]
    PasswordNotFound(RecordId),

    #[error("no password with category '{category}' and account '{account}'")]
    PasswordNotFoundWithAccount { category: String, account: String },

    #[error("ambiguous: {} passwords matched ({})", .0.len(), .0.join(", "))]
    Ambiguous(Vec<RecordId>),

    #[error("failed to allocate a free id after {attempts} attempts")]
    AllocateIdFailed { attempts: usize },

    #[error("password box lock poisoned")]
    LockPoisoned,
}

/// Record codec failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("cipher initialization failed: {0}")]
    InvalidKey(String),
}

/// Persistence backend failures.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("repository error: {0}")]
    Backend(String),
}

/// Settings file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unable to determine home directory")]
    NoHomeDir,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Short suggestion shown under the error message, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Vault(VaultError::MasterPasswordTooShort { .. }) => {
                Some("choose a master password of at least 6 characters")
            }
            Error::Vault(VaultError::Ambiguous(_)) => {
                Some("use a longer id prefix, or pass --all to remove every match")
            }
            Error::Vault(VaultError::PasswordNotFound(_))
            | Error::Vault(VaultError::PasswordNotFoundWithAccount { .. }) => {
                Some("run: pwbox list")
            }
            _ => None,
        }
    }
}
