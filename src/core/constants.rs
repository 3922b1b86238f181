//! Constants used throughout pwbox.
//!
//! Centralizes magic strings and limits.

/// Minimum accepted master password length, in bytes.
pub const MIN_MASTER_PASSWORD_LEN: usize = 6;

/// How many candidate ids the allocator tries before giving up.
pub const ID_ALLOC_ATTEMPTS: usize = 10;

/// Block size of the record cipher, and therefore the IV length.
pub const BLOCK_SIZE: usize = 16;

/// Settings directory relative to HOME (~/.pwbox).
pub const HOME_DIR: &str = ".pwbox";

/// Settings file name inside [`HOME_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Default password box file name inside [`HOME_DIR`].
pub const STORE_FILE: &str = "passwords.json";

/// Environment variable overriding the password box path.
pub const ENV_STORE: &str = "PWBOX_STORE";

/// Environment variable supplying the master password non-interactively.
pub const ENV_MASTER_PASSWORD: &str = "PWBOX_MASTER_PASSWORD";

/// Environment variable holding the tracing filter.
pub const ENV_LOG: &str = "PWBOX_LOG";
