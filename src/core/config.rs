//! Settings file management.
//!
//! Handles reading `~/.pwbox/config.toml`. The file is optional; every
//! setting has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// User settings stored in `~/.pwbox/config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,
}

/// `[store]` section.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Password box file. A leading `~/` expands to the home directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Settings directory (`~/.pwbox`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if the home directory is unknown.
    pub fn dir() -> Result<PathBuf> {
        Ok(home()?.join(constants::HOME_DIR))
    }

    /// Path to the settings file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::dir()?.join(constants::CONFIG_FILE))
    }

    /// Load settings from `~/.pwbox/config.toml`, or defaults if it does not
    /// exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load settings from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read
    /// and `ConfigError::Parse` if the TOML is malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");

        if !path.exists() {
            debug!("no settings file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(settings)
    }

    /// Resolve the password box path.
    ///
    /// `explicit` (the `--store` flag or `PWBOX_STORE`) wins over the
    /// settings file, which wins over `~/.pwbox/passwords.json`.
    pub fn store_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        let chosen = explicit.or(self.store.path.as_deref());
        match chosen {
            Some(path) if path.starts_with("~") => Ok(expand_tilde(path, &home()?)),
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(Self::dir()?.join(constants::STORE_FILE)),
        }
    }
}

fn home() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| ConfigError::NoHomeDir.into())
}

/// Replace a leading `~` component with `home`.
fn expand_tilde(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
