//! Opening the password box for a command.
//!
//! Resolves the box file from settings and flags, obtains the master
//! password and unlocks the vault.

use std::path::Path;

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::Settings;
use crate::core::constants::ENV_MASTER_PASSWORD;
use crate::core::store::FileRepository;
use crate::core::vault::Vault;
use crate::error::Result;

/// Open and unlock the password box.
///
/// `store` overrides the box path from the settings file.
pub fn open(store: Option<&Path>) -> Result<Vault> {
    let settings = Settings::load()?;
    let path = settings.store_path(store)?;
    debug!(path = %path.display(), "opening password box");

    let master = master_password(!path.exists())?;
    let vault = Vault::new(FileRepository::new(path));
    vault.initialize(&master)?;
    Ok(vault)
}

/// Master password from `PWBOX_MASTER_PASSWORD`, or a hidden prompt.
///
/// A new box asks for the password twice.
fn master_password(new_box: bool) -> Result<Zeroizing<String>> {
    if let Ok(password) = std::env::var(ENV_MASTER_PASSWORD) {
        debug!("master password from environment");
        return Ok(Zeroizing::new(password));
    }

    let mut prompt = Password::new().with_prompt("Master password");
    if new_box {
        prompt = prompt.with_confirmation("Repeat master password", "passwords do not match");
    }
    Ok(Zeroizing::new(prompt.interact()?))
}
