//! Filesystem-backed repository.
//!
//! Keeps the password box in a single JSON file (by default
//! `~/.pwbox/passwords.json`). Saves go through a sibling temp file and a
//! rename so readers never see a half-written box.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Repository;
use crate::error::{RepositoryError, Result};

/// Password box stored in one file.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_err(&self, source: std::io::Error) -> RepositoryError {
        RepositoryError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Repository for FileRepository {
    fn load(&self) -> Result<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(data) => {
                debug!(path = %self.path.display(), bytes = data.len(), "loaded box");
                Ok(data)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no box yet");
                Ok(Vec::new())
            }
            Err(source) => Err(RepositoryError::Read {
                path: self.path.clone(),
                source,
            }
            .into()),
        }
    }

    fn save(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
        }

        let tmp = self.temp_path();
        if let Err(e) = replace_with(&tmp, &self.path, data) {
            // The temp file holds the whole blob; never leave it behind.
            let _ = fs::remove_file(&tmp);
            return Err(self.write_err(e).into());
        }
        debug!(path = %self.path.display(), bytes = data.len(), "saved box");
        Ok(())
    }
}

/// Write `data` to `tmp`, restrict it to the owner and move it over `path`.
fn replace_with(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    fs::write(tmp, data)?;

    // Restrict permissions on the box file (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp, fs::Permissions::from_mode(0o600))?;
    }

    fs::rename(tmp, path)
}
