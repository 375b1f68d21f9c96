//! Token persistence.
//!
//! The token lives alone in `~/.stdslackconf` as raw bytes. It is written by
//! `--token` and read back on every send.

use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// File name of the token store inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".stdslackconf";

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `explicit` when given, otherwise `<home>/.stdslackconf`.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Ok(Self::new(path)),
            None => Self::default_path().map(Self::new),
        }
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .ok_or(Error::NoHomeDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the token, replacing any previous one. Owner read/write only.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::config(parent, e))?;
            }
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(&self.path)
            .map_err(|e| Error::config(&self.path, e))?;
        file.write_all(token.as_bytes())
            .map_err(|e| Error::config(&self.path, e))?;

        // An existing file keeps its old mode on open.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|e| Error::config(&self.path, e))?;
        }

        tracing::info!(path = %self.path.display(), "token saved");
        Ok(())
    }

    /// Reads the stored token.
    pub fn load(&self) -> Result<String> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::TokenNotSet {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(Error::config(&self.path, e)),
        };

        let token = String::from_utf8_lossy(&bytes).trim().to_string();
        if token.is_empty() {
            return Err(Error::TokenNotSet {
                path: self.path.clone(),
            });
        }

        tracing::debug!(path = %self.path.display(), "token loaded");
        Ok(token)
    }
}
