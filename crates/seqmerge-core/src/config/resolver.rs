//! Configuration resolution with layered merge

use std::fs;
use std::path::{Path, PathBuf};

use super::manifest::Manifest;
use crate::{Error, Result};

/// Repository config file name
pub const CONFIG_FILE: &str = ".seqmerge.toml";

/// Local override file name, meant to be git-ignored
pub const LOCAL_CONFIG_FILE: &str = ".seqmerge.local.toml";

/// Resolves configuration for a repository
///
/// Loads `.seqmerge.toml` and then `.seqmerge.local.toml` from the
/// repository root, merging the second over the first. Missing layers are
/// skipped. With an explicit config file only that file is read, and it must
/// exist.
pub struct ConfigResolver {
    /// Repository root directory
    root: PathBuf,

    /// Explicit config file replacing the layered lookup
    config_file: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver for the repository at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config_file: None,
        }
    }

    /// Read only `path` instead of the files in the repository root.
    ///
    /// Relative paths are resolved against the repository root.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Resolve the configuration.
    ///
    /// Invalid TOML in any layer produces `Error::ConfigParse` naming that file.
    pub fn resolve(&self) -> Result<Manifest> {
        if let Some(ref config_file) = self.config_file {
            let path = if config_file.is_absolute() {
                config_file.clone()
            } else {
                self.root.join(config_file)
            };
            if !path.is_file() {
                return Err(Error::ConfigNotFound { path });
            }
            tracing::debug!(?path, "Loading explicit config");
            return load(&path);
        }

        let mut manifest = Manifest::empty();

        for (layer, name) in [(1, CONFIG_FILE), (2, LOCAL_CONFIG_FILE)] {
            let path = self.root.join(name);
            if path.is_file() {
                tracing::debug!(?path, layer, "Loading config");
                manifest.merge(&load(&path)?);
            } else {
                tracing::debug!(?path, layer, "No config found, skipping");
            }
        }

        Ok(manifest)
    }
}

fn load(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    Manifest::parse(&content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
