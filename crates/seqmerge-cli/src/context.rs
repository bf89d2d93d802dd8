//! Repository context detection
//!
//! Finds the repository root from any directory inside it, so commands work
//! from subdirectories the way git does, and loads its configuration.

use std::path::{Path, PathBuf};

use seqmerge_core::config::{ConfigResolver, Manifest};

use crate::error::{CliError, Result};

/// Resolved repository root and configuration for one command run
#[derive(Debug)]
pub struct Context {
    /// Repository working directory
    pub root: PathBuf,

    /// Merged configuration
    pub manifest: Manifest,
}

impl Context {
    /// Build the context from the `--repo` / `--config` options.
    ///
    /// Without `--repo` the enclosing repository of the current directory is
    /// used, falling back to the current directory itself.
    pub fn load(repo: Option<&Path>, config: Option<&Path>) -> Result<Self> {
        let start = match repo {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let start = dunce::canonicalize(&start).map_err(|e| {
            CliError::user(format!("Cannot resolve path {}: {}", start.display(), e))
        })?;

        let root = if repo.is_some() {
            start
        } else {
            find_repo_root(&start).unwrap_or(start)
        };
        tracing::debug!(root = %root.display(), "Using repository root");

        let mut resolver = ConfigResolver::new(&root);
        if let Some(config) = config {
            resolver = resolver.with_config_file(config);
        }
        let manifest = resolver.resolve()?;

        Ok(Self { root, manifest })
    }

    /// Resolve the branch list from positional names or a configured chain.
    pub fn branches(&self, branches: &[String], chain: Option<&str>) -> Result<Vec<String>> {
        if let Some(name) = chain {
            return Ok(self.manifest.chain(name)?.to_vec());
        }
        if branches.is_empty() {
            return Err(CliError::user(
                "No branches given. Pass branch names or --chain <NAME>.",
            ));
        }
        Ok(branches.to_vec())
    }
}

/// Walk up from `start` looking for a directory containing `.git`.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
