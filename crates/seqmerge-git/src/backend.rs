//! libgit2-backed implementation of [`GitBackend`]

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use git2::Repository;

use crate::provider::GitBackend;
use crate::{Result, helpers};

/// A handle to one repository on disk.
///
/// Handles are cheap to open and are meant to be acquired per operation,
/// not cached.
pub struct Git2Backend {
    root: PathBuf,
    repo: Repository,
}

impl Git2Backend {
    /// Open the repository at `path`.
    ///
    /// `path` may be the working directory or any directory inside it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::open(path)?;
        let root = repo
            .workdir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| path.to_path_buf());

        tracing::debug!(root = %root.display(), "Opened repository");
        Ok(Self { root, repo })
    }

    /// Working directory of the repository.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Access the underlying libgit2 repository.
    pub fn repository(&self) -> &Repository {
        &self.repo
    }
}

impl GitBackend for Git2Backend {
    fn list_branches(&self) -> Result<BTreeSet<String>> {
        helpers::list_branches(&self.repo)
    }

    fn current_branch(&self) -> Result<Option<String>> {
        helpers::get_current_branch(&self.repo)
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        tracing::debug!(%branch, "Checking out");
        helpers::checkout_branch(&self.repo, branch)
    }

    fn merge(&self, sources: &[&str]) -> Result<()> {
        tracing::debug!(sources = ?sources, "Merging");
        helpers::merge(&self.repo, sources)
    }
}
