//! Backend capability trait for merge chain operations

use std::collections::BTreeSet;

use crate::Result;

/// One entry of a conflict report.
///
/// `file` is `None` when the backend could not resolve a path for the
/// conflicted index entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictEntry {
    pub file: Option<String>,
}

impl ConflictEntry {
    /// Create an entry for a conflicted path.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
        }
    }

    /// Create an entry without a resolvable path.
    pub fn unresolved() -> Self {
        Self { file: None }
    }
}

/// Repository operations needed to drive a sequential merge.
///
/// Implementations are bound to a single repository. The orchestration in
/// `seqmerge-core` only talks to this trait, so tests can substitute an
/// in-memory fake.
pub trait GitBackend {
    /// List every branch known to the repository.
    ///
    /// Local branches are listed by their short name. Remote-tracking
    /// branches are listed as `remotes/<remote>/<branch>`.
    fn list_branches(&self) -> Result<BTreeSet<String>>;

    /// Get the current branch name, or `None` if HEAD is detached.
    fn current_branch(&self) -> Result<Option<String>>;

    /// Make `branch` the checked-out branch.
    ///
    /// Fails with `Error::BranchNotFound` if no local branch has that name.
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Merge `sources` into the checked-out branch.
    ///
    /// # Note
    /// Fast-forwards when possible, otherwise creates a merge commit.
    /// Conflicts are reported as `Error::MergeConflict` and leave the
    /// working tree in its conflicted state for manual resolution.
    fn merge(&self, sources: &[&str]) -> Result<()>;
}
