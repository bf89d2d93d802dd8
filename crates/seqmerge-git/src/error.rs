//! Error types for seqmerge-git

use crate::provider::ConflictEntry;

/// Result type for seqmerge-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in seqmerge-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Branch '{name}' not found")]
    BranchNotFound { name: String },

    #[error("Invalid branch name: {name}")]
    InvalidBranchName { name: String },

    #[error("HEAD is detached; check out a branch before merging")]
    DetachedHead,

    #[error("HEAD is unborn; commit to the current branch before merging")]
    UnbornHead,

    #[error("No branches given to merge")]
    NothingToMerge,

    #[error(
        "Merge of '{}' resulted in {} conflicted path(s)",
        .sources.join("', '"),
        .conflicts.len()
    )]
    MergeConflict {
        sources: Vec<String>,
        conflicts: Vec<ConflictEntry>,
    },
}

impl Error {
    /// Whether this error is a structured merge conflict report.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::MergeConflict { .. })
    }
}
