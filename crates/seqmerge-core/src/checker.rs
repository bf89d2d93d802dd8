//! Branch existence check
//!
//! Reports which requested branches a repository does not have, so callers
//! can validate a merge chain before running it.

use std::collections::BTreeSet;
use std::path::Path;

use seqmerge_git::{Git2Backend, GitBackend};

use crate::{Error, Result};

/// Return the names in `branch_names` that the repository at `repo` lacks.
///
/// The result keeps the caller's order and is empty when every branch exists.
/// The repository is opened for this call only and is never modified.
///
/// # Errors
/// - `Error::InvalidInput` if `repo` or `branch_names` is empty
/// - `Error::RepositoryAccess` if `repo` is not a repository or branches
///   cannot be listed
pub fn check_missing_branches<S: AsRef<str>>(
    repo: impl AsRef<Path>,
    branch_names: &[S],
) -> Result<Vec<String>> {
    let repo = repo.as_ref();
    validate_location(repo)?;
    validate_branch_names(branch_names)?;

    let backend = open_backend(repo)?;
    let existing = backend
        .list_branches()
        .map_err(|source| Error::RepositoryAccess {
            path: repo.to_path_buf(),
            source,
        })?;

    Ok(filter_missing(&existing, branch_names))
}

/// Return the names in `branch_names` that `backend` does not list.
///
/// Same contract as [`check_missing_branches`] for callers that already hold
/// a backend; listing failures surface as `Error::BranchListing`.
pub fn missing_branches<B, S>(backend: &B, branch_names: &[S]) -> Result<Vec<String>>
where
    B: GitBackend + ?Sized,
    S: AsRef<str>,
{
    validate_branch_names(branch_names)?;

    let existing = backend.list_branches().map_err(Error::BranchListing)?;
    Ok(filter_missing(&existing, branch_names))
}

fn filter_missing<S: AsRef<str>>(
    existing: &BTreeSet<String>,
    branch_names: &[S],
) -> Vec<String> {
    let missing: Vec<String> = branch_names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name: &&str| !existing.contains(*name))
        .map(str::to_string)
        .collect();

    if !missing.is_empty() {
        tracing::debug!(missing = ?missing, "Requested branches not found");
    }
    missing
}

/// Open a backend for `repo`, mapping failures to `Error::RepositoryAccess`.
pub(crate) fn open_backend(repo: &Path) -> Result<Git2Backend> {
    Git2Backend::open(repo).map_err(|source| Error::RepositoryAccess {
        path: repo.to_path_buf(),
        source,
    })
}

pub(crate) fn validate_location(repo: &Path) -> Result<()> {
    if repo.as_os_str().is_empty() {
        return Err(Error::invalid_input("repository location is empty"));
    }
    Ok(())
}

pub(crate) fn validate_branch_names<S: AsRef<str>>(branch_names: &[S]) -> Result<()> {
    if branch_names.is_empty() {
        return Err(Error::invalid_input("branch list is empty"));
    }
    Ok(())
}
