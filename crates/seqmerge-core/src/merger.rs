//! Sequential merge chain
//!
//! For an ordered branch list `[b0, b1, ..., bn]`, merges `b0` into `b1`,
//! then `b1` into `b2`, and so on. The chain stops at the first failing step.
//!
//! # Failure classification
//!
//! | Failure | Result |
//! |---------|--------|
//! | checkout of `b[i]` fails | `Err`, always |
//! | `b[i - 1]` does not exist | `Err`, always |
//! | merge reports conflicts | `Ok(Some(outcome))` with the conflicted paths |
//! | merge fails otherwise | `Err` under [`FaultPolicy::Propagate`], `Ok(Some(outcome))` with unknown conflicts under [`FaultPolicy::Fold`] |
//!
//! A conflicted merge leaves the repository mid-merge. Resolving or aborting
//! it is up to the caller.

use std::path::Path;

use seqmerge_git::{ConflictEntry, GitBackend};

use crate::checker::{open_backend, validate_branch_names, validate_location};
use crate::outcome::{FaultPolicy, MergeOutcome};
use crate::{Error, Result};

/// Run a merge chain over `branches` in the repository at `repo` with the
/// default [`FaultPolicy`].
///
/// Returns `Ok(None)` when every consecutive pair merged cleanly, leaving the
/// last branch checked out. See [`SequentialMerger`] for details.
pub fn sequential_merge<S: AsRef<str>>(
    repo: impl AsRef<Path>,
    branches: &[S],
) -> Result<Option<MergeOutcome>> {
    SequentialMerger::new().merge_at(repo, branches)
}

/// Runs merge chains with a configurable failure policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialMerger {
    fault_policy: FaultPolicy,
}

impl SequentialMerger {
    /// Create a merger that propagates non-conflict merge failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how non-conflict merge failures are reported.
    pub fn with_fault_policy(mut self, fault_policy: FaultPolicy) -> Self {
        self.fault_policy = fault_policy;
        self
    }

    /// The configured failure policy.
    pub fn fault_policy(&self) -> FaultPolicy {
        self.fault_policy
    }

    /// Open the repository at `repo` and run the chain.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if `repo` or `branches` is empty
    /// - `Error::RepositoryAccess` if `repo` cannot be opened
    /// - `Error::Git` for checkout failures and, under
    ///   [`FaultPolicy::Propagate`], non-conflict merge failures
    pub fn merge_at<S: AsRef<str>>(
        &self,
        repo: impl AsRef<Path>,
        branches: &[S],
    ) -> Result<Option<MergeOutcome>> {
        let repo = repo.as_ref();
        validate_location(repo)?;
        validate_branch_names(branches)?;

        let backend = open_backend(repo)?;
        self.run(&backend, branches)
    }

    /// Run the chain against an already opened backend.
    ///
    /// Steps run strictly in list order; step `i` checks out `branches[i]`
    /// and merges `branches[i - 1]` into it. No step after the first
    /// failure is attempted.
    pub fn run<B, S>(&self, backend: &B, branches: &[S]) -> Result<Option<MergeOutcome>>
    where
        B: GitBackend + ?Sized,
        S: AsRef<str>,
    {
        validate_branch_names(branches)?;

        tracing::info!(
            branches = branches.len(),
            policy = %self.fault_policy,
            "Starting merge chain"
        );

        for (step, pair) in branches.windows(2).enumerate() {
            let base = pair[0].as_ref();
            let head = pair[1].as_ref();

            tracing::debug!(step = step + 1, %base, %head, "Merging");
            backend.checkout(head)?;

            match backend.merge(&[base]) {
                Ok(()) => {}
                Err(seqmerge_git::Error::MergeConflict { conflicts, .. }) => {
                    let files = conflict_paths(conflicts);
                    tracing::warn!(%base, %head, files = ?files, "Merge stopped on conflicts");
                    return Ok(Some(MergeOutcome::conflicted(base, head, files)));
                }
                Err(e @ seqmerge_git::Error::BranchNotFound { .. }) => return Err(Error::Git(e)),
                Err(e) => match self.fault_policy {
                    FaultPolicy::Propagate => return Err(Error::Git(e)),
                    FaultPolicy::Fold => {
                        tracing::warn!(%base, %head, error = %e, "Merge failed, reporting unknown conflicts");
                        return Ok(Some(MergeOutcome::indeterminate(base, head)));
                    }
                },
            }
        }

        tracing::info!("Merge chain completed");
        Ok(None)
    }
}

/// Conflicted paths in report order, without empty or repeated entries.
fn conflict_paths(entries: Vec<ConflictEntry>) -> Vec<String> {
    let mut files: Vec<String> = Vec::with_capacity(entries.len());
    for file in entries.into_iter().filter_map(|entry| entry.file) {
        if !file.is_empty() && !files.contains(&file) {
            files.push(file);
        }
    }
    files
}
