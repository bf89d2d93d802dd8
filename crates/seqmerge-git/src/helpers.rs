//! Shared git2 helper functions for branch and merge operations
//!
//! These functions encapsulate the git2 patterns used by [`Git2Backend`](crate::Git2Backend).

use std::collections::BTreeSet;

use git2::build::CheckoutBuilder;
use git2::{AnnotatedCommit, BranchType, Commit, Index, MergeOptions, Repository, Signature};

use crate::provider::ConflictEntry;
use crate::{Error, Result};

const FALLBACK_NAME: &str = "seqmerge";
const FALLBACK_EMAIL: &str = "seqmerge@localhost";

/// List local and remote-tracking branches.
///
/// Remote-tracking branches are prefixed with `remotes/`, matching the
/// output of `git branch -a`. Symbolic refs such as `origin/HEAD` are skipped.
pub fn list_branches(repo: &Repository) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();

    for entry in repo.branches(None)? {
        let (branch, kind) = entry?;
        if branch.get().symbolic_target().is_some() {
            continue;
        }

        let Some(name) = branch.name()? else {
            tracing::debug!("Skipping branch with non UTF-8 name");
            continue;
        };

        match kind {
            BranchType::Local => names.insert(name.to_string()),
            BranchType::Remote => names.insert(format!("remotes/{name}")),
        };
    }

    Ok(names)
}

/// Get the current branch name from a repository.
///
/// Returns the branch name if HEAD points to a branch, or `None` if HEAD is detached.
/// An unborn HEAD reports the branch it will be born on.
pub fn get_current_branch(repo: &Repository) -> Result<Option<String>> {
    if repo.head_detached()? {
        return Ok(None);
    }

    match repo.head() {
        Ok(head) => Ok(head.shorthand().map(str::to_string)),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
            let head = repo.find_reference("HEAD")?;
            Ok(head
                .symbolic_target()
                .map(|target| target.trim_start_matches("refs/heads/").to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Check out a local branch and point HEAD at it.
///
/// Uses a safe checkout, so local modifications that would be overwritten
/// abort the operation.
pub fn checkout_branch(repo: &Repository, name: &str) -> Result<()> {
    let branch = repo
        .find_branch(name, BranchType::Local)
        .map_err(|_| Error::BranchNotFound {
            name: name.to_string(),
        })?;

    let reference = branch.into_reference();
    let refname = reference
        .name()
        .ok_or_else(|| Error::InvalidBranchName {
            name: name.to_string(),
        })?
        .to_string();
    let commit = reference.peel_to_commit()?;

    let mut checkout = CheckoutBuilder::new();
    checkout.safe();
    repo.checkout_tree(commit.as_object(), Some(&mut checkout))?;
    repo.set_head(&refname)?;

    Ok(())
}

/// Collect the conflicted paths recorded in `index`.
///
/// The path is taken from our side, then their side, then the ancestor.
/// Entries with none of the three yield an unresolved [`ConflictEntry`].
pub fn conflicted_entries(index: &Index) -> Result<Vec<ConflictEntry>> {
    let mut entries = Vec::new();

    for conflict in index.conflicts()? {
        let conflict = conflict?;
        let file = conflict
            .our
            .as_ref()
            .or(conflict.their.as_ref())
            .or(conflict.ancestor.as_ref())
            .map(|entry| String::from_utf8_lossy(&entry.path).into_owned());

        entries.push(ConflictEntry { file });
    }

    Ok(entries)
}

/// Signature for merge commits, falling back to a fixed identity when the
/// repository has no `user.name`/`user.email` configured.
pub fn merge_signature(repo: &Repository) -> Result<Signature<'static>> {
    match repo.signature() {
        Ok(sig) => Ok(sig.to_owned()),
        Err(_) => Ok(Signature::now(FALLBACK_NAME, FALLBACK_EMAIL)?),
    }
}

/// Merge one or more local branches into the current branch.
///
/// A single source is fast-forwarded when possible. Otherwise a normal merge
/// is performed and committed. On conflicts the merge state, index and
/// working tree are left as libgit2 wrote them and `Error::MergeConflict`
/// is returned.
pub fn merge(repo: &Repository, sources: &[&str]) -> Result<()> {
    if sources.is_empty() {
        return Err(Error::NothingToMerge);
    }

    let mut source_commits: Vec<Commit<'_>> = Vec::with_capacity(sources.len());
    let mut annotated: Vec<AnnotatedCommit<'_>> = Vec::with_capacity(sources.len());
    for source in sources {
        let branch = repo
            .find_branch(source, BranchType::Local)
            .map_err(|_| Error::BranchNotFound {
                name: source.to_string(),
            })?;
        let commit = branch.get().peel_to_commit()?;
        annotated.push(repo.find_annotated_commit(commit.id())?);
        source_commits.push(commit);
    }
    let annotated_refs: Vec<&AnnotatedCommit<'_>> = annotated.iter().collect();

    let (merge_analysis, _) = repo.merge_analysis(&annotated_refs)?;

    if merge_analysis.is_up_to_date() {
        tracing::debug!(sources = ?sources, "Already up to date");
        return Ok(());
    }

    if merge_analysis.is_unborn() {
        return Err(Error::UnbornHead);
    }

    if merge_analysis.is_fast_forward() && source_commits.len() == 1 {
        let current_branch = get_current_branch(repo)?.ok_or(Error::DetachedHead)?;
        let target = source_commits[0].id();

        let refname = format!("refs/heads/{}", current_branch);
        let mut reference = repo.find_reference(&refname)?;

        // Tree first, against the old HEAD, so a dirty tree aborts before the ref moves
        let mut checkout = CheckoutBuilder::new();
        checkout.safe();
        repo.checkout_tree(source_commits[0].as_object(), Some(&mut checkout))?;
        reference.set_target(target, &format!("merge {}: fast-forward", sources[0]))?;
        tracing::debug!(branch = %current_branch, %target, "Fast-forwarded");
        return Ok(());
    }

    let mut merge_opts = MergeOptions::new();
    repo.merge(&annotated_refs, Some(&mut merge_opts), None)?;

    let mut index = repo.index()?;
    if index.has_conflicts() {
        let conflicts = conflicted_entries(&index)?;
        return Err(Error::MergeConflict {
            sources: sources.iter().map(|s| s.to_string()).collect(),
            conflicts,
        });
    }

    let signature = merge_signature(repo)?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    let head_commit = repo.head()?.peel_to_commit()?;

    let mut parents: Vec<&Commit<'_>> = Vec::with_capacity(source_commits.len() + 1);
    parents.push(&head_commit);
    parents.extend(source_commits.iter());

    let message = match sources {
        [single] => format!("Merge branch '{}'", single),
        many => format!("Merge branches '{}'", many.join("', '")),
    };
    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        &message,
        &tree,
        &parents,
    )?;

    repo.cleanup_state()?;

    Ok(())
}
