//! In-memory backend that records calls, for unit tests.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use seqmerge_git::{ConflictEntry, Error, GitBackend, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ListBranches,
    Checkout(String),
    Merge { source: String, into: String },
}

enum ScriptedFailure {
    Conflict(Vec<ConflictEntry>),
    Fault,
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    branches: BTreeSet<String>,
    failures: HashMap<(String, String), ScriptedFailure>,
    listing_fails: bool,
    current: RefCell<Option<String>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeBackend {
    pub(crate) fn with_branches(names: &[&str]) -> Self {
        Self {
            branches: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Merging `source` into `into` reports the given conflict entries.
    pub(crate) fn conflict_on(mut self, source: &str, into: &str, entries: Vec<ConflictEntry>) -> Self {
        self.failures.insert(
            (source.to_string(), into.to_string()),
            ScriptedFailure::Conflict(entries),
        );
        self
    }

    /// Merging `source` into `into` fails with a non-conflict error.
    pub(crate) fn fault_on(mut self, source: &str, into: &str) -> Self {
        self.failures
            .insert((source.to_string(), into.to_string()), ScriptedFailure::Fault);
        self
    }

    pub(crate) fn failing_listing(mut self) -> Self {
        self.listing_fails = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn checkouts(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Checkout(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl GitBackend for FakeBackend {
    fn list_branches(&self) -> Result<BTreeSet<String>> {
        self.calls.borrow_mut().push(Call::ListBranches);
        if self.listing_fails {
            return Err(Error::Git(git2::Error::from_str("listing failed")));
        }
        Ok(self.branches.clone())
    }

    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.current.borrow().clone())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::Checkout(branch.to_string()));
        if !self.branches.contains(branch) {
            return Err(Error::BranchNotFound {
                name: branch.to_string(),
            });
        }
        *self.current.borrow_mut() = Some(branch.to_string());
        Ok(())
    }

    fn merge(&self, sources: &[&str]) -> Result<()> {
        let into = self.current.borrow().clone().ok_or(Error::DetachedHead)?;
        for source in sources {
            self.calls.borrow_mut().push(Call::Merge {
                source: source.to_string(),
                into: into.clone(),
            });
            if !self.branches.contains(*source) {
                return Err(Error::BranchNotFound {
                    name: source.to_string(),
                });
            }
            match self.failures.get(&(source.to_string(), into.clone())) {
                Some(ScriptedFailure::Conflict(entries)) => {
                    return Err(Error::MergeConflict {
                        sources: vec![source.to_string()],
                        conflicts: entries.clone(),
                    });
                }
                Some(ScriptedFailure::Fault) => {
                    return Err(Error::Git(git2::Error::from_str("index is locked")));
                }
                None => {}
            }
        }
        Ok(())
    }
}
