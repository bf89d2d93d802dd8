//! Merge chain results and failure policy

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The step at which a merge chain stopped.
///
/// `base` was being merged into `head`; the two are always adjacent in the
/// branch list. `conflicts` holds the conflicted paths in the order the
/// backend reported them, or `None` when the failure could not be attributed
/// to specific files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Branch merged from
    pub base: String,

    /// Branch merged into
    pub head: String,

    /// Conflicted file paths, `None` if unknown
    pub conflicts: Option<Vec<String>>,
}

impl MergeOutcome {
    /// Outcome for a merge that stopped on conflicts in `files`.
    ///
    /// An empty file list is recorded as unknown.
    pub fn conflicted(
        base: impl Into<String>,
        head: impl Into<String>,
        files: Vec<String>,
    ) -> Self {
        Self {
            base: base.into(),
            head: head.into(),
            conflicts: if files.is_empty() { None } else { Some(files) },
        }
    }

    /// Outcome for a merge that failed for a reason other than conflicts.
    pub fn indeterminate(base: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            head: head.into(),
            conflicts: None,
        }
    }

    /// Whether specific conflicted files are known.
    pub fn has_known_conflicts(&self) -> bool {
        self.conflicts.is_some()
    }
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.conflicts {
            Some(files) => write!(
                f,
                "merging '{}' into '{}' conflicted in {}",
                self.base,
                self.head,
                files.join(", ")
            ),
            None => write!(
                f,
                "merging '{}' into '{}' failed for an unknown reason",
                self.base, self.head
            ),
        }
    }
}

/// How a merge failure that is not a conflict is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
    /// Return the backend error to the caller, like checkout failures
    #[default]
    Propagate,

    /// Return a [`MergeOutcome`] with unknown conflicts
    Fold,
}

impl FromStr for FaultPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "propagate" => Ok(Self::Propagate),
            "fold" => Ok(Self::Fold),
            other => Err(Error::invalid_input(format!(
                "unknown fault policy '{}', expected 'propagate' or 'fold'",
                other
            ))),
        }
    }
}

impl fmt::Display for FaultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Propagate => f.write_str("propagate"),
            Self::Fold => f.write_str("fold"),
        }
    }
}
