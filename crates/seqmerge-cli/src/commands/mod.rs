//! Command implementations for seqmerge-cli

pub mod chains;
pub mod check;
pub mod merge;

pub use chains::run_chains;
pub use check::run_check;
pub use merge::{MergeRequest, run_merge};

/// How a command that did not error finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Everything requested was done
    Success,
    /// Stopped on a reportable condition (missing branches, merge conflict)
    Stopped,
}
