//! Sequential branch merge orchestration
//!
//! This crate drives a merge chain over an ordered list of branches: for each
//! consecutive pair it checks out the later branch and merges the earlier one
//! into it, stopping at the first failure.
//!
//! - **Branch existence check**: [`check_missing_branches`] reports which
//!   requested branches the repository does not have
//! - **Sequential merge**: [`sequential_merge`] / [`SequentialMerger`] run the
//!   chain and classify the first failure into a [`MergeOutcome`]
//! - **Configuration**: [`config::ConfigResolver`] loads named chains and
//!   merge settings from `.seqmerge.toml`
//!
//! Repository access goes through [`seqmerge_git::GitBackend`], so the
//! orchestration can run against any backend implementation.
//!
//! # Example
//!
//! ```no_run
//! use seqmerge_core::{check_missing_branches, sequential_merge};
//!
//! fn example() -> seqmerge_core::Result<()> {
//!     let branches = ["release/1.x", "release/2.x", "main"];
//!
//!     let missing = check_missing_branches("/path/to/repo", &branches)?;
//!     assert!(missing.is_empty());
//!
//!     if let Some(outcome) = sequential_merge("/path/to/repo", &branches)? {
//!         println!("{} -> {} stopped: {:?}", outcome.base, outcome.head, outcome.conflicts);
//!     }
//!     Ok(())
//! }
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod merger;
pub mod outcome;

#[cfg(test)]
mod fake;

pub use checker::{check_missing_branches, missing_branches};
pub use error::{Error, Result};
pub use merger::{SequentialMerger, sequential_merge};
pub use outcome::{FaultPolicy, MergeOutcome};
