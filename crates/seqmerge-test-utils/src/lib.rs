//! Shared test utilities for the seqmerge workspace.
//!
//! This crate provides git repository fixtures shared by the crate test
//! suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`git`]: [`GitFixture`](git::GitFixture), a temporary repository driven through the `git` CLI

pub mod git;

pub use git::GitFixture;
