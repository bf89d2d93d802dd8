//! Git backend for seqmerge
//!
//! Exposes the narrow set of repository operations the merge chain needs
//! (branch listing, checkout, merge) behind the [`GitBackend`] trait, with a
//! libgit2 implementation in [`Git2Backend`].

pub mod backend;
pub mod error;
pub mod helpers;
pub mod provider;

pub use backend::Git2Backend;
pub use error::{Error, Result};
pub use provider::{ConflictEntry, GitBackend};
