//! Merge chain configuration
//!
//! Settings and named chains are read from TOML manifests and merged in
//! order (later sources override earlier):
//!
//! 1. **Repository config** - `.seqmerge.toml` at the repository root
//! 2. **Local overrides** - `.seqmerge.local.toml` (git-ignored)
//!
//! An explicit file passed to [`ConfigResolver::with_config_file`] replaces
//! both layers.
//!
//! # Example
//!
//! ```toml
//! [merge]
//! on_fault = "propagate"
//! check_branches = true
//!
//! [chains]
//! release = ["main", "release/1.x", "release/2.x"]
//! ```

mod manifest;
mod resolver;

pub use manifest::{Manifest, MergeSection};
pub use resolver::{CONFIG_FILE, ConfigResolver, LOCAL_CONFIG_FILE};
