//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use seqmerge_core::FaultPolicy;

/// seqmerge - Merge each branch of a chain into the next, stopping at the first conflict
#[derive(Parser, Debug)]
#[command(name = "seqmerge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository to operate on (defaults to the enclosing repository)
    #[arg(short = 'C', long = "repo", global = true, value_name = "PATH", env = "SEQMERGE_REPO")]
    pub repo: Option<PathBuf>,

    /// Read configuration from this file instead of .seqmerge.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Branch list given either inline or by chain name
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct BranchArgs {
    /// Branch names, in merge order
    pub branches: Vec<String>,

    /// Use a chain defined in the configuration
    #[arg(long, conflicts_with = "branches")]
    pub chain: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Report which branches do not exist in the repository
    ///
    /// Exits with status 2 when any branch is missing.
    Check {
        #[command(flatten)]
        branches: BranchArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Merge each branch into the next one
    ///
    /// For branches b1 b2 b3: checks out b2 and merges b1, then checks out
    /// b3 and merges b2. Stops at the first failed merge and exits with
    /// status 2, leaving the conflicted merge in place for resolution.
    ///
    /// Examples:
    ///   seqmerge merge main release/1.x release/2.x
    ///   seqmerge merge --chain release
    ///   seqmerge merge --chain release --json
    Merge {
        #[command(flatten)]
        branches: BranchArgs,

        /// How merge failures that are not conflicts are reported
        #[arg(long, value_enum)]
        on_fault: Option<FaultPolicyArg>,

        /// Skip the branch existence check before merging
        #[arg(long)]
        no_check: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List chains defined in the configuration
    Chains {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Command-line spelling of [`FaultPolicy`]
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultPolicyArg {
    /// Fail the command with the underlying error
    Propagate,
    /// Report the failed step with unknown conflicts
    Fold,
}

impl From<FaultPolicyArg> for FaultPolicy {
    fn from(arg: FaultPolicyArg) -> Self {
        match arg {
            FaultPolicyArg::Propagate => FaultPolicy::Propagate,
            FaultPolicyArg::Fold => FaultPolicy::Fold,
        }
    }
}
