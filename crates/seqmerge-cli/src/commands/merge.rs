//! Merge command implementation

use colored::Colorize;
use seqmerge_core::{FaultPolicy, MergeOutcome, SequentialMerger, check_missing_branches};

use super::CommandStatus;
use crate::context::Context;
use crate::error::{CliError, Result};

/// Resolved options for one merge run
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// Branches in merge order
    pub branches: Vec<String>,

    /// How non-conflict merge failures are reported
    pub fault_policy: FaultPolicy,

    /// Verify all branches exist before touching the repository
    pub check_branches: bool,

    /// Print the outcome as JSON
    pub json: bool,
}

/// Run the merge command.
///
/// Optionally verifies that every branch exists, then merges each branch
/// into its successor and reports where the chain stopped.
pub fn run_merge(ctx: &Context, request: &MergeRequest) -> Result<CommandStatus> {
    let branches = &request.branches;

    if request.check_branches {
        let missing = check_missing_branches(&ctx.root, branches)?;
        if !missing.is_empty() {
            return Err(CliError::user(format!(
                "Missing branches: {}",
                missing.join(", ")
            )));
        }
    }

    if !request.json {
        println!(
            "{} Merging chain {}...",
            "=>".blue().bold(),
            branches.join(" -> ").cyan()
        );
    }

    let outcome = SequentialMerger::new()
        .with_fault_policy(request.fault_policy)
        .merge_at(&ctx.root, branches)?;

    if request.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &outcome {
            None => println!(
                "{} Merged {} branch pair(s).",
                "OK".green().bold(),
                branches.len().saturating_sub(1)
            ),
            Some(outcome) => print_outcome(outcome),
        }
    }

    match outcome {
        None => Ok(CommandStatus::Success),
        Some(_) => Ok(CommandStatus::Stopped),
    }
}

fn print_outcome(outcome: &MergeOutcome) {
    println!(
        "{} Merging {} into {} failed.",
        "!!".red().bold(),
        outcome.base.yellow(),
        outcome.head.yellow()
    );

    match &outcome.conflicts {
        Some(files) => {
            println!("Conflicted files:");
            for file in files {
                println!("  {} {}", "C".red(), file);
            }
            println!();
            println!(
                "Resolve the conflicts on {} and rerun the chain.",
                outcome.head.cyan()
            );
        }
        None => {
            println!("Conflicted files: {}", "unknown".dimmed());
            println!(
                "The repository may be left mid-merge; run {} to inspect it.",
                "git status".cyan()
            );
        }
    }
}
