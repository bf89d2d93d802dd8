//! Check command implementation

use colored::Colorize;
use seqmerge_core::check_missing_branches;

use super::CommandStatus;
use crate::context::Context;
use crate::error::Result;

/// Run the check command.
///
/// Prints the branches the repository lacks, in the order given.
pub fn run_check(ctx: &Context, branches: &[String], json: bool) -> Result<CommandStatus> {
    let missing = check_missing_branches(&ctx.root, branches)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&missing)?);
    } else if missing.is_empty() {
        println!(
            "{} All {} branches exist.",
            "OK".green().bold(),
            branches.len()
        );
    } else {
        println!("{} Missing branches:", "=>".blue().bold());
        for name in &missing {
            println!("  {} {}", "-".red(), name.yellow());
        }
    }

    if missing.is_empty() {
        Ok(CommandStatus::Success)
    } else {
        Ok(CommandStatus::Stopped)
    }
}
