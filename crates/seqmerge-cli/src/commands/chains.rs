//! Chains command implementation

use colored::Colorize;

use super::CommandStatus;
use crate::context::Context;
use crate::error::Result;

/// Run the chains command.
///
/// Lists the chains from the resolved configuration.
pub fn run_chains(ctx: &Context, json: bool) -> Result<CommandStatus> {
    let chains = &ctx.manifest.chains;

    if json {
        println!("{}", serde_json::to_string_pretty(chains)?);
        return Ok(CommandStatus::Success);
    }

    if chains.is_empty() {
        println!(
            "{} No chains configured (add a [chains] table to {}).",
            "=>".blue().bold(),
            ".seqmerge.toml".cyan()
        );
        return Ok(CommandStatus::Success);
    }

    println!("{} Chains:", "=>".blue().bold());
    for (name, branches) in chains {
        println!("  {} {}", name.cyan().bold(), branches.join(" -> ").dimmed());
    }

    Ok(CommandStatus::Success)
}
