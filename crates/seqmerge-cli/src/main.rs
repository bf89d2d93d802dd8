//! seqmerge CLI
//!
//! Merges each branch of an ordered chain into the next one.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::{CommandStatus, MergeRequest};
use context::Context;
use error::Result;

/// Exit status when a command stops on missing branches or a failed merge
const EXIT_STOPPED: i32 = 2;

fn main() {
    match run() {
        Ok(CommandStatus::Success) => {}
        Ok(CommandStatus::Stopped) => std::process::exit(EXIT_STOPPED),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<CommandStatus> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let Some(command) = cli.command else {
        // No command provided - show help hint
        println!("{} Sequential branch merges", "seqmerge".green().bold());
        println!();
        println!("Run {} for available commands.", "seqmerge --help".cyan());
        return Ok(CommandStatus::Success);
    };

    let ctx = Context::load(cli.repo.as_deref(), cli.config.as_deref())?;
    execute_command(&ctx, command)
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<CommandStatus> {
    match cmd {
        Commands::Check { branches, json } => {
            let branches = ctx.branches(&branches.branches, branches.chain.as_deref())?;
            commands::run_check(ctx, &branches, json)
        }
        Commands::Merge {
            branches,
            on_fault,
            no_check,
            json,
        } => {
            let request = MergeRequest {
                branches: ctx.branches(&branches.branches, branches.chain.as_deref())?,
                fault_policy: on_fault
                    .map(Into::into)
                    .unwrap_or_else(|| ctx.manifest.merge.on_fault()),
                check_branches: !no_check && ctx.manifest.merge.check_branches(),
                json,
            };
            commands::run_merge(ctx, &request)
        }
        Commands::Chains { json } => commands::run_chains(ctx, json),
    }
}
