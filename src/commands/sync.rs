//! Sync command implementation
//!
//! Runs the whole pipeline: fetch the source repositories, merge their lists,
//! stage the output file and publish it to the destination repository.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use lflist_sync::config::SyncConfig;
use lflist_sync::output::OutputConfig;
use lflist_sync::pipeline::{self, RunOutcome};
use lflist_sync::repository::DefaultGitOperations;

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// YAML file overriding the built-in sources, priority table or destination
    #[arg(short, long, value_name = "PATH", env = "LFLIST_SYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for clones and the staged output file
    #[arg(long, value_name = "DIR", env = "LFLIST_SYNC_WORKDIR")]
    pub workdir: Option<PathBuf>,

    /// Merge and stage the output, but do not publish it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the sync command
pub fn execute(args: SyncArgs, output: &OutputConfig) -> Result<()> {
    let config = SyncConfig::load(args.config.as_deref(), args.workdir)?;

    if !args.quiet && args.dry_run {
        println!("{}", output.skipped("DRY RUN MODE - nothing will be published"));
    }

    let report = match pipeline::run(&config, &DefaultGitOperations, args.dry_run) {
        Ok(report) => report,
        Err(e) => {
            if !args.quiet {
                println!("{}", output.failure("Sync failed"));
            }
            return Err(e.into());
        }
    };

    if !args.quiet {
        println!(
            "{}",
            output.success(&format!(
                "Merged {} of {} lists into {}",
                report.sections.len(),
                config.priority.len(),
                report.staged_output.display()
            ))
        );
        match report.outcome {
            RunOutcome::Published => println!("{}", output.success("Published")),
            RunOutcome::NoChanges => println!("{}", output.skipped("No changes to publish")),
            RunOutcome::DryRun => println!("{}", output.skipped("Dry run, publish skipped")),
        }
    }

    Ok(())
}
