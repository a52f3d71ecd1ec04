//! Merge command implementation
//!
//! Runs the parse, merge and render steps on files that are already on disk.
//! No repository is cloned and nothing is published, which makes this the
//! quickest way to preview what `sync` would write.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use lflist_sync::aggregate::{self, DEFAULT_EXTENSION};
use lflist_sync::config::{self, SyncConfig};
use lflist_sync::merge;
use lflist_sync::output::OutputConfig;
use lflist_sync::section::SectionMap;
use lflist_sync::serialize;

/// Arguments for the merge command
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Authoritative list file, consulted first
    #[arg(short, long, value_name = "FILE")]
    pub authoritative: PathBuf,

    /// Directory of list files, consulted in the order given
    #[arg(short, long = "fallback", value_name = "DIR")]
    pub fallbacks: Vec<PathBuf>,

    /// Suffix of list files inside fallback directories
    #[arg(short, long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Write the merged file here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// YAML file providing the priority table and header
    #[arg(short, long, value_name = "PATH", env = "LFLIST_SYNC_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Execute the merge command
pub fn execute(args: MergeArgs, output: &OutputConfig) -> Result<()> {
    let config = match &args.config {
        Some(path) => config::from_file(path)?,
        None => SyncConfig::default(),
    };

    let mut maps: Vec<SectionMap> = vec![aggregate::read_file_source(&args.authoritative)?];
    for dir in &args.fallbacks {
        maps.push(aggregate::read_directory_source(dir, &args.extension)?);
    }

    let sources: Vec<&SectionMap> = maps.iter().collect();
    let sections = merge::merge(&config.priority, &sources);
    let rendered = serialize::render(&config.header, &config.priority, &sections);

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{}",
                output.success(&format!(
                    "Merged {} of {} lists into {}",
                    sections.len(),
                    config.priority.len(),
                    path.display()
                ))
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
