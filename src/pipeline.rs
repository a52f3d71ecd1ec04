//! # Sync Pipeline
//!
//! Runs one complete sync, each step finishing before the next starts:
//!
//! 1.  **Fetch**: clone every source repository into the work directory.
//! 2.  **Aggregate**: parse each source into a [`SectionMap`].
//! 3.  **Merge**: pick sections in priority-table order.
//! 4.  **Serialize**: render the merged file and stage it on disk.
//! 5.  **Publish**: commit and push the staged file, unless this is a dry run.
//!
//! A failure at any step aborts the run; nothing is pushed unless every step
//! before publishing succeeded.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::aggregate;
use crate::config::{SourceLayout, SourceSpec, SyncConfig};
use crate::error::Result;
use crate::git::redact_url;
use crate::merge;
use crate::publish::{self, PublishOutcome};
use crate::repository::GitOperations;
use crate::section::{Section, SectionMap};
use crate::serialize;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Published,
    NoChanges,
    /// Output was staged but publishing was skipped on request.
    DryRun,
}

impl From<PublishOutcome> for RunOutcome {
    fn from(outcome: PublishOutcome) -> Self {
        match outcome {
            PublishOutcome::Published => RunOutcome::Published,
            PublishOutcome::NoChanges => RunOutcome::NoChanges,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Names of the sections written, in output order.
    pub sections: Vec<String>,
    /// Where the merged file was staged.
    pub staged_output: PathBuf,
    pub outcome: RunOutcome,
}

/// Parse one source from its clone directory.
pub fn load_source(source: &SourceSpec, root: &Path) -> Result<SectionMap> {
    match source.layout() {
        SourceLayout::File(file) => aggregate::read_file_source(&root.join(file)),
        SourceLayout::Directory { dir, extension } => {
            aggregate::read_directory_source(&root.join(dir), &extension)
        }
    }
}

/// Clone all sources, then parse them in priority order.
pub fn collect_sources(config: &SyncConfig, git: &dyn GitOperations) -> Result<Vec<SectionMap>> {
    for source in &config.sources {
        info!("Fetching {} from {}", source.name, redact_url(&source.url));
        git.fetch(&source.url, &config.source_dir(source))?;
    }

    config
        .sources
        .iter()
        .map(|source| load_source(source, &config.source_dir(source)))
        .collect()
}

/// Merge parsed sources and render the output file.
pub fn build_output(config: &SyncConfig, maps: &[SectionMap]) -> (Vec<Section>, String) {
    let sources: Vec<&SectionMap> = maps.iter().collect();
    let sections = merge::merge(&config.priority, &sources);
    let rendered = serialize::render(&config.header, &config.priority, &sections);
    (sections, rendered)
}

/// Execute a full sync.
///
/// With `dry_run` set the merged file is staged but never published, and no
/// credential is needed.
pub fn run(config: &SyncConfig, git: &dyn GitOperations, dry_run: bool) -> Result<SyncReport> {
    let maps = collect_sources(config, git)?;
    let (sections, rendered) = build_output(config, &maps);

    let staged_output = config.staged_output();
    if let Some(parent) = staged_output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&staged_output, &rendered)?;
    info!(
        "Wrote {} sections to {}",
        sections.len(),
        staged_output.display()
    );

    let outcome = if dry_run {
        RunOutcome::DryRun
    } else {
        publish::publish(config, git, rendered.as_bytes())?.into()
    };

    Ok(SyncReport {
        sections: sections.into_iter().map(|s| s.name).collect(),
        staged_output,
        outcome,
    })
}
