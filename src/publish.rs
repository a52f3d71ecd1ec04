//! Publishing the merged file to the destination repository.

use std::fs;
use std::path::Path;

use log::info;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::git::redact_url;
use crate::repository::GitOperations;

/// What the publish step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// A commit was pushed to the destination branch.
    Published,
    /// The destination already held identical content; nothing was committed.
    NoChanges,
}

/// Publish `content` as the destination file.
///
/// Clones the destination fresh, skips the commit when the file there is
/// byte-identical, otherwise commits, rebases onto the remote branch and
/// pushes. Any failure aborts before the push.
pub fn publish(
    config: &SyncConfig,
    git: &dyn GitOperations,
    content: &[u8],
) -> Result<PublishOutcome> {
    let dest = &config.destination;
    let remote_url = config.destination_remote()?;
    let repo = config.destination_dir();

    info!("Cloning destination {}", redact_url(&remote_url));
    git.clone_destination(&remote_url, &repo)?;

    let target = repo.join(&dest.file);
    if is_unchanged(&target, content)? {
        info!("{} is already up to date", dest.file);
        return Ok(PublishOutcome::NoChanges);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, content)?;

    git.configure_identity(&repo, &remote_url, &dest.committer_name, &dest.committer_email)?;
    if !git.has_changes(&repo, &remote_url)? {
        info!("git reports no changes in {}", dest.file);
        return Ok(PublishOutcome::NoChanges);
    }

    git.commit_file(&repo, &remote_url, &dest.file, &dest.commit_message)?;
    git.pull_rebase(&repo, &remote_url, &dest.remote, &dest.branch)?;
    git.push(&repo, &remote_url, &dest.remote, &dest.branch)?;

    info!(
        "Pushed {} to {} ({})",
        dest.file,
        redact_url(&remote_url),
        dest.branch
    );
    Ok(PublishOutcome::Published)
}

fn is_unchanged(path: &Path, content: &[u8]) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    Ok(fs::read(path)? == content)
}
