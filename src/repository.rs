//! # Repository Capabilities
//!
//! The pipeline never shells out directly. It talks to repositories through
//! the [`GitOperations`] trait: fetching a source tree, and the handful of
//! steps needed to publish one file.
//!
//! [`DefaultGitOperations`] forwards to the `git` wrappers in [`crate::git`].
//! Tests substitute an implementation that materialises fixture files into the
//! clone directory and records publish calls, so the whole run can be checked
//! without network access.

use std::path::Path;

use crate::error::Result;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Fetch a source repository into `target_dir`, replacing anything there.
    fn fetch(&self, url: &str, target_dir: &Path) -> Result<()>;

    /// Clone the destination repository with enough history to rebase.
    fn clone_destination(&self, url: &str, target_dir: &Path) -> Result<()>;

    /// Set the committer name and email for `repo`.
    fn configure_identity(&self, repo: &Path, url: &str, name: &str, email: &str) -> Result<()>;

    /// Whether `repo` has uncommitted changes.
    fn has_changes(&self, repo: &Path, url: &str) -> Result<bool>;

    /// Stage and commit a single file.
    fn commit_file(&self, repo: &Path, url: &str, file: &str, message: &str) -> Result<()>;

    /// Rebase local commits onto the remote branch.
    fn pull_rebase(&self, repo: &Path, url: &str, remote: &str, branch: &str) -> Result<()>;

    fn push(&self, repo: &Path, url: &str, remote: &str, branch: &str) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn fetch(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone_shallow(url, target_dir)
    }

    fn clone_destination(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone_full(url, target_dir)
    }

    fn configure_identity(&self, repo: &Path, url: &str, name: &str, email: &str) -> Result<()> {
        crate::git::configure_identity(repo, url, name, email)
    }

    fn has_changes(&self, repo: &Path, url: &str) -> Result<bool> {
        crate::git::has_changes(repo, url)
    }

    fn commit_file(&self, repo: &Path, url: &str, file: &str, message: &str) -> Result<()> {
        crate::git::commit_file(repo, url, file, message)
    }

    fn pull_rebase(&self, repo: &Path, url: &str, remote: &str, branch: &str) -> Result<()> {
        crate::git::pull_rebase(repo, url, remote, branch)
    }

    fn push(&self, repo: &Path, url: &str, remote: &str, branch: &str) -> Result<()> {
        crate::git::push(repo, url, remote, branch)
    }
}
