//! Thin wrappers around the system `git` binary.
//!
//! Using the installed `git` means SSH keys, credential helpers and
//! `~/.gitconfig` all apply without extra work. Every function blocks until the
//! command exits and turns a non-zero status into an [`Error`].

use std::fs;
use std::path::Path;
use std::process::Command;

use log::{debug, warn};
use url::Url;

use crate::error::Error;

/// Strip any userinfo (user, password or token) from a URL.
///
/// Non-URL inputs such as local paths are returned unchanged.
pub fn redact_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) if !parsed.username().is_empty() || parsed.password().is_some() => {
            // Both setters only fail for URLs that cannot have credentials at all.
            let _ = parsed.set_username("");
            let _ = parsed.set_password(None);
            parsed.to_string()
        }
        _ => url.to_string(),
    }
}

/// Replace every occurrence of the raw URL in git output with its redacted form.
fn scrub(text: &str, url: &str) -> String {
    let redacted = redact_url(url);
    if redacted == url {
        text.to_string()
    } else {
        text.replace(url, &redacted)
    }
}

fn clone_into(url: &str, target_dir: &Path, extra_args: &[&str]) -> Result<(), Error> {
    // git refuses to clone into a non-empty directory
    if target_dir.exists() {
        fs::remove_dir_all(target_dir)?;
    }
    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    debug!("git clone {} -> {}", redact_url(url), target_dir.display());
    let output = Command::new("git")
        .arg("clone")
        .args(extra_args)
        .arg(url)
        .arg(target_dir)
        .output()
        .map_err(|e| Error::GitClone {
            url: redact_url(url),
            message: e.to_string(),
            hint: Some("Is git installed and on PATH?".to_string()),
        })?;

    if !output.status.success() {
        let stderr = scrub(&String::from_utf8_lossy(&output.stderr), url);

        let hint = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            Some(format!(
                "Check that the {} token grants access to this repository",
                crate::defaults::TOKEN_ENV
            ))
        } else if stderr.contains("not found") || stderr.contains("does not exist") {
            Some("Check the repository URL".to_string())
        } else {
            None
        };

        return Err(Error::GitClone {
            url: redact_url(url),
            message: stderr.trim().to_string(),
            hint,
        });
    }

    Ok(())
}

/// Clone only the tip of the default branch, replacing `target_dir`.
pub fn clone_shallow(url: &str, target_dir: &Path) -> Result<(), Error> {
    clone_into(url, target_dir, &["--depth=1"])
}

/// Clone with full history, replacing `target_dir`.
///
/// Used for the destination, which must be able to rebase onto its remote.
pub fn clone_full(url: &str, target_dir: &Path) -> Result<(), Error> {
    clone_into(url, target_dir, &[])
}

/// Run `git <args>` inside `repo` and return its stdout.
///
/// `url` only labels error messages.
fn run(repo: &Path, url: &str, args: &[&str]) -> Result<String, Error> {
    let command = args.join(" ");
    debug!("git {} (in {})", scrub(&command, url), repo.display());

    let output = Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .map_err(|e| Error::GitCommand {
            command: scrub(&command, url),
            url: redact_url(url),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: scrub(&command, url),
            url: redact_url(url),
            stderr: scrub(String::from_utf8_lossy(&output.stderr).trim(), url),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Set the committer identity for this clone only.
pub fn configure_identity(repo: &Path, url: &str, name: &str, email: &str) -> Result<(), Error> {
    run(repo, url, &["config", "user.name", name])?;
    run(repo, url, &["config", "user.email", email])?;
    Ok(())
}

/// Whether the working tree has anything to commit.
pub fn has_changes(repo: &Path, url: &str) -> Result<bool, Error> {
    let status = run(repo, url, &["status", "--porcelain"])?;
    Ok(!status.trim().is_empty())
}

/// Stage `file` and commit it.
pub fn commit_file(repo: &Path, url: &str, file: &str, message: &str) -> Result<(), Error> {
    run(repo, url, &["add", "--", file])?;
    run(repo, url, &["commit", "-m", message])?;
    Ok(())
}

/// Rebase local commits onto `remote/branch`.
///
/// On failure the rebase is aborted so the clone is left clean.
pub fn pull_rebase(repo: &Path, url: &str, remote: &str, branch: &str) -> Result<(), Error> {
    if let Err(err) = run(repo, url, &["pull", "--rebase", remote, branch]) {
        if let Err(abort) = run(repo, url, &["rebase", "--abort"]) {
            warn!("Could not abort rebase in {}: {}", repo.display(), abort);
        }
        let message = match err {
            Error::GitCommand { stderr, .. } => stderr,
            other => other.to_string(),
        };
        return Err(Error::PublishConflict {
            url: redact_url(url),
            branch: branch.to_string(),
            message,
        });
    }
    Ok(())
}

pub fn push(repo: &Path, url: &str, remote: &str, branch: &str) -> Result<(), Error> {
    run(repo, url, &["push", remote, branch])?;
    Ok(())
}
