//! # Error Handling
//!
//! This module defines the centralized error type for `lflist-sync`. Every
//! fallible library function returns [`Result<T>`], and the CLI converts these
//! into `anyhow` errors at the command boundary.
//!
//! The variants follow the failure taxonomy of a sync run:
//!
//! - Configuration problems (bad YAML, empty priority table, missing token).
//! - Fetch failures while cloning a source or destination repository.
//! - Filesystem failures such as a missing authoritative file or source
//!   directory.
//! - Publish failures, including a rebase that could not be reconciled with
//!   the remote.
//!
//! URLs stored in these variants are always redacted first, so a credential
//! embedded in a destination URL never reaches stderr or a log line.

use thiserror::Error;

/// Main error type for lflist-sync operations
#[derive(Error, Debug)]
pub enum Error {
    /// The YAML configuration could not be parsed or failed validation.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A credential required for publishing was not present in the environment.
    #[error("Missing credential: environment variable {variable} is not set")]
    MissingCredential { variable: String },

    /// An error occurred while cloning a Git repository.
    #[error("Git clone error for {url}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// An error occurred while executing a Git command.
    #[error("Git command failed for {url}: {command} - {stderr}")]
    GitCommand {
        command: String,
        url: String,
        stderr: String,
    },

    /// Local commits could not be rebased onto the remote branch.
    #[error("Publish conflict on {url} ({branch}): {message}")]
    PublishConflict {
        url: String,
        branch: String,
        message: String,
    },

    /// A source file or directory expected inside a clone does not exist.
    #[error("Source not found: {path}")]
    SourceNotFound { path: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
