//! # lflist-sync Library
//!
//! Pulls forbidden/limited list files from several repositories, keeps the
//! sections named in a priority table, and publishes one combined file.
//!
//! ## Quick Example
//!
//! ```
//! use lflist_sync::merge::{merge, PriorityTable};
//! use lflist_sync::section::parse;
//! use lflist_sync::serialize::render;
//!
//! let primary = parse("!TCG\n14558127 1\n55144522 3\n");
//! let fallback = parse("!OCG\n14558127 2\n");
//! let table = PriorityTable::new(["TCG", "OCG", "GOAT"]);
//!
//! let sections = merge(&table, &[&primary, &fallback]);
//! let text = render("# merged", &table, &sections);
//!
//! assert_eq!(text, "# merged\n#[TCG][OCG][GOAT]\n!TCG\n14558127 1\n!OCG\n14558127 2\n");
//! ```
//!
//! ## Modules
//!
//! - **`section`**: the line format, section maps and the status-code filter.
//! - **`aggregate`**: one map per source, from a single file or a directory.
//! - **`merge`**: the priority table and first-source-wins merge.
//! - **`serialize`**: header, manifest line and section rendering.
//! - **`config`** / **`defaults`**: the immutable run configuration.
//! - **`git`** / **`repository`**: the `git` binary behind a mockable trait.
//! - **`publish`** / **`pipeline`**: the end-to-end sync run.

pub mod aggregate;
pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod publish;
pub mod repository;
pub mod section;
pub mod serialize;

#[cfg(test)]
mod section_proptest;
