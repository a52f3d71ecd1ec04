//! # CLI Command Implementations
//!
//! Each subcommand lives in its own file with an `Args` struct derived using
//! `clap` and an `execute` function that calls into the `lflist_sync`
//! library.

pub mod merge;
pub mod sync;
