//! # lflist-sync CLI
//!
//! Binary entry point. Parses arguments with `clap` and dispatches to a
//! command; all real work lives in the `lflist_sync` library.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
