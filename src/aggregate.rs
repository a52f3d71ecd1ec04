//! # Source Aggregation
//!
//! Turns the files of one logical source into a single [`SectionMap`].
//!
//! - The authoritative source is exactly one file ([`read_file_source`]).
//! - A directory source is every file directly inside a directory whose name
//!   ends with a given extension ([`read_directory_source`]).
//!
//! Directory files are visited in lexicographic filename order. When two files
//! define the same section, the later file wins and the collision is logged.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::section::{self, SectionMap};

/// Extension of list files inside directory sources.
pub const DEFAULT_EXTENSION: &str = ".conf";

/// Parse a single list file.
pub fn read_file_source(path: &Path) -> Result<SectionMap> {
    if !path.is_file() {
        return Err(Error::SourceNotFound {
            path: path.display().to_string(),
        });
    }

    let bytes = fs::read(path)?;
    let map = section::parse(&String::from_utf8_lossy(&bytes));
    info!(
        "Sections found in {}: {:?}",
        path.display(),
        map.names().collect::<Vec<_>>()
    );
    Ok(map)
}

/// List the files of a directory source, sorted by file name.
///
/// Only regular files (or links to them) directly inside `dir` are returned.
pub fn list_source_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::SourceNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Parse every matching file of a directory source into one map.
pub fn read_directory_source(dir: &Path, extension: &str) -> Result<SectionMap> {
    let mut merged = SectionMap::new();
    let mut origins: HashMap<String, PathBuf> = HashMap::new();

    for path in list_source_files(dir, extension)? {
        debug!("Reading {}", path.display());
        let bytes = fs::read(&path)?;

        for found in section::parse(&String::from_utf8_lossy(&bytes)).iter() {
            if let Some(previous) = origins.insert(found.name.clone(), path.clone()) {
                warn!(
                    "Section {} in {} overrides the one in {}",
                    found.name,
                    path.display(),
                    previous.display()
                );
            }
            merged.insert(found.clone());
        }
    }

    info!(
        "Sections found in {}: {:?}",
        dir.display(),
        merged.names().collect::<Vec<_>>()
    );
    Ok(merged)
}
