//! # Ordering Merge
//!
//! Combines the section maps of all sources into the final list of sections.
//!
//! The [`PriorityTable`] decides both which sections are wanted and the order
//! they are written in. Sources are consulted in priority order and the first
//! source that has a section supplies all of its entries; content from lower
//! priority sources is never blended in.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::section::{Section, SectionMap, MARKER};

/// Ordered display names of the sections to publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityTable(Vec<String>);

impl PriorityTable {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Display names in output order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Section keys (`!` + display name) in output order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.0.iter().map(|name| section_key(name))
    }
}

/// Build the lookup key for a display name.
pub fn section_key(display_name: &str) -> String {
    format!("{}{}", MARKER, display_name)
}

/// Produce the final section list.
///
/// `sources` must be ordered from highest to lowest priority. Names missing
/// from every source are skipped; names not in the table are dropped.
pub fn merge(table: &PriorityTable, sources: &[&SectionMap]) -> Vec<Section> {
    let mut merged = Vec::new();

    for key in table.keys() {
        match sources.iter().enumerate().find_map(|(rank, source)| {
            source.get(&key).map(|section| (rank, section))
        }) {
            Some((rank, section)) => {
                debug!("{} taken from source #{}", key, rank);
                merged.push(section.clone());
            }
            None => debug!("{} not found in any source, skipping", key),
        }
    }

    info!(
        "Merged sections in priority order: {:?}",
        merged.iter().map(|s| s.name.as_str()).collect::<Vec<_>>()
    );
    merged
}
