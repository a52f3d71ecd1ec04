//! # Section Parsing
//!
//! List files are line oriented. A line starting with [`MARKER`] opens a named
//! section; every following non-blank line belongs to it until the next
//! marker line:
//!
//! ```text
//! #[2024.12 TCG][2005.4 GOAT]
//! !2024.12 TCG
//! 14558127 0 --Ash Blossom
//! 55144522 1 --Pot of Greed
//! ```
//!
//! The whole trimmed marker line, `!` included, is the section key. Data lines
//! are kept verbatim except for one rule: when the second whitespace-separated
//! field is a status code listed in [`EXCLUDED_STATUS_CODES`], the line is
//! dropped.

use std::collections::HashMap;

/// Character that introduces a section name line.
pub const MARKER: char = '!';

/// Status codes whose entries never make it into a section.
pub const EXCLUDED_STATUS_CODES: [&str; 2] = ["3", "-1"];

/// A named list and its entries in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The marker line, e.g. `!2024.12 TCG`.
    pub name: String,
    /// Entry lines, trimmed, in the order they appeared.
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    pub fn with_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Sections of one logical source, keyed by name.
///
/// Keys are unique. Replacing an existing key keeps its original position, so
/// [`SectionMap::names`] reports names in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl SectionMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, returning the section it replaced (if any).
    pub fn insert(&mut self, section: Section) -> Option<Section> {
        match self.index.get(&section.name) {
            Some(&slot) => Some(std::mem::replace(&mut self.sections[slot], section)),
            None => {
                self.index.insert(section.name.clone(), self.sections.len());
                self.sections.push(section);
                None
            }
        }
    }

    /// Look up a section by its full marker name.
    pub fn get(&self, name: &str) -> Option<&Section> {
        self.index.get(name).map(|&slot| &self.sections[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Section names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Bind `name` to an empty entry list, discarding any previous entries.
    /// Returns the slot of the section for subsequent appends.
    fn open(&mut self, name: &str) -> usize {
        match self.index.get(name) {
            Some(&slot) => {
                self.sections[slot].lines.clear();
                slot
            }
            None => {
                self.insert(Section::new(name));
                self.sections.len() - 1
            }
        }
    }
}

impl FromIterator<Section> for SectionMap {
    fn from_iter<T: IntoIterator<Item = Section>>(iter: T) -> Self {
        let mut map = SectionMap::new();
        for section in iter {
            map.insert(section);
        }
        map
    }
}

/// Returns true when a data line carries an excluded status code.
///
/// Lines with fewer than two fields are never excluded.
pub fn is_excluded(line: &str) -> bool {
    line.split_whitespace()
        .nth(1)
        .is_some_and(|status| EXCLUDED_STATUS_CODES.contains(&status))
}

/// Byte order mark some editors put at the start of a file.
const BOM: char = '\u{FEFF}';

/// Parse list text into its sections.
///
/// Never fails: blank lines are skipped, lines before the first marker are
/// dropped, and anything else is accepted as an entry unless [`is_excluded`]
/// rejects it. A marker repeated within the same text resets that section.
pub fn parse(text: &str) -> SectionMap {
    let mut map = SectionMap::new();
    let mut current: Option<usize> = None;

    for raw in text.lines() {
        let line = raw.trim_matches(|c: char| c.is_whitespace() || c == BOM);
        if line.is_empty() {
            continue;
        }

        if line.starts_with(MARKER) {
            current = Some(map.open(line));
            continue;
        }

        let Some(slot) = current else {
            continue;
        };
        if is_excluded(line) {
            continue;
        }
        map.sections[slot].lines.push(line.to_string());
    }

    map
}
