//! Rendering of the merged sections back into list file text.

use crate::merge::PriorityTable;
use crate::section::Section;

/// First line of every generated file.
pub const DEFAULT_HEADER: &str = "# Listas Generadas según el orden establecido";

/// Manifest line naming every table entry, e.g. `#[2024.12 TCG][2005.4 GOAT]`.
///
/// Lists all entries of the table whether or not they were found in a source.
pub fn manifest_line(table: &PriorityTable) -> String {
    let mut line = String::from("#");
    for name in table.names() {
        line.push('[');
        line.push_str(name);
        line.push(']');
    }
    line
}

/// Render the final file: header, manifest, then each section and its entries.
///
/// Every line, including the last, ends with `\n`.
pub fn render(header: &str, table: &PriorityTable, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    out.push_str(&manifest_line(table));
    out.push('\n');

    for section in sections {
        out.push_str(&section.name);
        out.push('\n');
        for line in &section.lines {
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}
