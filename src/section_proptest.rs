//! Property-based tests for parsing, merging and rendering.
//!
//! These tests use proptest to generate random list files and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::merge::{merge, section_key, PriorityTable};
    use crate::section::{is_excluded, parse, Section, SectionMap};
    use crate::serialize::{render, DEFAULT_HEADER};
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// A data line: id, status code drawn to hit the excluded ones often, comment.
    fn data_line() -> impl Strategy<Value = String> {
        (
            "[0-9]{1,8}",
            prop_oneof![
                Just("3".to_string()),
                Just("-1".to_string()),
                Just("0".to_string()),
                Just("1".to_string()),
                Just("2".to_string()),
                "-?[0-9]{1,2}",
            ],
            proptest::option::of("--[a-zA-Z]{1,6}( [a-zA-Z]{1,6})?"),
        )
            .prop_map(|(id, status, comment)| match comment {
                Some(c) => format!("{} {} {}", id, status, c),
                None => format!("{} {}", id, status),
            })
    }

    fn display_name() -> impl Strategy<Value = String> {
        "[A-Z][a-zA-Z0-9 .()]{0,10}[a-zA-Z0-9)]"
    }

    fn list_text() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                3 => data_line(),
                1 => display_name().prop_map(|n| format!("!{}", n)),
                1 => Just(String::new()),
                1 => Just("   ".to_string()),
            ],
            0..40,
        )
        .prop_map(|lines| lines.join("\r\n"))
    }

    fn section_map() -> impl Strategy<Value = SectionMap> {
        prop::collection::vec(
            (
                prop::sample::select(vec!["A", "B", "C", "D", "E"]),
                prop::collection::vec(data_line(), 0..4),
            ),
            0..5,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(name, lines)| Section::with_lines(section_key(name), lines))
                .collect::<SectionMap>()
        })
    }

    fn priority_table() -> impl Strategy<Value = PriorityTable> {
        prop::sample::subsequence(vec!["E", "C", "A", "D", "B", "F"], 0..=6)
            .prop_shuffle()
            .prop_map(PriorityTable::new)
    }

    proptest! {
        /// Property: no parsed entry carries an excluded status code
        #[test]
        fn parsed_lines_never_excluded(text in list_text()) {
            let map = parse(&text);
            for section in map.iter() {
                for line in &section.lines {
                    prop_assert!(!is_excluded(line), "kept excluded line {:?}", line);
                }
            }
        }

        /// Property: every kept entry is a trimmed, non-blank, non-marker line
        #[test]
        fn parsed_lines_are_clean(text in list_text()) {
            let map = parse(&text);
            for section in map.iter() {
                prop_assert!(section.name.starts_with('!'));
                for line in &section.lines {
                    prop_assert!(!line.is_empty());
                    prop_assert_eq!(line.trim(), line.as_str());
                    prop_assert!(!line.starts_with('!'));
                }
            }
        }

        /// Property: merged names are exactly the table entries present in a source, in table order
        #[test]
        fn merge_follows_table_order(
            table in priority_table(),
            a in section_map(),
            b in section_map(),
            c in section_map(),
        ) {
            let merged = merge(&table, &[&a, &b, &c]);
            let names: Vec<String> = merged.iter().map(|s| s.name.clone()).collect();

            let expected: Vec<String> = table
                .keys()
                .filter(|k| a.contains(k) || b.contains(k) || c.contains(k))
                .collect();
            prop_assert_eq!(&names, &expected);

            let unique: HashSet<_> = names.iter().collect();
            prop_assert_eq!(unique.len(), names.len());
        }

        /// Property: the highest priority source that has a section supplies it unchanged
        #[test]
        fn merge_prefers_earlier_sources(
            table in priority_table(),
            a in section_map(),
            b in section_map(),
            c in section_map(),
        ) {
            for section in merge(&table, &[&a, &b, &c]) {
                let winner = a
                    .get(&section.name)
                    .or_else(|| b.get(&section.name))
                    .or_else(|| c.get(&section.name))
                    .unwrap();
                prop_assert_eq!(&section, winner);
            }
        }

        /// Property: rendering then parsing gives back the merged sections
        #[test]
        fn render_then_parse_round_trips(
            table in priority_table(),
            a in section_map(),
            b in section_map(),
        ) {
            let merged = merge(&table, &[&a, &b]);
            let reparsed = parse(&render(DEFAULT_HEADER, &table, &merged));

            let filtered: Vec<Section> = merged
                .iter()
                .map(|s| Section::with_lines(
                    s.name.clone(),
                    s.lines.iter().filter(|l| !is_excluded(l)).cloned(),
                ))
                .collect();
            let expected: SectionMap = filtered.into_iter().collect();
            prop_assert_eq!(reparsed, expected);
        }
    }
}
