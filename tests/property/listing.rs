//! Listing output is exactly the sorted matching subset, laid out in padded rows.

use monsh::format::listing::{column_width, columns_per_row};
use monsh::format::{glob_match, render_listing};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn name_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z][a-z0-9]{0,11}", 0..40)
}

proptest! {
    #[test]
    fn listing_is_sorted_matching_subset(
        names in name_set(),
        pattern in prop_oneof![
            Just("*".to_string()),
            "[a-z]\\*",
            "\\*[0-9]",
            "[a-z]?\\*",
            "\\[[a-m]-[n-z]\\]\\*",
            "\\[![a-z]{1,3}\\]\\*",
        ],
        width in 20usize..200,
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let rows = render_listing(&pattern, names.iter(), width);

        let expected: Vec<String> = names
            .iter()
            .filter(|n| glob_match(&pattern, n))
            .cloned()
            .collect();
        let listed: Vec<String> = rows
            .iter()
            .flat_map(|row| row.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .collect();
        prop_assert_eq!(&listed, &expected);

        if expected.is_empty() {
            prop_assert!(rows.is_empty());
        } else {
            let column = column_width(&expected);
            let per_row = columns_per_row(width, column);
            prop_assert_eq!(rows.len(), (expected.len() + per_row - 1) / per_row);
            for row in &rows {
                prop_assert_eq!(row.chars().count() % column, 0);
                prop_assert!(row.chars().count() <= per_row * column);
            }
        }
    }

    #[test]
    fn class_matches_exactly_its_members(c in "[a-z0-9]", members in "[a-z0-9]{1,5}") {
        let text = c.clone();
        let inside = members.contains(c.as_str());
        prop_assert_eq!(glob_match(&format!("[{}]", members), &text), inside);
        prop_assert_eq!(glob_match(&format!("[!{}]", members), &text), !inside);
    }

    #[test]
    fn star_matches_everything(text in "[ -~]{0,30}") {
        prop_assert!(glob_match("*", &text));
        prop_assert!(glob_match(&text.replace(['*', '?'], "?"), &text));
    }
}
