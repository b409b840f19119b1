//! Integration tests for terminal rendering.

use naics_cli::report::{
    ListEntry, TitleLookup, check_lines, entries_table, info_summary, list_entries, lookup_titles,
    title_lines,
};
use naics_model::{CodeLevel, CodeTable, TableSource};
use serde_json::json;

fn crop_table() -> CodeTable {
    CodeTable::from_entries(
        TableSource::default(),
        [
            ("11", "Agriculture, Forestry, Fishing and Hunting"),
            ("111", "Crop Production"),
            ("1111", "Oilseed and Grain Farming"),
            ("111110", "Soybean Farming"),
            ("111120", "Oilseed (except Soybean) Farming"),
            ("31-33", "Manufacturing"),
            ("X1", "Not a NAICS code"),
        ],
    )
}

fn codes(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn test_check_lines_keep_request_order() {
    let lines = check_lines(&crop_table(), &codes(&["999999", "111110"]));
    assert_eq!(lines, vec!["999999\tinvalid", "111110\tvalid"]);
}

#[test]
fn test_titles_mark_absent_codes() {
    let lookups = lookup_titles(&crop_table(), &codes(&["111110", "999999"]));
    assert_eq!(
        lookups,
        vec![
            TitleLookup {
                code: "111110".to_string(),
                title: Some("Soybean Farming".to_string()),
            },
            TitleLookup {
                code: "999999".to_string(),
                title: None,
            },
        ]
    );
    assert_eq!(title_lines(&lookups), vec!["Soybean Farming", "-"]);
}

#[test]
fn test_titles_json_uses_null_for_absent() {
    let lookups = lookup_titles(&crop_table(), &codes(&["111", "42"]));
    let value = serde_json::to_value(&lookups).expect("serialize lookups");
    assert_eq!(
        value,
        json!([
            {"code": "111", "title": "Crop Production"},
            {"code": "42", "title": null},
        ])
    );
}

#[test]
fn test_list_filters_by_prefix_and_level() {
    let table = crop_table();
    let branch: Vec<String> = list_entries(&table, Some("111"), None)
        .into_iter()
        .map(|entry| entry.code)
        .collect();
    assert_eq!(branch, codes(&["111", "1111", "111110", "111120"]));

    let sectors = list_entries(&table, None, Some(CodeLevel::Sector));
    assert_eq!(
        sectors,
        vec![
            ListEntry {
                code: "11".to_string(),
                title: "Agriculture, Forestry, Fishing and Hunting".to_string(),
                level: Some(CodeLevel::Sector),
            },
            ListEntry {
                code: "31-33".to_string(),
                title: "Manufacturing".to_string(),
                level: Some(CodeLevel::Sector),
            },
        ]
    );

    let value = serde_json::to_value(&sectors[1]).expect("serialize entry");
    assert_eq!(
        value,
        json!({"code": "31-33", "title": "Manufacturing", "level": "sector"})
    );
}

#[test]
fn test_entries_table_has_a_row_per_entry() {
    let entries = list_entries(&crop_table(), None, None);
    let mut table = entries_table(&entries);
    assert_eq!(table.row_iter().count(), entries.len());
    assert_eq!(table.column_count(), 3);
}

#[test]
fn test_info_summary() {
    let summary = info_summary(&crop_table());
    insta::assert_snapshot!(summary, @r"
    Source: (in memory)
    Edition: unknown
    Codes: 7
    Sector: 2
    Subsector: 1
    Industry Group: 1
    NAICS Industry: 0
    National Industry: 2
    Other: 1
    ");
}
