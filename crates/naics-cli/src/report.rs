//! Rendering lookup results for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};
use serde::Serialize;

use naics_model::{CodeLevel, CodeTable, title, valid_code};

/// Placeholder printed for a code that has no title.
pub const ABSENT_TITLE: &str = "-";

/// Title lookup result for one requested code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleLookup {
    pub code: String,
    pub title: Option<String>,
}

/// One row of `naics list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub code: String,
    pub title: String,
    pub level: Option<CodeLevel>,
}

pub fn lookup_titles(table: &CodeTable, codes: &[String]) -> Vec<TitleLookup> {
    codes
        .iter()
        .map(|code| TitleLookup {
            code: code.clone(),
            title: title(code, table).map(String::from),
        })
        .collect()
}

/// `<code>\tvalid` or `<code>\tinvalid` for each code, in request order.
pub fn check_lines(table: &CodeTable, codes: &[String]) -> Vec<String> {
    codes
        .iter()
        .map(|code| {
            let status = if valid_code(code, table) {
                "valid"
            } else {
                "invalid"
            };
            format!("{code}\t{status}")
        })
        .collect()
}

pub fn title_lines(lookups: &[TitleLookup]) -> Vec<String> {
    lookups
        .iter()
        .map(|lookup| lookup.title.as_deref().unwrap_or(ABSENT_TITLE).to_string())
        .collect()
}

/// Entries filtered by code prefix and hierarchy level, ordered by code.
pub fn list_entries(
    table: &CodeTable,
    prefix: Option<&str>,
    level: Option<CodeLevel>,
) -> Vec<ListEntry> {
    table
        .with_prefix(prefix.unwrap_or(""))
        .map(|(code, title)| ListEntry {
            code: code.to_string(),
            title: title.to_string(),
            level: CodeLevel::of(code),
        })
        .filter(|entry| level.is_none() || entry.level == level)
        .collect()
}

pub fn entries_table(entries: &[ListEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Title"),
        header_cell("Level"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        let level = match entry.level {
            Some(level) => Cell::new(level.label()),
            None => Cell::new(ABSENT_TITLE).fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(&entry.code)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&entry.title),
            level,
        ]);
    }
    table
}

/// Plain-text summary of a loaded table.
pub fn info_summary(table: &CodeTable) -> String {
    let source = table.source();
    let path = source
        .path
        .as_ref()
        .map_or_else(|| "(in memory)".to_string(), |path| path.display().to_string());
    let edition = source.edition.as_deref().unwrap_or("unknown");

    let mut lines = vec![
        format!("Source: {path}"),
        format!("Edition: {edition}"),
        format!("Codes: {}", table.len()),
    ];
    let counts = table.level_counts();
    for level in CodeLevel::ALL {
        let count = counts.get(&level).copied().unwrap_or(0);
        lines.push(format!("{}: {count}", level.label()));
    }
    let classified: usize = counts.values().sum();
    let other = table.len() - classified;
    if other > 0 {
        lines.push(format!("Other: {other}"));
    }
    lines.join("\n")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(70)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
