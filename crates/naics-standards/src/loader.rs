//! Code table loader.
//!
//! Reads a CSV file with a header row into a [`CodeTable`]. Codes are kept
//! as text so leading zeros and range codes such as `31-33` survive.
//! When a code appears more than once the last row wins.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info, warn};

use naics_model::{CodeTable, CodeTableBuilder, TableSource};

use crate::error::{Result, TableError};
use crate::layout::TableLayout;

/// Load a code table, detecting the code and title columns from the header.
///
/// Code and title cells are trimmed of surrounding whitespace; rows with an
/// empty code are skipped. Lookups on the returned table are not trimmed.
pub fn load_table(path: &Path) -> Result<CodeTable> {
    load_table_with_layout(path, &TableLayout::default())
}

/// Load a code table using an explicit column layout.
///
/// Cells are trimmed the same way as in [`load_table`].
pub fn load_table_with_layout(path: &Path, layout: &TableLayout) -> Result<CodeTable> {
    let file = File::open(path).map_err(|e| TableError::open(path, e))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| TableError::csv(path, e))?
        .iter()
        .map(clean_header)
        .collect();
    let (code_idx, title_idx) = layout.resolve(&headers, path)?;
    debug!(
        path = %path.display(),
        code_column = %headers[code_idx],
        title_column = %headers[title_idx],
        "resolved table columns"
    );

    let mut builder = CodeTableBuilder::new(TableSource::file(path, parse_edition(path)));
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| TableError::csv(path, e))?;
        let code = record.get(code_idx).unwrap_or("").trim();
        if code.is_empty() {
            skipped += 1;
            debug!(
                line = record.position().map(csv::Position::line),
                "skipping row without code"
            );
            continue;
        }
        let title = record.get(title_idx).unwrap_or("").trim();
        if let Some(previous) = builder.insert(code, title) {
            debug!(code, previous = %previous, title, "duplicate code replaces earlier row");
        }
    }

    if builder.replaced() > 0 {
        warn!(
            path = %path.display(),
            replaced = builder.replaced(),
            "duplicate codes in table; last row wins"
        );
    }
    info!(
        path = %path.display(),
        codes = builder.code_count(),
        skipped,
        "loaded code table"
    );
    Ok(builder.finish())
}

fn clean_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Parse the edition year from a file name (e.g., "2-6 digit_2017_Codes.csv" -> "2017").
fn parse_edition(path: &Path) -> Option<String> {
    let stem = path.file_stem().and_then(|v| v.to_str())?;
    stem.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .find(|part| {
            part.len() == 4
                && part.bytes().all(|b| b.is_ascii_digit())
                && (part.starts_with("19") || part.starts_with("20"))
        })
        .map(String::from)
}
