//! Column selection for code tables.
//!
//! A table file needs two columns: the code and its title. They can be
//! picked by header name, by position, or detected from the header.
//! Detection accepts both a plain `Code,Title` header and the census
//! headings (`2017 NAICS US   Code`, `2017 NAICS US Title`).

use std::path::Path;

use crate::error::{Result, TableError};

/// How to find one column in the header row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnSelector {
    /// First header named `<role>` or ending in ` <role>` (case-insensitive).
    #[default]
    Detect,
    /// Header with this name (case-insensitive, surrounding whitespace ignored).
    Named(String),
    /// Zero-based column index.
    Index(usize),
}

/// Which columns hold the code and the title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableLayout {
    pub code: ColumnSelector,
    pub title: ColumnSelector,
}

impl TableLayout {
    pub fn named(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: ColumnSelector::Named(code.into()),
            title: ColumnSelector::Named(title.into()),
        }
    }

    pub fn positional(code: usize, title: usize) -> Self {
        Self {
            code: ColumnSelector::Index(code),
            title: ColumnSelector::Index(title),
        }
    }

    /// Parse a spreadsheet column range such as `B:C` into a positional layout.
    ///
    /// The first column holds the code, the second the title.
    pub fn from_column_range(range: &str) -> Result<Self> {
        let invalid = |reason: &str| TableError::InvalidColumnRange {
            range: range.to_string(),
            reason: reason.to_string(),
        };
        let (code, title) = range
            .split_once(':')
            .ok_or_else(|| invalid("expected two columns separated by ':'"))?;
        let code = column_index(code.trim()).ok_or_else(|| invalid("bad code column"))?;
        let title = column_index(title.trim()).ok_or_else(|| invalid("bad title column"))?;
        if code == title {
            return Err(invalid("code and title must be different columns"));
        }
        Ok(Self::positional(code, title))
    }

    /// Resolve the layout against a header row, returning `(code, title)` indices.
    ///
    /// The two roles must land on different columns.
    pub fn resolve(&self, headers: &[String], path: &Path) -> Result<(usize, usize)> {
        let code = resolve_column(&self.code, "code", headers, path)?;
        let title = resolve_column(&self.title, "title", headers, path)?;
        if code == title {
            return Err(TableError::SameColumn {
                column: headers[code].clone(),
                path: path.to_path_buf(),
            });
        }
        Ok((code, title))
    }
}

fn resolve_column(
    selector: &ColumnSelector,
    role: &str,
    headers: &[String],
    path: &Path,
) -> Result<usize> {
    let found = match selector {
        ColumnSelector::Detect => {
            let suffix = format!(" {role}");
            headers.iter().position(|header| {
                let header = header.to_lowercase();
                header == role || header.ends_with(&suffix)
            })
        }
        ColumnSelector::Named(name) => headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name.trim())),
        ColumnSelector::Index(index) => (*index < headers.len()).then_some(*index),
    };
    found.ok_or_else(|| TableError::MissingColumn {
        column: describe(selector, role),
        path: path.to_path_buf(),
    })
}

fn describe(selector: &ColumnSelector, role: &str) -> String {
    match selector {
        ColumnSelector::Detect => role.to_string(),
        ColumnSelector::Named(name) => name.clone(),
        ColumnSelector::Index(index) => format!("{role} (column {})", column_letters(*index)),
    }
}

/// `A` -> 0, `B` -> 1, `AA` -> 26.
fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let mut index = 0usize;
    for byte in letters.bytes() {
        let digit = usize::from(byte.to_ascii_uppercase() - b'A') + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }
    Some(index - 1)
}

fn column_letters(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(char::from(b'A' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn column_letters_round_trip() {
        assert_eq!(column_index("A"), Some(0));
        assert_eq!(column_index("c"), Some(2));
        assert_eq!(column_index("Z"), Some(25));
        assert_eq!(column_index("AA"), Some(26));
        assert_eq!(column_letters(1), "B");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_index("1"), None);
        assert_eq!(column_index(""), None);
    }

    #[test]
    fn parses_census_range() {
        let layout = TableLayout::from_column_range("B:C").expect("parse range");
        assert_eq!(layout, TableLayout::positional(1, 2));
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(TableLayout::from_column_range("B").is_err());
        assert!(TableLayout::from_column_range("B:B").is_err());
        assert!(TableLayout::from_column_range("1:2").is_err());
    }

    #[test]
    fn detects_plain_and_census_headers() {
        let path = Path::new("codes.csv");
        let plain = headers(&["Code", "Title"]);
        assert_eq!(TableLayout::default().resolve(&plain, path).unwrap(), (0, 1));

        let census = headers(&["Seq. No.", "2017 NAICS US   Code", "2017 NAICS US Title"]);
        assert_eq!(TableLayout::default().resolve(&census, path).unwrap(), (1, 2));
    }

    #[test]
    fn rejects_code_and_title_on_one_column() {
        let path = Path::new("codes.csv");
        let plain = headers(&["Code", "Title"]);
        let layout = TableLayout {
            code: ColumnSelector::Detect,
            title: ColumnSelector::Named("Code".to_string()),
        };
        let error = layout.resolve(&plain, path).unwrap_err();
        assert!(matches!(
            error,
            TableError::SameColumn { ref column, .. } if column == "Code"
        ));

        let error = TableLayout {
            code: ColumnSelector::Index(1),
            title: ColumnSelector::Detect,
        }
        .resolve(&plain, path)
        .unwrap_err();
        assert!(matches!(error, TableError::SameColumn { .. }));
    }

    #[test]
    fn missing_column_names_the_selector() {
        let path = Path::new("codes.csv");
        let error = TableLayout::named("Code", "Description")
            .resolve(&headers(&["Code", "Title"]), path)
            .unwrap_err();
        assert!(matches!(
            error,
            TableError::MissingColumn { ref column, .. } if column == "Description"
        ));

        let error = TableLayout::positional(1, 2)
            .resolve(&headers(&["Code", "Title"]), path)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "required column 'title (column C)' not found in codes.csv"
        );
    }
}
