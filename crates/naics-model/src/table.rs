//! Code table model.
//!
//! A [`CodeTable`] maps classification codes to their titles. Tables are
//! assembled once through a [`CodeTableBuilder`] and are read-only after
//! that: there is no insert, remove, or reload on the table itself.
//!
//! ## Example
//!
//! ```
//! use naics_model::{CodeTable, TableSource};
//!
//! let table = CodeTable::from_entries(
//!     TableSource::default(),
//!     [("111110", "Soybean Farming")],
//! );
//! assert!(table.valid_code("111110"));
//! assert_eq!(table.title("111110"), Some("Soybean Farming"));
//! assert_eq!(table.title("999999"), None);
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::level::CodeLevel;

/// Where a table was loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSource {
    /// Source file, `None` for tables built in memory.
    pub path: Option<PathBuf>,

    /// Classification edition (e.g., "2017"), when it could be determined.
    pub edition: Option<String>,
}

impl TableSource {
    /// Source for a table read from `path`.
    pub fn file(path: impl Into<PathBuf>, edition: Option<String>) -> Self {
        Self {
            path: Some(path.into()),
            edition,
        }
    }
}

/// Immutable mapping from code to title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    source: TableSource,
    titles: BTreeMap<String, String>,
}

impl CodeTable {
    /// Build a table from `(code, title)` pairs.
    ///
    /// Later pairs replace earlier ones with the same code.
    pub fn from_entries<I, C, T>(source: TableSource, entries: I) -> Self
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<String>,
        T: Into<String>,
    {
        let mut builder = CodeTableBuilder::new(source);
        for (code, title) in entries {
            builder.insert(code, title);
        }
        builder.finish()
    }

    /// Returns true if `code` is present in the table.
    ///
    /// The match is exact and case-sensitive.
    pub fn valid_code(&self, code: &str) -> bool {
        self.titles.contains_key(code)
    }

    /// Title for `code`, or `None` when the code is not in the table.
    pub fn title(&self, code: &str) -> Option<&str> {
        self.titles.get(code).map(String::as_str)
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Entries ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.titles
            .iter()
            .map(|(code, title)| (code.as_str(), title.as_str()))
    }

    /// Entries whose code starts with `prefix`, ordered by code.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.titles
            .range::<str, _>((std::ops::Bound::Included(prefix), std::ops::Bound::Unbounded))
            .take_while(move |(code, _)| code.starts_with(prefix))
            .map(|(code, title)| (code.as_str(), title.as_str()))
    }

    /// Number of codes at each classification level.
    ///
    /// Codes that do not follow the NAICS digit scheme are not counted.
    pub fn level_counts(&self) -> BTreeMap<CodeLevel, usize> {
        let mut counts = BTreeMap::new();
        for code in self.titles.keys() {
            if let Some(level) = CodeLevel::of(code) {
                *counts.entry(level).or_insert(0) += 1;
            }
        }
        counts
    }
}

/// Accumulates rows before freezing them into a [`CodeTable`].
#[derive(Debug, Default)]
pub struct CodeTableBuilder {
    source: TableSource,
    titles: BTreeMap<String, String>,
    replaced: usize,
}

impl CodeTableBuilder {
    pub fn new(source: TableSource) -> Self {
        Self {
            source,
            titles: BTreeMap::new(),
            replaced: 0,
        }
    }

    /// Insert a row. Returns the title it replaced, if the code was already present.
    pub fn insert(&mut self, code: impl Into<String>, title: impl Into<String>) -> Option<String> {
        let previous = self.titles.insert(code.into(), title.into());
        if previous.is_some() {
            self.replaced += 1;
        }
        previous
    }

    /// Number of rows that overwrote an earlier row with the same code.
    pub fn replaced(&self) -> usize {
        self.replaced
    }

    /// Distinct codes inserted so far.
    pub fn code_count(&self) -> usize {
        self.titles.len()
    }

    pub fn finish(self) -> CodeTable {
        CodeTable {
            source: self.source,
            titles: self.titles,
        }
    }
}

/// Returns true if `code` is present in `table`.
pub fn valid_code(code: &str, table: &CodeTable) -> bool {
    table.valid_code(code)
}

/// Title for `code` in `table`, or `None` when absent.
pub fn title<'a>(code: &str, table: &'a CodeTable) -> Option<&'a str> {
    if valid_code(code, table) {
        table.title(code)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop_table() -> CodeTable {
        CodeTable::from_entries(
            TableSource::default(),
            [
                ("11", "Agriculture, Forestry, Fishing and Hunting"),
                ("111", "Crop Production"),
                ("1111", "Oilseed and Grain Farming"),
                ("111110", "Soybean Farming"),
                ("111120", "Oilseed (except Soybean) Farming"),
                ("21", "Mining, Quarrying, and Oil and Gas Extraction"),
            ],
        )
    }

    #[test]
    fn duplicate_codes_keep_last_row() {
        let mut builder = CodeTableBuilder::new(TableSource::default());
        assert_eq!(builder.insert("111110", "Soybeans"), None);
        assert_eq!(
            builder.insert("111110", "Soybean Farming"),
            Some("Soybeans".to_string())
        );
        assert_eq!(builder.replaced(), 1);
        assert_eq!(builder.code_count(), 1);
        let table = builder.finish();
        assert_eq!(table.len(), 1);
        assert_eq!(table.title("111110"), Some("Soybean Farming"));
    }

    #[test]
    fn lookup_is_exact() {
        let table = crop_table();
        assert!(!table.valid_code(" 111110"));
        assert!(!table.valid_code("111110 "));
        assert!(!table.valid_code("11111"));
        assert_eq!(table.title("1111100"), None);
    }

    #[test]
    fn prefix_iteration_stays_in_branch() {
        let table = crop_table();
        let codes: Vec<&str> = table.with_prefix("111").map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["111", "1111", "111110", "111120"]);
        assert_eq!(table.with_prefix("9").count(), 0);
        assert_eq!(table.with_prefix("").count(), table.len());
    }

    #[test]
    fn iteration_is_ordered_by_code() {
        let table = crop_table();
        let codes: Vec<&str> = table.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["11", "111", "1111", "111110", "111120", "21"]);
        assert!(table.iter().eq(table.with_prefix("")));
        assert_eq!(table.iter().nth(1), Some(("111", "Crop Production")));
    }

    #[test]
    fn level_counts_by_digits() {
        let counts = crop_table().level_counts();
        assert_eq!(counts.get(&CodeLevel::Sector), Some(&2));
        assert_eq!(counts.get(&CodeLevel::Subsector), Some(&1));
        assert_eq!(counts.get(&CodeLevel::IndustryGroup), Some(&1));
        assert_eq!(counts.get(&CodeLevel::NaicsIndustry), None);
        assert_eq!(counts.get(&CodeLevel::NationalIndustry), Some(&2));
    }
}
