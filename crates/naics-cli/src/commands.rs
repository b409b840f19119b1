use anyhow::{Context, Result};
use tracing::{debug, info_span};

use naics_cli::report::{
    check_lines, entries_table, info_summary, list_entries, lookup_titles, title_lines,
};
use naics_model::CodeTable;
use naics_standards::{
    ColumnSelector, TableLayout, default_table_path, load_table_with_layout,
};

use crate::cli::{CodesArgs, ListArgs, OutputFormatArg, TableArgs, TitleArgs};

pub fn load_code_table(args: &TableArgs) -> Result<CodeTable> {
    let path = args.table.clone().unwrap_or_else(default_table_path);
    let layout = table_layout(args)?;
    let span = info_span!("load_table", path = %path.display());
    let _guard = span.enter();
    debug!(?layout, "loading code table");
    load_table_with_layout(&path, &layout)
        .with_context(|| format!("load code table {}", path.display()))
}

fn table_layout(args: &TableArgs) -> Result<TableLayout> {
    if let Some(range) = &args.columns {
        return TableLayout::from_column_range(range).context("parse --columns");
    }
    let selector = |name: &Option<String>| {
        name.clone()
            .map_or(ColumnSelector::Detect, ColumnSelector::Named)
    };
    Ok(TableLayout {
        code: selector(&args.code_column),
        title: selector(&args.title_column),
    })
}

/// Prints one status line per code; returns false if any code is unknown.
pub fn run_check(table: &CodeTable, args: &CodesArgs) -> bool {
    for line in check_lines(table, &args.codes) {
        println!("{line}");
    }
    args.codes.iter().all(|code| table.valid_code(code))
}

pub fn run_title(table: &CodeTable, args: &TitleArgs) -> Result<()> {
    let lookups = lookup_titles(table, &args.codes);
    match args.format {
        OutputFormatArg::Text => {
            for line in title_lines(&lookups) {
                println!("{line}");
            }
        }
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&lookups).context("serialize titles")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_list(table: &CodeTable, args: &ListArgs) -> Result<()> {
    let entries = list_entries(table, args.prefix.as_deref(), args.level.map(Into::into));
    match args.format {
        OutputFormatArg::Text => println!("{}", entries_table(&entries)),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&entries).context("serialize entries")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_info(table: &CodeTable) {
    println!("{}", info_summary(table));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_args() -> TableArgs {
        TableArgs {
            table: None,
            columns: None,
            code_column: None,
            title_column: None,
        }
    }

    #[test]
    fn layout_defaults_to_detection() {
        let layout = table_layout(&table_args()).unwrap();
        assert_eq!(layout, TableLayout::default());
    }

    #[test]
    fn column_range_takes_precedence() {
        let args = TableArgs {
            columns: Some("B:C".to_string()),
            code_column: Some("Code".to_string()),
            ..table_args()
        };
        assert_eq!(table_layout(&args).unwrap(), TableLayout::positional(1, 2));
    }

    #[test]
    fn named_columns_mix_with_detection() {
        let args = TableArgs {
            title_column: Some("Description".to_string()),
            ..table_args()
        };
        let layout = table_layout(&args).unwrap();
        assert_eq!(layout.code, ColumnSelector::Detect);
        assert_eq!(
            layout.title,
            ColumnSelector::Named("Description".to_string())
        );
    }

    #[test]
    fn bad_column_range_is_reported() {
        let args = TableArgs {
            columns: Some("B".to_string()),
            ..table_args()
        };
        let error = table_layout(&args).unwrap_err();
        assert!(format!("{error:#}").contains("invalid column range 'B'"));
    }
}
