//! Default table location.
//!
//! The default is the full census export of the 2017 table,
//! `data/2-6 digit_2017_Codes.csv` (the `2-6 digit_2017_Codes.xls`
//! download saved as CSV). It is not bundled; drop it into `data/` or
//! point `NAICS_TABLE_PATH` at it. The bundled `naics_2017_excerpt.csv`
//! only holds the sectors and part of Crop Production.

use std::path::PathBuf;

use naics_model::CodeTable;

use crate::error::Result;
use crate::loader::load_table;

/// Environment variable for overriding the default table file.
pub const TABLE_PATH_ENV_VAR: &str = "NAICS_TABLE_PATH";

/// File name of the full 2017 census table.
pub const DEFAULT_TABLE_FILE: &str = "2-6 digit_2017_Codes.csv";

/// File name of the bundled partial 2017 table.
pub const EXCERPT_TABLE_FILE: &str = "naics_2017_excerpt.csv";

/// Directory holding the tables (`data/` at the workspace root).
pub fn data_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// Get the default table path.
///
/// Resolution order:
/// 1. `NAICS_TABLE_PATH` environment variable
/// 2. `data/2-6 digit_2017_Codes.csv` relative to workspace root
pub fn default_table_path() -> PathBuf {
    if let Ok(path) = std::env::var(TABLE_PATH_ENV_VAR) {
        return PathBuf::from(path);
    }
    data_root().join(DEFAULT_TABLE_FILE)
}

/// Path of the bundled excerpt (sectors plus two Crop Production branches).
pub fn excerpt_table_path() -> PathBuf {
    data_root().join(EXCERPT_TABLE_FILE)
}

/// Load the default table (full NAICS 2017).
///
/// Each call reads the file again; callers that need one shared table
/// load it once and pass it along.
pub fn load_default_table() -> Result<CodeTable> {
    load_table(&default_table_path())
}
