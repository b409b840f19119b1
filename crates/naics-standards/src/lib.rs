#![deny(unsafe_code)]

pub mod error;
pub mod layout;
pub mod loader;
pub mod paths;

pub use crate::error::{Result, TableError};
pub use crate::layout::{ColumnSelector, TableLayout};
pub use crate::loader::{load_table, load_table_with_layout};
pub use crate::paths::{
    TABLE_PATH_ENV_VAR, default_table_path, excerpt_table_path, load_default_table,
};
