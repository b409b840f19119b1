//! NAICS code table model.
//!
//! Holds the immutable code→title mapping and the two lookups every
//! caller needs: [`valid_code`] and [`title`]. Loading from disk lives in
//! `naics-standards`.

pub mod level;
pub mod table;

pub use level::CodeLevel;
pub use table::{CodeTable, CodeTableBuilder, TableSource, title, valid_code};
