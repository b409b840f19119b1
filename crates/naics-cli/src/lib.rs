//! CLI library components for the NAICS lookup tool.

#![allow(missing_docs)]

pub mod logging;
pub mod report;
