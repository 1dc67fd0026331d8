//! Survey data structures
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `survey`: Classifications, report lines, options and tallies

pub mod core;
pub mod survey;
