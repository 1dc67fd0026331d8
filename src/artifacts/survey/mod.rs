//! Survey data types
//!
//! - `classification`: The state assigned to a single directory
//! - `options`: Resolved settings for a run
//! - `report_line`: Presentation of one visited entry
//! - `tally`: Per-state repository counts

pub mod classification;
pub mod options;
pub mod report_line;
pub mod tally;
