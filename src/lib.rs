//! Survey a directory tree for git repositories
//!
//! - `areas`: Traversal, repository detection and the repository index
//! - `artifacts`: Classifications, report lines and output plumbing
//! - `commands`: The two-pass scan tying everything together

pub mod areas;
pub mod artifacts;
pub mod commands;
