//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `scan`: Discover every repository below a root and report its state
pub mod scan;
