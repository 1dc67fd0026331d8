//! Command implementations
//!
//! Commands are implemented as methods on [`crate::areas::survey::Survey`],
//! composing the traversal, detection and index building blocks from `areas`.

pub mod porcelain;
