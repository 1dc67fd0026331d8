//! Core survey components
//!
//! - `command`: Process boundary for running git
//! - `inspector`: Repository detection and state classification
//! - `repository_index`: Repository locations found by the discovery pass
//! - `survey`: Owner of the root, output writer and command runner
//! - `walker`: Sorted depth-first traversal with visitor callbacks

pub mod command;
pub mod inspector;
pub mod repository_index;
pub mod survey;
pub mod walker;
