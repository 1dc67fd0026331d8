//! Depth-first directory traversal
//!
//! The walker owns the traversal shape only. What happens at each directory and
//! each leaf is decided by a [`TreeVisitor`], so the discovery pass and the
//! reporting pass share one implementation.
//!
//! Entries are visited in file name order at every level. Symbolic links are
//! never followed: a link pointing at a directory is visited as a leaf.

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Callbacks driven by [`walk`]
pub trait TreeVisitor {
    /// Called once for every directory reached, the root included.
    ///
    /// Returning `false` stops the walk at this directory: none of its
    /// children, directories or leaves, are visited.
    fn enter_directory(&mut self, path: &Path, depth: usize) -> anyhow::Result<bool>;

    /// Called once for every non-directory entry of a directory that was entered.
    fn visit_leaf(&mut self, path: &Path, depth: usize) -> anyhow::Result<()>;
}

/// Walk `root`, which sits at `depth`, handing every node to `visitor`.
///
/// A directory that cannot be listed is treated as if it did not exist and
/// yields nothing, not even an `enter_directory` call. Only errors raised by the
/// visitor itself are returned.
pub fn walk<V: TreeVisitor + ?Sized>(
    root: &Path,
    depth: usize,
    visitor: &mut V,
) -> anyhow::Result<()> {
    let Some(entries) = list_dir(root) else {
        return Ok(());
    };

    if !visitor.enter_directory(root, depth)? {
        return Ok(());
    }

    for entry in entries {
        if entry.file_type().is_dir() {
            walk(entry.path(), depth + 1, visitor)?;
        } else {
            visitor.visit_leaf(entry.path(), depth + 1)?;
        }
    }

    Ok(())
}

/// List the direct children of `dir`, sorted by file name.
///
/// Returns `None` if the directory cannot be read in full.
pub fn list_dir(dir: &Path) -> Option<Vec<DirEntry>> {
    // walkdir yields a plain file root as a single entry, which min_depth hides
    if !std::fs::metadata(dir).is_ok_and(|metadata| metadata.is_dir()) {
        tracing::trace!(path = %dir.display(), "not a directory");
        return None;
    }

    match WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(entries) => Some(entries),
        Err(err) => {
            tracing::trace!(path = %dir.display(), error = %err, "cannot list directory");
            None
        }
    }
}
