//! Locations of every repository below the survey root
//!
//! The index is filled by a dedicated discovery walk before anything is
//! printed, and is only read afterwards. It lets the report tell a directory
//! that holds a repository somewhere beneath it apart from one that holds
//! nothing of interest at all.

use crate::areas::inspector::Inspector;
use crate::areas::walker::{TreeVisitor, walk};
use crate::artifacts::survey::classification::DirectoryClassification;
use crate::artifacts::survey::tally::RepositoryTally;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryIndex {
    entries: BTreeMap<PathBuf, DirectoryClassification>,
}

impl RepositoryIndex {
    /// Walk the tree under `root` and record every repository root found.
    ///
    /// Descent stops at each repository, so nested repositories inside another
    /// repository's working tree are not indexed.
    pub fn discover(root: &Path, inspector: &Inspector<'_>) -> anyhow::Result<Self> {
        let mut discovery = Discovery {
            inspector,
            index: RepositoryIndex::default(),
        };
        walk(root, 0, &mut discovery)?;

        tracing::debug!(
            root = %root.display(),
            repositories = discovery.index.len(),
            "discovery pass finished"
        );

        Ok(discovery.index)
    }

    /// True if `path` is an indexed repository or one of its ancestors.
    ///
    /// Ancestry is decided on whole path components: `a` contains `a/b` but
    /// not `ab`.
    pub fn contains(&self, path: &Path) -> bool {
        // descendants of a path sort directly after it
        self.entries
            .range::<Path, _>((Bound::Included(path), Bound::Unbounded))
            .next()
            .is_some_and(|(indexed, _)| indexed.starts_with(path))
    }

    pub fn get(&self, path: &Path) -> Option<DirectoryClassification> {
        self.entries.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, DirectoryClassification)> {
        self.entries
            .iter()
            .map(|(path, classification)| (path.as_path(), *classification))
    }

    pub fn tally(&self) -> RepositoryTally {
        self.entries.values().copied().collect()
    }

    fn insert(&mut self, path: PathBuf, classification: DirectoryClassification) {
        if classification.is_repository() {
            self.entries.insert(path, classification);
        }
    }
}

impl FromIterator<(PathBuf, DirectoryClassification)> for RepositoryIndex {
    fn from_iter<I: IntoIterator<Item = (PathBuf, DirectoryClassification)>>(iter: I) -> Self {
        let mut index = RepositoryIndex::default();
        iter.into_iter()
            .for_each(|(path, classification)| index.insert(path, classification));
        index
    }
}

struct Discovery<'i, 'r> {
    inspector: &'i Inspector<'r>,
    index: RepositoryIndex,
}

impl TreeVisitor for Discovery<'_, '_> {
    fn enter_directory(&mut self, path: &Path, _depth: usize) -> anyhow::Result<bool> {
        let classification = self.inspector.classify(path);
        if classification.is_repository() {
            self.index.insert(path.to_path_buf(), classification);
            return Ok(false);
        }

        Ok(true)
    }

    fn visit_leaf(&mut self, _path: &Path, _depth: usize) -> anyhow::Result<()> {
        Ok(())
    }
}
