use crate::artifacts::survey::classification::DirectoryClassification;
use colored::Colorize;
use derive_new::new;
use std::path::Path;

const INDENT_WIDTH: usize = 2;

/// How a visited entry is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A repository root, shown with its state
    Repository(DirectoryClassification),
    /// A directory with no repository anywhere beneath it
    Barren,
    /// A directory holding at least one repository somewhere below
    Container,
    /// Anything that is not a directory
    Leaf,
}

/// One line of survey output
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ReportLine {
    depth: usize,
    name: String,
    kind: EntryKind,
}

impl ReportLine {
    /// Build the line for `path`; the root (depth 0) keeps its path as given.
    pub fn for_path(path: &Path, depth: usize, kind: EntryKind) -> Self {
        let name = match path.file_name() {
            Some(name) if depth > 0 => name.to_string_lossy().into_owned(),
            _ => path.display().to_string(),
        };

        ReportLine::new(depth, name, kind)
    }

    fn directory_name(&self) -> String {
        if self.name.ends_with(std::path::MAIN_SEPARATOR) {
            self.name.clone()
        } else {
            format!("{}{}", self.name, std::path::MAIN_SEPARATOR)
        }
    }
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:width$}", "", width = self.depth * INDENT_WIDTH)?;

        match self.kind {
            EntryKind::Repository(classification) => {
                write!(f, "{} {}", self.directory_name().bold(), classification)
            }
            EntryKind::Barren => write!(
                f,
                "{} {}",
                self.directory_name().dimmed(),
                DirectoryClassification::NotRepository
            ),
            EntryKind::Container => write!(f, "{}", self.directory_name()),
            EntryKind::Leaf => write!(f, "{}", self.name),
        }
    }
}
