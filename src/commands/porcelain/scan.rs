use crate::areas::inspector::Inspector;
use crate::areas::repository_index::RepositoryIndex;
use crate::areas::survey::Survey;
use crate::areas::walker::{TreeVisitor, walk};
use crate::artifacts::survey::report_line::{EntryKind, ReportLine};
use std::io::Write;
use std::path::Path;

// Two passes over the same tree:
// - discovery: find every repository root and build the index
// - report: print one line per visited entry, using the index to prune
//   directories that hold no repository at all
impl Survey {
    pub fn scan(&self) -> anyhow::Result<()> {
        let inspector = self.inspector();

        let index = RepositoryIndex::discover(self.root(), &inspector)?;
        self.report(&index, &inspector)?;

        if self.opts().summary {
            writeln!(self.writer(), "{}", index.tally())?;
        }

        self.writer().flush()?;

        Ok(())
    }

    pub fn report(&self, index: &RepositoryIndex, inspector: &Inspector<'_>) -> anyhow::Result<()> {
        let mut reporter = Reporter {
            survey: self,
            index,
            inspector,
        };

        walk(self.root(), 0, &mut reporter)
    }
}

struct Reporter<'s, 'i, 'r> {
    survey: &'s Survey,
    index: &'s RepositoryIndex,
    inspector: &'i Inspector<'r>,
}

impl Reporter<'_, '_, '_> {
    fn emit(&self, path: &Path, depth: usize, kind: EntryKind) -> anyhow::Result<()> {
        let line = ReportLine::for_path(path, depth, kind);
        writeln!(self.survey.writer(), "{}", line)?;
        Ok(())
    }
}

impl TreeVisitor for Reporter<'_, '_, '_> {
    fn enter_directory(&mut self, path: &Path, depth: usize) -> anyhow::Result<bool> {
        // nothing was discovered here or below, so there is no point going on
        if !self.index.contains(path) {
            self.emit(path, depth, EntryKind::Barren)?;
            return Ok(false);
        }

        let classification = self.inspector.classify(path);
        if classification.is_repository() {
            self.emit(path, depth, EntryKind::Repository(classification))?;
            return Ok(false);
        }

        self.emit(path, depth, EntryKind::Container)?;
        Ok(true)
    }

    fn visit_leaf(&mut self, path: &Path, depth: usize) -> anyhow::Result<()> {
        self.emit(path, depth, EntryKind::Leaf)
    }
}
