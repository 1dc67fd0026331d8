use crate::artifacts::survey::classification::DirectoryClassification;

/// Per-state repository counts for the closing summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepositoryTally {
    pub clean: usize,
    pub dirty: usize,
    pub auto_commit: usize,
}

impl RepositoryTally {
    pub fn total(&self) -> usize {
        self.clean + self.dirty + self.auto_commit
    }

    pub fn record(&mut self, classification: DirectoryClassification) {
        match classification {
            DirectoryClassification::NotRepository => {}
            DirectoryClassification::AutoCommitRepository => self.auto_commit += 1,
            DirectoryClassification::DirtyRepository => self.dirty += 1,
            DirectoryClassification::CleanRepository => self.clean += 1,
        }
    }
}

impl FromIterator<DirectoryClassification> for RepositoryTally {
    fn from_iter<I: IntoIterator<Item = DirectoryClassification>>(iter: I) -> Self {
        let mut tally = RepositoryTally::default();
        iter.into_iter()
            .for_each(|classification| tally.record(classification));
        tally
    }
}

impl std::fmt::Display for RepositoryTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.total() == 1 {
            "repository"
        } else {
            "repositories"
        };

        write!(
            f,
            "{} {}: {} clean, {} dirty, {} auto-commit",
            self.total(),
            noun,
            self.clean,
            self.dirty,
            self.auto_commit
        )
    }
}
