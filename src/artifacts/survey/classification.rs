use colored::Colorize;

/// What a single directory turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DirectoryClassification {
    #[default]
    NotRepository,
    AutoCommitRepository,
    DirtyRepository,
    CleanRepository,
}

impl DirectoryClassification {
    pub fn is_repository(&self) -> bool {
        !matches!(self, DirectoryClassification::NotRepository)
    }
}

impl From<&DirectoryClassification> for &str {
    fn from(classification: &DirectoryClassification) -> Self {
        match classification {
            DirectoryClassification::NotRepository => "no repository",
            DirectoryClassification::AutoCommitRepository => "auto-commit",
            DirectoryClassification::DirtyRepository => "dirty",
            DirectoryClassification::CleanRepository => "clean",
        }
    }
}

impl std::fmt::Display for DirectoryClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let label = format!("[{label}]");
        let colored_label = match self {
            DirectoryClassification::NotRepository => label.dimmed(),
            DirectoryClassification::AutoCommitRepository => label.cyan(),
            DirectoryClassification::DirtyRepository => label.red(),
            DirectoryClassification::CleanRepository => label.green(),
        };
        write!(f, "{}", colored_label)
    }
}
