//! Repository detection and state classification
//!
//! A directory is a repository root when it holds an enumerable `.git`
//! directory with a regular `HEAD` file inside, and `git show-ref` succeeds
//! there. A confirmed root is then classified, first match wins:
//!
//! 1. auto-commit: `.git-auto-commit` holds exactly the bytes printed by
//!    `git symbolic-ref -q HEAD`
//! 2. clean: `git status --porcelain` succeeds and prints nothing
//! 3. dirty: everything else, including a status command that failed
//!
//! Nothing here returns an error. A failed listing, read or command is folded
//! into the less confident answer.

use crate::areas::command::CommandRunner;
use crate::areas::walker::list_dir;
use crate::artifacts::survey::classification::DirectoryClassification;
use derive_new::new;
use std::path::Path;

pub const GIT_DIR_NAME: &str = ".git";
pub const HEAD_FILE_NAME: &str = "HEAD";
pub const AUTO_COMMIT_FILE_NAME: &str = ".git-auto-commit";

#[derive(new)]
pub struct Inspector<'r> {
    runner: &'r dyn CommandRunner,
}

impl Inspector<'_> {
    pub fn classify(&self, path: &Path) -> DirectoryClassification {
        if !self.is_repository_root(path) {
            return DirectoryClassification::NotRepository;
        }

        let classification = if self.is_auto_commit(path) {
            DirectoryClassification::AutoCommitRepository
        } else if self.is_clean(path) {
            DirectoryClassification::CleanRepository
        } else {
            DirectoryClassification::DirtyRepository
        };

        tracing::debug!(path = %path.display(), ?classification, "classified repository");

        classification
    }

    pub fn is_repository_root(&self, path: &Path) -> bool {
        let Some(entries) = list_dir(&path.join(GIT_DIR_NAME)) else {
            return false;
        };

        let has_head_file = entries
            .iter()
            .any(|entry| entry.file_name() == HEAD_FILE_NAME && entry.file_type().is_file());
        if !has_head_file {
            tracing::trace!(path = %path.display(), "no regular HEAD file in git directory");
            return false;
        }

        self.succeeds(path, &["show-ref"]).is_some()
    }

    fn is_auto_commit(&self, path: &Path) -> bool {
        let Ok(marker) = std::fs::read(path.join(AUTO_COMMIT_FILE_NAME)) else {
            return false;
        };

        match self.succeeds(path, &["symbolic-ref", "-q", "HEAD"]) {
            Some(head_ref) => head_ref == marker,
            None => false,
        }
    }

    fn is_clean(&self, path: &Path) -> bool {
        self.succeeds(path, &["status", "--porcelain"])
            .is_some_and(|stdout| stdout.is_empty())
    }

    /// Stdout of a command that ran and exited successfully
    fn succeeds(&self, path: &Path, args: &[&str]) -> Option<Vec<u8>> {
        match self.runner.run(path, args) {
            Ok(output) if output.success => Some(output.stdout),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(path = %path.display(), ?args, error = %err, "git command failed to run");
                None
            }
        }
    }
}
