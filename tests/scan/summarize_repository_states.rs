use crate::common::command::{mixed_workspace_dir, run_survey_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn summarize_repository_states(
    mixed_workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_survey_command(mixed_workspace_dir.path(), &["--summary"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "  proj-b/ [dirty]\n2 repositories: 1 clean, 1 dirty, 0 auto-commit\n",
        ));

    Ok(())
}

#[rstest]
fn no_summary_without_flag(
    mixed_workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_survey_command(mixed_workspace_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("repositories:").not());

    Ok(())
}
