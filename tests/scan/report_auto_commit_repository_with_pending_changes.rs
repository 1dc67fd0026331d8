use crate::common::command::{
    head_symbolic_ref, init_committed_repository, run_survey_command, workspace_dir,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::report_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_auto_commit_repository_with_pending_changes(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = workspace_dir.path().join("journal");
    init_committed_repository(&repository);
    std::fs::write(
        repository.join(".git-auto-commit"),
        head_symbolic_ref(&repository),
    )?;
    write_file(FileSpec::new(
        repository.join("README.md"),
        "not committed yet".to_string(),
    ));

    let actual_output = run_survey_command(workspace_dir.path(), &[])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    assert_eq!(actual_output, report_of(&["./", "  journal/ [auto-commit]"]));

    Ok(())
}
