use crate::common::command::{
    init_committed_repository, init_empty_repository, run_survey_command, workspace_dir,
};
use crate::common::report_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

// `git show-ref` fails while there are no refs at all
#[rstest]
fn repository_without_commits_is_not_a_repository(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    init_empty_repository(&workspace_dir.path().join("fresh"));
    init_committed_repository(&workspace_dir.path().join("used"));

    let actual_output = run_survey_command(workspace_dir.path(), &[])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    assert_eq!(
        actual_output,
        report_of(&["./", "  fresh/ [no repository]", "  used/ [clean]"])
    );

    Ok(())
}
