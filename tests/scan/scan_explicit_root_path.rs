use crate::common::command::{mixed_workspace_dir, run_survey_command};
use crate::common::report_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn scan_explicit_root_path(mixed_workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let parent = mixed_workspace_dir
        .path()
        .parent()
        .expect("temp dir has a parent");
    let name = mixed_workspace_dir
        .path()
        .file_name()
        .expect("temp dir has a name")
        .to_string_lossy()
        .into_owned();

    let root_line = format!("{name}/");
    let expected_output = report_of(&[
        root_line.as_str(),
        "  misc/ [no repository]",
        "  proj-a/ [clean]",
        "  proj-b/ [dirty]",
    ]);

    let actual_output = run_survey_command(parent, &[name.as_str()]).assert().success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn scan_missing_root_prints_nothing(
    mixed_workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_survey_command(mixed_workspace_dir.path(), &["does-not-exist"])
        .assert()
        .success()
        .stdout("");

    Ok(())
}
