use crate::common::command::{OUTPUT, RIGHT, run_dirdiff_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn abort_when_an_input_folder_is_missing(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;

    run_dirdiff_command(dir.path(), &["missing", RIGHT, "--output", OUTPUT])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open input directory \"missing\""));

    assert!(!dir.path().join(OUTPUT).exists());

    Ok(())
}

#[rstest]
fn abort_when_an_input_is_a_file(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    std::fs::write(dir.path().join("plain.txt"), "not a folder")?;

    run_dirdiff_command(dir.path(), &["plain.txt", RIGHT, "--output", OUTPUT])
        .assert()
        .failure();

    Ok(())
}
