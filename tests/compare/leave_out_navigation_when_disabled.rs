use crate::common::command::{OUTPUT, diverged_folders, dirdiff_compare};
use crate::common::file::read_document;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn leave_out_navigation_when_disabled(
    diverged_folders: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_folders;

    dirdiff_compare(dir.path(), &["--no-navigation"])
        .assert()
        .success();

    let html = read_document(&dir.path().join(OUTPUT).join("x.txt.html"));
    assert!(!html.contains("Next change"));
    assert!(!html.contains("navigateDiff"));
    // regions stay tagged for any later overlay
    assert!(html.contains("data-region=\"0\""));

    Ok(())
}

#[rstest]
fn use_the_requested_highlight_color(
    diverged_folders: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_folders;

    dirdiff_compare(dir.path(), &["--highlight", "orange"])
        .assert()
        .success();

    let html = read_document(&dir.path().join(OUTPUT).join("x.txt.html"));
    assert!(html.contains("background-color: orange;"));

    Ok(())
}

#[rstest]
fn reject_a_highlight_that_is_not_a_color(
    diverged_folders: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_folders;

    dirdiff_compare(dir.path(), &["--highlight", "red; } body { display: none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a CSS color"));

    assert!(!dir.path().join(OUTPUT).join("x.txt.html").exists());

    Ok(())
}
