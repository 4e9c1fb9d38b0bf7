use crate::common::command::{OUTPUT, diverged_folders, dirdiff_compare, output_documents};
use crate::common::file::read_document;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn render_one_document_for_a_differing_file(
    diverged_folders: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_folders;

    dirdiff_compare(dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("x.txt differs between folders"));

    let documents = output_documents(dir.path());
    pretty_assertions::assert_eq!(documents, vec![dir.path().join(OUTPUT).join("x.txt.html")]);

    let html = read_document(&documents[0]);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<tr class=\"diff_chg\" data-region=\"0\">"));
    assert_eq!(html.matches("<tr class=\"diff_equal\">").count(), 2);
    assert!(html.contains("<span class=\"diff_hl\">b</span>"));
    assert!(html.contains("<span class=\"diff_hl\">x</span>"));
    assert!(html.contains("Previous change"));
    assert!(html.contains("Next change"));

    Ok(())
}

#[rstest]
fn rerunning_produces_byte_identical_documents(
    diverged_folders: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_folders;

    dirdiff_compare(dir.path(), &[]).assert().success();
    let first = read_document(&dir.path().join(OUTPUT).join("x.txt.html"));

    dirdiff_compare(dir.path(), &[]).assert().success();
    let second = read_document(&dir.path().join(OUTPUT).join("x.txt.html"));

    pretty_assertions::assert_eq!(first, second);

    Ok(())
}
