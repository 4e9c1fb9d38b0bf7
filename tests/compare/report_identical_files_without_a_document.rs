use crate::common::command::{LEFT, RIGHT, dirdiff_compare, output_documents, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_identical_files_without_a_document(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    for side in [LEFT, RIGHT] {
        write_file(FileSpec::new(
            dir.path().join(side).join("same.txt"),
            "one\ntwo\nthree\n".to_string(),
        ));
    }

    dirdiff_compare(dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("same.txt is identical in both folders"))
        .stdout(predicate::str::contains("1 identical, 0 differing"));

    assert!(output_documents(dir.path()).is_empty());

    Ok(())
}
