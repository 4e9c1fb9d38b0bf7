use crate::common::command::{LEFT, OUTPUT, RIGHT, diverged_folders, dirdiff_compare};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_unreadable_files_and_continue(
    diverged_folders: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_folders;
    std::fs::write(dir.path().join(LEFT).join("blob.bin"), [0xffu8, 0xfe, 0x00])?;
    std::fs::write(dir.path().join(RIGHT).join("blob.bin"), [0x00u8, 0xfe, 0xff])?;

    dirdiff_compare(dir.path(), &[])
        .assert()
        .failure()
        .stdout(predicate::str::contains("blob.bin failed: cannot read"))
        .stdout(predicate::str::contains("x.txt differs between folders"))
        .stdout(predicate::str::contains("1 failed"))
        .stderr(predicate::str::contains("1 file pair(s) could not be compared"));

    assert!(dir.path().join(OUTPUT).join("x.txt.html").exists());
    assert!(!dir.path().join(OUTPUT).join("blob.bin.html").exists());

    Ok(())
}
