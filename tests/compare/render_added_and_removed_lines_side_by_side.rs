use crate::common::command::{LEFT, OUTPUT, RIGHT, dirdiff_compare, file_a, file_b, workspace_dir};
use crate::common::file::{FileSpec, read_document, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn render_added_and_removed_lines_side_by_side(
    workspace_dir: TempDir,
    file_a: String,
    file_b: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(dir.path().join(LEFT).join("main.rs"), file_a));
    write_file(FileSpec::new(dir.path().join(RIGHT).join("main.rs"), file_b));

    dirdiff_compare(dir.path(), &[]).assert().success();

    let html = read_document(&dir.path().join(OUTPUT).join("main.rs.html"));

    // the removed loop, then the replaced join handling
    assert_eq!(html.matches("<tr class=\"diff_sub\" data-region=\"0\">").count(), 3);
    assert_eq!(html.matches("data-region=\"1\"").count(), 3);
    assert_eq!(html.matches("<tr class=\"diff_chg\"").count(), 3);
    assert!(!html.contains("data-region=\"2\""));
    assert!(html.contains("tx.join().unwrap();"));
    assert!(html.contains("eprintln!(&quot;Thread error: {}&quot;, e);"));

    Ok(())
}
