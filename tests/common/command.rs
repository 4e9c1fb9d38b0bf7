use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

pub const LEFT: &str = "A";
pub const RIGHT: &str = "B";
pub const OUTPUT: &str = "out";

#[fixture]
pub fn workspace_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::create_dir_all(dir.path().join(LEFT)).expect("Failed to create left folder");
    std::fs::create_dir_all(dir.path().join(RIGHT)).expect("Failed to create right folder");
    dir
}

/// Folder A holds {x.txt, y.txt}, folder B holds {x.txt, z.txt}; x.txt differs
#[fixture]
pub fn diverged_folders(workspace_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        workspace_dir.path().join(LEFT).join("x.txt"),
        "a\nb\nc\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join(LEFT).join("y.txt"),
        "only on the left\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join(RIGHT).join("x.txt"),
        "a\nx\nc\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join(RIGHT).join("z.txt"),
        "only on the right\n".to_string(),
    ));

    workspace_dir
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    tx.join().unwrap();

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    if let Err(e) = tx.join() {
        eprintln!("Thread error: {}", e);
    }

    println!("All threads completed");
}"#
    .to_string()
}

pub fn run_dirdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("dirdiff").expect("Failed to find dirdiff binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Compare the default folders of a workspace into its output folder
pub fn dirdiff_compare(dir: &Path, extra_args: &[&str]) -> Command {
    let mut args = vec![LEFT, RIGHT, "--output", OUTPUT];
    args.extend_from_slice(extra_args);
    run_dirdiff_command(dir, &args)
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run dirdiff");
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}

pub fn output_documents(dir: &Path) -> Vec<PathBuf> {
    let mut documents = std::fs::read_dir(dir.join(OUTPUT))
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    documents.sort();
    documents
}
