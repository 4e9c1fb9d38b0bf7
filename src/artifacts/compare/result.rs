use crate::artifacts::compare::comparison::FolderComparison;
use crate::artifacts::compare::error::CompareError;
use colored::Colorize;
use std::ffi::OsString;
use std::fmt::Display;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum PairOutcome {
    Identical,
    Differs { document: PathBuf },
    /// Not a regular file on both sides
    Skipped,
    Failed(CompareError),
}

/// Everything learned about two folders in one run
#[derive(Debug)]
pub struct ComparisonResult {
    left: PathBuf,
    right: PathBuf,
    identical: Vec<OsString>,
    differing: Vec<(OsString, PathBuf)>,
    skipped: Vec<OsString>,
    failed: Vec<(OsString, CompareError)>,
    only_left: Vec<OsString>,
    only_right: Vec<OsString>,
}

impl ComparisonResult {
    pub fn new(comparison: &FolderComparison, outcomes: Vec<(OsString, PairOutcome)>) -> Self {
        let mut result = ComparisonResult {
            left: comparison.left().path().to_path_buf(),
            right: comparison.right().path().to_path_buf(),
            identical: Vec::new(),
            differing: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
            only_left: comparison.only_left().iter().cloned().collect(),
            only_right: comparison.only_right().iter().cloned().collect(),
        };

        let mut outcomes = outcomes;
        // workers finish in any order
        outcomes.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, outcome) in outcomes {
            match outcome {
                PairOutcome::Identical => result.identical.push(name),
                PairOutcome::Differs { document } => result.differing.push((name, document)),
                PairOutcome::Skipped => result.skipped.push(name),
                PairOutcome::Failed(error) => result.failed.push((name, error)),
            }
        }

        result
    }

    pub fn identical(&self) -> &[OsString] {
        &self.identical
    }

    pub fn differing(&self) -> &[(OsString, PathBuf)] {
        &self.differing
    }

    pub fn failed(&self) -> &[(OsString, CompareError)] {
        &self.failed
    }

    pub fn only_left(&self) -> &[OsString] {
        &self.only_left
    }

    pub fn only_right(&self) -> &[OsString] {
        &self.only_right
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Status lines in report order: shared names first, then one-sided ones
    pub fn status_lines(&self) -> Vec<StatusLine<'_>> {
        let mut lines = Vec::new();

        let mut shared = self
            .identical
            .iter()
            .map(|name| (name, StatusLine::Identical { name }))
            .chain(
                self.differing
                    .iter()
                    .map(|(name, document)| (name, StatusLine::Differs { name, document })),
            )
            .chain(
                self.skipped
                    .iter()
                    .map(|name| (name, StatusLine::Skipped { name })),
            )
            .chain(
                self.failed
                    .iter()
                    .map(|(name, error)| (name, StatusLine::Failed { name, error })),
            )
            .collect::<Vec<_>>();
        shared.sort_by(|a, b| a.0.cmp(b.0));
        lines.extend(shared.into_iter().map(|(_, line)| line));

        lines.extend(self.only_left.iter().map(|name| StatusLine::OnlyIn {
            name,
            folder: &self.left,
        }));
        lines.extend(self.only_right.iter().map(|name| StatusLine::OnlyIn {
            name,
            folder: &self.right,
        }));

        lines
    }

    pub fn summary(&self) -> String {
        format!(
            "{} identical, {} differing, {} only in {}, {} only in {}, {} skipped, {} failed",
            self.identical.len(),
            self.differing.len(),
            self.only_left.len(),
            self.left.display(),
            self.only_right.len(),
            self.right.display(),
            self.skipped.len(),
            self.failed.len(),
        )
    }
}

#[derive(Debug)]
pub enum StatusLine<'r> {
    Identical {
        name: &'r OsString,
    },
    Differs {
        name: &'r OsString,
        document: &'r Path,
    },
    Skipped {
        name: &'r OsString,
    },
    Failed {
        name: &'r OsString,
        error: &'r CompareError,
    },
    OnlyIn {
        name: &'r OsString,
        folder: &'r Path,
    },
}

impl Display for StatusLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusLine::Identical { name } => write!(
                f,
                "{}",
                format!("{} is identical in both folders", name.to_string_lossy()).green()
            ),
            StatusLine::Differs { name, document } => write!(
                f,
                "{} {}",
                format!("{} differs between folders", name.to_string_lossy()).yellow(),
                format!("(written to {})", document.display()).dimmed()
            ),
            StatusLine::Skipped { name } => write!(
                f,
                "{}",
                format!(
                    "{} skipped: not a regular file in both folders",
                    name.to_string_lossy()
                )
                .dimmed()
            ),
            StatusLine::Failed { name, error } => write!(
                f,
                "{}",
                format!("{} failed: {}", name.to_string_lossy(), error.report()).red()
            ),
            StatusLine::OnlyIn { name, folder } => write!(
                f,
                "{}",
                format!(
                    "{} is only in {}",
                    name.to_string_lossy(),
                    folder.display()
                )
                .cyan()
            ),
        }
    }
}
