use crate::areas::folder::{EntryKind, Folder};
use crate::artifacts::compare::error::CompareError;
use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

/// Flat listings of both folders split into shared and one-sided names.
///
/// Built fresh for every run; nothing is cached between comparisons.
#[derive(Debug, Clone)]
pub struct FolderComparison {
    left: Folder,
    right: Folder,
    common: BTreeSet<OsString>,
    only_left: BTreeSet<OsString>,
    only_right: BTreeSet<OsString>,
}

impl FolderComparison {
    pub fn new(left: Folder, right: Folder) -> Result<Self, CompareError> {
        let left_entries = left.list_entries()?;
        let right_entries = right.list_entries()?;

        let common = left_entries
            .intersection(&right_entries)
            .cloned()
            .collect();
        let only_left = left_entries.difference(&right_entries).cloned().collect();
        let only_right = right_entries.difference(&left_entries).cloned().collect();

        Ok(FolderComparison {
            left,
            right,
            common,
            only_left,
            only_right,
        })
    }

    pub fn left(&self) -> &Folder {
        &self.left
    }

    pub fn right(&self) -> &Folder {
        &self.right
    }

    pub fn common(&self) -> &BTreeSet<OsString> {
        &self.common
    }

    pub fn only_left(&self) -> &BTreeSet<OsString> {
        &self.only_left
    }

    pub fn only_right(&self) -> &BTreeSet<OsString> {
        &self.only_right
    }

    /// Whether a shared name is a regular file on both sides
    pub fn is_comparable(&self, name: &OsStr) -> bool {
        self.left.entry_kind(name) == EntryKind::File
            && self.right.entry_kind(name) == EntryKind::File
    }
}
