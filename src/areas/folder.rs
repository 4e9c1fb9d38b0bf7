use crate::artifacts::compare::error::CompareError;
use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// One side of a comparison: a directory whose top-level entries are compared
#[derive(Debug, Clone)]
pub struct Folder {
    path: Box<Path>,
}

impl Folder {
    pub fn open(path: &Path) -> Result<Self, CompareError> {
        let metadata = std::fs::metadata(path).map_err(|source| CompareError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        if !metadata.is_dir() {
            return Err(CompareError::InputNotFound {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            });
        }

        Ok(Folder {
            path: path.to_path_buf().into_boxed_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_path(&self, name: &OsStr) -> PathBuf {
        self.path.join(name)
    }

    /// Names of the top-level entries, without descending into subdirectories
    pub fn list_entries(&self) -> Result<BTreeSet<OsString>, CompareError> {
        WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .map(|entry| {
                entry
                    .map(|entry| entry.file_name().to_os_string())
                    .map_err(|error| CompareError::InputNotFound {
                        path: self.path.to_path_buf(),
                        source: error.into(),
                    })
            })
            .collect()
    }

    /// Kind of an entry, following symlinks the way a plain `stat` does
    pub fn entry_kind(&self, name: &OsStr) -> EntryKind {
        match std::fs::metadata(self.entry_path(name)) {
            Ok(metadata) if metadata.is_file() => EntryKind::File,
            Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
            _ => EntryKind::Other,
        }
    }

    /// Read an entry as text, one element per line with terminators removed
    pub fn read_lines(&self, name: &OsStr) -> Result<Vec<String>, CompareError> {
        let path = self.entry_path(name);
        let content = std::fs::read_to_string(&path)
            .map_err(|source| CompareError::FileReadFailure { path, source })?;

        Ok(content.lines().map(String::from).collect())
    }
}

/// Byte-for-byte equality of two files, checking sizes before contents
pub fn same_content(left: &Path, right: &Path) -> Result<bool, CompareError> {
    let read_failure = |path: &Path| {
        let path = path.to_path_buf();
        move |source| CompareError::FileReadFailure { path, source }
    };

    let left_file = File::open(left).map_err(read_failure(left))?;
    let right_file = File::open(right).map_err(read_failure(right))?;

    let left_len = left_file.metadata().map_err(read_failure(left))?.len();
    let right_len = right_file.metadata().map_err(read_failure(right))?.len();
    if left_len != right_len {
        return Ok(false);
    }

    let mut left_reader = BufReader::new(left_file);
    let mut right_reader = BufReader::new(right_file);

    loop {
        let left_chunk = left_reader.fill_buf().map_err(read_failure(left))?;
        let right_chunk = right_reader.fill_buf().map_err(read_failure(right))?;

        if left_chunk.is_empty() && right_chunk.is_empty() {
            return Ok(true);
        }

        let len = left_chunk.len().min(right_chunk.len());
        if len == 0 || left_chunk[..len] != right_chunk[..len] {
            return Ok(false);
        }

        left_reader.consume(len);
        right_reader.consume(len);
    }
}
