use crate::artifacts::compare::error::CompareError;
use std::ffi::OsStr;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DOCUMENT_EXTENSION: &str = "html";

/// Directory that receives one rendered document per differing file
#[derive(Debug, Clone)]
pub struct Destination {
    path: Box<Path>,
}

impl Destination {
    pub fn create(path: &Path) -> Result<Self, CompareError> {
        std::fs::create_dir_all(path).map_err(|source| CompareError::OutputDirectoryFailure {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Destination {
            path: path.to_path_buf().into_boxed_path(),
        })
    }

    /// `<name>.html`, keeping the original extension in place
    pub fn document_path(&self, name: &OsStr) -> PathBuf {
        let mut file_name = name.to_os_string();
        file_name.push(".");
        file_name.push(DOCUMENT_EXTENSION);
        self.path.join(file_name)
    }

    pub fn write_document(&self, name: &OsStr, contents: &str) -> Result<PathBuf, CompareError> {
        let path = self.document_path(name);
        let write_failure = |source| CompareError::OutputWriteFailure {
            path: path.clone(),
            source,
        };

        let mut file = File::create(&path).map_err(write_failure)?;
        file.write_all(contents.as_bytes()).map_err(write_failure)?;
        file.flush().map_err(write_failure)?;

        Ok(path)
    }
}
