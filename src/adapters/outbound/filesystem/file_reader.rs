use crate::graph_construction::domain::{LOCK_FILE_NAME, MANIFEST_FILE_NAME};
use crate::ports::outbound::{LockfileReader, ManifestReader};
use crate::shared::error::GraphError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// FileSystemReader adapter for reading Composer files from the file system
///
/// This adapter implements both ManifestReader and LockfileReader ports.
/// A missing file is reported as `None`; a file that exists but fails the
/// security checks or cannot be read is an error.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads `file_name` from `project_path` when present
    ///
    /// Existence is probed without following symlinks, so a symlinked
    /// composer file is rejected instead of being treated as missing.
    /// Only `NotFound` counts as absence; any other stat failure is an error.
    fn read_optional(
        &self,
        project_path: &Path,
        file_name: &str,
    ) -> std::result::Result<Option<Vec<u8>>, (PathBuf, String)> {
        let path = project_path.join(file_name);

        match fs::symlink_metadata(&path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "file not present");
                return Ok(None);
            }
            Err(e) => return Err((path, e.to_string())),
            Ok(_) => {}
        }

        read_regular_file(&path, file_name)
            .map(Some)
            .map_err(|e| (path, e.to_string()))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, project_path: &Path) -> Result<Option<Vec<u8>>> {
        self.read_optional(project_path, MANIFEST_FILE_NAME)
            .map_err(|(path, details)| GraphError::ManifestReadError { path, details }.into())
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, project_path: &Path) -> Result<Option<Vec<u8>>> {
        self.read_optional(project_path, LOCK_FILE_NAME)
            .map_err(|(path, details)| GraphError::LockfileReadError { path, details }.into())
    }
}
