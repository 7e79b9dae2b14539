use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading composer.lock
pub trait LockfileReader {
    /// Reads composer.lock from the specified project directory
    ///
    /// # Returns
    /// The raw bytes of composer.lock, or `None` if the project has no lock file
    ///
    /// # Errors
    /// Returns an error only if the file exists but cannot be read
    fn read_lockfile(&self, project_path: &Path) -> Result<Option<Vec<u8>>>;
}
