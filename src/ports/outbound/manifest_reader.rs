use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading composer.json
///
/// This port abstracts the file system operations needed to read
/// the project manifest from a project directory.
pub trait ManifestReader {
    /// Reads composer.json from the specified project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory
    ///
    /// # Returns
    /// The raw bytes of composer.json, or `None` if the file does not exist
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read due to
    /// permissions, I/O errors or security checks
    fn read_manifest(&self, project_path: &Path) -> Result<Option<Vec<u8>>>;
}
