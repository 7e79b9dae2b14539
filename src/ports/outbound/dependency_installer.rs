use crate::shared::Result;
use std::path::Path;

/// DependencyInstaller port for materializing composer.lock
///
/// Implementations run the package manager so that a project whose
/// dependencies were never installed gets a lock file.
pub trait DependencyInstaller {
    /// Installs the dependencies of the project, producing composer.lock
    ///
    /// # Errors
    /// Returns an error if the installer cannot be started or exits unsuccessfully
    fn install(&self, project_path: &Path) -> Result<()>;

    /// Human-readable command line, used in progress messages
    fn describe(&self) -> String;
}
