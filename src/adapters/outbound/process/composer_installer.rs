use crate::ports::outbound::DependencyInstaller;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Executable used when no composer binary is configured
pub const DEFAULT_COMPOSER_BINARY: &str = "composer";

const INSTALL_ARGS: [&str; 2] = ["install", "--no-interaction"];

/// ComposerInstaller adapter running `composer install` in the project directory
pub struct ComposerInstaller {
    binary: String,
}

impl ComposerInstaller {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for ComposerInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_COMPOSER_BINARY)
    }
}

impl DependencyInstaller for ComposerInstaller {
    fn install(&self, project_path: &Path) -> Result<()> {
        debug!(binary = %self.binary, path = %project_path.display(), "running installer");

        let output = Command::new(&self.binary)
            .args(INSTALL_ARGS)
            .current_dir(project_path)
            .output()
            .map_err(|e| GraphError::InstallerFailed {
                command: self.describe(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GraphError::InstallerFailed {
                command: self.describe(),
                details: format!("{}\n{}", output.status, stderr.trim()),
            }
            .into());
        }

        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} {}", self.binary, INSTALL_ARGS.join(" "))
    }
}
