use super::MockLockfileReader;
use composer_graph::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DependencyInstaller that records calls
///
/// On success it writes the configured lock content into the shared
/// [`MockLockfileReader`].
#[derive(Clone)]
pub struct MockInstaller {
    lockfile: Option<(MockLockfileReader, String)>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockInstaller {
    /// Installer that makes `lock_content` appear in `lockfile`
    pub fn producing(lockfile: &MockLockfileReader, lock_content: &str) -> Self {
        Self {
            lockfile: Some((lockfile.clone(), lock_content.to_string())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Installer that always fails
    pub fn failing() -> Self {
        Self {
            lockfile: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl DependencyInstaller for MockInstaller {
    fn install(&self, project_path: &Path) -> Result<()> {
        self.calls.lock().unwrap().push(project_path.to_path_buf());

        match &self.lockfile {
            Some((reader, content)) => {
                reader.set_content(content);
                Ok(())
            }
            None => Err(GraphError::InstallerFailed {
                command: self.describe(),
                details: "exit status: 1".to_string(),
            }
            .into()),
        }
    }

    fn describe(&self) -> String {
        "composer install --no-interaction".to_string()
    }
}
