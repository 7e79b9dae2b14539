use composer_graph::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock LockfileReader backed by shared state
///
/// Clones share the same lock content, so a [`super::MockInstaller`]
/// can make the lock file appear after installation.
#[derive(Clone, Default)]
pub struct MockLockfileReader {
    content: Arc<Mutex<Option<String>>>,
    reads: Arc<Mutex<usize>>,
}

impl MockLockfileReader {
    pub fn new(content: &str) -> Self {
        let reader = Self::default();
        reader.set_content(content);
        reader
    }

    /// Simulates a project that was never installed
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn set_content(&self, content: &str) {
        *self.content.lock().unwrap() = Some(content.to_string());
    }

    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, _project_path: &Path) -> Result<Option<Vec<u8>>> {
        *self.reads.lock().unwrap() += 1;
        Ok(self
            .content
            .lock()
            .unwrap()
            .as_ref()
            .map(|c| c.as_bytes().to_vec()))
    }
}
