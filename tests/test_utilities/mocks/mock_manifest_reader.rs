use composer_graph::prelude::*;
use std::path::Path;

/// Mock ManifestReader returning fixed composer.json content
pub struct MockManifestReader {
    content: Option<String>,
    should_fail: bool,
}

impl MockManifestReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            should_fail: false,
        }
    }

    /// Simulates a project directory without composer.json
    pub fn missing() -> Self {
        Self {
            content: None,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: None,
            should_fail: true,
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, project_path: &Path) -> Result<Option<Vec<u8>>> {
        if self.should_fail {
            return Err(GraphError::ManifestReadError {
                path: project_path.join("composer.json"),
                details: "Permission denied (os error 13)".to_string(),
            }
            .into());
        }
        Ok(self.content.as_ref().map(|c| c.as_bytes().to_vec()))
    }
}
