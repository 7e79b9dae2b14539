use std::path::PathBuf;

/// AnalysisRequest - Request DTO for the project analysis use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Path to the project directory containing composer.json
    pub project_path: PathBuf,
    /// Run the installer when composer.lock is missing
    pub install_missing_lock: bool,
}

impl AnalysisRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            install_missing_lock: false,
        }
    }

    pub fn with_install_missing_lock(mut self, install_missing_lock: bool) -> Self {
        self.install_missing_lock = install_missing_lock;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_does_not_install() {
        let request = AnalysisRequest::new(PathBuf::from("/srv/app"));
        assert_eq!(request.project_path, PathBuf::from("/srv/app"));
        assert!(!request.install_missing_lock);
    }

    #[test]
    fn test_with_install_missing_lock() {
        let request = AnalysisRequest::new(PathBuf::from(".")).with_install_missing_lock(true);
        assert!(request.install_missing_lock);
    }
}
