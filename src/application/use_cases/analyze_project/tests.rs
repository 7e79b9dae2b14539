use super::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// Mock implementations for testing
struct MockManifestReader {
    content: Option<String>,
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _project_path: &Path) -> Result<Option<Vec<u8>>> {
        Ok(self.content.as_ref().map(|c| c.as_bytes().to_vec()))
    }
}

/// Lock file shared between the reader and the installer mock
type SharedLock = Arc<Mutex<Option<String>>>;

struct MockLockfileReader {
    content: SharedLock,
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, _project_path: &Path) -> Result<Option<Vec<u8>>> {
        let content = self.content.lock().unwrap();
        Ok(content.as_ref().map(|c| c.as_bytes().to_vec()))
    }
}

struct MockInstaller {
    lock: SharedLock,
    produces: Option<String>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl DependencyInstaller for MockInstaller {
    fn install(&self, project_path: &Path) -> Result<()> {
        self.calls.lock().unwrap().push(project_path.to_path_buf());
        match &self.produces {
            Some(lock) => {
                *self.lock.lock().unwrap() = Some(lock.clone());
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

#[derive(Clone, Default)]
struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn start_task(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("start: {}", message));
    }

    fn finish_task(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("finish: {}", message));
    }

    fn report_error(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("complete: {}", message));
    }
}

struct Fixture {
    use_case: AnalyzeProjectUseCase<
        MockManifestReader,
        MockLockfileReader,
        MockInstaller,
        MockProgressReporter,
    >,
    installs: Arc<Mutex<Vec<PathBuf>>>,
    reporter: MockProgressReporter,
}

fn fixture(manifest: Option<&str>, lock: Option<&str>, installer_produces: Option<&str>) -> Fixture {
    let shared: SharedLock = Arc::new(Mutex::new(lock.map(str::to_string)));
    let installs = Arc::new(Mutex::new(Vec::new()));
    let reporter = MockProgressReporter::default();

    let use_case = AnalyzeProjectUseCase::new(
        MockManifestReader {
            content: manifest.map(str::to_string),
        },
        MockLockfileReader {
            content: Arc::clone(&shared),
        },
        MockInstaller {
            lock: shared,
            produces: installer_produces.map(str::to_string),
            calls: Arc::clone(&installs),
        },
        reporter.clone(),
    );

    Fixture {
        use_case,
        installs,
        reporter,
    }
}

const MANIFEST: &str = r#"{"name": "acme/app", "require": {"php": ">=8.1", "lib/a": "^1.0"}}"#;
const LOCK: &str = r#"{"packages": [{"name": "lib/a", "version": "1.0.3"}]}"#;

#[test]
fn test_execute_builds_complete_graph() {
    let dir = TempDir::new().unwrap();
    let f = fixture(Some(MANIFEST), Some(LOCK), None);

    let analysis = f
        .use_case
        .execute(AnalysisRequest::new(dir.path().to_path_buf()))
        .unwrap();

    assert!(!analysis.is_manifest_missing());
    let graph = analysis.graph();
    assert_eq!(graph.root().name(), "acme/app");
    assert_eq!(graph.get("lib/a").unwrap().version(), Some("1.0.3"));
    assert!(graph.has("php"));
    assert!(f.installs.lock().unwrap().is_empty());
}

#[test]
fn test_execute_nonexistent_project() {
    let f = fixture(Some(MANIFEST), Some(LOCK), None);

    let err = f
        .use_case
        .execute(AnalysisRequest::new(PathBuf::from("/nonexistent/project")))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GraphError>(),
        Some(GraphError::ProjectNotFound { .. })
    ));
}

#[test]
fn test_execute_missing_manifest_returns_root_only_graph() {
    let dir = TempDir::new().unwrap();
    let f = fixture(None, None, None);

    let analysis = f
        .use_case
        .execute(AnalysisRequest::new(dir.path().to_path_buf()))
        .unwrap();

    match analysis {
        ProjectAnalysis::ManifestMissing {
            graph,
            manifest_path,
        } => {
            assert_eq!(manifest_path, dir.path().join("composer.json"));
            assert_eq!(graph.package_count(), 1);
            assert_eq!(graph.root().name(), "__root");
            assert_eq!(
                graph.root().attribute(DIR_ATTRIBUTE),
                Some(dir.path().display().to_string().as_str())
            );
        }
        ProjectAnalysis::Complete(_) => panic!("expected ManifestMissing"),
    }

    let messages = f.reporter.messages.lock().unwrap();
    assert!(messages.iter().any(|m| m.contains("not found")));
}

#[test]
fn test_execute_missing_lock_without_install_fails() {
    let dir = TempDir::new().unwrap();
    let f = fixture(Some(MANIFEST), None, Some(LOCK));

    let err = f
        .use_case
        .execute(AnalysisRequest::new(dir.path().to_path_buf()))
        .unwrap_err();

    match err.downcast_ref::<GraphError>() {
        Some(GraphError::MissingLockData { packages }) => {
            assert_eq!(packages, &vec!["lib/a".to_string()]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(f.installs.lock().unwrap().is_empty());
}

#[test]
fn test_execute_runs_installer_when_requested() {
    let dir = TempDir::new().unwrap();
    let f = fixture(Some(MANIFEST), None, Some(LOCK));

    let request = AnalysisRequest::new(dir.path().to_path_buf()).with_install_missing_lock(true);
    let analysis = f.use_case.execute(request).unwrap();

    assert_eq!(
        analysis.graph().get("lib/a").unwrap().version(),
        Some("1.0.3")
    );
    assert_eq!(*f.installs.lock().unwrap(), vec![dir.path().to_path_buf()]);

    let messages = f.reporter.messages.lock().unwrap();
    assert!(messages
        .iter()
        .any(|m| m.starts_with("start:") && m.contains("composer install")));
    assert!(messages.iter().any(|m| m == "finish: ✅ Dependencies installed"));
}

#[test]
fn test_execute_installer_failure_propagates() {
    let dir = TempDir::new().unwrap();
    let f = fixture(Some(MANIFEST), None, None);

    let request = AnalysisRequest::new(dir.path().to_path_buf()).with_install_missing_lock(true);
    let err = f.use_case.execute(request).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GraphError>(),
        Some(GraphError::InstallerFailed { .. })
    ));
    let messages = f.reporter.messages.lock().unwrap();
    assert!(messages.iter().any(|m| m.contains("installation failed")));
}

#[test]
fn test_execute_existing_lock_skips_installer() {
    let dir = TempDir::new().unwrap();
    let f = fixture(Some(MANIFEST), Some(LOCK), None);

    let request = AnalysisRequest::new(dir.path().to_path_buf()).with_install_missing_lock(true);
    f.use_case.execute(request).unwrap();

    assert!(f.installs.lock().unwrap().is_empty());
}

#[test]
fn test_platform_only_project_needs_no_lock() {
    let dir = TempDir::new().unwrap();
    let f = fixture(
        Some(r#"{"require": {"php": "^8.2", "ext-json": "*"}}"#),
        None,
        None,
    );

    let analysis = f
        .use_case
        .analyze(AnalysisRequest::new(dir.path().to_path_buf()))
        .unwrap();

    let graph = analysis.into_graph();
    assert_eq!(graph.root().name(), "__root");
    assert_eq!(graph.out_edges(graph.root_id()).len(), 2);
}

#[test]
fn test_execute_reports_progress() {
    let dir = TempDir::new().unwrap();
    let f = fixture(Some(MANIFEST), Some(LOCK), None);

    f.use_case
        .execute(AnalysisRequest::new(dir.path().to_path_buf()))
        .unwrap();

    let messages = f.reporter.messages.lock().unwrap();
    assert!(messages[0].starts_with("📖 Loading composer.json"));
    assert_eq!(
        messages.last().map(String::as_str),
        Some("complete: ✅ Found 3 package(s) and 2 dependency edge(s)")
    );
}
