use crate::application::dto::{AnalysisRequest, ProjectAnalysis};
use crate::graph_construction::domain::{
    DependencyGraph, PackageNode, DIR_ATTRIBUTE, MANIFEST_FILE_NAME, ROOT_PACKAGE_NAME,
};
use crate::graph_construction::services::GraphAnalyzer;
use crate::ports::inbound::GraphAnalysisPort;
use crate::ports::outbound::{
    DependencyInstaller, LockfileReader, ManifestReader, ProgressReporter,
};
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// AnalyzeProjectUseCase - Builds the dependency graph of a project directory
///
/// This use case orchestrates the analysis workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `LR` - LockfileReader implementation
/// * `INST` - DependencyInstaller implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeProjectUseCase<MR, LR, INST, PR> {
    manifest_reader: MR,
    lockfile_reader: LR,
    installer: INST,
    progress_reporter: PR,
}

impl<MR, LR, INST, PR> AnalyzeProjectUseCase<MR, LR, INST, PR>
where
    MR: ManifestReader,
    LR: LockfileReader,
    INST: DependencyInstaller,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeProjectUseCase with injected dependencies
    pub fn new(
        manifest_reader: MR,
        lockfile_reader: LR,
        installer: INST,
        progress_reporter: PR,
    ) -> Self {
        Self {
            manifest_reader,
            lockfile_reader,
            installer,
            progress_reporter,
        }
    }

    /// Executes the analysis use case
    ///
    /// # Arguments
    /// * `request` - Analysis request containing the project path and options
    ///
    /// # Returns
    /// ProjectAnalysis carrying the built graph
    pub fn execute(&self, request: AnalysisRequest) -> Result<ProjectAnalysis> {
        let project_path = request.project_path.as_path();

        if !project_path.is_dir() {
            return Err(GraphError::ProjectNotFound {
                path: project_path.to_path_buf(),
            }
            .into());
        }

        // Step 1: Read composer.json
        self.progress_reporter.report(&format!(
            "📖 Loading composer.json from: {}",
            project_path.display()
        ));

        let manifest = match self.manifest_reader.read_manifest(project_path)? {
            Some(manifest) => manifest,
            None => {
                let manifest_path = project_path.join(MANIFEST_FILE_NAME);
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: {} not found, reporting the project root only",
                    manifest_path.display()
                ));
                return Ok(ProjectAnalysis::ManifestMissing {
                    graph: Self::root_only_graph(project_path),
                    manifest_path,
                });
            }
        };

        // Step 2: Read composer.lock, installing dependencies if requested
        let lock = self.read_or_install_lockfile(project_path, request.install_missing_lock)?;

        // Step 3: Build the graph
        self.progress_reporter
            .report("📊 Building dependency graph...");

        let graph = GraphAnalyzer::analyze_from_data(&manifest, lock.as_deref(), project_path)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Found {} package(s) and {} dependency edge(s)",
            graph.package_count(),
            graph.edge_count()
        ));

        Ok(ProjectAnalysis::Complete(graph))
    }

    fn read_or_install_lockfile(
        &self,
        project_path: &Path,
        install_missing: bool,
    ) -> Result<Option<Vec<u8>>> {
        let lock = self.lockfile_reader.read_lockfile(project_path)?;
        if lock.is_some() || !install_missing {
            return Ok(lock);
        }

        self.progress_reporter.start_task(&format!(
            "📦 composer.lock not found, running `{}`...",
            self.installer.describe()
        ));

        if let Err(e) = self.installer.install(project_path) {
            self.progress_reporter
                .finish_task("❌ Dependency installation failed");
            return Err(e);
        }

        self.progress_reporter
            .finish_task("✅ Dependencies installed");

        self.lockfile_reader.read_lockfile(project_path)
    }

    /// Root-only graph returned when the manifest is missing
    fn root_only_graph(project_path: &Path) -> DependencyGraph {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            DIR_ATTRIBUTE.to_string(),
            project_path.display().to_string(),
        );
        DependencyGraph::new(Some(PackageNode::with_attributes(
            ROOT_PACKAGE_NAME,
            None,
            attributes,
        )))
    }
}

impl<MR, LR, INST, PR> GraphAnalysisPort for AnalyzeProjectUseCase<MR, LR, INST, PR>
where
    MR: ManifestReader,
    LR: LockfileReader,
    INST: DependencyInstaller,
    PR: ProgressReporter,
{
    fn analyze(&self, request: AnalysisRequest) -> Result<ProjectAnalysis> {
        self.execute(request)
    }
}

#[cfg(test)]
mod tests;
