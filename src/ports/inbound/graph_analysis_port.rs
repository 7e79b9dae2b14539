use crate::application::dto::{AnalysisRequest, ProjectAnalysis};
use crate::shared::Result;

/// GraphAnalysisPort - Inbound port for the project analysis use case
///
/// This port defines the interface that external adapters (CLI, other
/// tools embedding the library) use to build a project's dependency graph.
pub trait GraphAnalysisPort {
    /// Builds the dependency graph for the project named in `request`
    ///
    /// # Returns
    /// [`ProjectAnalysis::Complete`] with the graph, or
    /// [`ProjectAnalysis::ManifestMissing`] with a root-only graph when the
    /// directory has no composer.json
    ///
    /// # Errors
    /// Returns an error if:
    /// - The project directory does not exist
    /// - composer.json or composer.lock exists but cannot be read or parsed
    /// - Dependencies are declared but there is no lock data
    /// - The installer was requested and failed
    fn analyze(&self, request: AnalysisRequest) -> Result<ProjectAnalysis>;
}
