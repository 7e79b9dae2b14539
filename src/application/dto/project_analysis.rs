use crate::graph_construction::domain::DependencyGraph;
use std::path::PathBuf;

/// ProjectAnalysis - Response DTO of the project analysis use case
///
/// A missing composer.json is an expected outcome, not an error: the caller
/// receives a root-only graph tagged with the project directory together
/// with the manifest path that was looked up.
#[derive(Debug, Clone)]
pub enum ProjectAnalysis {
    /// composer.json was found and analyzed
    Complete(DependencyGraph),
    /// The project directory has no composer.json
    ManifestMissing {
        graph: DependencyGraph,
        manifest_path: PathBuf,
    },
}

impl ProjectAnalysis {
    pub fn graph(&self) -> &DependencyGraph {
        match self {
            ProjectAnalysis::Complete(graph) => graph,
            ProjectAnalysis::ManifestMissing { graph, .. } => graph,
        }
    }

    pub fn into_graph(self) -> DependencyGraph {
        match self {
            ProjectAnalysis::Complete(graph) => graph,
            ProjectAnalysis::ManifestMissing { graph, .. } => graph,
        }
    }

    pub fn is_manifest_missing(&self) -> bool {
        matches!(self, ProjectAnalysis::ManifestMissing { .. })
    }
}
