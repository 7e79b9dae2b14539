//! Builder for constructing GraphReadModel from the domain graph

use super::graph_read_model::{EdgeView, GraphMetadataView, GraphReadModel, PackageView};
use crate::graph_construction::domain::{DependencyGraph, PackageNode};
use chrono::Utc;
use petgraph::graph::NodeIndex;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing GraphReadModel from a DependencyGraph
pub struct GraphReadModelBuilder {
    include_dev: bool,
}

impl Default for GraphReadModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphReadModelBuilder {
    pub fn new() -> Self {
        Self { include_dev: true }
    }

    /// Controls whether dev edges appear in the built model
    pub fn include_dev(mut self, include_dev: bool) -> Self {
        self.include_dev = include_dev;
        self
    }

    /// Builds the read model
    ///
    /// The root comes first, the remaining packages follow sorted by name.
    /// Each package's edges are sorted by destination name.
    pub fn build(&self, graph: &DependencyGraph) -> GraphReadModel {
        let mut others: Vec<(NodeIndex, &PackageNode)> = graph
            .packages()
            .filter(|(id, _)| !graph.is_root(*id))
            .collect();
        others.sort_by(|(_, a), (_, b)| a.name().cmp(b.name()));

        let root_id = graph.root_id();
        let packages = std::iter::once((root_id, graph.root()))
            .chain(others)
            .map(|(id, node)| self.build_package(graph, id, node))
            .collect();

        GraphReadModel {
            metadata: self.build_metadata(),
            root: graph.root().name().to_string(),
            packages,
        }
    }

    fn build_metadata(&self) -> GraphMetadataView {
        GraphMetadataView {
            timestamp: Utc::now().to_rfc3339(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: TOOL_VERSION.to_string(),
            include_dev: self.include_dev,
        }
    }

    fn build_package(&self, graph: &DependencyGraph, id: NodeIndex, node: &PackageNode) -> PackageView {
        let mut dependencies: Vec<EdgeView> = graph
            .out_edges(id)
            .into_iter()
            .filter(|edge| self.include_dev || !edge.is_dev_dependency())
            .map(|edge| EdgeView {
                name: edge.dest().name().to_string(),
                version_constraint: edge.version_constraint().to_string(),
                is_dev: edge.is_dev_dependency(),
            })
            .collect();
        dependencies.sort_by(|a, b| a.name.cmp(&b.name));

        PackageView {
            name: node.name().to_string(),
            is_root: graph.is_root(id),
            version: node.version().map(str::to_string),
            source_reference: node.source_reference().map(str::to_string),
            qualified_name: node.qualified_name(),
            attributes: node.attributes().clone(),
            dependencies,
        }
    }
}
