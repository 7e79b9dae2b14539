//! Graph read model for query operations

use serde::Serialize;
use std::collections::BTreeMap;

/// Main read model for a dependency graph
///
/// Packages are ordered root first, then by name. Every formatter renders
/// from this struct so that output never depends on graph insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReadModel {
    pub metadata: GraphMetadataView,
    pub root: String,
    pub packages: Vec<PackageView>,
}

/// View representation of the run that produced the graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphMetadataView {
    /// RFC 3339 timestamp when the model was built
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    /// Whether dev edges are part of this view
    pub include_dev: bool,
}

/// View representation of a single package
#[derive(Debug, Clone, Serialize)]
pub struct PackageView {
    pub name: String,
    pub is_root: bool,
    pub version: Option<String>,
    pub source_reference: Option<String>,
    pub qualified_name: String,
    pub attributes: BTreeMap<String, String>,
    /// Out-edges sorted by destination name
    pub dependencies: Vec<EdgeView>,
}

/// View representation of an out-edge
#[derive(Debug, Clone, Serialize)]
pub struct EdgeView {
    /// Destination package name
    pub name: String,
    pub version_constraint: String,
    pub is_dev: bool,
}

impl GraphReadModel {
    pub fn root_package(&self) -> Option<&PackageView> {
        self.packages.iter().find(|p| p.is_root)
    }

    pub fn find_package(&self, name: &str) -> Option<&PackageView> {
        self.packages
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
