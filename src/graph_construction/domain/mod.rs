pub mod composer_json;
pub mod composer_lock;
pub mod dependency_graph;
pub mod edge;
pub mod package_node;

pub use composer_json::{
    ComposerConfig, ComposerJson, RequirementMap, SourceData, MANIFEST_FILE_NAME,
};
pub use composer_lock::{ComposerLock, LOCK_FILE_NAME};
pub use dependency_graph::{DependencyGraph, ROOT_PACKAGE_NAME};
pub use edge::{DependencyEdge, Edge};
pub use package_node::{PackageNode, DEFAULT_REPOSITORY_ID, DIR_ATTRIBUTE};
pub use petgraph::graph::{EdgeIndex, NodeIndex};
