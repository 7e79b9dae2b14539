use super::PackageNode;
use petgraph::graph::EdgeIndex;

/// Payload stored on each graph arc: the constraint the source declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    version_constraint: String,
}

impl Edge {
    pub fn new(version_constraint: impl Into<String>) -> Self {
        Self {
            version_constraint: version_constraint.into(),
        }
    }

    pub fn version_constraint(&self) -> &str {
        &self.version_constraint
    }
}

/// Borrowed view of an edge together with both endpoints
#[derive(Debug, Clone, Copy)]
pub struct DependencyEdge<'g> {
    id: EdgeIndex,
    source: &'g PackageNode,
    dest: &'g PackageNode,
    edge: &'g Edge,
}

impl<'g> DependencyEdge<'g> {
    pub(crate) fn new(
        id: EdgeIndex,
        source: &'g PackageNode,
        dest: &'g PackageNode,
        edge: &'g Edge,
    ) -> Self {
        Self {
            id,
            source,
            dest,
            edge,
        }
    }

    pub fn id(&self) -> EdgeIndex {
        self.id
    }

    pub fn source(&self) -> &'g PackageNode {
        self.source
    }

    pub fn dest(&self) -> &'g PackageNode {
        self.dest
    }

    pub fn version_constraint(&self) -> &'g str {
        self.edge.version_constraint()
    }

    /// True iff the source declares the destination in its `require-dev`
    pub fn is_dev_dependency(&self) -> bool {
        self.source.requires_dev(self.dest.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_construction::domain::ComposerJson;

    #[test]
    fn test_dev_classification_follows_source_manifest() {
        let declared = ComposerJson::parse(
            br#"{"require": {"lib/a": "^1.0"}, "require-dev": {"PHPUnit/PHPUnit": "^10"}}"#,
        )
        .unwrap();
        let source = PackageNode::new("app", Some(declared));
        let runtime = PackageNode::new("lib/a", None);
        let dev = PackageNode::new("phpunit/phpunit", None);
        let runtime_edge = Edge::new("^1.0");
        let dev_edge = Edge::new("^10");

        let runtime_view = DependencyEdge::new(EdgeIndex::new(0), &source, &runtime, &runtime_edge);
        let dev_view = DependencyEdge::new(EdgeIndex::new(1), &source, &dev, &dev_edge);

        assert!(!runtime_view.is_dev_dependency());
        assert!(dev_view.is_dev_dependency());
        assert_eq!(dev_view.version_constraint(), "^10");
        assert_eq!(dev_view.source().name(), "app");
        assert_eq!(dev_view.dest().name(), "phpunit/phpunit");
    }

    #[test]
    fn test_placeholder_source_is_never_dev() {
        let source = PackageNode::new("lib/a", None);
        let dest = PackageNode::new("lib/b", None);
        let edge = Edge::new("*");

        let view = DependencyEdge::new(EdgeIndex::new(0), &source, &dest, &edge);
        assert!(!view.is_dev_dependency());
    }
}
