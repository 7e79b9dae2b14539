use super::{ComposerJson, DependencyEdge, Edge, PackageNode};
use crate::shared::error::GraphError;
use crate::shared::Result;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// Name given to the root when the manifest does not declare one
pub const ROOT_PACKAGE_NAME: &str = "__root";

/// DependencyGraph aggregate holding every package of one analysis
///
/// Nodes are stored in a petgraph `DiGraph` and indexed by lower-cased name,
/// so every lookup is case-insensitive while [`PackageNode::name`] keeps the
/// declared spelling. Nodes are never removed, which keeps `NodeIndex`
/// values stable for the lifetime of the graph.
///
/// # Invariants
/// - Exactly one root, fixed at construction
/// - At most one edge per ordered (source, dest) pair
/// - No self-edges
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    graph: DiGraph<PackageNode, Edge>,
    index: HashMap<String, NodeIndex>,
    root: NodeIndex,
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}

impl DependencyGraph {
    /// Creates a graph rooted at `root`, or at an empty `__root` node when `None`
    pub fn new(root: Option<PackageNode>) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();

        let root_node = root.unwrap_or_else(|| PackageNode::new(ROOT_PACKAGE_NAME, None));
        let key = normalize(root_node.name());
        let root = graph.add_node(root_node);
        index.insert(key, root);

        Self { graph, index, root }
    }

    pub fn root_id(&self) -> NodeIndex {
        self.root
    }

    pub fn root(&self) -> &PackageNode {
        &self.graph[self.root]
    }

    pub fn is_root(&self, id: NodeIndex) -> bool {
        id == self.root
    }

    pub fn is_root_name(&self, name: &str) -> bool {
        normalize(self.root().name()) == normalize(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(&normalize(name))
    }

    pub fn id_of(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(&normalize(name)).copied()
    }

    pub fn get(&self, name: &str) -> Option<&PackageNode> {
        self.id_of(name).map(|id| &self.graph[id])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PackageNode> {
        let id = self.id_of(name)?;
        Some(&mut self.graph[id])
    }

    /// Returns the node for `id`
    ///
    /// # Panics
    /// Panics if `id` was not produced by this graph.
    pub fn node(&self, id: NodeIndex) -> &PackageNode {
        &self.graph[id]
    }

    /// Mutable access to the node for `id`
    ///
    /// # Panics
    /// Panics if `id` was not produced by this graph.
    pub fn node_mut(&mut self, id: NodeIndex) -> &mut PackageNode {
        &mut self.graph[id]
    }

    /// All packages in creation order, root first
    pub fn packages(&self) -> impl Iterator<Item = (NodeIndex, &PackageNode)> {
        self.graph.node_indices().map(move |id| (id, &self.graph[id]))
    }

    pub fn package_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the node named `name`, registering an empty one if absent
    pub fn get_or_create(&mut self, name: &str) -> NodeIndex {
        if let Some(id) = self.id_of(name) {
            return id;
        }

        self.insert(PackageNode::new(name, None))
    }

    /// Registers a new node built from its manifest or lock record
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicatePackage`] if a node with that name
    /// (case-insensitive) already exists. The graph is left unchanged.
    pub fn create(&mut self, name: &str, declared: Option<ComposerJson>) -> Result<NodeIndex> {
        if self.has(name) {
            return Err(GraphError::DuplicatePackage {
                name: name.to_string(),
            }
            .into());
        }

        Ok(self.insert(PackageNode::new(name, declared)))
    }

    /// Adds an edge from `source` to `dest`, materializing either endpoint if needed
    ///
    /// Self-edges and duplicate (source, dest) pairs are silently refused, so
    /// repeated calls are idempotent. Returns the new edge, if one was added.
    pub fn connect(
        &mut self,
        source: &str,
        dest: &str,
        version_constraint: &str,
    ) -> Option<EdgeIndex> {
        let source_id = self.get_or_create(source);
        let dest_id = self.get_or_create(dest);

        if source_id == dest_id {
            return None;
        }

        if self.graph.find_edge(source_id, dest_id).is_some() {
            return None;
        }

        Some(
            self.graph
                .add_edge(source_id, dest_id, Edge::new(version_constraint)),
        )
    }

    /// Finds a node whose `replace` map contains `name` (case-insensitive)
    ///
    /// When several nodes replace the same name, the first one created wins.
    pub fn find_aggregate_containing(&self, name: &str) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&id| self.graph[id].replaces(name))
    }

    /// Out-edges of `id` in the order they were created
    pub fn out_edges(&self, id: NodeIndex) -> Vec<DependencyEdge<'_>> {
        self.edges_directed(id, Direction::Outgoing)
    }

    /// In-edges of `id` in the order they were created
    pub fn in_edges(&self, id: NodeIndex) -> Vec<DependencyEdge<'_>> {
        self.edges_directed(id, Direction::Incoming)
    }

    /// Every edge of the graph in creation order
    pub fn edges(&self) -> impl Iterator<Item = DependencyEdge<'_>> {
        self.graph.edge_references().map(move |e| {
            DependencyEdge::new(
                e.id(),
                &self.graph[e.source()],
                &self.graph[e.target()],
                e.weight(),
            )
        })
    }

    fn edges_directed(&self, id: NodeIndex, direction: Direction) -> Vec<DependencyEdge<'_>> {
        let mut edges: Vec<DependencyEdge<'_>> = self
            .graph
            .edges_directed(id, direction)
            .map(|e| {
                DependencyEdge::new(
                    e.id(),
                    &self.graph[e.source()],
                    &self.graph[e.target()],
                    e.weight(),
                )
            })
            .collect();
        edges.sort_by_key(|e| e.id());
        edges
    }

    fn insert(&mut self, node: PackageNode) -> NodeIndex {
        let key = normalize(node.name());
        let id = self.graph.add_node(node);
        self.index.insert(key, id);
        id
    }
}
