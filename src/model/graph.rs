//! Graph orchestration: entity collections and cross-entity validation
//!
//! The graph owns one [`AttributeSchema`] per entity kind and enforces the
//! invariants individual entities cannot see: unique node names, endpoint
//! referential integrity and the duplicate-edge policy. A failed mutation
//! leaves collections and used-column state exactly as they were.

use std::collections::HashMap;

use crate::error::{GdfError, Result};

use super::edge::Edge;
use super::node::Node;
use super::schema::{AttrValue, AttributeSchema, Record, TypeTag};

/// Attributed graph: schemas, node collection, edge collection
///
/// Nodes and edges are kept in insertion order, which is also the export
/// order.
///
/// # Example
///
/// ```
/// use gdf_graph::{AttrValue, Graph, TypeTag};
///
/// # fn main() -> gdf_graph::Result<()> {
/// let mut graph = Graph::new();
/// graph.extend_node_schema(&[("connections", TypeTag::Double)]);
///
/// graph.add_node(&[
///     ("name", AttrValue::from("a")),
///     ("connections", AttrValue::from(2)),
/// ])?;
/// graph.add_node(&[("name", AttrValue::from("b"))])?;
/// graph.add_link(&[
///     ("node1", AttrValue::from("a")),
///     ("node2", AttrValue::from("b")),
/// ])?;
///
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.num_edges(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    node_schema: AttributeSchema,
    edge_schema: AttributeSchema,
    nodes: Vec<Node>,
    /// Name → position in `nodes`
    node_index: HashMap<String, usize>,
    edges: Vec<Edge>,
    allow_duplicate_edges: bool,
}

impl Graph {
    /// Empty graph with the built-in schemas; duplicate edges rejected
    #[must_use]
    pub fn new() -> Self {
        Self {
            node_schema: AttributeSchema::node_defaults(),
            edge_schema: AttributeSchema::edge_defaults(),
            nodes: Vec::new(),
            node_index: HashMap::new(),
            edges: Vec::new(),
            allow_duplicate_edges: false,
        }
    }

    /// Empty graph with schema extensions and an explicit duplicate-edge
    /// policy
    #[must_use]
    pub fn with_schemas(
        node_extensions: &[(&str, TypeTag)],
        edge_extensions: &[(&str, TypeTag)],
        allow_duplicate_edges: bool,
    ) -> Self {
        let mut graph = Self::new();
        graph.node_schema.extend(node_extensions);
        graph.edge_schema.extend(edge_extensions);
        graph.allow_duplicate_edges = allow_duplicate_edges;
        graph
    }

    /// Declare extra node columns (or retag existing ones)
    ///
    /// Affects validation of nodes added afterwards; already-committed
    /// nodes and their rendered columns are untouched.
    pub fn extend_node_schema(&mut self, entries: &[(&str, TypeTag)]) {
        self.node_schema.extend(entries);
    }

    /// Declare extra edge columns (or retag existing ones)
    pub fn extend_edge_schema(&mut self, entries: &[(&str, TypeTag)]) {
        self.edge_schema.extend(entries);
    }

    /// Node schema, read-only
    #[must_use]
    pub fn node_schema(&self) -> &AttributeSchema {
        &self.node_schema
    }

    /// Edge schema, read-only
    #[must_use]
    pub fn edge_schema(&self) -> &AttributeSchema {
        &self.edge_schema
    }

    /// Whether `add_link` accepts a repeated ordered endpoint pair
    #[must_use]
    pub fn allows_duplicate_edges(&self) -> bool {
        self.allow_duplicate_edges
    }

    /// Add a node from its attribute pairs
    ///
    /// # Errors
    ///
    /// Returns [`GdfError::UndeclaredAttribute`] or
    /// [`GdfError::MissingRequiredField`] from node construction, and
    /// [`GdfError::DuplicateNode`] when a node with the same name exists.
    /// On failure the graph is unchanged.
    pub fn add_node(&mut self, attributes: &[(&str, AttrValue)]) -> Result<()> {
        let node = Node::new(collect_record(attributes), &self.node_schema)?;

        if self.node_index.contains_key(node.name()) {
            return Err(GdfError::DuplicateNode(node.name().to_string()));
        }

        // Commit: usage marking happens only once all checks passed
        self.node_schema.mark_used(node.record().keys());
        self.node_index
            .insert(node.name().to_string(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Add an edge between existing nodes from its attribute pairs
    ///
    /// # Errors
    ///
    /// Returns [`GdfError::UndeclaredAttribute`] or
    /// [`GdfError::MissingRequiredField`] from edge construction,
    /// [`GdfError::UnknownEndpoint`] when either endpoint does not name a
    /// known node, and [`GdfError::DuplicateEdge`] when the ordered pair is
    /// already present and duplicates are disallowed. On failure the graph
    /// is unchanged.
    pub fn add_link(&mut self, attributes: &[(&str, AttrValue)]) -> Result<()> {
        let edge = Edge::new(collect_record(attributes), &self.edge_schema)?;

        let (node1, node2) = edge.endpoints();
        for endpoint in [node1, node2] {
            if !self.node_index.contains_key(endpoint) {
                return Err(GdfError::UnknownEndpoint(endpoint.to_string()));
            }
        }

        if !self.allow_duplicate_edges
            && self
                .edges
                .iter()
                .any(|existing| existing.endpoints() == (node1, node2))
        {
            return Err(GdfError::DuplicateEdge(
                node1.to_string(),
                node2.to_string(),
            ));
        }

        self.edge_schema.mark_used(edge.record().keys());
        self.edges.push(edge);
        Ok(())
    }

    /// Number of nodes
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Whether a node with this name exists
    #[must_use]
    pub fn contains_node(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    /// Node by name
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.node_index.get(name).map(|&position| &self.nodes[position])
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_record(attributes: &[(&str, AttrValue)]) -> Record {
    attributes
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(value: impl Into<AttrValue>) -> AttrValue {
        value.into()
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert!(!graph.allows_duplicate_edges());
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut graph = Graph::new();
        graph.add_node(&[("name", v("a"))]).unwrap();

        let result = graph.add_node(&[("name", v("a")), ("label", v("again"))]);
        assert!(matches!(result, Err(GdfError::DuplicateNode(name)) if name == "a"));
        assert_eq!(graph.num_nodes(), 1);
    }

    #[test]
    fn test_failed_add_does_not_mark_used() {
        let mut graph = Graph::new();
        graph.add_node(&[("name", v("a"))]).unwrap();

        // Fails at the duplicate check, after record validation
        let _ = graph.add_node(&[("name", v("a")), ("label", v("again"))]);
        assert!(!graph.node_schema().is_used("label"));

        // Fails at record validation
        let _ = graph.add_node(&[("name", v("b")), ("bogus", v(1))]);
        assert!(!graph.contains_node("b"));
        assert_eq!(graph.num_nodes(), 1);
    }

    #[test]
    fn test_link_requires_known_endpoints() {
        let mut graph = Graph::new();
        graph.add_node(&[("name", v("a"))]).unwrap();

        let result = graph.add_link(&[("node1", v("a")), ("node2", v("ghost"))]);
        assert!(matches!(result, Err(GdfError::UnknownEndpoint(name)) if name == "ghost"));
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_duplicate_edge_policy() {
        let mut graph = Graph::new();
        graph.add_node(&[("name", v("a"))]).unwrap();
        graph.add_node(&[("name", v("b"))]).unwrap();

        graph
            .add_link(&[("node1", v("a")), ("node2", v("b")), ("weight", v(0.3))])
            .unwrap();

        // Same ordered pair, different payload: still a duplicate
        let result = graph.add_link(&[("node1", v("a")), ("node2", v("b")), ("weight", v(0.9))]);
        assert!(
            matches!(result, Err(GdfError::DuplicateEdge(n1, n2)) if n1 == "a" && n2 == "b")
        );

        // Opposite direction is a different ordered pair
        graph
            .add_link(&[("node1", v("b")), ("node2", v("a"))])
            .unwrap();
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn test_parallel_edges_when_allowed() {
        let mut graph = Graph::with_schemas(&[], &[], true);
        graph.add_node(&[("name", v("a"))]).unwrap();
        graph.add_node(&[("name", v("b"))]).unwrap();

        graph
            .add_link(&[("node1", v("a")), ("node2", v("b")), ("weight", v(0.3))])
            .unwrap();
        graph
            .add_link(&[("node1", v("a")), ("node2", v("b")), ("weight", v(0.4))])
            .unwrap();

        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn test_node_lookup() {
        let mut graph = Graph::new();
        graph
            .add_node(&[("name", v("a")), ("label", v("Alpha"))])
            .unwrap();

        assert!(graph.contains_node("a"));
        let node = graph.node("a").unwrap();
        assert_eq!(node.get("label"), Some(&AttrValue::from("Alpha")));
        assert!(graph.node("missing").is_none());
    }

    #[test]
    fn test_schema_extension_applies_to_later_nodes_only() {
        let mut graph = Graph::new();
        graph.add_node(&[("name", v("early"))]).unwrap();

        // Not declared yet
        let rejected = graph.add_node(&[("name", v("x")), ("rank", v(1))]);
        assert!(matches!(
            rejected,
            Err(GdfError::UndeclaredAttribute { .. })
        ));

        graph.extend_node_schema(&[("rank", TypeTag::Double)]);
        graph.add_node(&[("name", v("late")), ("rank", v(1))]).unwrap();

        assert_eq!(graph.num_nodes(), 2);
        assert!(graph.node_schema().is_used("rank"));
    }
}
