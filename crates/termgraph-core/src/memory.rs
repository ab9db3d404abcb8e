//! In-process graph store.

use std::collections::HashMap;

use parking_lot::RwLock;
use termgraph_error::{Error, Result};

use crate::accessor::GraphAccessor;
use crate::id::NodeId;
use crate::model::{Edge, Node};

/// Hash-map backed [`GraphAccessor`].
///
/// Edges are stored per source in insertion order and may point at nodes the
/// store does not (or no longer) hold. Lookups hand out owned snapshots, so a
/// render in progress never observes a concurrent `add_*`/`remove_node`.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    nodes: RwLock<HashMap<NodeId, Node>>,
    outgoing: RwLock<HashMap<NodeId, Vec<Edge>>>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any node with the same id.
    pub fn add_node(&self, node: Node) {
        self.nodes.write().insert(node.id.clone(), node);
    }

    /// Append an edge to its source's outgoing list.
    pub fn add_edge(&self, edge: Edge) {
        self.outgoing
            .write()
            .entry(edge.from.clone())
            .or_default()
            .push(edge);
    }

    /// Remove a node. Edges touching it are left dangling.
    pub fn remove_node(&self, id: &NodeId) -> Option<Node> {
        self.nodes.write().remove(id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.read().contains_key(id)
    }

    /// Build a graph from node ids and `(edge_id, from, to)` triples with an empty label.
    pub fn from_ids<'a>(
        nodes: impl IntoIterator<Item = &'a str>,
        edges: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    ) -> Self {
        let graph = Self::new();
        for id in nodes {
            graph.add_node(Node::new(id));
        }
        for (id, from, to) in edges {
            graph.add_edge(Edge::new(id, from, to, ""));
        }
        graph
    }
}

impl GraphAccessor for MemoryGraph {
    fn get_node(&self, id: &NodeId) -> Result<Node> {
        self.nodes
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::node_not_found(id.as_str()).with_operation("memory::get_node"))
    }

    fn get_edges_from(&self, id: &NodeId) -> Result<Vec<(NodeId, Edge)>> {
        let outgoing = self.outgoing.read();
        let edges = outgoing
            .get(id)
            .map(|edges| {
                edges
                    .iter()
                    .map(|edge| (edge.from.clone(), edge.clone()))
                    .collect()
            })
            .unwrap_or_default();
        tracing::trace!(node = %id, "edges served");
        Ok(edges)
    }
}
