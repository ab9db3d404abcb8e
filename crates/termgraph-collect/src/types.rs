//! Core types for subgraph collection.

use termgraph_core::{Edge, Node, NodeId};

/// Node set plus the edges whose endpoints both lie in it.
///
/// `nodes` keeps admission order; layout assigns positions in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subgraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Subgraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|n| &n.id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subgraph_queries() {
        let sub = Subgraph::new(
            vec![Node::new("a"), Node::new("b")],
            vec![Edge::new("e1", "a", "b", "")],
        );
        assert!(!sub.is_empty());
        assert!(sub.contains(&NodeId::from("b")));
        assert!(!sub.contains(&NodeId::from("c")));
        let ids: Vec<_> = sub.node_ids().map(NodeId::as_str).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Subgraph::default().is_empty());
    }
}
