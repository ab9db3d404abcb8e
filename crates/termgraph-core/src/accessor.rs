//! Seams to the external graph store and the graph-analysis collaborator.

use termgraph_error::Result;

use crate::id::NodeId;
use crate::model::{Edge, Node};

/// Point lookups against the graph store.
///
/// Implementations must be safe for concurrent reads; the renderer never
/// mutates through this trait and provides no locking of its own.
pub trait GraphAccessor {
    /// Fetch a node snapshot. Missing nodes are `ErrorKind::NodeNotFound`.
    fn get_node(&self, id: &NodeId) -> Result<Node>;

    /// Outgoing edges of `id` in store order, each paired with its source id.
    fn get_edges_from(&self, id: &NodeId) -> Result<Vec<(NodeId, Edge)>>;

    /// First edge from `from` to `to`, if the store has one.
    ///
    /// Lookup failures read as "no edge".
    fn find_edge(&self, from: &NodeId, to: &NodeId) -> Option<Edge> {
        self.get_edges_from(from)
            .ok()?
            .into_iter()
            .map(|(_, edge)| edge)
            .find(|edge| &edge.to == to)
    }
}

/// Aggregate counts owned by the graph-analysis collaborator.
pub trait GraphCensus {
    fn node_count(&self) -> Result<usize>;
    fn edge_count(&self) -> Result<usize>;
    fn component_count(&self) -> Result<usize>;
}

/// Counts shown by the statistics block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
}

impl GraphStats {
    pub fn new(nodes: usize, edges: usize, components: usize) -> Self {
        Self {
            nodes,
            edges,
            components,
        }
    }

    /// Ask the collaborator for all three counts.
    pub fn from_census<C: GraphCensus + ?Sized>(census: &C) -> Result<Self> {
        Ok(Self {
            nodes: census.node_count()?,
            edges: census.edge_count()?,
            components: census.component_count()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termgraph_error::{Error, ErrorKind};

    struct FixedCensus;

    impl GraphCensus for FixedCensus {
        fn node_count(&self) -> Result<usize> {
            Ok(12)
        }
        fn edge_count(&self) -> Result<usize> {
            Ok(30)
        }
        fn component_count(&self) -> Result<usize> {
            Ok(2)
        }
    }

    struct BrokenCensus;

    impl GraphCensus for BrokenCensus {
        fn node_count(&self) -> Result<usize> {
            Ok(1)
        }
        fn edge_count(&self) -> Result<usize> {
            Err(Error::census_failed("edges", "scan interrupted"))
        }
        fn component_count(&self) -> Result<usize> {
            Ok(1)
        }
    }

    #[test]
    fn test_stats_from_census() {
        let stats = GraphStats::from_census(&FixedCensus).unwrap();
        assert_eq!(stats, GraphStats::new(12, 30, 2));
    }

    #[test]
    fn test_stats_from_census_propagates_errors() {
        let err = GraphStats::from_census(&BrokenCensus).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CensusFailed);
    }
}
