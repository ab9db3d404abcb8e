//! Explicit path resolution and the inline chain format.

use termgraph_core::{Edge, GraphAccessor, Node, NodeId};
use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::raster::node_label;

/// Longest resolved path drawn as an inline chain; longer paths go to the grid.
pub const INLINE_PATH_LIMIT: usize = 5;

/// A path after lookup: the nodes that resolved and the edges found between
/// consecutive ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedPath {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl ResolvedPath {
    /// Whether the resolved nodes fit the inline chain format.
    pub fn is_inline(&self) -> bool {
        self.nodes.len() <= INLINE_PATH_LIMIT
    }
}

/// Look up every id of `path`, best-effort.
///
/// Unresolvable ids are dropped from the node sequence. Edges come from
/// adjacent pairs of the *requested* ids, so a dropped id still pairs with its
/// neighbors; pairs without an edge contribute nothing.
pub fn resolve_path<G>(graph: &G, path: &[NodeId]) -> ResolvedPath
where
    G: GraphAccessor + ?Sized,
{
    let nodes = path
        .iter()
        .filter_map(|id| match graph.get_node(id) {
            Ok(node) => Some(node),
            Err(err) => {
                debug!(node = %id, error = %err, "dropping unresolved path node");
                None
            }
        })
        .collect();

    let mut edges = Vec::new();
    for pair in path.windows(2) {
        let [from, to] = pair else { continue };
        match graph.find_edge(from, to) {
            Some(edge) => edges.push(edge),
            None => trace!(from = %from, to = %to, "no edge between path neighbors"),
        }
    }

    ResolvedPath { nodes, edges }
}

/// One-line chain: `●a ──> ●b ──> ●c`.
///
/// Labels follow `show_labels` and `show_properties` as on the grid.
pub fn inline_chain(nodes: &[Node], config: &RenderConfig) -> String {
    let arrow = format!(" {0}{0}> ", config.edge_char);
    nodes
        .iter()
        .map(|node| {
            if config.show_labels {
                format!("{}{}", config.node_char, node_label(node, config))
            } else {
                config.node_char.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(&arrow)
}
