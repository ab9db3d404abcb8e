//! Budgeted walk and edge closure over a [`GraphAccessor`].

use std::collections::{HashSet, VecDeque};

use termgraph_core::{Edge, EdgeId, Error, GraphAccessor, Node, NodeId, Result};
use tracing::{debug, trace};

use crate::types::Subgraph;

/// Collect the neighborhood of `start` and the edges among it.
///
/// `budget` caps the number of distinct nodes admitted, not the hop distance
/// from `start`. See [`collect_nodes`] for the walk order.
pub fn collect_subgraph<G>(graph: &G, start: &NodeId, budget: usize) -> Result<Subgraph>
where
    G: GraphAccessor + ?Sized,
{
    let nodes = collect_nodes(graph, start, budget)?;
    let edges = collect_closure_edges(graph, &nodes);
    debug!(
        start = %start,
        budget,
        nodes = nodes.len(),
        edges = edges.len(),
        "subgraph collected"
    );
    Ok(Subgraph::new(nodes, edges))
}

/// Walk outward from `start`, admitting at most `budget` nodes.
///
/// The frontier starts as `[start]`. Each admitted node's unvisited neighbors
/// are pushed to the *front* of the frontier in edge order, so exploration
/// leans depth-first. The walk stops as soon as the budget is spent, even with
/// a non-empty frontier; a budget of 0 admits nothing, not even `start`.
///
/// Only an unresolvable `start` is an error. Any other node that fails to
/// resolve is marked visited and skipped without consuming budget, and a
/// failed edge lookup reads as "no neighbors".
pub fn collect_nodes<G>(graph: &G, start: &NodeId, budget: usize) -> Result<Vec<Node>>
where
    G: GraphAccessor + ?Sized,
{
    let mut frontier: VecDeque<NodeId> = VecDeque::from([start.clone()]);
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut nodes: Vec<Node> = Vec::new();
    let mut remaining = budget;

    while remaining > 0 {
        let Some(id) = frontier.pop_front() else {
            break;
        };

        if !visited.insert(id.clone()) {
            continue;
        }

        let node = match graph.get_node(&id) {
            Ok(node) => node,
            Err(err) if &id == start => return Err(start_not_found(start, err)),
            Err(err) => {
                debug!(node = %id, error = %err, "skipping unresolved node");
                continue;
            }
        };

        let neighbors: Vec<NodeId> = match graph.get_edges_from(&id) {
            Ok(edges) => edges
                .into_iter()
                .map(|(_, edge)| edge.to)
                .filter(|to| !visited.contains(to))
                .collect(),
            Err(err) => {
                debug!(node = %id, error = %err, "edge lookup failed, treating as leaf");
                Vec::new()
            }
        };

        for neighbor in neighbors.into_iter().rev() {
            frontier.push_front(neighbor);
        }

        trace!(node = %id, remaining, "node admitted");
        nodes.push(node);
        remaining -= 1;
    }

    Ok(nodes)
}

/// Edges whose endpoints both lie in `nodes`, deduplicated by edge id.
///
/// Ordered by node order, then by the accessor's edge order. Nodes whose
/// edges cannot be read contribute nothing.
pub fn collect_closure_edges<G>(graph: &G, nodes: &[Node]) -> Vec<Edge>
where
    G: GraphAccessor + ?Sized,
{
    let members: HashSet<&NodeId> = nodes.iter().map(|n| &n.id).collect();
    let mut seen: HashSet<EdgeId> = HashSet::new();
    let mut edges = Vec::new();

    for node in nodes {
        let outgoing = match graph.get_edges_from(&node.id) {
            Ok(outgoing) => outgoing,
            Err(err) => {
                debug!(node = %node.id, error = %err, "edge lookup failed during closure");
                continue;
            }
        };

        for (_, edge) in outgoing {
            if edge.is_within(|id| members.contains(id)) && seen.insert(edge.id.clone()) {
                edges.push(edge);
            }
        }
    }

    edges
}

fn start_not_found(start: &NodeId, err: Error) -> Error {
    if err.is_not_found() {
        return err.with_operation("collect::collect_subgraph");
    }
    Error::node_not_found(start.as_str())
        .with_operation("collect::collect_subgraph")
        .with_context("reason", err.to_string())
        .set_source(err)
}
