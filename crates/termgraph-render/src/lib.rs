//! Render graph neighborhoods, query results and paths as terminal text.
//!
//! Every entry point runs the same pipeline: pick a node set, lay it out on a
//! fixed `max_width` x `max_height` canvas, rasterize, then serialize the grid.
//!
//! # Module Structure
//!
//! - [`config`]: default options and per-call overrides
//! - [`layout`]: linear, circular and grid placement
//! - [`raster`]: character grid, edge stage and serialization
//! - [`path`]: path resolution and the inline chain format
//! - [`stats`]: the statistics block

pub mod config;
pub mod layout;
pub mod path;
pub mod raster;
pub mod stats;

use termgraph_collect::collect_subgraph;
use termgraph_core::{Edge, GraphAccessor, GraphCensus, GraphStats, Node, NodeId, Result};
use tracing::debug;

use crate::path::{inline_chain, resolve_path};

pub use config::{MAX_CANVAS_DIM, RenderConfig, RenderOverrides};
pub use layout::{Layout, LayoutEngine, LayoutPoint, LayoutStrategy};
pub use raster::{EdgeRasterizer, Grid, SkipEdges, grid_to_string};
pub use termgraph_collect::Subgraph;

// ============================================================================
// Public API
// ============================================================================

/// Render the neighborhood of `start`.
///
/// `budget` caps how many distinct nodes are collected (see
/// [`termgraph_collect::collect_nodes`]). Fails only when `start` itself cannot
/// be resolved; the error's display names the node and the reason.
pub fn render_subgraph<G>(
    graph: &G,
    start: &NodeId,
    budget: usize,
    overrides: &RenderOverrides,
) -> Result<String>
where
    G: GraphAccessor + ?Sized,
{
    let subgraph = collect_subgraph(graph, start, budget)
        .map_err(|err| err.with_operation("render::render_subgraph"))?;
    Ok(render_query_result(&subgraph.nodes, &subgraph.edges, overrides))
}

/// Render an explicit, already resolved node and edge set.
///
/// Node order decides layout indices, so the same input always yields the
/// same text.
pub fn render_query_result(nodes: &[Node], edges: &[Edge], overrides: &RenderOverrides) -> String {
    render_query_result_with(nodes, edges, overrides, &SkipEdges)
}

/// [`render_query_result`] with a custom edge stage.
pub fn render_query_result_with<E>(
    nodes: &[Node],
    edges: &[Edge],
    overrides: &RenderOverrides,
    edge_stage: &E,
) -> String
where
    E: EdgeRasterizer + ?Sized,
{
    let config = RenderConfig::from_overrides(overrides);
    let layout = LayoutEngine::compute(nodes, edges, &config);
    let grid = raster::rasterize_with(&layout, edges, &config, edge_stage);
    grid_to_string(&grid)
}

/// Render an ordered path, best-effort.
///
/// Up to five resolved nodes print as an inline chain; longer paths fall back
/// to [`render_query_result`] over the resolved nodes and edges.
pub fn render_path<G>(graph: &G, path: &[NodeId], overrides: &RenderOverrides) -> String
where
    G: GraphAccessor + ?Sized,
{
    let resolved = resolve_path(graph, path);
    debug!(
        requested = path.len(),
        resolved = resolved.nodes.len(),
        edges = resolved.edges.len(),
        inline = resolved.is_inline(),
        "path resolved"
    );

    if resolved.is_inline() {
        let config = RenderConfig::from_overrides(overrides);
        return inline_chain(&resolved.nodes, &config);
    }
    render_query_result(&resolved.nodes, &resolved.edges, overrides)
}

/// Format externally computed counts as the statistics block.
pub fn render_graph_stats(stats: &GraphStats, overrides: &RenderOverrides) -> String {
    stats::format_stats(stats, &RenderConfig::from_overrides(overrides))
}

/// Ask `census` for the counts, then format them.
pub fn render_census<C>(census: &C, overrides: &RenderOverrides) -> Result<String>
where
    C: GraphCensus + ?Sized,
{
    let stats = GraphStats::from_census(census)
        .map_err(|err| err.with_operation("render::render_census"))?;
    Ok(render_graph_stats(&stats, overrides))
}
