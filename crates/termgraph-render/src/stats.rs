//! Fixed-format statistics block.

use termgraph_core::GraphStats;

use crate::config::RenderConfig;

const RULE_WIDTH: usize = 24;

/// Format counts as the five-line statistics block. The rule uses `edge_char`.
pub fn format_stats(stats: &GraphStats, config: &RenderConfig) -> String {
    let rule: String = std::iter::repeat_n(config.edge_char, RULE_WIDTH).collect();
    format!(
        "Graph Statistics\n{rule}\nNodes:      {}\nEdges:      {}\nComponents: {}",
        stats.nodes, stats.edges, stats.components
    )
}
