//! Node placement on the character canvas.
//!
//! The strategy is picked from the node count alone:
//!
//! - up to 3 nodes: one row ([`LayoutStrategy::Linear`])
//! - 4 to 8 nodes: a ring ([`LayoutStrategy::Circular`])
//! - more: a near-square lattice ([`LayoutStrategy::Grid`])
//!
//! Producers do not clamp. Points may land off-canvas; the rasterizer drops them.

use std::collections::HashSet;
use std::f64::consts::PI;

use termgraph_core::{Edge, Node, NodeId};
use tracing::debug;

use crate::config::RenderConfig;

const LINEAR_ROW: i64 = 5;

/// Placement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// Evenly spaced along one row
    Linear,
    /// Around the canvas center, vertically squashed
    Circular,
    /// Rows and columns spanning the canvas
    Grid,
}

impl LayoutStrategy {
    /// The strategy used for a set of `n` nodes.
    pub fn for_node_count(n: usize) -> Self {
        match n {
            0..=3 => Self::Linear,
            4..=8 => Self::Circular,
            _ => Self::Grid,
        }
    }
}

/// Integer cell coordinate, column `x` and row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutPoint {
    pub x: i64,
    pub y: i64,
}

impl LayoutPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Cell indices when the point lies on a `width` x `height` canvas.
    pub fn cell(&self, width: usize, height: usize) -> Option<(usize, usize)> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        (x < width && y < height).then_some((x, y))
    }
}

/// Node positions in index-assignment order.
///
/// Holds every distinct node it was computed from exactly once.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    strategy: LayoutStrategy,
    entries: Vec<(&'a Node, LayoutPoint)>,
}

impl<'a> Layout<'a> {
    pub fn strategy(&self) -> LayoutStrategy {
        self.strategy
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a Node, LayoutPoint)> + '_ {
        self.entries.iter().map(|(node, point)| (*node, *point))
    }

    pub fn point_of(&self, id: &NodeId) -> Option<LayoutPoint> {
        self.entries
            .iter()
            .find(|(node, _)| &node.id == id)
            .map(|(_, point)| *point)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Layout engine
pub struct LayoutEngine;

impl LayoutEngine {
    /// Lay out `nodes` with the strategy chosen by their count.
    ///
    /// Repeated ids keep their first occurrence. `edges` do not influence
    /// any current strategy.
    pub fn compute<'a>(nodes: &'a [Node], edges: &[Edge], config: &RenderConfig) -> Layout<'a> {
        let distinct = distinct_nodes(nodes);
        let strategy = LayoutStrategy::for_node_count(distinct.len());
        Self::place(strategy, distinct, edges, config)
    }

    /// Lay out `nodes` with a fixed strategy.
    pub fn compute_with<'a>(
        strategy: LayoutStrategy,
        nodes: &'a [Node],
        edges: &[Edge],
        config: &RenderConfig,
    ) -> Layout<'a> {
        Self::place(strategy, distinct_nodes(nodes), edges, config)
    }

    fn place<'a>(
        strategy: LayoutStrategy,
        nodes: Vec<&'a Node>,
        _edges: &[Edge],
        config: &RenderConfig,
    ) -> Layout<'a> {
        let n = nodes.len();
        let entries = nodes
            .into_iter()
            .enumerate()
            .map(|(i, node)| {
                let point = match strategy {
                    LayoutStrategy::Linear => linear_point(i, n, config),
                    LayoutStrategy::Circular => circular_point(i, n, config),
                    LayoutStrategy::Grid => grid_point(i, n, config),
                };
                (node, point)
            })
            .collect();

        debug!(?strategy, nodes = n, "layout computed");
        Layout { strategy, entries }
    }
}

fn distinct_nodes(nodes: &[Node]) -> Vec<&Node> {
    let mut seen: HashSet<&NodeId> = HashSet::with_capacity(nodes.len());
    nodes.iter().filter(|node| seen.insert(&node.id)).collect()
}

/// Convert usize to the signed coordinate domain. Canvas and node counts are
/// far below `i64::MAX`.
#[inline]
fn signed(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[inline]
fn cell(v: f64) -> i64 {
    v.round() as i64
}

fn linear_point(i: usize, n: usize, config: &RenderConfig) -> LayoutPoint {
    let width = signed(config.max_width);
    let spacing = (width - 10).div_euclid(signed(n.max(1))).max(3);
    let x = (signed(i) * spacing).min(width - 5);
    LayoutPoint::new(x, LINEAR_ROW)
}

fn circular_point(i: usize, n: usize, config: &RenderConfig) -> LayoutPoint {
    let center_x = config.max_width as f64 / 2.0;
    let center_y = config.max_height as f64 / 2.0;
    let radius = (center_x - 5.0).min(center_y - 3.0);

    let angle = 2.0 * PI * i as f64 / n.max(1) as f64;
    // Terminal cells are roughly twice as tall as wide.
    LayoutPoint::new(
        cell(center_x + radius * angle.cos()),
        cell(center_y + radius * angle.sin() / 2.0),
    )
}

fn grid_point(i: usize, n: usize, config: &RenderConfig) -> LayoutPoint {
    let cols = ((n as f64).sqrt().round() as usize).max(1);
    let rows = n.div_ceil(cols).max(1);

    let col_spacing = (config.max_width as f64 - 10.0) / (cols - 1).max(1) as f64;
    let row_spacing = (config.max_height as f64 - 6.0) / (rows - 1).max(1) as f64;

    let col = (i % cols) as f64;
    let row = (i / cols) as f64;
    LayoutPoint::new(
        cell(5.0 + col * col_spacing),
        cell(3.0 + row * row_spacing),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderOverrides;
    use pretty_assertions::assert_eq;

    fn nodes(n: usize) -> Vec<Node> {
        (0..n).map(|i| Node::new(format!("n{i}"))).collect()
    }

    fn points(layout: &Layout<'_>) -> Vec<(i64, i64)> {
        layout.iter().map(|(_, p)| (p.x, p.y)).collect()
    }

    #[test]
    fn test_strategy_partition() {
        for n in 0..=3 {
            assert_eq!(LayoutStrategy::for_node_count(n), LayoutStrategy::Linear);
        }
        for n in 4..=8 {
            assert_eq!(LayoutStrategy::for_node_count(n), LayoutStrategy::Circular);
        }
        for n in [9, 10, 25, 500] {
            assert_eq!(LayoutStrategy::for_node_count(n), LayoutStrategy::Grid);
        }
    }

    #[test]
    fn test_empty_layout() {
        let layout = LayoutEngine::compute(&[], &[], &RenderConfig::DEFAULT);
        assert!(layout.is_empty());
        assert_eq!(layout.strategy(), LayoutStrategy::Linear);
    }

    #[test]
    fn test_linear_positions() {
        let ns = nodes(3);
        let layout = LayoutEngine::compute(&ns, &[], &RenderConfig::DEFAULT);
        assert_eq!(layout.strategy(), LayoutStrategy::Linear);
        // spacing = max(3, (80 - 10) / 3) = 23
        assert_eq!(points(&layout), vec![(0, 5), (23, 5), (46, 5)]);
    }

    #[test]
    fn test_linear_spacing_floor_and_clamp() {
        let config = RenderConfig::from_overrides(&RenderOverrides::new().with_max_width(12));
        let ns = nodes(3);
        let layout = LayoutEngine::compute(&ns, &[], &config);
        // (12 - 10) / 3 = 0 -> spacing 3, x capped at 12 - 5 = 7
        assert_eq!(points(&layout), vec![(0, 5), (3, 5), (6, 5)]);

        let config = RenderConfig::from_overrides(&RenderOverrides::new().with_max_width(8));
        let layout = LayoutEngine::compute(&ns, &[], &config);
        assert_eq!(points(&layout), vec![(0, 5), (3, 5), (3, 5)]);
    }

    #[test]
    fn test_circular_positions() {
        let ns = nodes(4);
        let layout = LayoutEngine::compute(&ns, &[], &RenderConfig::DEFAULT);
        assert_eq!(layout.strategy(), LayoutStrategy::Circular);
        // center (40, 10), radius min(35, 7) = 7, y squashed by half
        assert_eq!(points(&layout), vec![(47, 10), (40, 14), (33, 10), (40, 7)]);
    }

    #[test]
    fn test_circular_eight_diagonals() {
        let ns = nodes(8);
        let layout = LayoutEngine::compute(&ns, &[], &RenderConfig::DEFAULT);
        assert_eq!(layout.strategy(), LayoutStrategy::Circular);
        // diagonals: 7 * cos(45deg) = 4.95 across, half of that (2.47) down
        assert_eq!(
            points(&layout),
            vec![
                (47, 10),
                (45, 12),
                (40, 14),
                (35, 12),
                (33, 10),
                (35, 8),
                (40, 7),
                (45, 8),
            ]
        );
    }

    #[test]
    fn test_grid_positions() {
        let ns = nodes(9);
        let layout = LayoutEngine::compute(&ns, &[], &RenderConfig::DEFAULT);
        assert_eq!(layout.strategy(), LayoutStrategy::Grid);
        // 3 x 3, spacing (70 / 2, 14 / 2)
        assert_eq!(
            points(&layout),
            vec![
                (5, 3),
                (40, 3),
                (75, 3),
                (5, 10),
                (40, 10),
                (75, 10),
                (5, 17),
                (40, 17),
                (75, 17),
            ]
        );
    }

    #[test]
    fn test_grid_fractional_spacing_rounds() {
        let ns = nodes(10);
        let layout = LayoutEngine::compute(&ns, &[], &RenderConfig::DEFAULT);
        // round(sqrt(10)) = 3 cols, 4 rows, row spacing 14 / 3
        let rows: Vec<i64> = layout.iter().map(|(_, p)| p.y).collect();
        assert_eq!(rows, vec![3, 3, 3, 8, 8, 8, 12, 12, 12, 17]);
    }

    #[test]
    fn test_grid_single_column_guard() {
        let ns = nodes(2);
        let layout = LayoutEngine::compute_with(
            LayoutStrategy::Grid,
            &ns,
            &[],
            &RenderConfig::DEFAULT,
        );
        // round(sqrt(2)) = 1 col, 2 rows
        assert_eq!(points(&layout), vec![(5, 3), (5, 17)]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let ns = vec![
            Node::new("a").with_property("rank", 1),
            Node::new("b"),
            Node::new("a").with_property("rank", 2),
        ];
        let layout = LayoutEngine::compute(&ns, &[], &RenderConfig::DEFAULT);
        assert_eq!(layout.len(), 2);
        let (first, _) = layout.iter().next().unwrap();
        assert_eq!(first.properties.get("rank"), Some(&serde_json::json!(1)));
        assert_eq!(layout.point_of(&NodeId::from("b")), Some(LayoutPoint::new(35, 5)));
    }

    #[test]
    fn test_point_cell_bounds() {
        assert_eq!(LayoutPoint::new(0, 0).cell(10, 5), Some((0, 0)));
        assert_eq!(LayoutPoint::new(9, 4).cell(10, 5), Some((9, 4)));
        assert_eq!(LayoutPoint::new(10, 4).cell(10, 5), None);
        assert_eq!(LayoutPoint::new(3, 5).cell(10, 5), None);
        assert_eq!(LayoutPoint::new(-1, 2).cell(10, 5), None);
    }
}
