//! Character grid rasterization.

use termgraph_core::{Edge, Node, display_value};
use tracing::debug;

use crate::config::RenderConfig;
use crate::layout::Layout;

const BLANK: char = ' ';

/// Fixed-size character buffer, `height` rows of `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Create a blank grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![BLANK; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Write one cell. Returns false, writing nothing, when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> bool {
        match self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(slot) => {
                *slot = ch;
                true
            }
            None => false,
        }
    }

    /// Write `text` left to right from `(x, y)`, one char per cell, cut at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) {
        let Some(row) = self.cells.get_mut(y) else {
            return;
        };
        for (slot, ch) in row.iter_mut().skip(x).zip(text.chars()) {
            *slot = ch;
        }
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|&ch| ch == BLANK)
    }
}

/// Serialize a grid: trailing blanks trimmed per row, trailing empty rows dropped.
pub fn grid_to_string(grid: &Grid) -> String {
    let text = grid
        .cells
        .iter()
        .map(|row| {
            let line: String = row.iter().collect();
            line.trim_end_matches(BLANK).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");
    text.trim_end_matches('\n').to_string()
}

/// Pipeline stage that draws connections between placed nodes.
///
/// Runs before nodes are placed, so node glyphs and labels win any overlap.
pub trait EdgeRasterizer {
    fn rasterize_edges(
        &self,
        grid: &mut Grid,
        layout: &Layout<'_>,
        edges: &[Edge],
        config: &RenderConfig,
    );
}

/// Edge stage that draws nothing; edges stay invisible.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipEdges;

impl EdgeRasterizer for SkipEdges {
    fn rasterize_edges(
        &self,
        _grid: &mut Grid,
        _layout: &Layout<'_>,
        _edges: &[Edge],
        _config: &RenderConfig,
    ) {
    }
}

/// Node label: the id, then `(key:value)` for the first property when enabled.
pub fn node_label(node: &Node, config: &RenderConfig) -> String {
    let mut label = node.id.to_string();
    if config.show_properties
        && let Some((key, value)) = node.properties.first()
    {
        label.push('(');
        label.push_str(key);
        label.push(':');
        label.push_str(&display_value(value));
        label.push(')');
    }
    label
}

/// Rasterize with the default (no-op) edge stage.
pub fn rasterize(layout: &Layout<'_>, edges: &[Edge], config: &RenderConfig) -> Grid {
    rasterize_with(layout, edges, config, &SkipEdges)
}

/// Rasterize `layout` onto a fresh `max_width` x `max_height` grid.
///
/// Off-canvas points are dropped whole: neither glyph nor label is written.
pub fn rasterize_with<E>(
    layout: &Layout<'_>,
    edges: &[Edge],
    config: &RenderConfig,
    edge_stage: &E,
) -> Grid
where
    E: EdgeRasterizer + ?Sized,
{
    let mut grid = Grid::new(config.max_width, config.max_height);

    edge_stage.rasterize_edges(&mut grid, layout, edges, config);

    for (node, point) in layout.iter() {
        let Some((x, y)) = point.cell(grid.width(), grid.height()) else {
            debug!(node = %node.id, x = point.x, y = point.y, "point off canvas, dropped");
            continue;
        };

        grid.set(x, y, config.node_char);
        if config.show_labels {
            grid.write_str(x + 1, y, &node_label(node, config));
        }
    }

    grid
}
