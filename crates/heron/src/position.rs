//! Coordinate assignment.
//!
//! Works in top-to-bottom space: ranks stack downwards, order runs left to right. Left-to-right
//! layouts go through [`crate::coordinate_system`] before and after this step.

use crate::config::LayoutConfig;
use crate::graphlib::Graph;
use crate::model::{NodeLabel, Point};
use crate::order::OrderAssignment;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    pub node_separation: f64,
    pub rank_separation: f64,
    pub center_ranks: bool,
}

impl From<&LayoutConfig> for PositionOptions {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            node_separation: config.node_separation,
            rank_separation: config.rank_separation,
            center_ranks: config.center_ranks,
        }
    }
}

/// Node centers (indexed by node index) plus the bounding size of the drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions {
    pub centers: Vec<Point>,
    pub width: f64,
    pub height: f64,
}

pub fn position(
    g: &Graph<NodeLabel>,
    order: &OrderAssignment,
    opts: PositionOptions,
) -> Positions {
    let size = |v: usize| g.node(v).copied().unwrap_or_default();
    let mut centers: Vec<Point> = vec![Point::default(); g.node_count()];

    // Rank axis: each rank is as tall as its tallest member and nodes sit on the rank's
    // horizontal midline.
    let mut rank_top: f64 = 0.0;
    let mut height: f64 = 0.0;
    for (r, layer) in order.layers().iter().enumerate() {
        if r > 0 {
            rank_top += opts.rank_separation;
        }
        let max_h = layer.iter().map(|&v| size(v).height).fold(0.0, f64::max);
        for &v in layer {
            centers[v].y = rank_top + max_h / 2.0;
        }
        rank_top += max_h;
        height = rank_top;
    }

    // Order axis: pack each rank from x = 0, remembering its span.
    let mut spans: Vec<f64> = Vec::with_capacity(order.layers().len());
    for layer in order.layers() {
        let mut cursor: f64 = 0.0;
        for (i, &v) in layer.iter().enumerate() {
            if i > 0 {
                cursor += opts.node_separation;
            }
            let w = size(v).width;
            centers[v].x = cursor + w / 2.0;
            cursor += w;
        }
        spans.push(cursor);
    }
    let width = spans.iter().copied().fold(0.0, f64::max);

    if opts.center_ranks {
        for (layer, span) in order.layers().iter().zip(&spans) {
            let offset = (width - span) / 2.0;
            for &v in layer {
                centers[v].x += offset;
            }
        }
    }

    trace!(width, height, "positioned nodes");
    Positions {
        centers,
        width,
        height,
    }
}
