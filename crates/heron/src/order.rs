//! Node ordering / crossing minimization.
//!
//! Starts from a breadth-first layering and then alternates a downward sweep (each rank sorted
//! by its predecessors in the rank above) with an upward sweep (each rank sorted by its
//! successors in the rank below). The layering with the fewest crossings seen is kept.

use crate::config::{LayoutConfig, OrderHeuristic};
use crate::graphlib::Graph;
use crate::rank::RankAssignment;
use tracing::{debug, trace};

mod cross_count;
mod init_order;
mod sort;

pub use cross_count::cross_count;
pub use init_order::init_order;
pub use sort::{barycenter, median, node_value, sort_layer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderOptions {
    pub heuristic: OrderHeuristic,
    pub passes: usize,
}

impl Default for OrderOptions {
    fn default() -> Self {
        Self {
            heuristic: OrderHeuristic::default(),
            passes: crate::config::DEFAULT_ORDER_PASSES,
        }
    }
}

impl From<&LayoutConfig> for OrderOptions {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            heuristic: config.heuristic,
            passes: config.order_passes,
        }
    }
}

/// Position of every node within its rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderAssignment {
    layers: Vec<Vec<usize>>,
    order: Vec<usize>,
}

impl OrderAssignment {
    pub fn from_layers(layers: Vec<Vec<usize>>, node_count: usize) -> Self {
        let mut order = vec![0; node_count];
        for layer in &layers {
            for (i, &v) in layer.iter().enumerate() {
                order[v] = i;
            }
        }
        Self { layers, order }
    }

    /// Node indices per rank, left to right.
    pub fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    pub fn layer(&self, rank: usize) -> &[usize] {
        self.layers.get(rank).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn order(&self, v: usize) -> Option<usize> {
        self.order.get(v).copied()
    }
}

pub fn order<N>(g: &Graph<N>, ranks: &RankAssignment, opts: OrderOptions) -> OrderAssignment {
    let mut layering = init_order(g, ranks);
    let mut position: Vec<usize> = vec![0; g.node_count()];
    sync_positions(&layering, &mut position);

    let mut best_cc = cross_count(g, &layering);
    let mut best = layering.clone();
    trace!(pass = 0, crossings = best_cc, "initial order");

    for pass in 1..=opts.passes {
        if best_cc == 0 {
            break;
        }
        let before = layering.clone();

        for r in 1..layering.len() {
            sort_rank(g, &mut layering, r, r - 1, &mut position, opts.heuristic, Sweep::Down);
        }
        for r in (0..layering.len().saturating_sub(1)).rev() {
            sort_rank(g, &mut layering, r, r + 1, &mut position, opts.heuristic, Sweep::Up);
        }

        let cc = cross_count(g, &layering);
        trace!(pass, crossings = cc, "order pass");
        if cc < best_cc {
            best_cc = cc;
            best = layering.clone();
        }
        if layering == before {
            break;
        }
    }

    debug!(ranks = best.len(), crossings = best_cc, "ordered ranks");
    OrderAssignment::from_layers(best, g.node_count())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    /// Sort by predecessors.
    Down,
    /// Sort by successors.
    Up,
}

fn sort_rank<N>(
    g: &Graph<N>,
    layering: &mut [Vec<usize>],
    rank: usize,
    reference: usize,
    position: &mut [usize],
    heuristic: OrderHeuristic,
    sweep: Sweep,
) {
    let mut in_reference: Vec<bool> = vec![false; g.node_count()];
    for &u in &layering[reference] {
        in_reference[u] = true;
    }

    let values: Vec<Option<f64>> = layering[rank]
        .iter()
        .map(|&v| {
            let mut positions: Vec<usize> = match sweep {
                Sweep::Down => g
                    .predecessors(v)
                    .filter(|&u| in_reference[u])
                    .map(|u| position[u])
                    .collect(),
                Sweep::Up => g
                    .successors(v)
                    .filter(|&u| in_reference[u])
                    .map(|u| position[u])
                    .collect(),
            };
            node_value(heuristic, &mut positions)
        })
        .collect();

    let sorted = sort_layer(&layering[rank], &values);
    for (i, &v) in sorted.iter().enumerate() {
        position[v] = i;
    }
    layering[rank] = sorted;
}

fn sync_positions(layering: &[Vec<usize>], position: &mut [usize]) {
    for layer in layering {
        for (i, &v) in layer.iter().enumerate() {
            position[v] = i;
        }
    }
}
