//! End-to-end layout: graph construction, ranking, ordering, positioning and result assembly.
//!
//! Every call builds its own graph and intermediate assignments; nothing survives between
//! calls. The first failing stage aborts the call and its error is returned unchanged.

use crate::config::{Direction, LayoutConfig};
use crate::coordinate_system;
use crate::error::{Error, Result};
use crate::graphlib::Graph;
use crate::model::{EdgeInput, EdgeLayout, LayoutResult, NodeInput, NodeLabel, NodeLayout, Point};
use crate::order::{self, OrderAssignment, OrderOptions};
use crate::position::{self, Positions};
use crate::rank::{self, RankAssignment};
use indexmap::IndexMap;
use rustc_hash::FxHashMap as HashMap;
use tracing::{debug, warn};

/// Lays out `nodes` and `edges`.
///
/// Returns an empty result without running any stage when there are no nodes, or when there
/// are no edges and [`LayoutConfig::require_edges`] is set.
pub fn layout(
    nodes: &[NodeInput],
    edges: &[EdgeInput],
    config: &LayoutConfig,
) -> Result<LayoutResult> {
    if nodes.is_empty() || (edges.is_empty() && config.require_edges) {
        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "nothing to lay out"
        );
        return Ok(LayoutResult::empty(config.direction));
    }
    config.validate()?;

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        direction = %config.direction,
        "layout start"
    );

    let (mut g, inputs) = build_graph(nodes, edges)?;
    let ranks = rank::rank(&g)?;
    let order = order::order(&g, &ranks, OrderOptions::from(config));

    coordinate_system::adjust(&mut g, config.direction);
    let mut positions = position::position(&g, &order, config.into());
    coordinate_system::undo(&mut g, &mut positions, config.direction);

    Ok(assemble(
        &g, nodes, &inputs, edges, &ranks, &order, &positions, config,
    ))
}

/// Validates the input and builds the layout graph.
///
/// The second value maps each graph node index to the input node that supplied its label
/// (the last one, when an id repeats).
pub fn build_graph(
    nodes: &[NodeInput],
    edges: &[EdgeInput],
) -> Result<(Graph<NodeLabel>, Vec<usize>)> {
    let mut g: Graph<NodeLabel> = Graph::with_capacity(nodes.len(), edges.len());
    let mut inputs: Vec<usize> = Vec::with_capacity(nodes.len());

    for (i, node) in nodes.iter().enumerate() {
        let (width, height) = node.size();
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(Error::InvalidNodeSize {
                id: node.id.clone(),
                width,
                height,
            });
        }
        if g.has_node(&node.id) {
            warn!(id = %node.id, "duplicate node id; the later definition wins");
        }
        let ix = g.set_node(node.id.clone(), NodeLabel::new(width, height));
        if ix == inputs.len() {
            inputs.push(i);
        } else {
            inputs[ix] = i;
        }
    }

    for edge in edges {
        g.set_edge(&edge.source, &edge.target)?;
    }

    Ok((g, inputs))
}

#[allow(clippy::too_many_arguments)]
fn assemble(
    g: &Graph<NodeLabel>,
    nodes: &[NodeInput],
    inputs: &[usize],
    edges: &[EdgeInput],
    ranks: &RankAssignment,
    order: &OrderAssignment,
    positions: &Positions,
    config: &LayoutConfig,
) -> LayoutResult {
    let direction = config.direction;
    let mut out_nodes: IndexMap<String, NodeLayout> = IndexMap::with_capacity(g.node_count());

    for (v, id, label) in g.node_entries() {
        let center = positions.centers[v];
        let input = &nodes[inputs[v]];
        out_nodes.insert(
            id.to_string(),
            NodeLayout {
                x: center.x - label.width / 2.0,
                y: center.y - label.height / 2.0,
                width: label.width,
                height: label.height,
                rank: ranks.rank(v).unwrap_or(0),
                order: order.order(v).unwrap_or(0),
                source_side: direction.source_side(),
                target_side: direction.target_side(),
                kind: input.kind.clone(),
                data: input.data.clone(),
            },
        );
    }

    let out_edges = route_edges(g, edges, &out_nodes, config);

    LayoutResult {
        direction,
        width: positions.width,
        height: positions.height,
        nodes: out_nodes,
        edges: out_edges,
    }
}

/// Straight routes between attachment points.
///
/// Parallel edges of one ordered pair are spread along the order axis, `edge_separation`
/// apart and centered on the anchor, without leaving the node's side.
fn route_edges(
    g: &Graph<NodeLabel>,
    edges: &[EdgeInput],
    nodes: &IndexMap<String, NodeLayout>,
    config: &LayoutConfig,
) -> Vec<EdgeLayout> {
    let mut totals: HashMap<(usize, usize), usize> = HashMap::default();
    for e in g.edges() {
        *totals.entry((e.v, e.w)).or_insert(0) += 1;
    }
    let mut seen: HashMap<(usize, usize), usize> = HashMap::default();

    edges
        .iter()
        .zip(g.edges())
        .filter_map(|(input, e)| {
            let source = nodes.get(&input.source)?;
            let target = nodes.get(&input.target)?;

            let total = totals.get(&(e.v, e.w)).copied().unwrap_or(1);
            let k = seen.entry((e.v, e.w)).or_insert(0);
            let offset = (*k as f64 - (total as f64 - 1.0) / 2.0) * config.edge_separation;
            *k += 1;

            let from = shift(
                source.anchor(config.direction.source_side()),
                source,
                offset,
                config.direction,
            );
            let to = shift(
                target.anchor(config.direction.target_side()),
                target,
                offset,
                config.direction,
            );
            Some(EdgeLayout {
                id: input.id.clone(),
                source: input.source.clone(),
                target: input.target.clone(),
                points: vec![from, to],
            })
        })
        .collect()
}

fn shift(anchor: Point, node: &NodeLayout, offset: f64, direction: Direction) -> Point {
    match direction {
        Direction::TopToBottom => {
            let half = node.width / 2.0;
            Point::new(anchor.x + offset.clamp(-half, half), anchor.y)
        }
        Direction::LeftToRight => {
            let half = node.height / 2.0;
            Point::new(anchor.x, anchor.y + offset.clamp(-half, half))
        }
    }
}
