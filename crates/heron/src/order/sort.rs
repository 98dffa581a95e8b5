//! Per-node sort values and the slot-preserving layer sort.

use crate::config::OrderHeuristic;

/// Sort value of a node given the positions of its neighbours in the reference rank.
///
/// Returns `None` when the node has no neighbour there. `positions` is reordered in place.
pub fn node_value(heuristic: OrderHeuristic, positions: &mut [usize]) -> Option<f64> {
    match heuristic {
        OrderHeuristic::Median => median(positions),
        OrderHeuristic::Barycenter => barycenter(positions),
    }
}

/// Median neighbour position; an even count averages the two middle positions.
pub fn median(positions: &mut [usize]) -> Option<f64> {
    if positions.is_empty() {
        return None;
    }
    positions.sort_unstable();
    let mid = positions.len() / 2;
    if positions.len() % 2 == 1 {
        Some(positions[mid] as f64)
    } else {
        Some((positions[mid - 1] + positions[mid]) as f64 / 2.0)
    }
}

/// Mean neighbour position.
pub fn barycenter(positions: &[usize]) -> Option<f64> {
    if positions.is_empty() {
        return None;
    }
    let sum: usize = positions.iter().sum();
    Some(sum as f64 / positions.len() as f64)
}

/// Re-sorts one layer by `values` (parallel to `layer`).
///
/// Nodes without a value keep their slot. The other nodes fill the remaining slots in
/// ascending value order; equal values keep their previous relative order.
pub fn sort_layer(layer: &[usize], values: &[Option<f64>]) -> Vec<usize> {
    debug_assert_eq!(layer.len(), values.len());

    let mut fixed: Vec<Option<usize>> = vec![None; layer.len()];
    let mut sortable: Vec<(f64, usize, usize)> = Vec::with_capacity(layer.len());
    for (i, (&v, value)) in layer.iter().zip(values).enumerate() {
        match value {
            Some(value) => sortable.push((*value, i, v)),
            None => fixed[i] = Some(v),
        }
    }
    sortable.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut sorted = sortable.into_iter().map(|(_, _, v)| v);
    fixed
        .into_iter()
        .filter_map(|slot| slot.or_else(|| sorted.next()))
        .collect()
}
