use crate::graphlib::Graph;
use crate::rank::RankAssignment;
use std::collections::VecDeque;

/// Initial layering from a breadth-first walk.
///
/// The walk starts from every rank-0 node in insertion order and visits successors in edge
/// order; each node is appended to its rank the first time it is discovered.
pub fn init_order<N>(g: &Graph<N>, ranks: &RankAssignment) -> Vec<Vec<usize>> {
    let mut layers: Vec<Vec<usize>> = vec![Vec::new(); ranks.rank_count()];
    let mut visited: Vec<bool> = vec![false; g.node_count()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    let roots = (0..g.node_count()).filter(|&v| ranks.rank(v) == Some(0));
    for v in roots {
        discover(v, ranks, &mut visited, &mut layers, &mut queue);
    }
    walk(g, ranks, &mut visited, &mut layers, &mut queue);

    // With longest-path ranks every node is reachable from rank 0. A foreign ranking may leave
    // stragglers; seed them in insertion order so no node goes missing.
    for v in 0..g.node_count() {
        if !visited[v] {
            discover(v, ranks, &mut visited, &mut layers, &mut queue);
            walk(g, ranks, &mut visited, &mut layers, &mut queue);
        }
    }

    layers
}

fn walk<N>(
    g: &Graph<N>,
    ranks: &RankAssignment,
    visited: &mut [bool],
    layers: &mut [Vec<usize>],
    queue: &mut VecDeque<usize>,
) {
    while let Some(v) = queue.pop_front() {
        for w in g.successors(v) {
            discover(w, ranks, visited, layers, queue);
        }
    }
}

fn discover(
    v: usize,
    ranks: &RankAssignment,
    visited: &mut [bool],
    layers: &mut [Vec<usize>],
    queue: &mut VecDeque<usize>,
) {
    if visited[v] {
        return;
    }
    visited[v] = true;
    if let Some(layer) = ranks.rank(v).and_then(|r| layers.get_mut(r)) {
        layer.push(v);
    }
    queue.push_back(v);
}
