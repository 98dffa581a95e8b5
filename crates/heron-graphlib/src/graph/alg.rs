//! Traversal helpers shared by the layout stages.
//!
//! All helpers work on node indices and visit nodes in insertion order and neighbours in edge
//! order, so their output is a pure function of the graph's construction order.

use super::Graph;
use std::collections::VecDeque;

/// A topological order does not exist; `node` lies on a directed cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("graph contains a cycle through node index {node}")]
pub struct CycleError {
    pub node: usize,
}

/// Nodes without incoming edges, in insertion order.
pub fn sources<N>(g: &Graph<N>) -> Vec<usize> {
    (0..g.node_count())
        .filter(|&v| g.in_degree(v) == 0)
        .collect()
}

/// Weakly-connected components.
///
/// Components are listed in order of their first node, and each component lists its members
/// in insertion order.
pub fn components<N>(g: &Graph<N>) -> Vec<Vec<usize>> {
    let n = g.node_count();
    let mut seen = vec![false; n];
    let mut out: Vec<Vec<usize>> = Vec::new();

    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut members = vec![start];
        let mut queue: VecDeque<usize> = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            for u in g.successors(v).chain(g.predecessors(v)) {
                if !seen[u] {
                    seen[u] = true;
                    members.push(u);
                    queue.push_back(u);
                }
            }
        }
        members.sort_unstable();
        out.push(members);
    }

    out
}

/// Kahn topological sort.
///
/// The queue starts with the sources in insertion order and newly freed nodes are appended in
/// edge order. When a cycle blocks progress, the returned error names a node that is provably
/// on a cycle (not merely downstream of one).
pub fn topsort<N>(g: &Graph<N>) -> Result<Vec<usize>, CycleError> {
    let n = g.node_count();
    let mut indegree: Vec<usize> = (0..n).map(|v| g.in_degree(v)).collect();
    let mut queue: VecDeque<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();
    let mut order: Vec<usize> = Vec::with_capacity(n);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        for w in g.successors(v) {
            indegree[w] -= 1;
            if indegree[w] == 0 {
                queue.push_back(w);
            }
        }
    }

    if order.len() == n {
        return Ok(order);
    }

    // Every unprocessed node still has an unprocessed predecessor, so walking predecessors
    // among them must revisit a node; the first revisited node closes a cycle.
    let Some(start) = (0..n).find(|&v| indegree[v] > 0) else {
        return Ok(order);
    };
    let mut on_walk = vec![false; n];
    let mut cur = start;
    loop {
        if on_walk[cur] {
            return Err(CycleError { node: cur });
        }
        on_walk[cur] = true;
        match g.predecessors(cur).find(|&u| indegree[u] > 0) {
            Some(u) => cur = u,
            None => return Err(CycleError { node: cur }),
        }
    }
}
