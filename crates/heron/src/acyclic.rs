//! Caller-side cycle breaking.
//!
//! [`crate::layout`] rejects cyclic input. Hosts that would rather draw something can drop the
//! back edges found here and lay out the remaining graph; the engine never does this on its own.

use crate::model::{EdgeInput, NodeInput};
use rustc_hash::FxHashMap as HashMap;

/// Indices (into `edges`) of the edges that close a cycle.
///
/// This is the depth-first feedback arc set: a DFS is started from each node in input order,
/// following out-edges in input order, and every edge that reaches a node still on the DFS
/// stack is reported. Self-edges are always reported. Edges naming unknown nodes are ignored.
pub fn back_edges(nodes: &[NodeInput], edges: &[EdgeInput]) -> Vec<usize> {
    let mut index: HashMap<&str, usize> = HashMap::default();
    for node in nodes {
        let next = index.len();
        index.entry(node.id.as_str()).or_insert(next);
    }

    let mut out_edges: Vec<Vec<(usize, usize)>> = vec![Vec::new(); index.len()];
    let mut fas: Vec<usize> = Vec::new();
    for (edge_ix, e) in edges.iter().enumerate() {
        let (Some(&v), Some(&w)) = (index.get(e.source.as_str()), index.get(e.target.as_str()))
        else {
            continue;
        };
        if v == w {
            fas.push(edge_ix);
            continue;
        }
        out_edges[v].push((edge_ix, w));
    }

    let mut visited = vec![false; index.len()];
    let mut on_stack = vec![false; index.len()];
    // (node, next out-edge cursor)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..index.len() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        on_stack[root] = true;
        stack.push((root, 0));

        while let Some(&(v, cursor)) = stack.last() {
            let Some(&(edge_ix, w)) = out_edges[v].get(cursor) else {
                on_stack[v] = false;
                stack.pop();
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            if on_stack[w] {
                fas.push(edge_ix);
            } else if !visited[w] {
                visited[w] = true;
                on_stack[w] = true;
                stack.push((w, 0));
            }
        }
    }

    fas.sort_unstable();
    fas
}

/// `edges` without the edges reported by [`back_edges`].
pub fn break_cycles(nodes: &[NodeInput], edges: &[EdgeInput]) -> Vec<EdgeInput> {
    let fas = back_edges(nodes, edges);
    edges
        .iter()
        .enumerate()
        .filter(|(i, _)| fas.binary_search(i).is_err())
        .map(|(_, e)| e.clone())
        .collect()
}
