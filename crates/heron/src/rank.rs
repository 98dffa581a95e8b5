//! Longest-path ranking.
//!
//! A node's rank is the number of edges on the longest directed path reaching it from any
//! source, so every source sits on rank 0 and every edge points strictly down the hierarchy.
//! Weakly-connected components fall out independently: each one's sources start at 0.

use crate::error::{Error, Result};
use crate::graphlib::{Graph, alg};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankAssignment {
    ranks: Vec<usize>,
}

impl RankAssignment {
    pub fn from_ranks(ranks: Vec<usize>) -> Self {
        Self { ranks }
    }

    pub fn rank(&self, v: usize) -> Option<usize> {
        self.ranks.get(v).copied()
    }

    /// Ranks indexed by node index.
    pub fn as_slice(&self) -> &[usize] {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn max_rank(&self) -> Option<usize> {
        self.ranks.iter().copied().max()
    }

    /// Number of ranks in use (`max_rank + 1`, or 0 for an empty assignment).
    pub fn rank_count(&self) -> usize {
        self.max_rank().map_or(0, |r| r + 1)
    }

    /// Node indices grouped by rank, each group in insertion order.
    pub fn layers(&self) -> Vec<Vec<usize>> {
        let mut layers: Vec<Vec<usize>> = vec![Vec::new(); self.rank_count()];
        for (v, &r) in self.ranks.iter().enumerate() {
            layers[r].push(v);
        }
        layers
    }

    /// `true` when every edge goes from a lower rank to a strictly higher one.
    pub fn respects_edges<N>(&self, g: &Graph<N>) -> bool {
        g.edges()
            .iter()
            .all(|e| match (self.rank(e.v), self.rank(e.w)) {
                (Some(rv), Some(rw)) => rw > rv,
                _ => false,
            })
    }
}

/// Assigns longest-path ranks, or fails with [`Error::CycleDetected`] when no topological
/// order exists. Never breaks cycles on its own.
pub fn rank<N>(g: &Graph<N>) -> Result<RankAssignment> {
    let topo = alg::topsort(g).map_err(|err| Error::CycleDetected {
        node_id: g.node_id(err.node).unwrap_or_default().to_string(),
    })?;

    let mut ranks: Vec<usize> = vec![0; g.node_count()];
    for v in topo {
        // Predecessors precede `v` in topological order, so their ranks are final.
        if let Some(r) = g.predecessors(v).map(|u| ranks[u] + 1).max() {
            ranks[v] = r;
        }
    }

    let ranks = RankAssignment::from_ranks(ranks);
    debug_assert!(ranks.respects_edges(g));
    if tracing::enabled!(tracing::Level::DEBUG) {
        debug!(
            nodes = g.node_count(),
            ranks = ranks.rank_count(),
            components = alg::components(g).len(),
            "ranked graph"
        );
    }
    Ok(ranks)
}
