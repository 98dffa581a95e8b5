//! Graph container APIs used by `heron`.
//!
//! Nodes live in a dense `Vec` and are addressed by index (`ix`) once inserted; the string id is
//! only used at the boundary. Edge indices follow insertion order, and both adjacency lists keep
//! edge order so every traversal built on top of them is deterministic.

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

pub mod alg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Tail (source) node index.
    pub v: usize,
    /// Head (target) node index.
    pub w: usize,
}

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
}

#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<Edge>,
    out_edges: Vec<Vec<usize>>,
    in_edges: Vec<Vec<usize>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Graph<N> {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        let mut node_index = HashMap::default();
        node_index.reserve(nodes);
        Self {
            nodes: Vec::with_capacity(nodes),
            node_index,
            edges: Vec::with_capacity(edges),
            out_edges: Vec::with_capacity(nodes),
            in_edges: Vec::with_capacity(nodes),
        }
    }

    /// Inserts a node, or replaces the label of an existing node with the same id.
    ///
    /// A replaced node keeps its original index (and therefore its insertion position).
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> usize {
        let id = id.into();
        if let Some(&ix) = self.node_index.get(&id) {
            self.nodes[ix].label = label;
            return ix;
        }
        let ix = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, ix);
        self.out_edges.push(Vec::new());
        self.in_edges.push(Vec::new());
        ix
    }

    /// Appends a directed edge `v -> w` and returns its index.
    ///
    /// Both endpoints must already be present. Self-edges are rejected; parallel edges are not
    /// deduplicated.
    pub fn set_edge(&mut self, v: &str, w: &str) -> Result<usize> {
        let v_ix = self.require_node(v)?;
        let w_ix = self.require_node(w)?;
        if v_ix == w_ix {
            return Err(Error::InvalidEdge {
                source_id: v.to_string(),
                target_id: w.to_string(),
            });
        }

        let edge_ix = self.edges.len();
        self.edges.push(Edge { v: v_ix, w: w_ix });
        self.out_edges[v_ix].push(edge_ix);
        self.in_edges[w_ix].push(edge_ix);
        Ok(edge_ix)
    }

    /// Builds a graph from `(id, label)` nodes and `(source, target)` edges in one go.
    pub fn from_parts<I, S, J, T>(nodes: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = (S, N)>,
        S: Into<String>,
        J: IntoIterator<Item = (T, T)>,
        T: AsRef<str>,
    {
        let mut g = Self::new();
        for (id, label) in nodes {
            g.set_node(id, label);
        }
        for (v, w) in edges {
            g.set_edge(v.as_ref(), w.as_ref())?;
        }
        Ok(g)
    }

    fn require_node(&self, id: &str) -> Result<usize> {
        self.node_ix(id).ok_or_else(|| Error::UnknownNodeReference { id: id.to_string() })
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node_ix(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn node_id(&self, ix: usize) -> Option<&str> {
        self.nodes.get(ix).map(|n| n.id.as_str())
    }

    pub fn node(&self, ix: usize) -> Option<&N> {
        self.nodes.get(ix).map(|n| &n.label)
    }

    pub fn node_mut(&mut self, ix: usize) -> Option<&mut N> {
        self.nodes.get_mut(ix).map(|n| &mut n.label)
    }

    pub fn node_by_id(&self, id: &str) -> Option<&N> {
        self.node_ix(id).and_then(|ix| self.node(ix))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// `(ix, id, label)` triples in insertion order.
    pub fn node_entries(&self) -> impl Iterator<Item = (usize, &str, &N)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(ix, n)| (ix, n.id.as_str(), &n.label))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, edge_ix: usize) -> Option<Edge> {
        self.edges.get(edge_ix).copied()
    }

    /// Indices of edges leaving `v`, in edge insertion order.
    pub fn out_edges(&self, v: usize) -> &[usize] {
        self.out_edges.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indices of edges entering `v`, in edge insertion order.
    pub fn in_edges(&self, v: usize) -> &[usize] {
        self.in_edges.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Heads of the edges leaving `v`. Parallel edges yield the same successor more than once.
    pub fn successors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.out_edges(v).iter().map(|&e| self.edges[e].w)
    }

    /// Tails of the edges entering `v`. Parallel edges yield the same predecessor more than once.
    pub fn predecessors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.in_edges(v).iter().map(|&e| self.edges[e].v)
    }

    pub fn in_degree(&self, v: usize) -> usize {
        self.in_edges(v).len()
    }

    pub fn out_degree(&self, v: usize) -> usize {
        self.out_edges(v).len()
    }
}
