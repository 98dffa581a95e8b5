#![forbid(unsafe_code)]

//! Directed graph container used by `heron`.
//!
//! The graph is strict: edges may only reference nodes that were added first, and self-edges
//! are rejected. Parallel edges between the same ordered pair are kept as separate edges.

mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, alg};
