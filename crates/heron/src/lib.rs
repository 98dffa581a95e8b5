#![forbid(unsafe_code)]

//! Deterministic layered layout for directed graphs.
//!
//! The pipeline has four stages, each a module of its own:
//! - [`rank`]: longest-path ranks (fails on cycles instead of breaking them)
//! - [`order`]: breadth-first initial order refined by median/barycenter sweeps
//! - [`position`]: cumulative placement by node size and separation, optionally centered
//! - [`pipeline`]: validation, the direction transform and result assembly
//!
//! Layout is synchronous and owns no state between calls; two calls with the same input
//! produce identical results.

pub use heron_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod acyclic;
pub mod config;
pub mod coordinate_system;
pub mod error;
pub mod model;
pub mod order;
pub mod pipeline;
pub mod position;
pub mod rank;

pub use config::{Direction, LayoutConfig, OrderHeuristic, Side};
pub use error::{Error, Result};
pub use model::{
    EdgeInput, EdgeLayout, LayoutRequest, LayoutResult, NodeInput, NodeLayout, Point,
};
pub use pipeline::layout;

/// Lays out a full host request.
pub fn layout_request(request: &LayoutRequest) -> Result<LayoutResult> {
    layout(&request.nodes, &request.edges, &request.config)
}
