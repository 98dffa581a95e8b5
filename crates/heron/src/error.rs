use serde::Serialize;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a layout call failed.
///
/// Serializes as an internally tagged object (`{"kind": "CycleDetected", "nodeId": "a"}`) so
/// hosts can forward failures across a JSON boundary unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(tag = "kind")]
pub enum Error {
    #[error("edge references unknown node: {id}")]
    UnknownNodeReference { id: String },

    #[error("invalid edge {source_id} -> {target_id}: a node cannot be its own predecessor")]
    InvalidEdge {
        #[serde(rename = "source")]
        source_id: String,
        #[serde(rename = "target")]
        target_id: String,
    },

    #[error("graph contains a cycle through node {node_id}")]
    CycleDetected {
        #[serde(rename = "nodeId")]
        node_id: String,
    },

    #[error("node {id} has an invalid size {width}x{height}")]
    InvalidNodeSize { id: String, width: f64, height: f64 },

    #[error("layout option {field} must be a finite, non-negative number (got {value})")]
    InvalidConfig { field: &'static str, value: f64 },
}

impl From<heron_graphlib::Error> for Error {
    fn from(value: heron_graphlib::Error) -> Self {
        match value {
            heron_graphlib::Error::UnknownNodeReference { id } => Self::UnknownNodeReference { id },
            heron_graphlib::Error::InvalidEdge {
                source_id,
                target_id,
            } => Self::InvalidEdge {
                source_id,
                target_id,
            },
        }
    }
}
