pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("edge references unknown node: {id}")]
    UnknownNodeReference { id: String },

    #[error("invalid edge {source_id} -> {target_id}: a node cannot be its own predecessor")]
    InvalidEdge {
        source_id: String,
        target_id: String,
    },
}
