use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Graph must have at least one vertex")]
    ZeroVertices,

    #[error("Expected {expected} vertex names, found {found}")]
    MissingNames { expected: usize, found: usize },

    #[error("Vertex index {index} out of range (graph has {len} vertices)")]
    VertexOutOfRange { index: usize, len: usize },

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Failed to allocate traversal buffer for {0} vertices")]
    MarkerAllocation(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;
