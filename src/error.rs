//! Error type shared by every fallible graph operation.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// `remove_edge` was asked to remove an edge the graph does not contain.
    #[error("no edge from {from} to {into}")]
    MissingEdge { from: usize, into: usize },

    /// Two graphs combined edge-wise must have the same vertex set.
    #[error("vertex count mismatch: {left} vs {right}")]
    VertexCountMismatch { left: usize, right: usize },

    #[error("unknown coloring algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Caller-supplied starting data (e.g. a vertex side assignment) is
    /// malformed.
    #[error("invalid initial state: {0}")]
    InvalidInitialState(String),

    #[error("graph is not bipartite")]
    NotBipartite,

    #[error("self-loop at vertex {0} cannot be edge colored")]
    SelfLoop(usize),

    #[error("no free color for edge ({from}, {into}) among {num_colors} colors")]
    ColorsExhausted {
        from: usize,
        into: usize,
        num_colors: usize,
    },
}
