//! Errors reported by graph mutation, algorithms and conversions.
//!
//! Some of these are fatal to the requested computation (an unknown start vertex,
//! Dijkstra on a multigraph, a malformed matrix). Others only describe a condition
//! next to a perfectly usable result, e.g. a duplicate vertex while building a graph
//! from labels. Conversions return the latter in [`Built::warnings`](crate::convert::Built).
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    #[error("vertex already exists: {0}")]
    DuplicateVertex(String),

    #[error("edge weight must be a number, got {0}")]
    InvalidWeight(f64),

    #[error("unsupported algorithm input: {0}")]
    UnsupportedAlgorithmInput(String),

    #[error("negative-weight cycle reachable from {source_vertex}")]
    NegativeCycleDetected { source_vertex: String },

    #[error("malformed adjacency matrix: {0}")]
    MalformedAdjacencyMatrix(String),

    #[error("malformed input file at line {line}: {reason}")]
    MalformedInputFile { line: usize, reason: String },

    #[error("expected {expected} labels, got {actual}")]
    LabelCountMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn vertex_not_found<P: std::fmt::Debug>(payload: &P) -> Self {
        GraphError::VertexNotFound(format!("{:?}", payload))
    }

    pub(crate) fn duplicate_vertex<P: std::fmt::Debug>(payload: &P) -> Self {
        GraphError::DuplicateVertex(format!("{:?}", payload))
    }
}
