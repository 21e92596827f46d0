//! The weighted graph and its flat counterpart, the adjacency matrix.
//!
//! # `WeightedGraph`
//!
//! Vertices carry unique payloads chosen by the caller, e.g. `String` labels.
//! Internally every vertex is a lightweight [VertexId], essentially a `usize`
//! handed out in insertion order. Algorithms work on ID's and translate back to
//! payloads only when they report results.
//!
//! The graph owns a single adjacency table. There is no per-vertex copy to keep
//! in sync, and no traversal state lives in the graph: marks, tentative distances
//! and predecessors are per-run values, see [crate::algorithm::SearchState].
//!
//! # `AdjacencyMatrix`
//!
//! A binary or weighted square matrix. It implements [QueryableGraph] too, so the
//! traversals in [crate::algorithm] run over it directly.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod weighted;
pub use self::weighted::*;
mod matrix;
pub use self::matrix::*;

#[cfg(test)]
pub use self::tests::*;
