//! Graph algorithms
//!
//! Traversals work on any [QueryableGraph](crate::graph::QueryableGraph), shortest
//! paths on a [WeightedGraph](crate::graph::WeightedGraph). Each call keeps its
//! marks, distances and predecessors in a fresh [SearchState].
mod state;
pub use self::state::*;
mod traversal;
pub use self::traversal::*;
mod path;
pub use self::path::*;
mod dijkstra;
pub use self::dijkstra::*;
mod bellman_ford;
pub use self::bellman_ford::*;
mod connectivity;
pub use self::connectivity::*;
