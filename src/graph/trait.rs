use crate::graph::*;

/// Read-only topology needed by traversals.
///
/// Both [WeightedGraph] and [AdjacencyMatrix] implement it, so DFS and BFS
/// run unchanged over a graph or directly over a matrix.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;
    /// Vertices reachable over one edge from `v`, in adjacency order.
    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;
}
