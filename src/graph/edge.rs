use super::VertexId;

/// One directional weighted edge derived from the adjacency.
///
/// Edges are not stored entities. An undirected edge between `u` and `v`
/// shows up twice, once as `u -> v` and once as `v -> u`, and a multi-edge
/// shows up once per distinct weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge {
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: f64,
}

/// What `add_edge` did to the adjacency.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EdgeInsertion {
    /// The weight was appended to every requested direction.
    Added,
    /// Undirected edge whose weight was already present in exactly one
    /// direction; only the missing direction was filled in.
    Repaired,
    /// Every requested direction already carried the weight.
    Unchanged,
}
