use crate::algorithm::{DepthFirst, SearchState};
use crate::error::Result;
use crate::graph::*;

/// Groups vertices by depth-first search started from each vertex not yet
/// visited, in ascending ID order.
///
/// Marks are shared across the searches, so a vertex lands in exactly one group.
/// For a symmetric (undirected) adjacency the groups are the connected components.
pub fn components<G>(graph: &G) -> Vec<Vec<VertexId>>
where
    G: QueryableGraph,
{
    let mut state = SearchState::for_graph(graph);
    let mut res = vec![];
    for v in graph.vertices() {
        if state.is_visited(&v) {
            continue;
        }
        res.push(DepthFirst::new(graph, v, &mut state).collect());
    }
    res
}

/// Connected components of a binary or weighted adjacency matrix,
/// as row indices in discovery order.
///
/// A malformed matrix yields
/// [GraphError::MalformedAdjacencyMatrix](crate::GraphError::MalformedAdjacencyMatrix).
#[tracing::instrument(level = "debug", skip_all, fields(size = matrix.size()))]
pub fn connected_components(matrix: &AdjacencyMatrix) -> Result<Vec<Vec<usize>>> {
    if let Err(e) = matrix.validate() {
        tracing::warn!(error = %e, "cannot compute components");
        return Err(e);
    }
    let res = components(matrix)
        .into_iter()
        .map(|c| c.into_iter().map(|v| v.to_raw()).collect())
        .collect();
    Ok(res)
}
