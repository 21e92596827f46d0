use crate::algorithm::{SearchState, ShortestPath, ShortestPaths};
use crate::error::{GraphError, Result};
use crate::graph::*;
use std::fmt::Debug;
use std::hash::Hash;

/// Shortest path from `source` to `destination` by Bellman-Ford.
///
/// Multigraphs and negative weights are fine. A negative-weight cycle reachable
/// from `source` yields [GraphError::NegativeCycleDetected] instead of a path.
pub fn bellman_ford<P>(
    graph: &WeightedGraph<P>,
    source: &P,
    destination: &P,
) -> Result<ShortestPath<P>>
where
    P: Hash + Eq + Clone + Debug,
{
    let dst = graph.existing_id(destination)?;
    Ok(bellman_ford_paths(graph, source)?.path_to_id(&dst))
}

/// `(source, vertex, distance)` for every vertex by Bellman-Ford.
pub fn bellman_ford_all<P>(graph: &WeightedGraph<P>, source: &P) -> Result<Vec<(P, P, f64)>>
where
    P: Hash + Eq + Clone + Debug,
{
    Ok(bellman_ford_paths(graph, source)?.triples())
}

/// Relaxes every directional edge until nothing improves, at most `|V| - 1` passes,
/// then checks once more for an edge that still relaxes.
#[tracing::instrument(level = "debug", skip_all, fields(vertices = graph.vertex_size()))]
pub fn bellman_ford_paths<'a, P>(
    graph: &'a WeightedGraph<P>,
    source: &P,
) -> Result<ShortestPaths<'a, P>>
where
    P: Hash + Eq + Clone + Debug,
{
    let src = graph.existing_id(source)?;
    let edges: Vec<WeightedEdge> = graph.edges().collect();
    let mut state = SearchState::for_graph(graph);
    state.set_distance(&src, 0.0);

    for pass in 1..graph.vertex_size() {
        let mut relaxed = false;
        for e in edges.iter() {
            relaxed |= state.relax(&e.source, &e.sink, e.weight);
        }
        if !relaxed {
            tracing::debug!(pass, "converged");
            break;
        }
    }

    let still_relaxes = edges
        .iter()
        .any(|e| state.distance(&e.source) + e.weight < state.distance(&e.sink));
    if still_relaxes {
        tracing::warn!(source = ?source, "negative-weight cycle detected");
        return Err(GraphError::NegativeCycleDetected {
            source_vertex: format!("{:?}", source),
        });
    }
    Ok(ShortestPaths::new(graph, src, state))
}
