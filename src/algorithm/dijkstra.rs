use crate::algorithm::{Mark, SearchState, ShortestPath, ShortestPaths};
use crate::error::{GraphError, Result};
use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::{Ordering, Reverse};
use std::fmt::Debug;
use std::hash::Hash;

/// A tentative distance with a total order, usable as queue priority.
#[derive(Debug, Clone, Copy)]
struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Ties on distance go to the vertex inserted first.
type Priority = Reverse<(Distance, VertexId)>;

/// Shortest path from `source` to `destination` by Dijkstra.
///
/// Stops as soon as `destination` is settled.
/// Weights are assumed non-negative; this is not checked.
pub fn dijkstra<P>(graph: &WeightedGraph<P>, source: &P, destination: &P) -> Result<ShortestPath<P>>
where
    P: Hash + Eq + Clone + Debug,
{
    let src = graph.existing_id(source)?;
    let dst = graph.existing_id(destination)?;
    let state = settle(graph, src, Some(dst))?;
    Ok(ShortestPaths::new(graph, src, state).path_to_id(&dst))
}

/// `(source, vertex, distance)` for every vertex by Dijkstra.
pub fn dijkstra_all<P>(graph: &WeightedGraph<P>, source: &P) -> Result<Vec<(P, P, f64)>>
where
    P: Hash + Eq + Clone + Debug,
{
    Ok(dijkstra_paths(graph, source)?.triples())
}

/// Settles every vertex reachable from `source` by Dijkstra.
pub fn dijkstra_paths<'a, P>(
    graph: &'a WeightedGraph<P>,
    source: &P,
) -> Result<ShortestPaths<'a, P>>
where
    P: Hash + Eq + Clone + Debug,
{
    let src = graph.existing_id(source)?;
    let state = settle(graph, src, None)?;
    Ok(ShortestPaths::new(graph, src, state))
}

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(vertices = graph.vertex_size(), source = source.to_raw())
)]
fn settle<P>(
    graph: &WeightedGraph<P>,
    source: VertexId,
    stop_at: Option<VertexId>,
) -> Result<SearchState>
where
    P: Hash + Eq,
{
    if graph.is_multigraph() {
        return Err(GraphError::UnsupportedAlgorithmInput(
            "dijkstra requires a graph without multi-edges, use bellman_ford".to_owned(),
        ));
    }
    let mut state = SearchState::for_graph(graph);
    state.set_distance(&source, 0.0);

    let mut queue: KeyedPriorityQueue<VertexId, Priority, RandomState> =
        KeyedPriorityQueue::with_capacity_and_hasher(graph.vertex_size(), RandomState::new());
    for (v, _) in graph.iter_vertices() {
        queue.push(v, Reverse((Distance(state.distance(&v)), v)));
    }

    while let Some((u, _)) = queue.pop() {
        if state.is_visited(&u) {
            continue;
        }
        state.set_mark(&u, Mark::Visited);
        if stop_at == Some(u) {
            break;
        }
        for (v, ws) in graph.neighbors(&u) {
            if state.is_visited(&v) {
                continue;
            }
            if let [w] = ws {
                if state.relax(&u, &v, *w) {
                    queue.push(v, Reverse((Distance(state.distance(&v)), v)));
                }
            }
        }
    }
    tracing::debug!(
        settled = (0..graph.vertex_size())
            .filter(|i| state.is_visited(&VertexId::new(*i)))
            .count(),
        "dijkstra done"
    );
    Ok(state)
}
